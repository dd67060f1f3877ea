//! Column Entity
//!
//! An ordered bucket of tasks within a board. Columns are created together
//! with their board and are not edited on their own.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::task::Task;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: u32,
    pub board_id: u32,
    pub title: String,
    /// Display order within the board
    pub sort_order: i32,
}

impl Entity for Column {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A column together with its tasks, ordered by sort position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnWithTasks {
    #[serde(flatten)]
    pub column: Column,
    pub tasks: Vec<Task>,
}
