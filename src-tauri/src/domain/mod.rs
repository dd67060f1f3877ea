//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod board;
mod column;
mod task;
mod user;

pub use entity::{Entity, DomainError, DomainResult, require_text};
pub use board::{Board, BoardFields, BoardPage, BoardWithColumns, DEFAULT_COLUMNS, DEFAULT_BOARD_COLOR};
pub use column::{Column, ColumnWithTasks};
pub use task::{Task, TaskFields, Priority};
pub use user::User;
