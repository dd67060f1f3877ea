//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Board data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub author: String,
    pub color: String,
    pub owner_id: String,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Board form fields (create and edit)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardFields {
    pub title: String,
    pub description: String,
    pub author: String,
    pub color: Option<String>,
}

impl BoardFields {
    pub fn from_board(board: &Board) -> Self {
        Self {
            title: board.title.clone(),
            description: board.description.clone(),
            author: board.author.clone(),
            color: Some(board.color.clone()),
        }
    }
}

/// One dashboard page of boards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardPage {
    pub boards: Vec<Board>,
    pub total: u32,
    #[serde(default)]
    pub page_size: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Backlog,
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Priority::Backlog,
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Backlog => "backlog",
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Backlog => "Backlog",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub column_id: u32,
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Task form fields (create and edit)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
}

impl TaskFields {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            assignee: task.assignee.clone(),
            due_date: task.due_date.clone(),
            priority: Some(task.priority),
        }
    }
}

/// Column with its tasks in position order (backend flattens the column fields)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: u32,
    pub board_id: u32,
    pub title: String,
    pub sort_order: i32,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardWithColumns {
    pub board: Board,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
}
