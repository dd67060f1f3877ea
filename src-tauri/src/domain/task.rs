//! Task Entity
//!
//! A unit of work placed at a sort position inside one column.

use serde::{Deserialize, Serialize};
use super::entity::{require_text, DomainResult, Entity};

/// Task priority, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
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
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Backlog => "backlog",
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    /// Unknown values fall back to the default priority
    pub fn from_str(s: &str) -> Self {
        match s {
            "backlog" => Priority::Backlog,
            "low" => Priority::Low,
            "high" => Priority::High,
            "critical" => Priority::Critical,
            _ => Priority::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub column_id: u32,
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    /// ISO date, `YYYY-MM-DD`
    pub due_date: Option<String>,
    pub priority: Priority,
    /// Dense, zero-based position within the column
    pub sort_order: i32,
    pub created_at: Option<i64>,
}

impl Task {
    #[cfg(test)]
    pub fn new(id: u32, column_id: u32, title: String) -> Self {
        Self {
            id,
            column_id,
            title,
            description: None,
            assignee: None,
            due_date: None,
            priority: Priority::default(),
            sort_order: 0,
            created_at: None,
        }
    }

    /// Build an unsaved task in `column_id` from form fields
    pub fn from_fields(column_id: u32, fields: &TaskFields) -> DomainResult<Self> {
        let fields = fields.normalized()?;
        Ok(Self {
            id: 0,
            column_id,
            title: fields.title,
            description: fields.description,
            assignee: fields.assignee,
            due_date: fields.due_date,
            priority: fields.priority.unwrap_or_default(),
            sort_order: 0,
            created_at: None,
        })
    }

    /// Apply edited fields; position and column are untouched
    pub fn apply(&mut self, fields: &TaskFields) -> DomainResult<()> {
        let fields = fields.normalized()?;
        self.title = fields.title;
        self.description = fields.description;
        self.assignee = fields.assignee;
        self.due_date = fields.due_date;
        if let Some(priority) = fields.priority {
            self.priority = priority;
        }
        Ok(())
    }
}

impl Entity for Task {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Editable task fields (create and edit forms)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

fn blank_to_none(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl TaskFields {
    fn normalized(&self) -> DomainResult<Self> {
        Ok(Self {
            title: require_text("title", &self.title)?,
            description: blank_to_none(&self.description),
            assignee: blank_to_none(&self.assignee),
            due_date: blank_to_none(&self.due_date),
            priority: self.priority,
        })
    }
}
