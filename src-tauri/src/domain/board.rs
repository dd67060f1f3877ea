//! Board Entity
//!
//! Top-level container of columns and tasks, owned by a single user.

use serde::{Deserialize, Serialize};
use super::column::ColumnWithTasks;
use super::entity::{require_text, DomainError, DomainResult, Entity};

/// Columns every new board starts with, in display order
pub const DEFAULT_COLUMNS: [&str; 4] = ["To Do", "In Progress", "Review", "Done"];

pub const DEFAULT_BOARD_COLOR: &str = "bg-blue-500";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub author: String,
    pub color: String,
    pub owner_id: String,
    pub created_at: Option<i64>,
}

impl Board {
    #[cfg(test)]
    pub fn new(id: u32, title: String, owner_id: String) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            author: String::new(),
            color: DEFAULT_BOARD_COLOR.to_string(),
            owner_id,
            created_at: None,
        }
    }

    /// Build an unsaved board from form fields
    pub fn from_fields(fields: &BoardFields, owner_id: &str) -> DomainResult<Self> {
        let fields = fields.normalized()?;
        Ok(Self {
            id: 0,
            title: fields.title,
            description: fields.description,
            author: fields.author,
            color: fields.color.unwrap_or_else(|| DEFAULT_BOARD_COLOR.to_string()),
            owner_id: owner_id.to_string(),
            created_at: None,
        })
    }

    /// Apply edited fields, keeping the current color when none is given
    pub fn apply(&mut self, fields: &BoardFields) -> DomainResult<()> {
        let fields = fields.normalized()?;
        self.title = fields.title;
        self.description = fields.description;
        self.author = fields.author;
        if let Some(color) = fields.color {
            self.color = color;
        }
        Ok(())
    }

    /// Only the owner may mutate a board or anything on it
    pub fn ensure_owned_by(&self, user_id: &str) -> DomainResult<()> {
        if self.owner_id == user_id {
            Ok(())
        } else {
            Err(DomainError::Forbidden(format!("Board {} belongs to another user", self.id)))
        }
    }
}

impl Entity for Board {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Editable board fields (create and edit forms)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardFields {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl BoardFields {
    fn normalized(&self) -> DomainResult<Self> {
        Ok(Self {
            title: require_text("title", &self.title)?,
            description: self.description.trim().to_string(),
            author: self.author.trim().to_string(),
            color: self
                .color
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        })
    }
}

/// A board with all of its columns and their tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardWithColumns {
    pub board: Board,
    pub columns: Vec<ColumnWithTasks>,
}

/// One page of the owner's boards, plus the total count for pagination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardPage {
    pub boards: Vec<Board>,
    pub total: u32,
    /// Page size the page was cut with
    pub page_size: u32,
}
