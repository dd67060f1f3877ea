//! Board Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for Board CRUD operations.
//! Specialized operations are in separate modules:
//! - board_columns: Default columns and columns-with-tasks
//! - board_owner: Owner-scoped listing and lookups

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use crate::domain::{Board, DomainError, DomainResult};
use crate::repository::db::{inserted_id, now_millis, SharedConnection};
use crate::repository::traits::Repository;

pub(super) const BOARD_COLUMNS_SQL: &str =
    "id, title, description, author, color, owner_id, created_at";

/// SQLite implementation of Board repository
#[derive(Clone)]
pub struct BoardRepository {
    pub(super) conn: SharedConnection,
}

impl BoardRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Board> for BoardRepository {
    async fn create(&self, entity: &Board) -> DomainResult<Board> {
        let conn = self.conn.lock().await;
        let created_at = now_millis();

        conn.execute(
            "INSERT INTO boards (title, description, author, color, owner_id, created_at) VALUES (?, ?, ?, ?, ?, ?)",
            params![
                entity.title,
                entity.description,
                entity.author,
                entity.color,
                entity.owner_id,
                created_at
            ],
        )?;

        let mut board = entity.clone();
        board.id = inserted_id(&conn)?;
        board.created_at = Some(created_at);
        Ok(board)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Board>> {
        let conn = self.conn.lock().await;
        let board = conn
            .query_row(
                &format!("SELECT {} FROM boards WHERE id = ?", BOARD_COLUMNS_SQL),
                params![id],
                row_to_board,
            )
            .optional()?;
        Ok(board)
    }

    async fn update(&self, entity: &Board) -> DomainResult<Board> {
        let conn = self.conn.lock().await;

        let changed = conn.execute(
            "UPDATE boards SET title = ?, description = ?, author = ?, color = ?, updated_at = ? WHERE id = ?",
            params![
                entity.title,
                entity.description,
                entity.author,
                entity.color,
                now_millis(),
                entity.id
            ],
        )?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Board {} not found", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        // Manual cascade so deletion does not depend on the foreign_keys pragma
        tx.execute(
            "DELETE FROM tasks WHERE column_id IN (SELECT id FROM board_columns WHERE board_id = ?)",
            params![id],
        )?;
        tx.execute("DELETE FROM board_columns WHERE board_id = ?", params![id])?;
        let changed = tx.execute("DELETE FROM boards WHERE id = ?", params![id])?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Board {} not found", id)));
        }
        tx.commit()?;
        Ok(())
    }
}

/// Convert a database row to Board
pub(super) fn row_to_board(row: &Row<'_>) -> rusqlite::Result<Board> {
    Ok(Board {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        author: row.get(3)?,
        color: row.get(4)?,
        owner_id: row.get(5)?,
        created_at: row.get::<_, Option<i64>>(6)?,
    })
}
