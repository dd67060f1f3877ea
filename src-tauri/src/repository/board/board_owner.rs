//! Board Owner Operations
//!
//! Owner-scoped board listing (dashboard pagination) and resolving which
//! board a column or task belongs to, for ownership checks.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};

use crate::domain::{Board, BoardPage, DomainResult};
use super::board_repo::{row_to_board, BOARD_COLUMNS_SQL};

/// Trait for owner-scoped board operations
#[async_trait]
pub trait BoardOwnerOperations {
    /// One page (zero-based) of the owner's boards, newest first
    async fn list_by_owner(&self, owner_id: &str, page: u32, page_size: u32) -> DomainResult<BoardPage>;

    /// Board that contains the given column
    async fn find_by_column(&self, column_id: u32) -> DomainResult<Option<Board>>;

    /// Board that contains the given task
    async fn find_by_task(&self, task_id: u32) -> DomainResult<Option<Board>>;
}

#[async_trait]
impl BoardOwnerOperations for super::board_repo::BoardRepository {
    async fn list_by_owner(&self, owner_id: &str, page: u32, page_size: u32) -> DomainResult<BoardPage> {
        let conn = self.conn.lock().await;
        let page_size = page_size.max(1);

        let total: u32 = conn.query_row(
            "SELECT COUNT(*) FROM boards WHERE owner_id = ?",
            params![owner_id],
            |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM boards WHERE owner_id = ? ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
            BOARD_COLUMNS_SQL
        ))?;
        let boards = stmt
            .query_map(
                params![owner_id, page_size as i64, page as i64 * page_size as i64],
                row_to_board,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BoardPage {
            boards,
            total,
            page_size,
        })
    }

    async fn find_by_column(&self, column_id: u32) -> DomainResult<Option<Board>> {
        let conn = self.conn.lock().await;
        let board = conn
            .query_row(
                &format!(
                    "SELECT {} FROM boards WHERE id = (SELECT board_id FROM board_columns WHERE id = ?)",
                    BOARD_COLUMNS_SQL
                ),
                params![column_id],
                row_to_board,
            )
            .optional()?;
        Ok(board)
    }

    async fn find_by_task(&self, task_id: u32) -> DomainResult<Option<Board>> {
        let conn = self.conn.lock().await;
        let board = conn
            .query_row(
                &format!(
                    "SELECT {} FROM boards WHERE id = (
                        SELECT c.board_id FROM board_columns c JOIN tasks t ON t.column_id = c.id WHERE t.id = ?
                    )",
                    BOARD_COLUMNS_SQL
                ),
                params![task_id],
                row_to_board,
            )
            .optional()?;
        Ok(board)
    }
}
