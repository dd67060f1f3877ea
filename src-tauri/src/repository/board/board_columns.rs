//! Board Column Operations
//!
//! Default columns created with a board, and the board read model
//! (columns with their tasks in sort order).

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use crate::domain::{
    Board, BoardWithColumns, Column, ColumnWithTasks, DomainError, DomainResult, DEFAULT_COLUMNS,
};
use crate::repository::db::{inserted_id, now_millis};
use crate::repository::task::{row_to_task, TASK_COLUMNS_SQL};

/// Trait for board column operations
#[async_trait]
pub trait BoardColumnOperations {
    /// Insert a board together with the default column set, atomically
    async fn create_with_default_columns(&self, board: &Board) -> DomainResult<Board>;

    /// Columns of a board in display order
    async fn list_columns(&self, board_id: u32) -> DomainResult<Vec<Column>>;

    /// Find a single column by ID
    async fn find_column(&self, column_id: u32) -> DomainResult<Option<Column>>;

    /// Board plus every column with its tasks ordered by sort position
    async fn get_with_columns(&self, board_id: u32) -> DomainResult<BoardWithColumns>;
}

#[async_trait]
impl BoardColumnOperations for super::board_repo::BoardRepository {
    async fn create_with_default_columns(&self, board: &Board) -> DomainResult<Board> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        let created_at = now_millis();

        tx.execute(
            "INSERT INTO boards (title, description, author, color, owner_id, created_at) VALUES (?, ?, ?, ?, ?, ?)",
            params![
                board.title,
                board.description,
                board.author,
                board.color,
                board.owner_id,
                created_at
            ],
        )?;
        let board_id = inserted_id(&tx)?;

        for (order, title) in DEFAULT_COLUMNS.iter().enumerate() {
            tx.execute(
                "INSERT INTO board_columns (board_id, title, sort_order) VALUES (?, ?, ?)",
                params![board_id, title, order as i32],
            )?;
        }
        tx.commit()?;

        let mut created = board.clone();
        created.id = board_id;
        created.created_at = Some(created_at);
        Ok(created)
    }

    async fn list_columns(&self, board_id: u32) -> DomainResult<Vec<Column>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, board_id, title, sort_order FROM board_columns WHERE board_id = ? ORDER BY sort_order, id",
        )?;
        let columns = stmt
            .query_map(params![board_id], row_to_column)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    async fn find_column(&self, column_id: u32) -> DomainResult<Option<Column>> {
        let conn = self.conn.lock().await;
        let column = conn
            .query_row(
                "SELECT id, board_id, title, sort_order FROM board_columns WHERE id = ?",
                params![column_id],
                row_to_column,
            )
            .optional()?;
        Ok(column)
    }

    async fn get_with_columns(&self, board_id: u32) -> DomainResult<BoardWithColumns> {
        let conn = self.conn.lock().await;

        let board = conn
            .query_row(
                &format!(
                    "SELECT {} FROM boards WHERE id = ?",
                    super::board_repo::BOARD_COLUMNS_SQL
                ),
                params![board_id],
                super::board_repo::row_to_board,
            )
            .optional()?
            .ok_or_else(|| DomainError::NotFound(format!("Board {} not found", board_id)))?;

        let mut columns: Vec<ColumnWithTasks> = {
            let mut stmt = conn.prepare(
                "SELECT id, board_id, title, sort_order FROM board_columns WHERE board_id = ? ORDER BY sort_order, id",
            )?;
            let rows = stmt.query_map(params![board_id], row_to_column)?;
            rows.map(|column| column.map(|column| ColumnWithTasks { column, tasks: Vec::new() }))
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM tasks t JOIN board_columns c ON c.id = t.column_id
             WHERE c.board_id = ? ORDER BY t.sort_order, t.id",
            TASK_COLUMNS_SQL
        ))?;
        let tasks = stmt
            .query_map(params![board_id], row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;

        for task in tasks {
            if let Some(entry) = columns.iter_mut().find(|c| c.column.id == task.column_id) {
                entry.tasks.push(task);
            }
        }

        Ok(BoardWithColumns { board, columns })
    }
}

/// Convert a database row to Column
pub(crate) fn row_to_column(row: &Row<'_>) -> rusqlite::Result<Column> {
    Ok(Column {
        id: row.get(0)?,
        board_id: row.get(1)?,
        title: row.get(2)?,
        sort_order: row.get(3)?,
    })
}
