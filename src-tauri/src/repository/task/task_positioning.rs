//! Task Positioning Operations
//!
//! Keeps `sort_order` dense and zero-based within every column. A move
//! renumbers the source column (closing the gap) and the destination column
//! (inserting and shifting) inside one transaction.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{DomainError, DomainResult, Task};
use crate::repository::db::now_millis;
use super::task_repo::{row_to_task, TASK_COLUMNS_SQL};

/// Trait for task positioning operations
#[async_trait]
pub trait TaskPositioningOperations {
    /// Tasks of a column ordered by sort position
    async fn list_by_column(&self, column_id: u32) -> DomainResult<Vec<Task>>;

    /// Move a task to `index` in `column_id` (clamped to the column length)
    async fn move_to(&self, task_id: u32, column_id: u32, index: usize) -> DomainResult<Task>;
}

/// Position a newly appended task gets
pub(super) fn next_position(conn: &Connection, column_id: u32) -> rusqlite::Result<i32> {
    conn.query_row(
        "SELECT COALESCE(MAX(sort_order), -1) + 1 FROM tasks WHERE column_id = ?",
        params![column_id],
        |row| row.get(0),
    )
}

/// Task ids of a column in display order, optionally leaving one out
fn column_task_ids(conn: &Connection, column_id: u32, excluding: Option<u32>) -> rusqlite::Result<Vec<u32>> {
    let mut stmt = conn.prepare(
        "SELECT id FROM tasks WHERE column_id = ? ORDER BY sort_order, id",
    )?;
    let ids = stmt
        .query_map(params![column_id], |row| row.get::<_, u32>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ids.into_iter().filter(|id| Some(*id) != excluding).collect())
}

/// Assign `column_id` and positions 0..n to `ids`, in order
fn write_positions(conn: &Connection, column_id: u32, ids: &[u32]) -> rusqlite::Result<()> {
    let now = now_millis();
    let mut stmt = conn.prepare(
        "UPDATE tasks SET column_id = ?, sort_order = ?, updated_at = ? WHERE id = ?",
    )?;
    for (position, id) in ids.iter().enumerate() {
        stmt.execute(params![column_id, position as i32, now, id])?;
    }
    Ok(())
}

pub(super) fn reindex_column(conn: &Connection, column_id: u32) -> rusqlite::Result<()> {
    let ids = column_task_ids(conn, column_id, None)?;
    write_positions(conn, column_id, &ids)
}

#[async_trait]
impl TaskPositioningOperations for super::task_repo::TaskRepository {
    async fn list_by_column(&self, column_id: u32) -> DomainResult<Vec<Task>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM tasks t WHERE t.column_id = ? ORDER BY t.sort_order, t.id",
            TASK_COLUMNS_SQL
        ))?;
        let tasks = stmt
            .query_map(params![column_id], row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    async fn move_to(&self, task_id: u32, column_id: u32, index: usize) -> DomainResult<Task> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let (source_column, source_board): (u32, u32) = tx
            .query_row(
                "SELECT t.column_id, c.board_id FROM tasks t JOIN board_columns c ON c.id = t.column_id WHERE t.id = ?",
                params![task_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?
            .ok_or_else(|| DomainError::NotFound(format!("Task {} not found", task_id)))?;

        let target_board: u32 = tx
            .query_row(
                "SELECT board_id FROM board_columns WHERE id = ?",
                params![column_id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| DomainError::NotFound(format!("Column {} not found", column_id)))?;

        if target_board != source_board {
            return Err(DomainError::Conflict(format!(
                "Column {} is on a different board than task {}",
                column_id, task_id
            )));
        }

        let mut ids = column_task_ids(&tx, column_id, Some(task_id))?;
        let index = index.min(ids.len());
        ids.insert(index, task_id);
        write_positions(&tx, column_id, &ids)?;

        if source_column != column_id {
            reindex_column(&tx, source_column)?;
        }

        let task = tx.query_row(
            &format!("SELECT {} FROM tasks t WHERE t.id = ?", TASK_COLUMNS_SQL),
            params![task_id],
            row_to_task,
        )?;
        tx.commit()?;
        Ok(task)
    }
}
