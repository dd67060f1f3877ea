//! Task Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for Task CRUD operations.
//! Create appends to the end of the column and delete closes the gap it
//! leaves; moves live in task_positioning.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use crate::domain::{DomainError, DomainResult, Priority, Task};
use crate::repository::db::{inserted_id, now_millis, SharedConnection};
use crate::repository::traits::Repository;
use super::task_positioning::{next_position, reindex_column};

/// Task columns, qualified with the `t` alias every task query uses
pub(crate) const TASK_COLUMNS_SQL: &str =
    "t.id, t.column_id, t.title, t.description, t.assignee, t.due_date, t.priority, t.sort_order, t.created_at";

/// SQLite implementation of Task repository
#[derive(Clone)]
pub struct TaskRepository {
    pub(super) conn: SharedConnection,
}

impl TaskRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Task> for TaskRepository {
    /// Append the task to the end of its column; the column must exist
    async fn create(&self, entity: &Task) -> DomainResult<Task> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let column_exists = tx
            .query_row(
                "SELECT 1 FROM board_columns WHERE id = ?",
                params![entity.column_id],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !column_exists {
            return Err(DomainError::NotFound(format!("Column {} not found", entity.column_id)));
        }

        let position = next_position(&tx, entity.column_id)?;
        let created_at = now_millis();

        tx.execute(
            "INSERT INTO tasks (column_id, title, description, assignee, due_date, priority, sort_order, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.column_id,
                entity.title,
                entity.description,
                entity.assignee,
                entity.due_date,
                entity.priority.as_str(),
                position,
                created_at
            ],
        )?;
        let id = inserted_id(&tx)?;
        tx.commit()?;

        let mut task = entity.clone();
        task.id = id;
        task.sort_order = position;
        task.created_at = Some(created_at);
        Ok(task)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Task>> {
        let conn = self.conn.lock().await;
        let task = conn
            .query_row(
                &format!("SELECT {} FROM tasks t WHERE t.id = ?", TASK_COLUMNS_SQL),
                params![id],
                row_to_task,
            )
            .optional()?;
        Ok(task)
    }

    /// Update the task's fields; column and position only change through moves
    async fn update(&self, entity: &Task) -> DomainResult<Task> {
        let conn = self.conn.lock().await;

        let changed = conn.execute(
            "UPDATE tasks SET title = ?, description = ?, assignee = ?, due_date = ?, priority = ?, updated_at = ? WHERE id = ?",
            params![
                entity.title,
                entity.description,
                entity.assignee,
                entity.due_date,
                entity.priority.as_str(),
                now_millis(),
                entity.id
            ],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Task {} not found", entity.id)));
        }

        let task = conn.query_row(
            &format!("SELECT {} FROM tasks t WHERE t.id = ?", TASK_COLUMNS_SQL),
            params![entity.id],
            row_to_task,
        )?;
        Ok(task)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let column_id: u32 = tx
            .query_row("SELECT column_id FROM tasks WHERE id = ?", params![id], |row| row.get(0))
            .optional()?
            .ok_or_else(|| DomainError::NotFound(format!("Task {} not found", id)))?;

        tx.execute("DELETE FROM tasks WHERE id = ?", params![id])?;
        reindex_column(&tx, column_id)?;
        tx.commit()?;
        Ok(())
    }
}

/// Convert a database row to Task
pub(crate) fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        column_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        assignee: row.get(4)?,
        due_date: row.get(5)?,
        priority: Priority::from_str(&row.get::<_, String>(6)?),
        sort_order: row.get(7)?,
        created_at: row.get::<_, Option<i64>>(8)?,
    })
}
