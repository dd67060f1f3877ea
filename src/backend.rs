//! Board Backend
//!
//! The remote store as seen from the board view. `TauriBackend` forwards to
//! the IPC commands; tests substitute an in-memory fake.

use async_trait::async_trait;

use crate::commands;
use crate::models::{Board, BoardFields, BoardPage, BoardWithColumns, Task, TaskFields, User};

#[cfg(test)]
pub mod fake;

/// Persistence operations used by the dashboard and the board view
///
/// Every failure is the backend's error message; there is no retry.
#[async_trait(?Send)]
pub trait BoardBackend {
    async fn current_user(&self) -> Result<User, String>;

    async fn list_boards(&self, page: u32, page_size: Option<u32>) -> Result<BoardPage, String>;

    async fn create_board(&self, fields: &BoardFields) -> Result<Board, String>;

    async fn get_board_with_columns(&self, board_id: u32) -> Result<BoardWithColumns, String>;

    async fn update_board(&self, board_id: u32, fields: &BoardFields) -> Result<Board, String>;

    async fn delete_board(&self, board_id: u32) -> Result<(), String>;

    async fn get_task(&self, task_id: u32) -> Result<Task, String>;

    /// Append a task to the end of `column_id`
    async fn create_task(&self, column_id: u32, fields: &TaskFields) -> Result<Task, String>;

    async fn update_task(&self, task_id: u32, fields: &TaskFields) -> Result<Task, String>;

    async fn delete_task(&self, task_id: u32) -> Result<(), String>;

    /// Place `task_id` at `index` of `column_id`, renumbering both affected columns
    async fn move_task(&self, task_id: u32, column_id: u32, index: usize) -> Result<(), String>;
}

/// IPC-backed implementation
#[derive(Clone, Copy, Debug, Default)]
pub struct TauriBackend;

#[async_trait(?Send)]
impl BoardBackend for TauriBackend {
    async fn current_user(&self) -> Result<User, String> {
        commands::current_user().await
    }

    async fn list_boards(&self, page: u32, page_size: Option<u32>) -> Result<BoardPage, String> {
        commands::list_boards(page, page_size).await
    }

    async fn create_board(&self, fields: &BoardFields) -> Result<Board, String> {
        commands::create_board(fields).await
    }

    async fn get_board_with_columns(&self, board_id: u32) -> Result<BoardWithColumns, String> {
        commands::get_board_with_columns(board_id).await
    }

    async fn update_board(&self, board_id: u32, fields: &BoardFields) -> Result<Board, String> {
        commands::update_board(board_id, fields).await
    }

    async fn delete_board(&self, board_id: u32) -> Result<(), String> {
        commands::delete_board(board_id).await
    }

    async fn get_task(&self, task_id: u32) -> Result<Task, String> {
        commands::get_task(task_id).await
    }

    async fn create_task(&self, column_id: u32, fields: &TaskFields) -> Result<Task, String> {
        commands::create_task(column_id, fields).await
    }

    async fn update_task(&self, task_id: u32, fields: &TaskFields) -> Result<Task, String> {
        commands::update_task(task_id, fields).await
    }

    async fn delete_task(&self, task_id: u32) -> Result<(), String> {
        commands::delete_task(task_id).await
    }

    async fn move_task(&self, task_id: u32, column_id: u32, index: usize) -> Result<(), String> {
        let index = u32::try_from(index).map_err(|_| format!("Index {} out of range", index))?;
        commands::move_task(task_id, column_id, index).await.map(|_| ())
    }
}
