//! Board Service
//!
//! Use-case layer between the Tauri commands and the repositories: resolves
//! the board behind every task/column, enforces that only the owner mutates
//! it, validates form input and logs each mutation.

use chrono::NaiveDate;

use crate::domain::{
    Board, BoardFields, BoardPage, BoardWithColumns, DomainError, DomainResult, Task, TaskFields, User,
};
use crate::repository::board::{BoardColumnOperations, BoardOwnerOperations};
use crate::repository::task::TaskPositioningOperations;
use crate::repository::{BoardRepository, DbState, Repository, TaskRepository};

pub struct BoardService {
    boards: BoardRepository,
    tasks: TaskRepository,
    user: User,
    page_size: u32,
}

impl BoardService {
    pub fn new(db: &DbState, user: User, page_size: u32) -> Self {
        Self {
            boards: BoardRepository::new(db.connection()),
            tasks: TaskRepository::new(db.connection()),
            user,
            page_size: page_size.max(1),
        }
    }

    pub fn current_user(&self) -> User {
        self.user.clone()
    }

    async fn owned_board(&self, board_id: u32) -> DomainResult<Board> {
        let board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Board {} not found", board_id)))?;
        board.ensure_owned_by(&self.user.id)?;
        Ok(board)
    }

    async fn owned_board_for_task(&self, task_id: u32) -> DomainResult<Board> {
        let board = self
            .boards
            .find_by_task(task_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Task {} not found", task_id)))?;
        board.ensure_owned_by(&self.user.id)?;
        Ok(board)
    }

    async fn owned_board_for_column(&self, column_id: u32) -> DomainResult<Board> {
        let board = self
            .boards
            .find_by_column(column_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Column {} not found", column_id)))?;
        board.ensure_owned_by(&self.user.id)?;
        Ok(board)
    }

    // ========================
    // Boards
    // ========================

    pub async fn list_boards(&self, page: u32, page_size: Option<u32>) -> DomainResult<BoardPage> {
        let size = page_size.unwrap_or(self.page_size);
        self.boards.list_by_owner(&self.user.id, page, size).await
    }

    pub async fn create_board(&self, fields: &BoardFields) -> DomainResult<Board> {
        let board = Board::from_fields(fields, &self.user.id)?;
        let created = self.boards.create_with_default_columns(&board).await?;
        log::info!("Created board {} ({})", created.id, created.title);
        Ok(created)
    }

    pub async fn get_board_with_columns(&self, board_id: u32) -> DomainResult<BoardWithColumns> {
        self.owned_board(board_id).await?;
        self.boards.get_with_columns(board_id).await
    }

    pub async fn update_board(&self, board_id: u32, fields: &BoardFields) -> DomainResult<Board> {
        let mut board = self.owned_board(board_id).await?;
        board.apply(fields)?;
        let updated = self.boards.update(&board).await?;
        log::info!("Updated board {}", board_id);
        Ok(updated)
    }

    pub async fn delete_board(&self, board_id: u32) -> DomainResult<()> {
        self.owned_board(board_id).await?;
        self.boards.delete(board_id).await?;
        log::info!("Deleted board {}", board_id);
        Ok(())
    }

    // ========================
    // Tasks
    // ========================

    pub async fn get_task(&self, task_id: u32) -> DomainResult<Task> {
        self.owned_board_for_task(task_id).await?;
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Task {} not found", task_id)))
    }

    pub async fn create_task(&self, column_id: u32, fields: &TaskFields) -> DomainResult<Task> {
        self.owned_board_for_column(column_id).await?;
        validate_due_date(fields)?;
        let task = Task::from_fields(column_id, fields)?;
        let created = self.tasks.create(&task).await?;
        log::info!("Created task {} in column {} at {}", created.id, column_id, created.sort_order);
        Ok(created)
    }

    pub async fn update_task(&self, task_id: u32, fields: &TaskFields) -> DomainResult<Task> {
        let mut task = self.get_task(task_id).await?;
        validate_due_date(fields)?;
        task.apply(fields)?;
        let updated = self.tasks.update(&task).await?;
        log::info!("Updated task {}", task_id);
        Ok(updated)
    }

    pub async fn delete_task(&self, task_id: u32) -> DomainResult<()> {
        self.owned_board_for_task(task_id).await?;
        self.tasks.delete(task_id).await?;
        log::info!("Deleted task {}", task_id);
        Ok(())
    }

    pub async fn move_task(&self, task_id: u32, column_id: u32, index: usize) -> DomainResult<Task> {
        self.owned_board_for_task(task_id).await?;
        let moved = self.tasks.move_to(task_id, column_id, index).await?;
        log::info!("Moved task {} to column {} at {}", task_id, column_id, moved.sort_order);
        Ok(moved)
    }
}

/// Due dates are ISO calendar dates (`YYYY-MM-DD`)
fn validate_due_date(fields: &TaskFields) -> DomainResult<()> {
    match fields.due_date.as_deref().map(str::trim) {
        Some(date) if !date.is_empty() => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|_| ())
            .map_err(|_| DomainError::InvalidInput(format!("Invalid due date: {}", date))),
        _ => Ok(()),
    }
}
