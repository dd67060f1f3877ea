//! Board Controller
//!
//! Glue between the board view, the `BoardCache`, the `MoveCoordinator` and
//! a `BoardBackend`. Loads replace the cache wholesale; mutations go to the
//! backend first and are followed by a reload. A failed move reloads too, so
//! the optimistic placement never outlives a rejection.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_dragdrop::DropTarget;

use crate::backend::BoardBackend;
use crate::board_cache::BoardCache;
use crate::coordinator::{MoveCoordinator, MovePlan};
use crate::models::{Board, BoardFields, Task, TaskFields};

/// Shared mutable state the controller writes into
///
/// Both accessors return `None` once the cell is gone (a disposed signal).
pub trait StateCell<T>: Clone + 'static {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
    fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: 'static> StateCell<T> for Rc<RefCell<T>> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Board view failures, by how they are surfaced
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// Fetch failed; shown inline, the cached board stays on screen
    Load(String),
    /// Create/update/delete/move rejected; shown as a blocking alert
    Mutation { action: &'static str, reason: String },
    /// Nothing to act on (e.g. no column to add a task to)
    MissingTarget(&'static str),
}

impl BoardError {
    fn mutation(action: &'static str) -> impl FnOnce(String) -> Self {
        move |reason| BoardError::Mutation { action, reason }
    }

    /// Alerts block; load errors render inline
    pub fn is_blocking(&self) -> bool {
        !matches!(self, BoardError::Load(_))
    }

    /// Generic text for the user; details only go to the log
    pub fn user_message(&self) -> String {
        match self {
            BoardError::Load(_) => "Could not load the board.".to_string(),
            BoardError::Mutation { action, .. } => format!("Failed to {}. Please try again.", action),
            BoardError::MissingTarget(what) => format!("No {} available.", what),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Load(reason) => write!(f, "Load failed: {}", reason),
            BoardError::Mutation { action, reason } => write!(f, "Failed to {}: {}", action, reason),
            BoardError::MissingTarget(what) => write!(f, "No {} available", what),
        }
    }
}

impl std::error::Error for BoardError {}

pub struct BoardController<B, C> {
    backend: Rc<B>,
    board_id: u32,
    cache: C,
    coordinator: Rc<RefCell<MoveCoordinator>>,
}

impl<B, C: Clone> Clone for BoardController<B, C> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            board_id: self.board_id,
            cache: self.cache.clone(),
            coordinator: self.coordinator.clone(),
        }
    }
}

impl<B: BoardBackend + 'static, C: StateCell<BoardCache>> BoardController<B, C> {
    pub fn new(backend: Rc<B>, board_id: u32, cache: C) -> Self {
        Self {
            backend,
            board_id,
            cache,
            coordinator: Rc::new(RefCell::new(MoveCoordinator::new())),
        }
    }

    pub fn board_id(&self) -> u32 {
        self.board_id
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn active_task(&self) -> Option<u32> {
        self.coordinator.borrow().active_task()
    }

    // ========================
    // Load
    // ========================

    /// Fetch the board and replace the whole cache; on failure the cache is kept
    pub async fn load(&self) -> Result<(), BoardError> {
        let data = self
            .backend
            .get_board_with_columns(self.board_id)
            .await
            .map_err(|e| {
                log::warn!("Loading board {} failed: {}", self.board_id, e);
                BoardError::Load(e)
            })?;
        log::debug!("Loaded board {} with {} columns", self.board_id, data.columns.len());
        let mut coordinator = self.coordinator.borrow_mut();
        self.cache.write_with(|cache| {
            cache.replace_all(data);
            coordinator.rebase(cache);
        });
        Ok(())
    }

    async fn reload_after(&self, action: &'static str) {
        if let Err(e) = self.load().await {
            log::warn!("Reload after {} failed: {}", action, e);
        }
    }

    // ========================
    // Drag and drop
    // ========================

    pub fn drag_start(&self, task_id: u32) -> bool {
        let mut coordinator = self.coordinator.borrow_mut();
        self.cache
            .read_with(|cache| coordinator.on_drag_start(cache, task_id))
            .unwrap_or(false)
    }

    pub fn drag_over(&self, task_id: u32, over: DropTarget) {
        let mut coordinator = self.coordinator.borrow_mut();
        // Skip the signal write (and re-render) when the preview did not change
        let changed = self
            .cache
            .read_with(|cache| {
                let mut preview = cache.clone();
                coordinator.on_drag_over(&mut preview, task_id, over).then_some(preview)
            })
            .flatten();
        if let Some(preview) = changed {
            self.cache.write_with(|cache| *cache = preview);
        }
    }

    pub fn drag_cancel(&self) {
        let mut coordinator = self.coordinator.borrow_mut();
        self.cache.write_with(|cache| coordinator.on_drag_cancel(cache));
    }

    /// Resolve the drop and apply it to the cache; the plan still has to be persisted
    pub fn finish_drag(&self, task_id: u32, over: Option<DropTarget>) -> Option<MovePlan> {
        let mut coordinator = self.coordinator.borrow_mut();
        self.cache
            .write_with(|cache| coordinator.on_drag_end(cache, task_id, over))
            .flatten()
    }

    /// Persist a planned move; a rejection reloads the board
    pub async fn persist_move(&self, plan: MovePlan) -> Result<(), BoardError> {
        log::info!(
            "Moving task {} from column {} to column {} at {}",
            plan.task_id,
            plan.from_column,
            plan.to_column,
            plan.index
        );
        match self.backend.move_task(plan.task_id, plan.to_column, plan.index).await {
            Ok(()) => Ok(()),
            Err(reason) => {
                log::error!("Move of task {} failed: {}", plan.task_id, reason);
                self.reload_after("move").await;
                Err(BoardError::mutation("move the task")(reason))
            }
        }
    }

    /// `finish_drag` followed by `persist_move` when there is something to save
    pub async fn drag_end(&self, task_id: u32, over: Option<DropTarget>) -> Result<Option<MovePlan>, BoardError> {
        let Some(plan) = self.finish_drag(task_id, over) else {
            return Ok(None);
        };
        self.persist_move(plan).await?;
        Ok(Some(plan))
    }

    // ========================
    // Tasks
    // ========================

    pub async fn get_task(&self, task_id: u32) -> Result<Task, BoardError> {
        self.backend.get_task(task_id).await.map_err(BoardError::Load)
    }

    /// Create a task at the end of `column_id`, or the first column when none is given
    pub async fn create_task(&self, column_id: Option<u32>, fields: TaskFields) -> Result<Task, BoardError> {
        let column_id = column_id
            .or_else(|| self.cache.read_with(|cache| cache.first_column_id()).flatten())
            .ok_or(BoardError::MissingTarget("column to add the task to"))?;
        let task = self
            .backend
            .create_task(column_id, &fields)
            .await
            .map_err(BoardError::mutation("create the task"))?;
        log::info!("Created task {} in column {}", task.id, column_id);
        self.reload_after("create").await;
        Ok(task)
    }

    pub async fn update_task(&self, task_id: u32, fields: TaskFields) -> Result<Task, BoardError> {
        let task = self
            .backend
            .update_task(task_id, &fields)
            .await
            .map_err(BoardError::mutation("update the task"))?;
        self.reload_after("update").await;
        Ok(task)
    }

    pub async fn delete_task(&self, task_id: u32) -> Result<(), BoardError> {
        self.backend
            .delete_task(task_id)
            .await
            .map_err(BoardError::mutation("delete the task"))?;
        self.reload_after("delete").await;
        Ok(())
    }

    // ========================
    // Board
    // ========================

    pub async fn update_board(&self, fields: BoardFields) -> Result<Board, BoardError> {
        let board = self
            .backend
            .update_board(self.board_id, &fields)
            .await
            .map_err(BoardError::mutation("update the board"))?;
        self.cache.write_with(|cache| cache.set_board(board.clone()));
        Ok(board)
    }

    /// Delete the board; the caller navigates away on success
    pub async fn delete_board(&self) -> Result<(), BoardError> {
        self.backend
            .delete_board(self.board_id)
            .await
            .map_err(BoardError::mutation("delete the board"))?;
        log::info!("Deleted board {}", self.board_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fake::FakeBackend;
    use crate::models::Priority;

    type TestController = BoardController<FakeBackend, Rc<RefCell<BoardCache>>>;

    fn setup(columns: &[&str]) -> (Rc<FakeBackend>, TestController, Vec<u32>) {
        let backend = Rc::new(FakeBackend::new());
        let (board_id, column_ids) = backend.seed_board("Board", columns);
        let controller = BoardController::new(backend.clone(), board_id, Rc::new(RefCell::new(BoardCache::new())));
        (backend, controller, column_ids)
    }

    fn cached_ids(controller: &TestController, column_id: u32) -> Vec<u32> {
        controller
            .cache()
            .read_with(|cache| {
                cache
                    .column(column_id)
                    .map(|c| c.tasks.iter().map(|t| t.id).collect())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_load_replaces_cache() {
        let (backend, controller, cols) = setup(&["Backlog", "Doing", "Done"]);
        let t = backend.seed_task(cols[0], "T");

        controller.load().await.unwrap();

        assert_eq!(cached_ids(&controller, cols[0]), vec![t]);
        assert_eq!(controller.cache().read_with(|c| c.columns().len()), Some(3));
    }

    #[tokio::test]
    async fn test_failed_load_keeps_stale_cache() {
        let (backend, controller, cols) = setup(&["Backlog"]);
        let t = backend.seed_task(cols[0], "T");
        controller.load().await.unwrap();

        backend.fail_loads.set(true);
        let result = controller.load().await;

        assert!(matches!(result, Err(BoardError::Load(_))));
        assert!(!result.unwrap_err().is_blocking());
        assert_eq!(cached_ids(&controller, cols[0]), vec![t]);
    }

    #[tokio::test]
    async fn test_move_to_other_column_persists_once() {
        let (backend, controller, cols) = setup(&["Backlog", "Doing", "Done"]);
        let t = backend.seed_task(cols[0], "T");
        controller.load().await.unwrap();

        assert!(controller.drag_start(t));
        controller.drag_over(t, DropTarget::Column(cols[1]));
        let plan = controller.drag_end(t, Some(DropTarget::Column(cols[1]))).await.unwrap();

        assert_eq!(plan.map(|p| p.index), Some(0));
        assert_eq!(backend.move_calls(), vec![(t, cols[1], 0)]);
        assert!(backend.column_task_ids(cols[0]).is_empty());
        assert_eq!(backend.column_task_ids(cols[1]), vec![t]);
        assert_eq!(cached_ids(&controller, cols[1]), vec![t]);
    }

    #[tokio::test]
    async fn test_drop_on_original_position_skips_backend() {
        let (backend, controller, cols) = setup(&["Backlog"]);
        let a = backend.seed_task(cols[0], "A");
        backend.seed_task(cols[0], "B");
        controller.load().await.unwrap();

        controller.drag_start(a);
        let plan = controller.drag_end(a, Some(DropTarget::Task(a))).await.unwrap();

        assert_eq!(plan, None);
        assert!(backend.move_calls().is_empty());
    }

    #[tokio::test]
    async fn test_same_column_reorder_persists_preview() {
        let (backend, controller, cols) = setup(&["Backlog"]);
        let a = backend.seed_task(cols[0], "A");
        let b = backend.seed_task(cols[0], "B");
        let c = backend.seed_task(cols[0], "C");
        controller.load().await.unwrap();

        controller.drag_start(a);
        controller.drag_over(a, DropTarget::Task(c));
        assert_eq!(cached_ids(&controller, cols[0]), vec![b, c, a]);
        controller.drag_end(a, Some(DropTarget::Task(c))).await.unwrap();

        assert_eq!(backend.move_calls(), vec![(a, cols[0], 2)]);
        assert_eq!(backend.column_task_ids(cols[0]), vec![b, c, a]);
    }

    #[tokio::test]
    async fn test_failed_move_reloads_authoritative_state() {
        let (backend, controller, cols) = setup(&["Backlog", "Doing"]);
        let t = backend.seed_task(cols[0], "T");
        controller.load().await.unwrap();
        backend.fail_moves.set(true);
        let loads_before = backend.load_count();

        controller.drag_start(t);
        let result = controller.drag_end(t, Some(DropTarget::Column(cols[1]))).await;

        let err = result.unwrap_err();
        assert!(err.is_blocking());
        assert!(matches!(err, BoardError::Mutation { .. }));
        assert_eq!(backend.load_count(), loads_before + 1);
        assert_eq!(cached_ids(&controller, cols[0]), vec![t]);
        assert!(cached_ids(&controller, cols[1]).is_empty());
    }

    #[tokio::test]
    async fn test_cancel_restores_order_without_backend_call() {
        let (backend, controller, cols) = setup(&["Backlog"]);
        let a = backend.seed_task(cols[0], "A");
        let b = backend.seed_task(cols[0], "B");
        controller.load().await.unwrap();

        controller.drag_start(b);
        controller.drag_over(b, DropTarget::Task(a));
        assert_eq!(cached_ids(&controller, cols[0]), vec![b, a]);
        controller.drag_cancel();

        assert_eq!(cached_ids(&controller, cols[0]), vec![a, b]);
        assert_eq!(controller.active_task(), None);
        assert!(backend.move_calls().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_after_failed_move_reload_keeps_backend_state() {
        let (backend, controller, cols) = setup(&["Backlog", "Doing"]);
        let a = backend.seed_task(cols[0], "A");
        let b = backend.seed_task(cols[0], "B");
        controller.load().await.unwrap();

        assert!(controller.drag_start(a));
        let plan = controller.finish_drag(a, Some(DropTarget::Column(cols[1]))).unwrap();
        assert_eq!(cached_ids(&controller, cols[1]), vec![a]);

        // Second gesture starts while the first move is still in flight
        assert!(controller.drag_start(b));
        backend.fail_moves.set(true);
        assert!(controller.persist_move(plan).await.is_err());
        assert_eq!(cached_ids(&controller, cols[1]), Vec::<u32>::new());

        controller.drag_cancel();

        assert_eq!(cached_ids(&controller, cols[0]), backend.column_task_ids(cols[0]));
        assert!(cached_ids(&controller, cols[1]).is_empty());
        assert!(backend.column_task_ids(cols[1]).is_empty());
    }

    #[tokio::test]
    async fn test_create_task_defaults_to_first_column() {
        let (backend, controller, cols) = setup(&["To Do", "Done"]);
        backend.seed_task(cols[0], "Existing");
        controller.load().await.unwrap();

        let fields = TaskFields {
            title: "Write spec".to_string(),
            ..Default::default()
        };
        let task = controller.create_task(None, fields).await.unwrap();

        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(cached_ids(&controller, cols[0]).last(), Some(&task.id));
    }

    #[tokio::test]
    async fn test_create_task_without_columns_is_missing_target() {
        let (_backend, controller, _) = setup(&[]);
        controller.load().await.unwrap();

        let result = controller.create_task(None, TaskFields::default()).await;

        assert_eq!(result.unwrap_err(), BoardError::MissingTarget("column to add the task to"));
    }

    #[tokio::test]
    async fn test_failed_mutation_is_blocking() {
        let (backend, controller, cols) = setup(&["To Do"]);
        let t = backend.seed_task(cols[0], "T");
        controller.load().await.unwrap();
        backend.fail_mutations.set(true);

        let err = controller.delete_task(t).await.unwrap_err();

        assert!(err.is_blocking());
        assert_eq!(err.user_message(), "Failed to delete the task. Please try again.");
        assert_eq!(cached_ids(&controller, cols[0]), vec![t]);
    }

    #[tokio::test]
    async fn test_delete_task_reloads() {
        let (backend, controller, cols) = setup(&["To Do"]);
        let a = backend.seed_task(cols[0], "A");
        let b = backend.seed_task(cols[0], "B");
        controller.load().await.unwrap();

        controller.delete_task(a).await.unwrap();

        assert_eq!(cached_ids(&controller, cols[0]), vec![b]);
        let order = controller.cache().read_with(|c| c.task(b).map(|t| t.sort_order)).flatten();
        assert_eq!(order, Some(0));
    }

    #[tokio::test]
    async fn test_update_board_refreshes_header() {
        let (_backend, controller, _) = setup(&["To Do"]);
        controller.load().await.unwrap();

        let fields = BoardFields {
            title: "Renamed".to_string(),
            description: "d".to_string(),
            author: "a".to_string(),
            color: None,
        };
        controller.update_board(fields).await.unwrap();

        let title = controller.cache().read_with(|c| c.board().map(|b| b.title.clone())).flatten();
        assert_eq!(title.as_deref(), Some("Renamed"));
    }

    #[tokio::test]
    async fn test_deleted_board_no_longer_loads() {
        let (_backend, controller, _) = setup(&["To Do"]);
        controller.load().await.unwrap();

        controller.delete_board().await.unwrap();

        assert!(matches!(controller.load().await, Err(BoardError::Load(_))));
    }
}
