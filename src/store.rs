//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::backend::BoardBackend;
use crate::models::{Board, BoardPage, User};

/// Boards per dashboard page when the backend does not say otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Signed-in user (None until loaded)
    pub user: Option<User>,
    /// Boards on the current dashboard page
    pub boards: Vec<Board>,
    /// Total number of boards owned by the user
    pub total: u32,
    /// Zero-based dashboard page
    pub page: u32,
    pub page_size: u32,
    /// Inline dashboard load error
    pub dashboard_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            boards: Vec::new(),
            total: 0,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            dashboard_error: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Number of pages needed for `total` boards (at least one)
pub fn page_count(total: u32, page_size: u32) -> u32 {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Fetch a dashboard page, stepping back while it lies past the last board
///
/// Deleting the only board on the last page would otherwise leave an empty page.
pub async fn fetch_dashboard_page<B: BoardBackend>(backend: &B, page: u32) -> Result<(u32, BoardPage), String> {
    let mut page = page;
    loop {
        let loaded = backend.list_boards(page, None).await?;
        if page == 0 || !loaded.boards.is_empty() {
            return Ok((page, loaded));
        }
        let page_size = if loaded.page_size > 0 { loaded.page_size } else { DEFAULT_PAGE_SIZE };
        page = (page_count(loaded.total, page_size) - 1).min(page - 1);
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace the dashboard page with freshly loaded boards
pub fn store_set_page(store: &AppStore, page: u32, loaded: BoardPage) {
    store.page().set(page);
    if loaded.page_size > 0 {
        store.page_size().set(loaded.page_size);
    }
    store.total().set(loaded.total);
    store.boards().set(loaded.boards);
    store.dashboard_error().set(None);
}

/// Update a board in the store by ID
pub fn store_update_board(store: &AppStore, updated: Board) {
    if let Some(board) = store.boards().write().iter_mut().find(|b| b.id == updated.id) {
        *board = updated;
    }
}

/// Remove a board from the store by ID
pub fn store_remove_board(store: &AppStore, board_id: u32) {
    let before = store.boards().read_untracked().len();
    store.boards().write().retain(|b| b.id != board_id);
    if store.boards().read_untracked().len() < before {
        store.total().update(|t| *t = t.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fake::FakeBackend;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 6), 1);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(3, 0), 3);
    }

    #[tokio::test]
    async fn test_fetch_dashboard_page_newest_first() {
        let backend = FakeBackend::new();
        for i in 0..8 {
            backend.seed_board(&format!("Board {}", i), &["To Do"]);
        }

        let (page, loaded) = fetch_dashboard_page(&backend, 1).await.unwrap();

        assert_eq!(page, 1);
        assert_eq!(loaded.total, 8);
        assert_eq!(loaded.boards.len(), 2);
        assert_eq!(loaded.boards[0].title, "Board 1");
    }

    #[tokio::test]
    async fn test_fetch_dashboard_page_steps_back_past_end() {
        let backend = FakeBackend::new();
        for i in 0..3 {
            backend.seed_board(&format!("Board {}", i), &["To Do"]);
        }

        let (page, loaded) = fetch_dashboard_page(&backend, 4).await.unwrap();

        assert_eq!(page, 0);
        assert_eq!(loaded.boards.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_dashboard_page_error() {
        let backend = FakeBackend::new();
        backend.fail_loads.set(true);
        assert!(fetch_dashboard_page(&backend, 0).await.is_err());
    }
}
