//! Tauri Commands for Boards
//!
//! Exposes the current user and board CRUD to the frontend via Tauri IPC.

use tauri::State;

use crate::domain::{Board, BoardFields, BoardPage, BoardWithColumns, User};
use crate::AppState;

/// Identity of the configured local user
#[tauri::command]
pub async fn current_user(state: State<'_, AppState>) -> Result<User, String> {
    Ok(state.service.current_user())
}

/// Page through the current user's boards, newest first
#[tauri::command]
pub async fn list_boards(
    state: State<'_, AppState>,
    page: u32,
    page_size: Option<u32>,
) -> Result<BoardPage, String> {
    state
        .service
        .list_boards(page, page_size)
        .await
        .map_err(|e| e.to_string())
}

/// Create a board together with its default columns
#[tauri::command]
pub async fn create_board(state: State<'_, AppState>, fields: BoardFields) -> Result<Board, String> {
    state.service.create_board(&fields).await.map_err(|e| e.to_string())
}

/// Board plus its columns, each with tasks in position order
#[tauri::command]
pub async fn get_board_with_columns(
    state: State<'_, AppState>,
    board_id: u32,
) -> Result<BoardWithColumns, String> {
    state
        .service
        .get_board_with_columns(board_id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_board(
    state: State<'_, AppState>,
    board_id: u32,
    fields: BoardFields,
) -> Result<Board, String> {
    state
        .service
        .update_board(board_id, &fields)
        .await
        .map_err(|e| e.to_string())
}

/// Delete a board, cascading to its columns and tasks
#[tauri::command]
pub async fn delete_board(state: State<'_, AppState>, board_id: u32) -> Result<(), String> {
    state.service.delete_board(board_id).await.map_err(|e| e.to_string())
}
