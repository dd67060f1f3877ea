//! Tauri Commands for Tasks
//!
//! Task CRUD plus the positional move used by drag and drop.

use tauri::State;

use crate::domain::{Task, TaskFields};
use crate::AppState;

#[tauri::command]
pub async fn get_task(state: State<'_, AppState>, task_id: u32) -> Result<Task, String> {
    state.service.get_task(task_id).await.map_err(|e| e.to_string())
}

/// Create a task at the end of a column
#[tauri::command]
pub async fn create_task(
    state: State<'_, AppState>,
    column_id: u32,
    fields: TaskFields,
) -> Result<Task, String> {
    state
        .service
        .create_task(column_id, &fields)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_task(
    state: State<'_, AppState>,
    task_id: u32,
    fields: TaskFields,
) -> Result<Task, String> {
    state
        .service
        .update_task(task_id, &fields)
        .await
        .map_err(|e| e.to_string())
}

/// Delete a task and close the gap it leaves in its column
#[tauri::command]
pub async fn delete_task(state: State<'_, AppState>, task_id: u32) -> Result<(), String> {
    state.service.delete_task(task_id).await.map_err(|e| e.to_string())
}

/// Move a task to `index` within `column_id` (same or another column)
///
/// Both affected columns are renumbered in one transaction; `index` is clamped
/// to the destination column's length.
#[tauri::command]
pub async fn move_task(
    state: State<'_, AppState>,
    task_id: u32,
    column_id: u32,
    index: u32,
) -> Result<Task, String> {
    state
        .service
        .move_task(task_id, column_id, index as usize)
        .await
        .map_err(|e| {
            log::warn!("Move of task {} failed: {}", task_id, e);
            e.to_string()
        })
}
