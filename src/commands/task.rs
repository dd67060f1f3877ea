//! Task Commands
//!
//! Frontend bindings for task-related backend commands.

use serde::Serialize;

use super::{call, call_unit};
use crate::models::{Task, TaskFields};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct TaskIdArgs {
    #[serde(rename = "taskId")]
    task_id: u32,
}

#[derive(Serialize)]
struct CreateTaskArgs<'a> {
    #[serde(rename = "columnId")]
    column_id: u32,
    fields: &'a TaskFields,
}

#[derive(Serialize)]
struct UpdateTaskArgs<'a> {
    #[serde(rename = "taskId")]
    task_id: u32,
    fields: &'a TaskFields,
}

#[derive(Serialize)]
struct MoveTaskArgs {
    #[serde(rename = "taskId")]
    task_id: u32,
    #[serde(rename = "columnId")]
    column_id: u32,
    index: u32,
}

// ========================
// Commands
// ========================

pub async fn get_task(task_id: u32) -> Result<Task, String> {
    call("get_task", &TaskIdArgs { task_id }).await
}

pub async fn create_task(column_id: u32, fields: &TaskFields) -> Result<Task, String> {
    call("create_task", &CreateTaskArgs { column_id, fields }).await
}

pub async fn update_task(task_id: u32, fields: &TaskFields) -> Result<Task, String> {
    call("update_task", &UpdateTaskArgs { task_id, fields }).await
}

pub async fn delete_task(task_id: u32) -> Result<(), String> {
    call_unit("delete_task", &TaskIdArgs { task_id }).await
}

/// Persist a drag result: `task_id` lands at `index` in `column_id`
pub async fn move_task(task_id: u32, column_id: u32, index: u32) -> Result<Task, String> {
    call("move_task", &MoveTaskArgs { task_id, column_id, index }).await
}
