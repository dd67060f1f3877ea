//! Board Commands
//!
//! Frontend bindings for board-related backend commands.

use serde::Serialize;

use super::{call, call_unit};
use crate::models::{Board, BoardFields, BoardPage, BoardWithColumns};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ListBoardsArgs {
    page: u32,
    #[serde(rename = "pageSize")]
    page_size: Option<u32>,
}

#[derive(Serialize)]
struct BoardIdArgs {
    #[serde(rename = "boardId")]
    board_id: u32,
}

#[derive(Serialize)]
struct CreateBoardArgs<'a> {
    fields: &'a BoardFields,
}

#[derive(Serialize)]
struct UpdateBoardArgs<'a> {
    #[serde(rename = "boardId")]
    board_id: u32,
    fields: &'a BoardFields,
}

// ========================
// Commands
// ========================

pub async fn list_boards(page: u32, page_size: Option<u32>) -> Result<BoardPage, String> {
    call("list_boards", &ListBoardsArgs { page, page_size }).await
}

pub async fn create_board(fields: &BoardFields) -> Result<Board, String> {
    call("create_board", &CreateBoardArgs { fields }).await
}

pub async fn get_board_with_columns(board_id: u32) -> Result<BoardWithColumns, String> {
    call("get_board_with_columns", &BoardIdArgs { board_id }).await
}

pub async fn update_board(board_id: u32, fields: &BoardFields) -> Result<Board, String> {
    call("update_board", &UpdateBoardArgs { board_id, fields }).await
}

pub async fn delete_board(board_id: u32) -> Result<(), String> {
    call_unit("delete_board", &BoardIdArgs { board_id }).await
}
