//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod board_cmd;
mod dialog_cmd;
mod log_cmd;
mod task_cmd;

pub use board_cmd::*;
pub use dialog_cmd::*;
pub use log_cmd::*;
pub use task_cmd::*;
