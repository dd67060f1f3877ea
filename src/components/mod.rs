//! UI Components
//!
//! Reusable Leptos components.

mod board_form;
mod board_header;
pub mod board_view;
mod column_view;
mod dashboard;
mod delete_confirm_button;
mod drag_overlay;
mod log_panel;
mod modal;
pub mod task_card;
mod task_form;

pub use board_form::BoardForm;
pub use board_header::BoardHeader;
pub use board_view::BoardView;
pub use column_view::ColumnView;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drag_overlay::DragOverlay;
pub use log_panel::LogPanel;
pub use modal::Modal;
pub use task_card::TaskCard;
pub use task_form::{TaskForm, TaskFormMode};
