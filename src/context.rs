//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::controller::BoardError;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Board shown in the board view (None = dashboard) - read
    pub current_board: ReadSignal<Option<u32>>,
    /// Board shown in the board view (None = dashboard) - write
    set_current_board: WriteSignal<Option<u32>>,
    /// Trigger to reload the dashboard from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the dashboard from backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        current_board: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            current_board: current_board.0,
            set_current_board: current_board.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn open_board(&self, board_id: u32) {
        self.set_current_board.set(Some(board_id));
    }

    /// Back to the dashboard, refreshing its list
    pub fn close_board(&self) {
        self.set_current_board.set(None);
        self.reload();
    }

    /// Trigger a reload of the dashboard
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Log a failure and raise the blocking alert when it calls for one
pub fn report_error(err: &BoardError) {
    log::error!("{}", err);
    if !err.is_blocking() {
        return;
    }
    let message = err.user_message();
    spawn_local(async move {
        if let Err(e) = commands::show_alert("Kanban", &message).await {
            log::error!("Failed to show alert: {}", e);
        }
    });
}
