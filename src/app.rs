//! Kanban Frontend App
//!
//! Top-level component: dashboard of boards, or one board view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::backend::{BoardBackend, TauriBackend};
use crate::components::{BoardView, Dashboard, LogPanel};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (current_board, set_current_board) = signal(None::<u32>);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((current_board, set_current_board), (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Identity comes from the backend config; it does not change while running
    spawn_local(async move {
        match TauriBackend.current_user().await {
            Ok(user) => {
                log::info!("Signed in as {}", user.display_name);
                store.user().set(Some(user));
            }
            Err(e) => log::error!("Failed to load current user: {}", e),
        }
    });

    let show_logs = RwSignal::new(false);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="app-title" on:click=move |_| ctx.close_board()>"Kanban"</h1>
                <span class="app-user">
                    {move || store.user().get().map(|u| u.display_name).unwrap_or_default()}
                </span>
                <button class="icon-btn app-logs" title="Recent logs" on:click=move |_| show_logs.set(true)>
                    "Logs"
                </button>
            </header>
            <main class="main-content">
                {move || match current_board.get() {
                    Some(board_id) => view! { <BoardView board_id=board_id /> }.into_any(),
                    None => view! { <Dashboard /> }.into_any(),
                }}
            </main>
            <Show when=move || show_logs.get()>
                <LogPanel on_close=move |_: ()| show_logs.set(false) />
            </Show>
        </div>
    }
}
