//! Dashboard Component
//!
//! Paginated grid of the user's boards plus the "new board" form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backend::{BoardBackend, TauriBackend};
use crate::components::BoardForm;
use crate::context::{report_error, AppContext};
use crate::controller::BoardError;
use crate::models::BoardFields;
use crate::store::{
    fetch_dashboard_page, page_count, store_set_page, use_app_store, AppStateStoreFields, AppStore,
};

fn load_page(store: AppStore, page: u32) {
    spawn_local(async move {
        match fetch_dashboard_page(&TauriBackend, page).await {
            Ok((page, loaded)) => store_set_page(&store, page, loaded),
            Err(e) => {
                log::warn!("Loading boards failed: {}", e);
                store.dashboard_error().set(Some("Could not load your boards.".to_string()));
            }
        }
    });
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let creating = RwSignal::new(false);

    // Reload when asked to (after create/delete or returning from a board)
    Effect::new(move |_| {
        ctx.reload_trigger.track();
        load_page(store, store.page().get_untracked());
    });

    let pages = move || page_count(store.total().get(), store.page_size().get());
    let go_to = move |page: u32| load_page(store, page);

    let create_board = move |fields: BoardFields| {
        spawn_local(async move {
            match TauriBackend.create_board(&fields).await {
                Ok(board) => {
                    log::info!("Created board {}", board.id);
                    creating.set(false);
                    store.page().set(0);
                    ctx.reload();
                }
                Err(reason) => report_error(&BoardError::Mutation {
                    action: "create the board",
                    reason,
                }),
            }
        });
    };

    view! {
        <section class="dashboard">
            <div class="dashboard-header">
                <h2>"My Boards"</h2>
                <button class="primary-btn" on:click=move |_| creating.set(true)>"New Board"</button>
            </div>

            {move || store.dashboard_error().get().map(|msg| view! {
                <div class="inline-error">
                    <span>{msg}</span>
                    <button class="secondary-btn" on:click=move |_| ctx.reload()>"Retry"</button>
                </div>
            })}

            <Show when=move || store.boards().with(|b| b.is_empty()) && store.dashboard_error().with(|e| e.is_none())>
                <p class="empty-state">"No boards yet. Create one to get started."</p>
            </Show>

            <div class="board-grid">
                <For
                    each=move || store.boards().get()
                    key=|board| (board.id, board.title.clone(), board.description.clone(), board.author.clone(), board.color.clone())
                    children=move |board| {
                        let id = board.id;
                        view! {
                            <div class="board-card" on:click=move |_| ctx.open_board(id)>
                                <span class=format!("board-swatch {}", board.color)></span>
                                <div class="board-card-body">
                                    <h3>{board.title}</h3>
                                    <p class="board-description">{board.description}</p>
                                    <span class="board-author">{board.author}</span>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || { pages() > 1 }>
                <div class="pagination">
                    <button
                        class="secondary-btn"
                        disabled=move || store.page().get() == 0
                        on:click=move |_| go_to(store.page().get_untracked().saturating_sub(1))
                    >
                        "Previous"
                    </button>
                    <span class="page-indicator">
                        {move || format!("Page {} of {}", store.page().get() + 1, pages())}
                    </span>
                    <button
                        class="secondary-btn"
                        disabled=move || store.page().get() + 1 >= pages()
                        on:click=move |_| go_to(store.page().get_untracked() + 1)
                    >
                        "Next"
                    </button>
                </div>
            </Show>

            <Show when=move || creating.get()>
                <BoardForm
                    heading="New Board"
                    initial=BoardFields::default()
                    submit_label="Create"
                    on_submit=create_board
                    on_cancel=move |_: ()| creating.set(false)
                />
            </Show>
        </section>
    }
}
