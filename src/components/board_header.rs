//! Board Header Component
//!
//! Color swatch, title, task count, description and author, plus the board
//! actions (edit, delete, add task).

use leptos::prelude::*;

use crate::components::board_view::{use_board, Editor};
use crate::components::DeleteConfirmButton;
use crate::context::{report_error, AppContext};
use crate::store::{store_remove_board, use_app_store};

#[component]
pub fn BoardHeader() -> impl IntoView {
    let handle = use_board();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let cache = handle.cache;

    let board = Memo::new(move |_| cache.with(|c| c.board().cloned()));
    let task_count = Memo::new(move |_| cache.with(|c| c.task_count()));

    let delete_board = move |_: ()| {
        handle.run(move |controller| async move {
            let board_id = controller.board_id();
            match controller.delete_board().await {
                Ok(()) => {
                    store_remove_board(&store, board_id);
                    ctx.close_board();
                }
                Err(e) => report_error(&e),
            }
        });
    };

    view! {
        {move || board.get().map(|board| view! {
            <div class="board-header">
                <span class=format!("board-swatch large {}", board.color)></span>
                <div class="board-header-text">
                    <h2>
                        {board.title}
                        <span class="count-badge">{move || task_count.get()}</span>
                    </h2>
                    <p class="board-description">{board.description}</p>
                    <span class="board-author">{format!("by {}", board.author)}</span>
                </div>
                <div class="board-actions">
                    <button class="secondary-btn" on:click=move |_| handle.editor.set(Some(Editor::EditBoard))>
                        "Edit Board"
                    </button>
                    <DeleteConfirmButton button_class="danger-btn" label="Delete Board" on_confirm=delete_board />
                    <button class="primary-btn" on:click=move |_| handle.editor.set(Some(Editor::NewTask(None)))>
                        "Add Task"
                    </button>
                </div>
            </div>
        })}
    }
}
