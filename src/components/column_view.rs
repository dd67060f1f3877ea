//! Column View Component
//!
//! One board column: title, task count badge and its cards. The column body
//! is a drop target so empty columns and the space below the last card accept drops.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::board_view::{use_board, Editor};
use crate::components::TaskCard;

#[component]
pub fn ColumnView(column_id: u32) -> impl IntoView {
    let handle = use_board();
    let cache = handle.cache;
    let dnd = handle.dnd;

    let column = Memo::new(move |_| cache.with(|c| c.column(column_id).cloned()));
    let task_ids = Memo::new(move |_| {
        column.with(|col| col.as_ref().map(|c| c.tasks.iter().map(|t| t.id).collect::<Vec<_>>()).unwrap_or_default())
    });

    let on_mouseenter = make_on_column_mouseenter(dnd, column_id);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_drop_target = move || {
        dnd.drop_target_read.get() == Some(DropTarget::Column(column_id))
            && cache.with(|c| {
                dnd.dragging_id_read.get().and_then(|id| c.column_of(id)) != Some(column_id)
            })
    };

    view! {
        <div class=move || if is_drop_target() { "column drop-target" } else { "column" }>
            <div class="column-header">
                <h3>{move || column.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default())}</h3>
                <span class="count-badge">{move || task_ids.with(|ids| ids.len())}</span>
                <button
                    class="icon-btn"
                    title="Add task"
                    on:click=move |_| handle.editor.set(Some(Editor::NewTask(Some(column_id))))
                >
                    "+"
                </button>
            </div>
            <div class="column-body" on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
                <For
                    each=move || task_ids.get()
                    key=|task_id| *task_id
                    children=move |task_id| view! { <TaskCard task_id=task_id column_id=column_id /> }
                />
                <Show when=move || task_ids.with(|ids| ids.is_empty())>
                    <div class="column-empty">"Drop tasks here"</div>
                </Show>
            </div>
        </div>
    }
}
