//! Drag Overlay Component
//!
//! Floating copy of the dragged card that follows the pointer.

use leptos::prelude::*;

use crate::components::board_view::use_board;
use crate::components::task_card::TaskCardBody;

/// Offset so the overlay does not sit under the pointer
const POINTER_OFFSET_PX: i32 = 12;

#[component]
pub fn DragOverlay() -> impl IntoView {
    let handle = use_board();
    let cache = handle.cache;
    let dnd = handle.dnd;

    let active = Memo::new(move |_| {
        dnd.dragging_id_read
            .get()
            .and_then(|id| cache.with_untracked(|c| c.task(id).cloned()))
    });

    let style = move || {
        let (x, y) = dnd.pointer_read.get();
        format!(
            "transform: translate({}px, {}px);",
            x + POINTER_OFFSET_PX,
            y + POINTER_OFFSET_PX
        )
    };

    view! {
        {move || active.get().map(|task| view! {
            <div class="drag-overlay task-card" style=style>
                <TaskCardBody task=task />
            </div>
        })}
    }
}
