//! Task Card Component
//!
//! Draggable card: priority dot, title, markdown description, assignee and
//! due date, with edit/delete actions.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::board_view::{use_board, Editor};
use crate::components::DeleteConfirmButton;
use crate::context::report_error;
use crate::markdown::parse_markdown;
use crate::models::Task;

#[component]
pub fn TaskCard(task_id: u32, column_id: u32) -> impl IntoView {
    let handle = use_board();
    let cache = handle.cache;
    let dnd = handle.dnd;

    let task = Memo::new(move |_| cache.with(|c| c.task(task_id).cloned()));

    let on_mousedown = make_on_mousedown(dnd, task_id);
    let on_mouseenter = make_on_task_mouseenter(dnd, task_id);
    let on_mouseleave = make_on_task_mouseleave(dnd, column_id);

    let is_dragging = move || dnd.dragging_id_read.get() == Some(task_id);
    let is_drop_target = move || {
        !is_dragging() && dnd.drop_target_read.get() == Some(DropTarget::Task(task_id))
    };
    let card_class = move || {
        let mut c = String::from("task-card");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let delete_task = move |_: ()| {
        handle.run(move |controller| async move {
            if let Err(e) = controller.delete_task(task_id).await {
                report_error(&e);
            }
        });
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {move || task.get().map(|task| view! {
                <TaskCardBody task=task />
                <div class="task-actions">
                    <button
                        class="icon-btn"
                        title="Edit task"
                        on:mousedown=|ev| ev.stop_propagation()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            if !dnd.drag_just_ended_read.get_untracked() {
                                handle.editor.set(Some(Editor::EditTask(task_id)));
                            }
                        }
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton button_class="icon-btn" on_confirm=delete_task />
                </div>
            })}
        </div>
    }
}

/// Card content without behavior, shared with the drag overlay
#[component]
pub fn TaskCardBody(task: Task) -> impl IntoView {
    let priority = task.priority;
    let description = task.description.filter(|d| !d.trim().is_empty());

    view! {
        <div class="task-card-header">
            <span
                class=format!("priority-dot priority-{}", priority.as_str())
                title=priority.label()
            ></span>
            <span class="task-title">{task.title}</span>
        </div>
        {description.map(|d| view! { <div class="task-description markdown" inner_html=parse_markdown(&d)></div> })}
        <div class="task-meta">
            {task.assignee.map(|a| view! { <span class="task-assignee">{a}</span> })}
            {task.due_date.map(|d| view! { <span class="task-due">{d}</span> })}
        </div>
    }
}
