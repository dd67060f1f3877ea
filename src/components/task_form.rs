//! Task Form Component
//!
//! Modal for creating a task or editing one (prefilled from the backend).

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::board_view::use_board;
use crate::components::Modal;
use crate::context::report_error;
use crate::models::{Priority, TaskFields};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TaskFormMode {
    /// New task in the given column (first column when `None`)
    Create(Option<u32>),
    Edit(u32),
}

/// Required fields check; returns the first problem found
pub fn validate_task_form(fields: &TaskFields) -> Result<(), String> {
    if fields.title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if fields.assignee.as_deref().map_or(true, |a| a.trim().is_empty()) {
        return Err("Assignee is required".to_string());
    }
    match fields.due_date.as_deref().map(str::trim) {
        None | Some("") => Err("Due date is required".to_string()),
        Some(date) if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() => Err("Due date must be YYYY-MM-DD".to_string()),
        Some(_) => Ok(()),
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn TaskForm(mode: TaskFormMode) -> impl IntoView {
    let handle = use_board();
    let editor = handle.editor;

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let assignee = RwSignal::new(String::new());
    let due_date = RwSignal::new(String::new());
    let priority = RwSignal::new(Priority::default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    // Edit mode: prefill from the backend copy of the task
    if let TaskFormMode::Edit(task_id) = mode {
        handle.run(move |controller| async move {
            match controller.get_task(task_id).await {
                Ok(task) => {
                    let fields = TaskFields::from_task(&task);
                    title.try_set(fields.title);
                    description.try_set(fields.description.unwrap_or_default());
                    assignee.try_set(fields.assignee.unwrap_or_default());
                    due_date.try_set(fields.due_date.unwrap_or_default());
                    priority.try_set(fields.priority.unwrap_or_default());
                }
                Err(e) => {
                    report_error(&e);
                    error.try_set(Some("Could not load the task.".to_string()));
                }
            }
        });
    }

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let fields = TaskFields {
            title: title.get_untracked().trim().to_string(),
            description: non_blank(description.get_untracked()),
            assignee: non_blank(assignee.get_untracked()),
            due_date: non_blank(due_date.get_untracked()),
            priority: Some(priority.get_untracked()),
        };
        if let Err(msg) = validate_task_form(&fields) {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        saving.set(true);

        handle.run(move |controller| async move {
            let result = match mode {
                TaskFormMode::Create(column_id) => controller.create_task(column_id, fields).await.map(|_| ()),
                TaskFormMode::Edit(task_id) => controller.update_task(task_id, fields).await.map(|_| ()),
            };
            saving.try_set(false);
            match result {
                Ok(()) => {
                    editor.try_set(None);
                }
                Err(e) => report_error(&e),
            }
        });
    };

    let heading = match mode {
        TaskFormMode::Create(_) => "New Task",
        TaskFormMode::Edit(_) => "Edit Task",
    };
    let close = move |_: ()| editor.set(None);

    view! {
        <Modal title=heading on_close=close>
            <form class="modal-form" on:submit=submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        placeholder="Markdown supported"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Assignee"
                    <input
                        type="text"
                        prop:value=move || assignee.get()
                        on:input=move |ev| assignee.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Priority"
                    <select
                        prop:value=move || priority.get().as_str()
                        on:change=move |ev| priority.set(Priority::from_str(&event_target_value(&ev)))
                    >
                        {Priority::ALL.into_iter().map(|p| view! {
                            <option value=p.as_str() selected=move || priority.get() == p>{p.label()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Due date"
                    <input
                        type="date"
                        prop:value=move || due_date.get()
                        on:input=move |ev| due_date.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <div class="form-actions">
                    <button type="button" class="secondary-btn" on:click=move |_| close(())>"Cancel"</button>
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>
                        {match mode {
                            TaskFormMode::Create(_) => "Create",
                            TaskFormMode::Edit(_) => "Save",
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
