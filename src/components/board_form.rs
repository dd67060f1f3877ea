//! Board Form Component
//!
//! Modal form for creating and editing a board.

use leptos::prelude::*;

use crate::components::Modal;
use crate::models::BoardFields;

/// Swatch classes offered in the color picker
pub const BOARD_COLORS: &[(&str, &str)] = &[
    ("bg-blue-500", "Blue"),
    ("bg-green-500", "Green"),
    ("bg-purple-500", "Purple"),
    ("bg-red-500", "Red"),
    ("bg-yellow-500", "Yellow"),
    ("bg-pink-500", "Pink"),
    ("bg-gray-500", "Gray"),
];

/// Required fields check; returns the first problem found
pub fn validate_board_form(fields: &BoardFields) -> Result<(), String> {
    if fields.title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if fields.description.trim().is_empty() {
        return Err("Description is required".to_string());
    }
    if fields.author.trim().is_empty() {
        return Err("Author is required".to_string());
    }
    Ok(())
}

#[component]
pub fn BoardForm(
    #[prop(into)] heading: String,
    initial: BoardFields,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<BoardFields>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let author = RwSignal::new(initial.author);
    let color = RwSignal::new(initial.color.unwrap_or_else(|| BOARD_COLORS[0].0.to_string()));
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = BoardFields {
            title: title.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            author: author.get_untracked().trim().to_string(),
            color: Some(color.get_untracked()),
        };
        match validate_board_form(&fields) {
            Ok(()) => {
                error.set(None);
                on_submit.run(fields);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <Modal title=heading on_close=on_cancel>
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
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Author"
                    <input
                        type="text"
                        prop:value=move || author.get()
                        on:input=move |ev| author.set(event_target_value(&ev))
                    />
                </label>
                <div class="color-picker">
                    {BOARD_COLORS.iter().map(|(swatch, name)| {
                        let for_class = swatch.to_string();
                        let for_click = for_class.clone();
                        let class = move || {
                            if color.get() == for_class {
                                format!("color-swatch {} selected", for_class)
                            } else {
                                format!("color-swatch {}", for_class)
                            }
                        };
                        view! {
                            <button
                                type="button"
                                title=*name
                                class=class
                                on:click=move |_| color.set(for_click.clone())
                            />
                        }
                    }).collect_view()}
                </div>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <div class="form-actions">
                    <button type="button" class="secondary-btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button type="submit" class="primary-btn">{submit_label}</button>
                </div>
            </form>
        </Modal>
    }
}
