//! Delete Confirm Button Component
//!
//! Two-step delete used by task cards and the board header.

use leptos::prelude::*;

/// Asks "Delete?" before running `on_confirm`
///
/// Mousedown is swallowed so pressing the button never starts a card drag.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "×".to_string())] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm" on:mousedown=|ev| ev.stop_propagation()>
                    "Delete?"
                    <button
                        class="confirm-btn"
                        title="Confirm"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                            on_confirm.run(());
                        }
                    >"✓"</button>
                    <button
                        class="cancel-btn"
                        title="Keep"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                        }
                    >"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    on:mousedown=|ev| ev.stop_propagation()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    {label.clone()}
                </button>
            }
            .into_any()
        }
    }
}
