//! Log Panel Component
//!
//! Recent backend log lines, for diagnosing failed saves.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::Modal;

#[component]
pub fn LogPanel(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let lines = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);

    let refresh = move || {
        spawn_local(async move {
            match commands::recent_logs().await {
                Ok(loaded) => {
                    lines.try_set(loaded);
                    error.try_set(None);
                }
                Err(e) => {
                    log::warn!("Failed to read backend logs: {}", e);
                    error.try_set(Some(e));
                }
            }
        });
    };
    refresh();

    view! {
        <Modal title="Recent logs" on_close=on_close>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <pre class="log-lines">
                {move || lines.with(|l| if l.is_empty() { "No log output yet".to_string() } else { l.join("\n") })}
            </pre>
            <div class="form-actions">
                <button class="secondary-btn" on:click=move |_| refresh()>"Refresh"</button>
            </div>
        </Modal>
    }
}
