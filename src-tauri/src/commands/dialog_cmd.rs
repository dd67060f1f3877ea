use tauri::{command, AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

/// Blocking error alert for failed mutations
#[command]
pub async fn show_alert<R: Runtime>(app: AppHandle<R>, title: String, message: String) -> Result<(), String> {
    log::error!("{}: {}", title, message);
    app.dialog()
        .message(message)
        .title(title)
        .kind(MessageDialogKind::Error)
        .blocking_show();
    Ok(())
}
