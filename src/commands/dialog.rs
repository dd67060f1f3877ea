use serde::Serialize;

use super::call_unit;

#[derive(Serialize)]
struct AlertArgs<'a> {
    title: &'a str,
    message: &'a str,
}

/// Native blocking error dialog
pub async fn show_alert(title: &str, message: &str) -> Result<(), String> {
    call_unit("show_alert", &AlertArgs { title, message }).await
}
