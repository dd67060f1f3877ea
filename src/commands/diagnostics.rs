use wasm_bindgen::prelude::*;

use super::{invoke, js_error};

/// Tail of the backend log file
pub async fn recent_logs() -> Result<Vec<String>, String> {
    let result = invoke("recent_logs", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
