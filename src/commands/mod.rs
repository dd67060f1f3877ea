//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod board;
mod dialog;
mod diagnostics;
mod task;
mod user;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Rejected commands carry the backend's error string
fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Invoke `cmd` with serialized `args` and deserialize its result
async fn call<A: Serialize, T: DeserializeOwned>(cmd: &str, args: &A) -> Result<T, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke(cmd, js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Invoke a command whose result is ignored
async fn call_unit<A: Serialize>(cmd: &str, args: &A) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    invoke(cmd, js_args).await.map_err(js_error)?;
    Ok(())
}

// Re-export all public items
pub use board::*;
pub use dialog::*;
pub use diagnostics::*;
pub use task::*;
pub use user::*;
