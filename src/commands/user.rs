use wasm_bindgen::prelude::*;

use super::{invoke, js_error};
use crate::models::User;

pub async fn current_user() -> Result<User, String> {
    let result = invoke("current_user", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
