//! Bearer token persisted in the browser's `localStorage`.

use dioxus::prelude::*;

/// Read the stored token. Blank and missing values both yield `None`.
pub async fn read_token(key: &str) -> Option<String> {
    let script = format!("return window.localStorage.getItem({});", js_string(key));
    match document::eval(&script).join::<Option<String>>().await {
        Ok(token) => token.filter(|t| !t.trim().is_empty()),
        Err(e) => {
            tracing::warn!(error = ?e, key, "could not read session token");
            None
        }
    }
}

/// Remove the stored token (log out).
pub fn clear_token(key: &str) {
    document::eval(&format!(
        "window.localStorage.removeItem({});",
        js_string(key)
    ));
}

/// Quote a Rust string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
