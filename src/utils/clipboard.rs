//! Clipboard utilities for copying text
//!
//! Provides the [`Clipboard`] capability and its browser implementation on
//! top of the Web Clipboard API.

use async_trait::async_trait;

use crate::error::UiError;

#[async_trait(?Send)]
pub trait Clipboard {
    /// Write `text` to the system clipboard
    async fn write_text(&self, text: &str) -> Result<(), UiError>;
}

/// Clipboard API of the current window
#[cfg(target_arch = "wasm32")]
pub struct WebClipboard;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Clipboard for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), UiError> {
        copy_to_clipboard(text).await
    }
}

/// Copy text to the system clipboard
///
/// Uses the Web Clipboard API to copy the provided text.
///
/// # Arguments
/// * `text` - The text to copy to the clipboard
///
/// # Returns
/// * `Ok(())` if the text was successfully copied
/// * `Err(UiError::Clipboard)` if the browser rejected the write or the API
///   is missing (insecure context)
#[cfg(target_arch = "wasm32")]
pub async fn copy_to_clipboard(text: &str) -> Result<(), UiError> {
    use crate::error::describe_js_error;
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let navigator = window.navigator();

    // `navigator.clipboard` is undefined outside secure contexts
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or_else(|| UiError::Clipboard("Clipboard API unavailable".to_string()))?
        .unchecked_into::<web_sys::Clipboard>();

    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| UiError::Clipboard(describe_js_error(&e)))
}
