//! Error types for host capability failures
//!
//! DOM lookups are modelled as `Option` and never produce an error. These
//! variants cover the host calls that can actually fail.

use std::fmt;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// `window` is not available (worker or non-browser context)
    NoWindow,
    /// The window has no document attached
    NoDocument,
    /// Clipboard write was rejected or the API is unavailable
    Clipboard(String),
    /// A style or class mutation threw
    Style(String),
    /// Configuration could not be parsed
    Config(String),
}

impl UiError {
    /// Platform-reported reason, without the category prefix
    pub fn reason(&self) -> String {
        match self {
            UiError::Clipboard(reason) | UiError::Style(reason) | UiError::Config(reason) => {
                reason.clone()
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::NoWindow => write!(f, "No window"),
            UiError::NoDocument => write!(f, "No document"),
            UiError::Clipboard(reason) => write!(f, "Clipboard write failed: {}", reason),
            UiError::Style(reason) => write!(f, "Style update failed: {}", reason),
            UiError::Config(reason) => write!(f, "Invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for UiError {}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Render a thrown JS value the way the console would (`Name: message`)
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        let name = String::from(err.name());
        let message = String::from(err.message());
        if message.is_empty() {
            return name;
        }
        return format!("{}: {}", name, message);
    }

    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
