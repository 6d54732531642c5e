//! Page wiring configuration
//!
//! Defaults match the markup rendered by the review page. Hosts with
//! different markup can override any field through `configure()`. Each call
//! only replaces the keys it names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::UiError;

/// Delay before the copy icon loses its animation class
pub const COPY_ANIMATION_MS: u32 = 300;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Busy overlay toggled by show/hide
    pub loader_id: String,
    /// Element holding the revised code to copy
    pub revised_code_id: String,
    /// Used when `revised_code_id` is not on the page
    pub revised_fallback_selector: String,
    /// Textarea that grows with its content
    pub code_input_id: String,
    pub copy_icon_selector: String,
    pub copy_animation_class: String,
    pub copy_animation_ms: u32,
    pub copy_success_message: String,
    pub copy_failure_prefix: String,
    pub copy_failure_hint: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            loader_id: "loader".to_string(),
            revised_code_id: "revisedCode".to_string(),
            revised_fallback_selector: "#revised pre".to_string(),
            code_input_id: "code".to_string(),
            copy_icon_selector: ".copy-icon-btn".to_string(),
            copy_animation_class: "animate".to_string(),
            copy_animation_ms: COPY_ANIMATION_MS,
            copy_success_message: "✅ Revised code copied to clipboard!".to_string(),
            copy_failure_prefix: "❌ Failed to copy code:".to_string(),
            copy_failure_hint: "Please copy it manually.".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse from a JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, UiError> {
        serde_json::from_str(json).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Apply the keys of `overrides` on top of `self`
    ///
    /// Keys not named in `overrides` keep their current value. `self` is
    /// untouched when the result is an error.
    pub fn merged(&self, overrides: Value) -> Result<Self, UiError> {
        let Value::Object(overrides) = overrides else {
            return Err(UiError::Config("expected an object".to_string()));
        };

        let mut current =
            serde_json::to_value(self).map_err(|e| UiError::Config(e.to_string()))?;
        if let Value::Object(fields) = &mut current {
            fields.extend(overrides);
        }
        serde_json::from_value(current).map_err(|e| UiError::Config(e.to_string()))
    }

    pub fn merged_json(&self, json: &str) -> Result<Self, UiError> {
        let overrides: Value =
            serde_json::from_str(json).map_err(|e| UiError::Config(e.to_string()))?;
        self.merged(overrides)
    }

    /// Message shown when the clipboard rejects the write
    pub fn failure_message(&self, reason: &str) -> String {
        let reason = reason.trim().trim_end_matches('.').trim_end();
        if reason.is_empty() {
            return format!("{} {}", self.copy_failure_prefix, self.copy_failure_hint);
        }
        format!(
            "{} {}. {}",
            self.copy_failure_prefix, reason, self.copy_failure_hint
        )
    }
}
