//! Page behaviors for the code review page
//!
//! Loader show/hide, copying the revised code to the clipboard and
//! auto-resizing the code input. Host capabilities (DOM, clipboard, alerts,
//! timers) are injected so the behaviors run the same against the browser
//! and in unit tests.

pub mod behaviors;
pub mod config;
pub mod error;
pub mod page;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod bindings;

#[cfg(test)]
mod testing;

pub use behaviors::{CopyOutcome, Ui};
pub use config::UiConfig;
pub use error::UiError;
pub use page::{Display, Page};
