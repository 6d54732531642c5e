// Host capabilities
// Clipboard, notifications and timers injected into the behaviors

pub mod clipboard;
pub mod notify;
pub mod timer;

pub use clipboard::Clipboard;
pub use notify::{NoticeKind, Notifier};
pub use timer::{TaskHandle, Timer};

#[cfg(target_arch = "wasm32")]
pub use clipboard::WebClipboard;
#[cfg(target_arch = "wasm32")]
pub use notify::AlertNotifier;
#[cfg(target_arch = "wasm32")]
pub use timer::BrowserTimer;
