//! User-facing notifications

/// Outcome a notification reports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Blocking `window.alert()` dialog
#[cfg(target_arch = "wasm32")]
pub struct AlertNotifier;

#[cfg(target_arch = "wasm32")]
impl Notifier for AlertNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window for {:?} notice: {}", kind, message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Alert failed: {}", crate::error::describe_js_error(&e));
        }
    }
}
