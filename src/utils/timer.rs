//! Delayed actions with cancellation
//!
//! A [`TaskHandle`] owns the pending action: dropping or cancelling it stops
//! the action from running. Cancelling after the action ran is a no-op.

pub trait Timer {
    /// Run `task` after `delay_ms` milliseconds
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
}

#[must_use = "dropping the handle cancels the task"]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// `setTimeout` through gloo-timers
#[cfg(target_arch = "wasm32")]
pub struct BrowserTimer;

#[cfg(target_arch = "wasm32")]
impl Timer for BrowserTimer {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        use gloo_timers::callback::Timeout;

        let timeout = Timeout::new(delay_ms, move || task());
        TaskHandle::new(move || {
            let _ = timeout.cancel();
        })
    }
}
