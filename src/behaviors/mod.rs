//! Page behaviors
//!
//! [`Ui`] owns the injected host capabilities and the one piece of state the
//! behaviors keep between calls: the pending copy-icon reset.

mod copy_code;
mod loader;
mod textarea;

pub use copy_code::CopyOutcome;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::UiConfig;
use crate::error::UiError;
use crate::page::Page;
use crate::utils::{Clipboard, Notifier, TaskHandle, Timer};

pub struct Ui<P: Page> {
    page: P,
    clipboard: Rc<dyn Clipboard>,
    notifier: Rc<dyn Notifier>,
    timer: Rc<dyn Timer>,
    config: RefCell<UiConfig>,
    icon_reset: RefCell<Option<TaskHandle>>,
}

impl<P: Page> Ui<P> {
    pub fn new(
        page: P,
        clipboard: Rc<dyn Clipboard>,
        notifier: Rc<dyn Notifier>,
        timer: Rc<dyn Timer>,
        config: UiConfig,
    ) -> Self {
        Self {
            page,
            clipboard,
            notifier,
            timer,
            config: RefCell::new(config),
            icon_reset: RefCell::new(None),
        }
    }

    pub fn config(&self) -> UiConfig {
        self.config.borrow().clone()
    }

    pub fn set_config(&self, config: UiConfig) {
        log::info!("UI configuration updated");
        *self.config.borrow_mut() = config;
    }

    /// Merge `overrides` into the active configuration
    ///
    /// On error the active configuration is left as it was.
    pub fn configure(&self, overrides: serde_json::Value) -> Result<(), UiError> {
        let config = self.config().merged(overrides).map_err(|e| {
            log::warn!("{}", e);
            e
        })?;
        self.set_config(config);
        Ok(())
    }

    pub fn configure_json(&self, json: &str) -> Result<(), UiError> {
        let overrides: serde_json::Value =
            serde_json::from_str(json).map_err(|e| UiError::Config(e.to_string()))?;
        self.configure(overrides)
    }

    /// Subscribe the lifecycle handlers
    ///
    /// `load` hides the loader once; DOM-ready sizes the code input and keeps
    /// it sized on every edit.
    pub fn install(ui: &Rc<Self>) {
        let weak = Rc::downgrade(ui);
        ui.page.on_load(Box::new(move || {
            if let Some(ui) = weak.upgrade() {
                log::debug!("Page loaded, hiding loader");
                ui.hide_loader();
            }
        }));

        let weak = Rc::downgrade(ui);
        ui.page.on_dom_ready(Box::new(move || {
            if let Some(ui) = weak.upgrade() {
                Self::attach_code_input(&ui);
            }
        }));

        log::info!("Page behaviors installed");
    }

    /// Set a style, logging instead of failing
    fn apply_style(&self, element: &P::Element, property: &str, value: &str) {
        if let Err(e) = self.page.set_style(element, property, value) {
            log::warn!("Failed to set {}: {}", property, e);
        }
    }
}
