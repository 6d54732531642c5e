//! JavaScript entry points
//!
//! The module starts itself on instantiation and exposes the operations page
//! markup calls from its event attributes.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::behaviors::Ui;
use crate::config::UiConfig;
use crate::error::UiError;
use crate::page::WebPage;
use crate::utils::{AlertNotifier, BrowserTimer, WebClipboard};

thread_local! {
    /// Behaviors for the current page, set once by `start`
    static UI: RefCell<Option<Rc<Ui<WebPage>>>> = RefCell::new(None);
}

fn current_ui() -> Option<Rc<Ui<WebPage>>> {
    let ui = UI.with(|slot| slot.borrow().clone());
    if ui.is_none() {
        log::warn!("Page behaviors not started");
    }
    ui
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    log::info!("Starting review page behaviors");

    let page = WebPage::from_window()?;
    let ui = Rc::new(Ui::new(
        page,
        Rc::new(WebClipboard),
        Rc::new(AlertNotifier),
        Rc::new(BrowserTimer),
        UiConfig::default(),
    ));

    // Stored before installing: handlers may run immediately on a loaded page
    UI.with(|slot| *slot.borrow_mut() = Some(ui.clone()));
    Ui::install(&ui);

    Ok(())
}

/// Override element ids, selectors or messages
///
/// Only the keys present in `options` change. Invalid options are rejected
/// and the current configuration stays active.
#[wasm_bindgen]
pub fn configure(options: JsValue) -> Result<(), JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(());
    }
    let overrides: serde_json::Value = serde_wasm_bindgen::from_value(options)
        .map_err(|e| UiError::Config(e.to_string()))?;
    if let Some(ui) = current_ui() {
        ui.configure(overrides)?;
    }
    Ok(())
}

#[wasm_bindgen(js_name = showLoader)]
pub fn show_loader() {
    if let Some(ui) = current_ui() {
        ui.show_loader();
    }
}

#[wasm_bindgen(js_name = hideLoader)]
pub fn hide_loader() {
    if let Some(ui) = current_ui() {
        ui.hide_loader();
    }
}

#[wasm_bindgen(js_name = copyRevisedCode)]
pub async fn copy_revised_code() {
    let Some(ui) = current_ui() else {
        return;
    };
    let outcome = ui.copy_revised_code().await;
    log::debug!("Copy finished: {:?}", outcome);
}

#[wasm_bindgen(js_name = autoResizeTextarea)]
pub fn auto_resize_textarea(element: Option<web_sys::HtmlElement>) {
    // Markup may pass the result of a failed lookup
    if let Some(ui) = current_ui() {
        ui.auto_resize_if_present(element.as_ref());
    }
}
