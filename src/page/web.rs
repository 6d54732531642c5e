//! [`Page`] backed by the browser document

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, HtmlElement};

use crate::error::{describe_js_error, UiError};
use crate::page::Page;

#[derive(Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn from_window() -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let document = window.document().ok_or(UiError::NoDocument)?;
        Ok(Self { document })
    }

    fn add_listener(
        target: &web_sys::EventTarget,
        event: &str,
        callback: &js_sys::Function,
        once: bool,
    ) {
        let options = AddEventListenerOptions::new();
        options.set_once(once);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event, callback, &options,
        ) {
            log::warn!("Failed to subscribe to {}: {}", event, describe_js_error(&e));
        }
    }
}

impl Page for WebPage {
    type Element = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }

    fn query_selector(&self, selector: &str) -> Option<HtmlElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.and_then(|e| e.dyn_into::<HtmlElement>().ok()),
            Err(e) => {
                log::warn!("Bad selector {}: {}", selector, describe_js_error(&e));
                None
            }
        }
    }

    fn set_style(&self, element: &HtmlElement, property: &str, value: &str) -> Result<(), UiError> {
        element
            .style()
            .set_property(property, value)
            .map_err(|e| UiError::Style(describe_js_error(&e)))
    }

    fn rendered_text(&self, element: &HtmlElement) -> String {
        element.inner_text()
    }

    fn scroll_height(&self, element: &HtmlElement) -> i32 {
        element.scroll_height()
    }

    fn add_class(&self, element: &HtmlElement, class: &str) -> Result<(), UiError> {
        element
            .class_list()
            .add_1(class)
            .map_err(|e| UiError::Style(describe_js_error(&e)))
    }

    fn remove_class(&self, element: &HtmlElement, class: &str) -> Result<(), UiError> {
        element
            .class_list()
            .remove_1(class)
            .map_err(|e| UiError::Style(describe_js_error(&e)))
    }

    fn on_load(&self, handler: Box<dyn FnOnce()>) {
        // The module may be instantiated after `load` already fired
        if self.document.ready_state() == "complete" {
            handler();
            return;
        }

        let Some(window) = web_sys::window() else {
            log::warn!("No window, load handler not attached");
            return;
        };
        let callback = Closure::once_into_js(move || handler());
        Self::add_listener(&window, "load", callback.unchecked_ref(), true);
    }

    fn on_dom_ready(&self, handler: Box<dyn FnOnce()>) {
        if self.document.ready_state() != "loading" {
            handler();
            return;
        }

        let callback = Closure::once_into_js(move || handler());
        Self::add_listener(&self.document, "DOMContentLoaded", callback.unchecked_ref(), true);
    }

    fn on_input(&self, element: &HtmlElement, mut handler: Box<dyn FnMut()>) {
        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
            handler();
        }) as Box<dyn FnMut(web_sys::Event)>);

        Self::add_listener(element, "input", callback.as_ref().unchecked_ref(), false);

        // Lives as long as the page
        callback.forget();
    }
}
