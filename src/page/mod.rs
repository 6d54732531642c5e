//! Page accessor
//!
//! Everything the behaviors need from the DOM goes through [`Page`], so the
//! same handlers run against the browser document or an in-memory page in
//! tests. Lookups return `Option`: a missing element is a normal state of the
//! page, not an error.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebPage;

use crate::error::UiError;

/// CSS `display` values used by the loader
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Flex,
    None,
}

impl Display {
    pub fn as_str(&self) -> &'static str {
        match self {
            Display::Flex => "flex",
            Display::None => "none",
        }
    }
}

pub trait Page: Clone + 'static {
    /// Handle to a live element
    type Element: Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    fn set_style(
        &self,
        element: &Self::Element,
        property: &str,
        value: &str,
    ) -> Result<(), UiError>;

    /// Rendered text of the element (`innerText`)
    fn rendered_text(&self, element: &Self::Element) -> String;

    /// Full scrollable content height in pixels
    fn scroll_height(&self, element: &Self::Element) -> i32;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), UiError>;

    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<(), UiError>;

    /// Run `handler` once after every resource has loaded
    fn on_load(&self, handler: Box<dyn FnOnce()>);

    /// Run `handler` once the document structure is available
    fn on_dom_ready(&self, handler: Box<dyn FnOnce()>);

    /// Run `handler` on every `input` event of `element`
    fn on_input(&self, element: &Self::Element, handler: Box<dyn FnMut()>);
}
