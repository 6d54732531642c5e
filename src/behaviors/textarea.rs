use std::rc::Rc;

use crate::page::Page;

use super::Ui;

impl<P: Page> Ui<P> {
    /// Fit `element`'s height to its content
    ///
    /// The height is reset to `auto` first so `scrollHeight` can shrink when
    /// lines are removed.
    pub fn auto_resize_textarea(&self, element: &P::Element) {
        self.apply_style(element, "height", "auto");
        let height = self.page.scroll_height(element);
        self.apply_style(element, "height", &format!("{}px", height));
    }

    /// [`Self::auto_resize_textarea`] for a lookup that may have failed
    pub fn auto_resize_if_present(&self, element: Option<&P::Element>) {
        match element {
            Some(element) => self.auto_resize_textarea(element),
            None => log::debug!("No element to resize"),
        }
    }

    /// Size the code input once and keep it sized on every edit
    ///
    /// Returns false when the page has no code input; nothing is subscribed
    /// in that case.
    pub(crate) fn attach_code_input(ui: &Rc<Self>) -> bool {
        let input_id = ui.config.borrow().code_input_id.clone();
        let Some(input) = ui.page.element_by_id(&input_id) else {
            log::debug!("No #{} on page, auto-resize not attached", input_id);
            return false;
        };

        ui.auto_resize_textarea(&input);

        let weak = Rc::downgrade(ui);
        let target = input.clone();
        ui.page.on_input(
            &input,
            Box::new(move || {
                if let Some(ui) = weak.upgrade() {
                    ui.auto_resize_textarea(&target);
                }
            }),
        );

        log::debug!("Auto-resize attached to #{}", input_id);
        true
    }
}
