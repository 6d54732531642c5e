use crate::page::{Display, Page};

use super::Ui;

impl<P: Page> Ui<P> {
    /// Show the busy overlay
    pub fn show_loader(&self) {
        self.set_loader_display(Display::Flex);
    }

    /// Hide the busy overlay
    pub fn hide_loader(&self) {
        self.set_loader_display(Display::None);
    }

    fn set_loader_display(&self, display: Display) {
        let loader_id = self.config.borrow().loader_id.clone();
        match self.page.element_by_id(&loader_id) {
            Some(loader) => self.apply_style(&loader, "display", display.as_str()),
            None => log::debug!("No #{} on page, skipping {:?}", loader_id, display),
        }
    }
}
