use crate::config::UiConfig;
use crate::error::UiError;
use crate::page::Page;
use crate::utils::NoticeKind;

use super::Ui;

/// Result of a copy request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// No revised code on the page
    Skipped,
    Copied,
    /// Clipboard rejected the write; the user was told to copy manually
    Failed(UiError),
}

impl<P: Page> Ui<P> {
    /// Copy the revised code to the clipboard and tell the user how it went
    ///
    /// Never fails: a rejected write becomes a failure notification.
    pub async fn copy_revised_code(&self) -> CopyOutcome {
        // Owned copy, nothing borrowed across the await
        let config = self.config();

        let Some(code) = self.revised_code_element(&config) else {
            log::debug!("No revised code on page, nothing to copy");
            return CopyOutcome::Skipped;
        };

        self.animate_copy_icon(&config);

        let text = self.page.rendered_text(&code).trim().to_string();
        match self.clipboard.write_text(&text).await {
            Ok(()) => {
                log::info!("Copied {} characters of revised code", text.chars().count());
                self.notifier
                    .notify(NoticeKind::Success, &config.copy_success_message);
                CopyOutcome::Copied
            }
            Err(e) => {
                log::warn!("{}", e);
                self.notifier
                    .notify(NoticeKind::Failure, &config.failure_message(&e.reason()));
                CopyOutcome::Failed(e)
            }
        }
    }

    fn revised_code_element(&self, config: &UiConfig) -> Option<P::Element> {
        self.page
            .element_by_id(&config.revised_code_id)
            .or_else(|| self.page.query_selector(&config.revised_fallback_selector))
    }

    /// Flag the copy icon and schedule the flag's removal
    ///
    /// A copy inside the delay cancels the pending removal and starts a new
    /// one, so the animation always lasts the full delay after the last click.
    fn animate_copy_icon(&self, config: &UiConfig) {
        let Some(icon) = self.page.query_selector(&config.copy_icon_selector) else {
            return;
        };
        if let Err(e) = self.page.add_class(&icon, &config.copy_animation_class) {
            log::warn!("Failed to animate copy icon: {}", e);
            return;
        }

        let page = self.page.clone();
        let selector = config.copy_icon_selector.clone();
        let class = config.copy_animation_class.clone();
        let reset = self.timer.schedule(
            config.copy_animation_ms,
            Box::new(move || {
                // Re-resolve: the icon may be gone by now
                let Some(icon) = page.query_selector(&selector) else {
                    log::debug!("Copy icon removed before reset");
                    return;
                };
                if let Err(e) = page.remove_class(&icon, &class) {
                    log::warn!("Failed to reset copy icon: {}", e);
                }
            }),
        );

        // Dropping the previous handle cancels it
        *self.icon_reset.borrow_mut() = Some(reset);
    }
}
