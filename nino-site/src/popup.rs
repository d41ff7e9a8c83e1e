//! QR popup state
//!
//! Open/close state for the menu-QR popup, plus the rendering of the
//! placeholder shown inside it. Like [`crate::nav::NavState`], mutators
//! return `true` when the host needs to re-mirror.

use crate::config::SiteConfig;
use nino_qr::{QrPlaceholder, QrRenderer, QrResult};

/// Popup visibility state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QrPopup {
    open: bool,
}

impl QrPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is locked while the popup covers it.
    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }

    /// Escape closes an open popup.
    pub fn on_escape(&mut self) -> bool {
        self.close()
    }

    /// Clicks on the backdrop close; clicks inside the card do not.
    pub fn on_click(&mut self, on_backdrop: bool) -> bool {
        if on_backdrop { self.close() } else { false }
    }
}

/// Render the menu placeholder shown inside the popup.
pub fn menu_placeholder(config: &SiteConfig) -> QrResult<QrPlaceholder> {
    QrRenderer::new().render(&config.menu_url())
}
