//! Navigation state
//!
//! Mobile menu toggle and the navbar's scrolled flag, owned by the
//! component instead of page-wide globals. Mutators return `true` when
//! the state changed so the host knows to re-mirror classes and the
//! body scroll lock.

/// Scroll depth past which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Mobile menu and navbar scroll state.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Page scrolling is locked while the mobile menu covers it.
    pub fn body_scroll_locked(&self) -> bool {
        self.menu_open
    }

    /// Toggle control pressed.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        true
    }

    pub fn close_menu(&mut self) -> bool {
        let changed = self.menu_open;
        self.menu_open = false;
        changed
    }

    /// A menu link was followed: the menu closes.
    pub fn on_link_click(&mut self) -> bool {
        self.close_menu()
    }

    /// Document-level click: closes the menu unless the click landed
    /// inside the menu or on the toggle control.
    pub fn on_document_click(&mut self, inside_menu: bool, on_toggle: bool) -> bool {
        if inside_menu || on_toggle {
            return false;
        }
        self.close_menu()
    }

    /// Scroll position update; returns `true` when the scrolled flag flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > NAVBAR_SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        let mut nav = NavState::new();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        assert!(nav.menu_open());
        assert!(nav.body_scroll_locked());
        nav.toggle_menu();
        assert!(!nav.menu_open());
        assert!(!nav.body_scroll_locked());
    }

    #[test]
    fn link_click_closes_the_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.on_link_click());
        assert!(!nav.menu_open());
        // closing an already-closed menu reports no change
        assert!(!nav.on_link_click());
    }

    #[test]
    fn outside_click_closes_but_inside_click_does_not() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(!nav.on_document_click(true, false));
        assert!(nav.menu_open());
        assert!(!nav.on_document_click(false, true));
        assert!(nav.menu_open());
        assert!(nav.on_document_click(false, false));
        assert!(!nav.menu_open());
    }

    #[test]
    fn scrolled_flag_flips_strictly_past_the_threshold() {
        let mut nav = NavState::new();
        assert!(!nav.on_scroll(50.0)); // exactly at threshold: not scrolled
        assert!(!nav.scrolled());
        assert!(nav.on_scroll(50.5));
        assert!(nav.scrolled());
        assert!(!nav.on_scroll(120.0)); // still scrolled, no change
        assert!(nav.on_scroll(0.0));
        assert!(!nav.scrolled());
    }
}
