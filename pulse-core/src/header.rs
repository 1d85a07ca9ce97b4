//! Header state: scroll styling, mobile menu, dropdowns.

use crate::selection::Selection;

/// Default vertical offset, in pixels, past which the header turns solid.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Dropdown key for the desktop "Services" menu.
pub const SERVICES_DROPDOWN: &str = "services";

/// Dropdown key for the "Services" group inside the mobile menu.
pub const MOBILE_SERVICES_DROPDOWN: &str = "mobile-services";

/// Everything the header reacts to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderState {
    menu_open: bool,
    scrolled: bool,
    dropdown: Selection<&'static str>,
}

impl HeaderState {
    /// Record the window's vertical scroll offset.
    ///
    /// Returns whether the scrolled flag flipped, so callers can skip
    /// notifying subscribers on every scroll event.
    pub fn on_scroll(&mut self, offset: f64, threshold: f64) -> bool {
        let scrolled = offset > threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Past the scroll threshold.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Open or close the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu (after a menu action).
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Whether the mobile menu is showing.
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Open `name`, or close it if it is already open.
    pub fn toggle_dropdown(&mut self, name: &'static str) {
        self.dropdown.toggle(name);
    }

    /// Whether dropdown `name` is open.
    pub fn is_dropdown_open(&self, name: &str) -> bool {
        self.dropdown.get() == Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        let mut header = HeaderState::default();
        assert!(!header.on_scroll(50.0, SCROLL_THRESHOLD_PX));
        assert!(!header.is_scrolled());

        assert!(header.on_scroll(50.5, SCROLL_THRESHOLD_PX));
        assert!(header.is_scrolled());
        assert!(!header.on_scroll(400.0, SCROLL_THRESHOLD_PX));

        assert!(header.on_scroll(0.0, SCROLL_THRESHOLD_PX));
        assert!(!header.is_scrolled());
    }

    #[test]
    fn dropdowns_are_exclusive() {
        let mut header = HeaderState::default();
        header.toggle_dropdown(SERVICES_DROPDOWN);
        assert!(header.is_dropdown_open(SERVICES_DROPDOWN));

        header.toggle_dropdown(MOBILE_SERVICES_DROPDOWN);
        assert!(!header.is_dropdown_open(SERVICES_DROPDOWN));
        assert!(header.is_dropdown_open(MOBILE_SERVICES_DROPDOWN));

        header.toggle_dropdown(MOBILE_SERVICES_DROPDOWN);
        assert!(!header.is_dropdown_open(MOBILE_SERVICES_DROPDOWN));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut header = HeaderState::default();
        header.toggle_menu();
        assert!(header.is_menu_open());
        header.close_menu();
        assert!(!header.is_menu_open());
        header.close_menu();
        assert!(!header.is_menu_open());
    }
}
