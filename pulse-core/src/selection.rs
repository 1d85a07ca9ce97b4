//! Exclusive single selection.
//!
//! Backs the FAQ accordion and header dropdowns (click again to collapse),
//! the service tabs and the case-study / team overlays (new click replaces).

/// At most one selected key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K> {
    selected: Option<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<K: PartialEq> Selection<K> {
    /// Nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `key` selected.
    pub fn with(key: K) -> Self {
        Self {
            selected: Some(key),
        }
    }

    /// Select `key`, or clear the selection if `key` is already selected.
    ///
    /// Returns whether `key` is selected afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.is_selected(&key) {
            self.selected = None;
            false
        } else {
            self.selected = Some(key);
            true
        }
    }

    /// Select `key`, replacing any previous selection.
    pub fn select(&mut self, key: K) {
        self.selected = Some(key);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Whether `key` is the selected one.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.as_ref() == Some(key)
    }

    /// The selected key, if any.
    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }
}

impl<K: Copy> Selection<K> {
    /// Copy of the selected key.
    pub fn get(&self) -> Option<K> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_same_entry_twice_collapses_it() {
        let mut faq = Selection::new();
        assert!(faq.toggle(2));
        assert!(!faq.toggle(2));
        assert_eq!(faq.get(), None);
    }

    #[test]
    fn toggling_other_entry_moves_selection() {
        let mut faq = Selection::new();
        faq.toggle(0);
        assert!(faq.toggle(3));
        assert!(!faq.is_selected(&0));
        assert!(faq.is_selected(&3));
    }

    #[test]
    fn select_replaces_and_never_clears() {
        let mut tabs = Selection::with("seo");
        tabs.select("ppc");
        assert_eq!(tabs.selected(), Some(&"ppc"));
        tabs.select("ppc");
        assert_eq!(tabs.get(), Some("ppc"));
    }

    #[test]
    fn clear_closes_overlay() {
        let mut overlay = Selection::with(1_u32);
        overlay.clear();
        assert_eq!(overlay.selected(), None);
    }
}
