//! Ephemeral navigation bar state.
//!
//! [`NavState`] holds the three pieces of state owned by one mounted
//! navigation bar: whether the page is scrolled, which item the pointer is
//! over, and whether the mobile menu is open. The current route is owned by
//! the host router and is passed in at render time instead.
//!
//! Every transition returns whether the state actually changed so callers can
//! skip re-rendering when it did not.

use crate::nav::NavItems;

/// Scroll offset, in pixels, past which the bar counts as scrolled.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    scrolled: bool,
    hovered: Option<String>,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Record a scroll offset. Returns `true` only when the offset crossed
    /// `threshold` in either direction.
    pub fn observe_scroll(&mut self, offset: f64, threshold: f64) -> bool {
        let scrolled = offset > threshold;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }

    /// Pointer entered the item with `target`. Unknown targets are ignored so
    /// the hovered target always names an item of `items`.
    pub fn pointer_enter(&mut self, items: &NavItems, target: &str) -> bool {
        if !items.contains(target) || self.hovered.as_deref() == Some(target) {
            return false;
        }
        self.hovered = Some(target.to_string());
        true
    }

    /// Pointer left the item with `target`. Clears the hover only if that item
    /// is still the hovered one; a later enter on a neighbour wins.
    pub fn pointer_leave(&mut self, target: &str) -> bool {
        if self.hovered.as_deref() != Some(target) {
            return false;
        }
        self.hovered = None;
        true
    }

    /// Flip the mobile menu. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// A nav item was activated. Closes the mobile menu; returns whether it
    /// was open.
    pub fn select(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavItem;

    fn items() -> NavItems {
        NavItems::new(vec![
            NavItem::internal("Home", "/"),
            NavItem::internal("About", "/about"),
            NavItem::external("GitHub", "https://github.com/justrach/muonry"),
        ])
        .expect("valid items")
    }

    #[test]
    fn test_initial_state() {
        let state = NavState::new();
        assert!(!state.scrolled());
        assert!(!state.menu_open());
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn test_scroll_threshold_crossing() {
        let mut state = NavState::new();
        assert!(state.observe_scroll(11.0, DEFAULT_SCROLL_THRESHOLD));
        assert!(state.scrolled());
        assert!(state.observe_scroll(9.0, DEFAULT_SCROLL_THRESHOLD));
        assert!(!state.scrolled());
    }

    #[test]
    fn test_scroll_exactly_at_threshold_is_not_scrolled() {
        let mut state = NavState::new();
        assert!(!state.observe_scroll(10.0, DEFAULT_SCROLL_THRESHOLD));
        assert!(!state.scrolled());
    }

    #[test]
    fn test_repeated_scroll_offsets_do_not_change_state() {
        let mut state = NavState::new();
        let offsets = [11.0, 11.0, 40.0, 300.0, 11.0, 9.0, 9.0, 0.0, 5.0, 12.0];
        let changes = offsets
            .iter()
            .filter(|offset| state.observe_scroll(**offset, DEFAULT_SCROLL_THRESHOLD))
            .count();
        // 11 (on), 9 (off), 12 (on)
        assert_eq!(changes, 3);
        assert!(state.scrolled());
    }

    #[test]
    fn test_toggle_twice_restores_menu() {
        let mut state = NavState::new();
        let before = state.menu_open();
        state.toggle_menu();
        assert_ne!(state.menu_open(), before);
        state.toggle_menu();
        assert_eq!(state.menu_open(), before);
    }

    #[test]
    fn test_select_closes_open_menu() {
        let mut state = NavState::new();
        assert!(state.toggle_menu());
        assert!(state.select());
        assert!(!state.menu_open());
        assert!(!state.select());
        assert!(!state.menu_open());
    }

    #[test]
    fn test_hover_then_leave_clears() {
        let items = items();
        let mut state = NavState::new();
        state.pointer_enter(&items, "/");
        state.pointer_enter(&items, "/about");
        assert!(state.pointer_leave("/about"));
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn test_last_enter_wins_with_out_of_order_leave() {
        let items = items();
        let mut state = NavState::new();
        state.pointer_enter(&items, "/");
        state.pointer_enter(&items, "/about");
        assert!(!state.pointer_leave("/"));
        assert_eq!(state.hovered(), Some("/about"));
    }

    #[test]
    fn test_hover_ignores_unknown_targets() {
        let items = items();
        let mut state = NavState::new();
        assert!(!state.pointer_enter(&items, "/pricing"));
        assert_eq!(state.hovered(), None);
        assert!(!state.pointer_enter(&items, "/about/"));
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn test_re_entering_same_item_is_not_a_change() {
        let items = items();
        let mut state = NavState::new();
        assert!(state.pointer_enter(&items, "/about"));
        assert!(!state.pointer_enter(&items, "/about"));
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = NavState::new();
        let second = NavState::new();
        first.toggle_menu();
        first.observe_scroll(50.0, DEFAULT_SCROLL_THRESHOLD);
        assert!(!second.menu_open());
        assert!(!second.scrolled());
    }
}
