//! Presentation derived from navigation state.
//!
//! The navigation bar renders nothing that is not computed here: CSS classes,
//! link attributes and the accessibility attributes assistive technology
//! relies on. Keeping this free of any UI framework lets the rules be checked
//! without a browser.

use crate::nav::NavItem;

/// `id` of the mobile menu panel, referenced by the toggle's `aria-controls`.
pub const MOBILE_MENU_ID: &str = "muonry-mobile-menu";

/// Viewport width, in pixels, at and above which the desktop list is shown.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

pub const EXTERNAL_LINK_TARGET: &str = "_blank";
pub const EXTERNAL_LINK_REL: &str = "noopener noreferrer";
pub const OFF_SITE_GLYPH: &str = "↗";
pub const OFF_SITE_HINT: &str = "(opens in a new tab)";

/// Styling rule applied to one link. Active beats hover beats idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Active,
    Hovered,
    Idle,
}

impl LinkState {
    pub fn resolve(active: bool, hovered: bool) -> Self {
        if active {
            Self::Active
        } else if hovered {
            Self::Hovered
        } else {
            Self::Idle
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Active => "muonry-nav-link muonry-nav-link--active",
            Self::Hovered => "muonry-nav-link muonry-nav-link--hover",
            Self::Idle => "muonry-nav-link",
        }
    }
}

/// Attributes of one rendered nav link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAttrs {
    pub href: String,
    pub class: &'static str,
    pub aria_current: Option<&'static str>,
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
    pub off_site: bool,
}

/// Attributes for `item`, given whether it is the active item and which
/// target (if any) the pointer is over.
pub fn link_attrs(item: &NavItem, active: bool, hovered: Option<&str>) -> LinkAttrs {
    let is_hovered = hovered == Some(item.target.as_str());
    let state = LinkState::resolve(active, is_hovered);

    LinkAttrs {
        href: item.target.clone(),
        class: state.class(),
        aria_current: active.then_some("page"),
        target: item.external.then_some(EXTERNAL_LINK_TARGET),
        rel: item.external.then_some(EXTERNAL_LINK_REL),
        off_site: item.external,
    }
}

/// Glyph shown on the menu toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger, shown while the menu is closed.
    Open,
    /// Cross, shown while the menu is open.
    Close,
}

impl MenuIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Open => "☰",
            Self::Close => "✕",
        }
    }
}

/// Attributes of the mobile menu toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuButtonAttrs {
    pub aria_expanded: &'static str,
    pub aria_controls: &'static str,
    /// Describes what the next activation does, not the current state.
    pub aria_label: &'static str,
    pub icon: MenuIcon,
}

pub fn menu_button_attrs(menu_open: bool) -> MenuButtonAttrs {
    if menu_open {
        MenuButtonAttrs {
            aria_expanded: "true",
            aria_controls: MOBILE_MENU_ID,
            aria_label: "Close navigation menu",
            icon: MenuIcon::Close,
        }
    } else {
        MenuButtonAttrs {
            aria_expanded: "false",
            aria_controls: MOBILE_MENU_ID,
            aria_label: "Open navigation menu",
            icon: MenuIcon::Open,
        }
    }
}

/// Classes of the header element. `compact` selects the layout used below
/// the breakpoint: the desktop list is hidden and the toggle is shown.
pub fn header_class(scrolled: bool, compact: bool) -> &'static str {
    match (scrolled, compact) {
        (false, false) => "muonry-nav",
        (true, false) => "muonry-nav muonry-nav--scrolled",
        (false, true) => "muonry-nav muonry-nav--compact",
        (true, true) => "muonry-nav muonry-nav--scrolled muonry-nav--compact",
    }
}

/// Whether a viewport of `viewport_width` pixels uses the mobile layout.
pub fn is_compact(viewport_width: u32, breakpoint: u32) -> bool {
    viewport_width < breakpoint
}

/// Whether the mobile panel is rendered for this viewport. Above the
/// breakpoint it never is, but `menu_open` is left as it was.
pub fn mobile_panel_rendered(menu_open: bool, viewport_width: u32, breakpoint: u32) -> bool {
    menu_open && is_compact(viewport_width, breakpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{nav::NavItems, state::NavState};

    fn items() -> NavItems {
        NavItems::new(vec![
            NavItem::internal("Home", "/"),
            NavItem::internal("About", "/about"),
            NavItem::external("GitHub", "https://github.com/justrach/muonry"),
            NavItem::external("Docs", "https://github.com/justrach/muonry#readme"),
        ])
        .expect("valid items")
    }

    #[test]
    fn test_active_overrides_hover() {
        let item = NavItem::internal("About", "/about");
        let attrs = link_attrs(&item, true, Some("/about"));
        assert_eq!(attrs.class, LinkState::Active.class());
        assert_eq!(attrs.aria_current, Some("page"));
    }

    #[test]
    fn test_hover_applies_to_inactive_item_only() {
        let item = NavItem::internal("About", "/about");
        let attrs = link_attrs(&item, false, Some("/about"));
        assert_eq!(attrs.class, LinkState::Hovered.class());
        assert_eq!(attrs.aria_current, None);

        let attrs = link_attrs(&item, false, Some("/"));
        assert_eq!(attrs.class, LinkState::Idle.class());
    }

    #[test]
    fn test_external_links_carry_off_site_attributes() {
        for item in items().iter().filter(|item| item.external) {
            let attrs = link_attrs(item, false, None);
            assert!(attrs.off_site);
            assert_eq!(attrs.target, Some("_blank"));
            assert_eq!(attrs.rel, Some("noopener noreferrer"));
        }
    }

    #[test]
    fn test_internal_links_never_carry_off_site_attributes() {
        for item in items().iter().filter(|item| !item.external) {
            for active in [true, false] {
                let attrs = link_attrs(item, active, Some(item.target.as_str()));
                assert!(!attrs.off_site);
                assert_eq!(attrs.target, None);
                assert_eq!(attrs.rel, None);
            }
        }
    }

    #[test]
    fn test_menu_button_describes_next_action() {
        let closed = menu_button_attrs(false);
        assert_eq!(closed.aria_expanded, "false");
        assert_eq!(closed.aria_label, "Open navigation menu");
        assert_eq!(closed.icon, MenuIcon::Open);
        assert_eq!(closed.aria_controls, MOBILE_MENU_ID);

        let open = menu_button_attrs(true);
        assert_eq!(open.aria_expanded, "true");
        assert_eq!(open.aria_label, "Close navigation menu");
        assert_eq!(open.icon.glyph(), "✕");
    }

    #[test]
    fn test_header_class_follows_scroll_and_layout() {
        assert_eq!(header_class(false, false), "muonry-nav");
        assert!(header_class(true, false).contains("muonry-nav--scrolled"));
        assert!(!header_class(true, false).contains("muonry-nav--compact"));
        assert!(header_class(false, true).contains("muonry-nav--compact"));

        let both = header_class(true, true);
        assert!(both.contains("muonry-nav--scrolled"));
        assert!(both.contains("muonry-nav--compact"));
    }

    #[test]
    fn test_compact_below_breakpoint_only() {
        assert!(is_compact(767, DEFAULT_MOBILE_BREAKPOINT));
        assert!(!is_compact(768, DEFAULT_MOBILE_BREAKPOINT));
        assert!(is_compact(639, 640));
        assert!(!is_compact(700, 640));
    }

    #[test]
    fn test_mobile_panel_hidden_above_breakpoint() {
        assert!(mobile_panel_rendered(true, 375, DEFAULT_MOBILE_BREAKPOINT));
        assert!(!mobile_panel_rendered(true, 768, DEFAULT_MOBILE_BREAKPOINT));
        assert!(!mobile_panel_rendered(false, 375, DEFAULT_MOBILE_BREAKPOINT));
        assert!(!mobile_panel_rendered(true, 700, 640));
    }

    #[test]
    fn test_menu_intent_survives_wide_viewport() {
        let mut state = NavState::new();
        state.toggle_menu();
        assert!(!mobile_panel_rendered(state.menu_open(), 1280, DEFAULT_MOBILE_BREAKPOINT));
        assert!(state.menu_open());
        assert!(mobile_panel_rendered(state.menu_open(), 600, DEFAULT_MOBILE_BREAKPOINT));
    }

    #[test]
    fn test_single_active_item_in_list() {
        let items = items();
        let mut state = NavState::new();
        state.pointer_enter(&items, "/");

        let active = items.active_index("/about/team");
        let attrs: Vec<_> = items
            .iter()
            .enumerate()
            .map(|(index, item)| link_attrs(item, active == Some(index), state.hovered()))
            .collect();

        let current: Vec<_> = attrs
            .iter()
            .filter(|attrs| attrs.aria_current.is_some())
            .map(|attrs| attrs.href.as_str())
            .collect();
        assert_eq!(current, vec!["/about"]);
        assert_eq!(attrs[0].class, LinkState::Hovered.class());
    }

    #[test]
    fn test_unknown_path_marks_nothing_active() {
        let items = items();
        assert_eq!(items.active_index(""), None);
        for item in &items {
            assert!(link_attrs(item, false, None).aria_current.is_none());
        }
    }
}
