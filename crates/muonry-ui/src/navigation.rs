//! Site navigation bar.
//!
//! [`NavigationBar`] renders the sticky header with the brand, the desktop
//! link list, the mobile menu toggle and the mobile panel. Its state lives in
//! a [`NavigationHandle`] created by [`use_navigation`], one per mounted bar.

use leptos::prelude::*;
use muonry_core::{
    DEFAULT_MOBILE_BREAKPOINT, DEFAULT_SCROLL_THRESHOLD, MOBILE_MENU_ID, NavItem, NavItems,
    NavState, ScrollBus, view,
};

use crate::viewport::ViewportWidth;

/// Reactive state of one mounted navigation bar.
#[derive(Clone, Copy)]
pub struct NavigationHandle {
    items: StoredValue<NavItems>,
    state: RwSignal<NavState>,
}

impl NavigationHandle {
    pub fn scrolled(&self) -> bool {
        self.state.with(NavState::scrolled)
    }

    pub fn menu_open(&self) -> bool {
        self.state.with(NavState::menu_open)
    }

    pub fn hovered(&self) -> Option<String> {
        self.state.with(|state| state.hovered().map(str::to_string))
    }

    /// Current state without subscribing to it.
    pub fn snapshot(&self) -> NavState {
        self.state.get_untracked()
    }

    /// Index of the active item for `current_path`.
    pub fn active_index(&self, current_path: &str) -> Option<usize> {
        self.items.with_value(|items| items.active_index(current_path))
    }

    pub fn pointer_enter(&self, target: &str) {
        let items = self.items;
        self.state
            .maybe_update(|state| items.with_value(|items| state.pointer_enter(items, target)));
    }

    pub fn pointer_leave(&self, target: &str) {
        self.state.maybe_update(|state| state.pointer_leave(target));
    }

    pub fn toggle_menu(&self) {
        self.state.update(|state| {
            state.toggle_menu();
        });
    }

    /// A link was activated: close the mobile menu before navigation.
    pub fn select(&self) {
        self.state.maybe_update(NavState::select);
    }

    /// Notifies subscribers only when the threshold is crossed.
    pub fn observe_scroll(&self, offset: f64, threshold: f64) {
        self.state
            .maybe_update(|state| state.observe_scroll(offset, threshold));
    }
}

/// Create navigation state for the current owner and subscribe it to the
/// [`ScrollBus`] in context. The subscription is dropped when the owner is
/// cleaned up.
pub fn use_navigation(items: NavItems, scroll_threshold: f64) -> NavigationHandle {
    let handle = NavigationHandle {
        items: StoredValue::new(items),
        state: RwSignal::new(NavState::new()),
    };

    match use_context::<ScrollBus>() {
        Some(bus) => {
            let listener =
                bus.listen(move |offset| handle.observe_scroll(offset, scroll_threshold));
            on_cleanup(move || listener.detach());
        }
        None => log::debug!("no scroll signal available, navigation bar stays unscrolled"),
    }

    handle
}

/// Layout of one navigation bar for the viewport width in context.
#[derive(Clone, Copy)]
pub struct MobileLayout {
    /// Below the breakpoint: desktop list hidden, toggle shown.
    pub compact: Memo<bool>,
    /// Whether the mobile panel is rendered.
    pub panel: Memo<bool>,
}

/// Derive the layout of `nav` from the [`ViewportWidth`] in context. Without
/// one the width reads as 0.
pub fn use_mobile_layout(nav: NavigationHandle, breakpoint: u32) -> MobileLayout {
    let viewport = use_context::<ViewportWidth>();
    let width = move || viewport.map_or(0, |viewport| viewport.get());

    MobileLayout {
        compact: Memo::new(move |_| view::is_compact(width(), breakpoint)),
        panel: Memo::new(move |_| {
            view::mobile_panel_rendered(nav.menu_open(), width(), breakpoint)
        }),
    }
}

/// Main navigation bar.
#[component]
pub fn NavigationBar(
    /// Navigation items, in display order.
    items: NavItems,
    /// Current path for active highlighting, owned by the router.
    #[prop(into)]
    current_path: Signal<String>,
    /// Brand text linking to the home page.
    #[prop(into, default = "MUONRY".to_string())]
    brand: String,
    /// Scroll offset past which the bar switches to its scrolled look.
    #[prop(default = DEFAULT_SCROLL_THRESHOLD)]
    scroll_threshold: f64,
    /// Viewport width, in pixels, at and above which the desktop list is shown.
    #[prop(default = DEFAULT_MOBILE_BREAKPOINT)]
    mobile_breakpoint: u32,
) -> impl IntoView {
    let nav = use_navigation(items, scroll_threshold);
    let layout = use_mobile_layout(nav, mobile_breakpoint);
    let active = Memo::new(move |_| current_path.with(|path| nav.active_index(path)));
    let button = Memo::new(move |_| view::menu_button_attrs(nav.menu_open()));

    view! {
      <header class=move || view::header_class(nav.scrolled(), layout.compact.get())>
        <div class="muonry-nav-inner">
          <a href="/" class="muonry-nav-brand" on:click=move |_| nav.select()>
            <span class="muonry-nav-brand-dot" aria-hidden="true"></span>
            {brand}
          </a>

          <nav class="muonry-nav-desktop" aria-label="Main navigation">
            <NavList nav=nav active=active />
          </nav>

          <button
            type="button"
            class="muonry-nav-toggle"
            aria-expanded=move || button.get().aria_expanded
            aria-controls=MOBILE_MENU_ID
            aria-label=move || button.get().aria_label
            on:click=move |_| nav.toggle_menu()
          >
            <span aria-hidden="true">{move || button.get().icon.glyph()}</span>
          </button>
        </div>

        // Not rendered above the breakpoint; menu_open is kept.
        <Show when=move || layout.panel.get()>
          <nav id=MOBILE_MENU_ID class="muonry-nav-mobile" aria-label="Mobile navigation">
            <NavList nav=nav active=active />
          </nav>
        </Show>
      </header>
    }
}

/// The ordered link list, shared by the desktop bar and the mobile panel.
#[component]
fn NavList(nav: NavigationHandle, active: Memo<Option<usize>>) -> impl IntoView {
    let links = nav.items.with_value(|items| {
        items
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, item)| {
                let is_active = Signal::derive(move || active.get() == Some(index));
                view! { <NavLink item=item nav=nav is_active=is_active /> }
            })
            .collect_view()
    });

    view! { <ul class="muonry-nav-list">{links}</ul> }
}

#[component]
fn NavLink(item: NavItem, nav: NavigationHandle, is_active: Signal<bool>) -> impl IntoView {
    let link = view::link_attrs(&item, false, None);
    let attrs = {
        let item = item.clone();
        Memo::new(move |_| {
            let hovered = nav.hovered();
            view::link_attrs(&item, is_active.get(), hovered.as_deref())
        })
    };

    let enter_target = item.target.clone();
    let leave_target = item.target.clone();

    view! {
      <li class="muonry-nav-item">
        <a
          href=link.href
          class=move || attrs.get().class
          aria-current=move || attrs.get().aria_current
          target=link.target
          rel=link.rel
          on:mouseenter=move |_| nav.pointer_enter(&enter_target)
          on:mouseleave=move |_| nav.pointer_leave(&leave_target)
          on:click=move |_| nav.select()
        >
          {item.label}
          {link
            .off_site
            .then(|| {
              view! {
                <span class="muonry-nav-offsite" aria-hidden="true">
                  {view::OFF_SITE_GLYPH}
                </span>
                <span class="visually-hidden">{view::OFF_SITE_HINT}</span>
              }
            })}
        </a>
      </li>
    }
}
