use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};
use muonry_core::{Config, NavItems};
use muonry_ui::{NavigationBar, provide_window_scroll, provide_window_viewport};

mod pages;

use pages::{AboutPage, HomePage, NotFound};

/// Site configuration compiled into the bundle.
pub const SITE_CONFIG: &str = include_str!("../../muonry.toml");

/// Parse the embedded configuration, falling back to the built-in defaults.
pub fn site_config() -> Config {
    Config::from_toml_str(SITE_CONFIG).unwrap_or_else(|err| {
        log::error!("embedded site configuration is invalid, using defaults: {err}");
        Config::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_window_scroll();
    provide_window_viewport();

    let config = site_config();
    let default_title = config
        .site
        .default_title
        .clone()
        .unwrap_or_else(|| config.site.title.clone());
    let description = config.site.description.clone().unwrap_or_default();
    provide_context(config);

    view! {
      <Title text=default_title />
      <Meta name="description" content=description />

      <Router>
        <SiteHeader />
        <main class="muonry-main">
          <Routes fallback=|| view! { <NotFound /> }>
            <Route path=StaticSegment("") view=HomePage />
            <Route path=StaticSegment("about") view=AboutPage />
          </Routes>
        </main>
        <SiteFooter />
      </Router>
    }
}

/// Navigation bar wired to the router location.
#[component]
fn SiteHeader() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let items = config.nav_items().unwrap_or_else(|err| {
        log::error!("navigation disabled: {err}");
        NavItems::default()
    });

    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());

    view! {
      <NavigationBar
        items=items
        current_path=current_path
        brand=config.site.title.to_uppercase()
        scroll_threshold=config.nav.scroll_threshold
        mobile_breakpoint=config.nav.mobile_breakpoint
      />
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
      <footer class="muonry-footer">
        <p>"Muonry is open source. Built by the community, for the community."</p>
      </footer>
    }
}
