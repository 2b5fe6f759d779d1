//! Static site pages.

mod about;
mod home;

pub use about::AboutPage;
pub use home::HomePage;

use leptos::prelude::*;
use leptos_meta::Title;
use muonry_core::Config;

/// Repository the site promotes.
pub(crate) const REPO_URL: &str = "https://github.com/justrach/muonry";

/// Document title for a page, using the configured site name.
pub(crate) fn page_title(page: &str) -> String {
    use_context::<Config>().unwrap_or_default().page_title(page)
}

/// Shown for any path without a route.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <Title text=page_title("Not Found") />
      <section class="muonry-section muonry-not-found">
        <h1>"Page not found"</h1>
        <p>"The page you are looking for does not exist."</p>
        <a href="/" class="btn btn-outline">"Back to Home"</a>
      </section>
    }
}
