use leptos::prelude::*;
use leptos_meta::Title;

use super::page_title;

const BELIEFS: [(&str, &str); 4] = [
    ("Transparency", "Every prompt, every decision, every line of code is visible and auditable."),
    ("Hackability", "Want to add support for a new language or tool? The code is designed to be modified."),
    ("Privacy", "Runs locally. Your code never leaves your machine unless you want it to."),
    ("Freedom", "No vendor lock-in. Modify, distribute, and use however you want."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
      <Title text=page_title("About") />
      <article class="muonry-section muonry-about">
        <a href="/" class="muonry-back">"← Back to Home"</a>
        <header>
          <h1>"Why Muonry Was Built"</h1>
          <p class="muonry-lead">"A transparent, hackable AI coding agent built in under 1200 lines"</p>
        </header>

        <h2>"The Problem"</h2>
        <p>
          "Most AI coding tools are black boxes. You send your code to a server, magic happens, "
          "and you get results back. This opacity creates privacy concerns, vendor lock-in, and "
          "leaves you unable to customize or learn from the system."
        </p>

        <h2>"The 1200-Line Challenge"</h2>
        <p>
          "We set out to build a complete AI coding agent that anyone could understand, modify, "
          "and extend, all in under 1200 lines of code. This constraint forces clarity: every line "
          "matters and every feature is essential."
        </p>

        <h2>"What We Believe"</h2>
        <div class="muonry-grid muonry-grid-2">
          {BELIEFS
            .iter()
            .map(|(title, body)| {
              view! {
                <div class="muonry-card">
                  <h3>{*title}</h3>
                  <p>{*body}</p>
                </div>
              }
            })
            .collect_view()}
        </div>
      </article>
    }
}
