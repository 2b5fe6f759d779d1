use leptos::prelude::*;

use super::REPO_URL;

/// (icon, title, body) of each feature card.
const FEATURES: [(&str, &str, &str); 3] = [
    (
        "⚡",
        "Fast & Lightweight",
        "Built for low latency and minimal resources, with a tiny surface area you can reason about.",
    ),
    ("🔍", "Fully Transparent", "100% open source. No hidden APIs."),
    (
        "🔗",
        "Extensible",
        "Bring your own provider under the hood: Groq, Cerebras, OpenRouter, and more.",
    ),
];

const ARCHITECTURE: [&str; 5] = ["Terminal/CLI", "Muonry Core", "Tools", "Providers", "Project Files"];

/// Renders the landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
      <section class="muonry-hero">
        <div class="muonry-hero-copy">
          <h1>"The Open Source " <span class="text-gradient">"Coding Agent"</span></h1>
          <p>"Bring AI into your dev workflow. Transparent, fast, and fully in your control."</p>
          <div class="muonry-hero-actions">
            <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="btn btn-gradient">
              "Get Started"
            </a>
            <a href="#video" class="btn btn-outline">"▶ Watch Video"</a>
          </div>
        </div>
        <div id="video" class="muonry-hero-video">
          <video src="https://images.muonry.com/muon2.mp4" autoplay=true muted=true loop=true playsinline=true></video>
          <p class="muonry-caption">"Demo: Muonry in action."</p>
        </div>
      </section>

      <section class="muonry-section">
        <h2>"Built in <1200 Lines"</h2>
        <p class="muonry-lead">"Why we created Muonry: a transparent, hackable coding agent"</p>
        <div class="muonry-grid muonry-grid-2">
          <article class="muonry-card">
            <h3>"The Problem"</h3>
            <p>
              "Existing AI coding tools are black boxes. You can't see what they're doing, "
              "can't modify their behavior, and can't run them locally."
            </p>
          </article>
          <article class="muonry-card">
            <h3>"Our Solution"</h3>
            <p>
              "Muonry is an open, free agent that anyone can understand, modify, and build upon. "
              "Small enough to read in one sitting, powerful enough to be genuinely useful."
            </p>
          </article>
        </div>
      </section>

      <section class="muonry-section">
        <div class="muonry-grid muonry-grid-3">
          {FEATURES
            .iter()
            .map(|(icon, title, body)| {
              view! {
                <article class="muonry-card">
                  <div class="muonry-card-icon">{*icon}</div>
                  <h3>{*title}</h3>
                  <p>{*body}</p>
                </article>
              }
            })
            .collect_view()}
        </div>
      </section>

      <section class="muonry-section" id="architecture">
        <h2>"Architecture Overview"</h2>
        <ol class="muonry-architecture">
          {ARCHITECTURE
            .iter()
            .map(|stage| view! { <li class="muonry-badge">{*stage}</li> })
            .collect_view()}
        </ol>
        <p class="muonry-caption">
          "Tools: file ops, shell, patching, planner, websearch • Providers: Groq, Cerebras, Exa (optional)"
        </p>
      </section>

      <section class="muonry-section" id="community">
        <h2>"Community"</h2>
        <div class="muonry-grid muonry-grid-2">
          <article class="muonry-card">
            <h3>"Contributors"</h3>
            <a href="https://github.com/justrach" target="_blank" rel="noopener noreferrer" title="justrach">
              <img class="muonry-avatar" src="https://github.com/justrach.png?size=64" alt="justrach" />
            </a>
            <span class="muonry-avatar muonry-avatar-empty" title="(this could be you)">"+"</span>
          </article>
          <article class="muonry-card">
            <h3>"Get Involved"</h3>
            <p>"Muonry is open to everyone. Start coding with your AI partner today."</p>
            <a href=REPO_URL target="_blank" rel="noopener noreferrer" class="btn btn-outline">
              "Star the repo " <span aria-hidden="true">"★"</span>
            </a>
          </article>
        </div>
      </section>
    }
}
