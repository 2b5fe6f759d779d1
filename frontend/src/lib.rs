//! Browser entry point. Build with `trunk build --release` from this directory.

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// Install browser logging and mount the application on `<body>`.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logging unavailable: {err}");
    }

    log::info!("mounting Muonry site");
    leptos::mount::mount_to_body(App);
}
