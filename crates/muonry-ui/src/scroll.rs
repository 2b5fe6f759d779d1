//! Browser scroll signal.
//!
//! Binds the window `scroll` event to a [`ScrollBus`] and shares the bus
//! through context, so every navigation bar below it can subscribe and
//! unsubscribe on its own lifecycle.

use leptos::prelude::*;
use muonry_core::ScrollBus;

/// Create a scroll bus fed by the browser window and provide it as context.
///
/// Outside the browser the bus is still provided but never fires, so
/// subscribers keep their initial state.
pub fn provide_window_scroll() -> ScrollBus {
    let bus = ScrollBus::new();

    #[cfg(target_arch = "wasm32")]
    {
        let source = bus.clone();
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = window().scroll_y().unwrap_or_default();
            source.dispatch(offset);
        });
        on_cleanup(move || handle.remove());
        log::debug!("window scroll bound to navigation");
    }

    provide_context(bus.clone());
    bus
}
