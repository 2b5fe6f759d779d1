//! Browser viewport width.
//!
//! Binds the window `resize` event to a width signal shared through context,
//! the same way [`provide_window_scroll`](crate::provide_window_scroll) shares
//! the scroll offset.

use leptos::prelude::*;

/// Viewport width in CSS pixels.
#[derive(Clone, Copy)]
pub struct ViewportWidth(RwSignal<u32>);

impl ViewportWidth {
    pub fn new(width: u32) -> Self {
        Self(RwSignal::new(width))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    /// Notifies subscribers only when the width changes.
    pub fn set(&self, width: u32) {
        self.0.maybe_update(|current| {
            let changed = *current != width;
            *current = width;
            changed
        });
    }
}

/// Create a viewport width signal fed by the browser window and provide it
/// as context.
///
/// Outside the browser the width stays 0, which selects the mobile layout.
pub fn provide_window_viewport() -> ViewportWidth {
    let viewport = ViewportWidth::new(0);

    #[cfg(target_arch = "wasm32")]
    {
        viewport.set(window_width());
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            viewport.set(window_width());
        });
        on_cleanup(move || handle.remove());
        log::debug!("window resize bound to navigation");
    }

    provide_context(viewport);
    viewport
}

#[cfg(target_arch = "wasm32")]
fn window_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map_or(0, |width| width.max(0.0) as u32)
}
