//! Muonry UI Components
//!
//! Leptos components for the Muonry site.
//!
//! # Components
//!
//! - [`NavigationBar`] - Sticky site header with desktop links and a mobile menu
//! - [`use_navigation`] - Navigation state bound to the scroll signal in context
//! - [`provide_window_scroll`] - Feeds the browser window scroll into context
//! - [`provide_window_viewport`] - Feeds the browser window width into context
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use muonry_core::{NavItem, NavItems};
//! use muonry_ui::{NavigationBar, provide_window_scroll};
//!
//! #[component]
//! fn Shell() -> impl IntoView {
//!     provide_window_scroll();
//!     let items = NavItems::new(vec![NavItem::internal("Home", "/")]).unwrap();
//!     let path = Signal::derive(|| "/".to_string());
//!
//!     view! { <NavigationBar items=items current_path=path /> }
//! }
//! ```

pub mod navigation;
pub mod scroll;
pub mod viewport;

pub use navigation::{
    MobileLayout, NavigationBar, NavigationHandle, use_mobile_layout, use_navigation,
};
pub use scroll::provide_window_scroll;
pub use viewport::{ViewportWidth, provide_window_viewport};
