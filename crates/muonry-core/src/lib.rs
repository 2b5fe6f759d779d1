//! Muonry Core Library
//!
//! Navigation model, navigation bar state, scroll signal, presentation rules,
//! site configuration, and error handling for the Muonry site. Nothing in here
//! depends on a UI framework.

pub mod config;
pub mod error;
pub mod nav;
pub mod scroll;
pub mod state;
pub mod view;

pub use config::Config;
pub use error::{CoreError, Result};
pub use nav::{NavItem, NavItems};
pub use scroll::{ScrollBus, ScrollListener};
pub use state::{DEFAULT_SCROLL_THRESHOLD, NavState};
pub use view::{
    DEFAULT_MOBILE_BREAKPOINT, LinkAttrs, LinkState, MOBILE_MENU_ID, MenuButtonAttrs, MenuIcon,
};
