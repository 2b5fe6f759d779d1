//! Muonry CLI Library
//!
//! Serves the built Muonry site and validates its configuration.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, check)
//! - [`server`] - Static file server with client-side route fallback
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use muonry::cmd;
//!
//! // Validate the site configuration
//! cmd::check::run(Path::new("muonry.toml"), false).unwrap();
//! ```

pub mod cmd;
pub mod server;

// Re-export core types for convenience
pub use muonry_core::Config;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// muonry::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
