//! Serve command - static server for the built site

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, bail};
use muonry_core::Config;
use tokio::net::TcpListener;

use crate::server::{create_router, shutdown_signal};

/// Run the serve command.
///
/// `dist` and `port` override the `[server]` section of the configuration.
pub async fn run(config_path: &Path, dist: Option<&Path>, port: Option<u16>) -> Result<()> {
    tracing::info!(?config_path, ?dist, ?port, "Starting static server");

    let config = load_or_default(config_path)?;
    let dist_dir = dist
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.server.dist_dir));

    if !dist_dir.join("index.html").exists() {
        bail!(
            "No built site in {} (run `trunk build --release` in frontend/ first)",
            dist_dir.display()
        );
    }

    let addr = format!("{}:{}", config.server.host, port.unwrap_or(config.server.port));
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Serving {} at http://{addr}", dist_dir.display());
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, create_router(&dist_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    Ok(())
}

/// Load the configuration, or use defaults when the file does not exist.
fn load_or_default(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        tracing::warn!(?config_path, "Configuration file not found, using defaults");
        return Ok(Config::default());
    }

    Config::load_with_env(config_path).wrap_err("Failed to load configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = load_or_default(Path::new("/nonexistent/muonry.toml")).expect("defaults");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("muonry.toml");
        std::fs::write(&config_path, "[site]\ntitle = \"\"\nbase_url = \"https://x.dev\"\n")
            .expect("write");

        assert!(load_or_default(&config_path).is_err());
    }

    #[tokio::test]
    async fn test_missing_dist_is_reported() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = run(Path::new("/nonexistent/muonry.toml"), Some(dir.path()), Some(0))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No built site"));
    }
}
