//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    nav::{NavItem, NavItems, ROOT_PATH},
    state::DEFAULT_SCROLL_THRESHOLD,
    view::DEFAULT_MOBILE_BREAKPOINT,
};

/// Main configuration structure for the Muonry site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Navigation bar settings.
    #[serde(default)]
    pub nav: NavConfig,

    /// Static server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, also the brand text in the navigation bar.
    pub title: String,

    /// Base URL for the site (e.g., "https://muonry.com").
    pub base_url: String,

    /// Title used when a page does not set its own.
    #[serde(default)]
    pub default_title: Option<String>,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,
}

/// Navigation bar configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Scroll offset in pixels past which the bar switches to its scrolled look.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,

    /// Viewport width in pixels below which the mobile menu is used.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,

    /// Ordered navigation links.
    #[serde(default = "default_nav_items")]
    pub items: Vec<NavItem>,
}

/// Static file server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Directory holding the built site.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,

    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_scroll_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD
}

fn default_mobile_breakpoint() -> u32 {
    DEFAULT_MOBILE_BREAKPOINT
}

fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::internal("Home", "/"),
        NavItem::external("GitHub", "https://github.com/justrach/muonry"),
        NavItem::external("Docs", "https://github.com/justrach/muonry#readme"),
        NavItem::internal("About", "/about"),
    ]
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Muonry".to_string(),
            base_url: "http://localhost:3000".to_string(),
            default_title: Some("Muonry - Open Source AI Coding Assistant".to_string()),
            description: Some(
                "Muonry is a transparent, fast, and fully controllable AI coding assistant."
                    .to_string(),
            ),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
            mobile_breakpoint: default_mobile_breakpoint(),
            items: default_nav_items(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `MUONRY__*` environment
    /// overrides (e.g. `MUONRY__SERVER__PORT=8080`).
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("MUONRY").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration text, as embedded in the frontend.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if !self.nav.scroll_threshold.is_finite() || self.nav.scroll_threshold < 0.0 {
            return Err(CoreError::config(
                "nav.scroll_threshold must be a non-negative number",
            ));
        }

        if self.nav.mobile_breakpoint == 0 {
            return Err(CoreError::config("nav.mobile_breakpoint must be positive"));
        }

        self.nav_items()?;

        // Ensure base_url doesn't have trailing slash
        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Validated navigation list.
    pub fn nav_items(&self) -> Result<NavItems> {
        NavItems::new(self.nav.items.clone())
    }

    /// Non-fatal issues worth reporting to whoever maintains the config.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.site.base_url.ends_with('/') {
            warnings.push("site.base_url should not have a trailing slash".to_string());
        }

        if !self
            .nav
            .items
            .iter()
            .any(|item| !item.external && item.target == ROOT_PATH)
        {
            warnings.push("nav.items has no link to the home page".to_string());
        }

        if self.nav.items.is_empty() {
            warnings.push("nav.items is empty".to_string());
        }

        if self.site.description.is_none() {
            warnings.push("site.description is not set".to_string());
        }

        warnings
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Document title for a page, e.g. "About - Muonry".
    pub fn page_title(&self, page: &str) -> String {
        format!("{page} - {}", self.site.title)
    }
}
