//! Navigation items and active-route matching.
//!
//! A nav item points either at a path inside the site (`/about`) or at an
//! absolute off-site URL. Route matching only ever considers internal items:
//! the root item matches the root path exactly, every other item matches its
//! own path and anything below it.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Target of the root item. Only matches the root path exactly.
pub const ROOT_PATH: &str = "/";

/// A single navigation link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Site path (`/about`) or absolute URL for external items.
    pub target: String,

    /// Whether the link leaves the site.
    #[serde(default)]
    pub external: bool,
}

impl NavItem {
    /// Create an item pointing at a path inside the site.
    pub fn internal(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: path.into(),
            external: false,
        }
    }

    /// Create an item pointing at an off-site URL.
    pub fn external(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: url.into(),
            external: true,
        }
    }

    /// Check the label and that the target agrees with the `external` flag.
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(CoreError::invalid_nav_item(&self.target, "label cannot be empty"));
        }

        if self.target.chars().any(char::is_whitespace) {
            return Err(CoreError::invalid_nav_item(
                &self.target,
                "target cannot contain whitespace",
            ));
        }

        if self.external {
            if !is_absolute_url(&self.target) {
                return Err(CoreError::invalid_nav_item(
                    &self.target,
                    "external targets must be absolute http(s) URLs",
                ));
            }
        } else if !self.target.starts_with('/') || self.target.starts_with("//") {
            return Err(CoreError::invalid_nav_item(
                &self.target,
                "internal targets must be site paths starting with '/'",
            ));
        }

        Ok(())
    }

    /// Length of the matched target, used to prefer the most specific item.
    fn match_len(&self, current_path: &str) -> Option<usize> {
        if self.external || !current_path.starts_with('/') {
            return None;
        }

        let current = normalize_path(current_path);
        let target = normalize_path(&self.target);

        if target == ROOT_PATH {
            return (current == ROOT_PATH).then_some(target.len());
        }

        let below = current
            .strip_prefix(target)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
        below.then_some(target.len())
    }
}

/// Validated, ordered list of navigation items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavItems(Vec<NavItem>);

impl NavItems {
    /// Validate every item and reject duplicate targets.
    pub fn new(items: Vec<NavItem>) -> Result<Self> {
        for (i, item) in items.iter().enumerate() {
            item.validate()?;

            let key = target_key(item);
            if items[..i].iter().any(|other| target_key(other) == key) {
                return Err(CoreError::invalid_nav_item(
                    &item.target,
                    "duplicate navigation target",
                ));
            }
        }

        Ok(Self(items))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavItem> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NavItem> {
        self.0.get(index)
    }

    /// Position of the item whose target is exactly `target`.
    pub fn position(&self, target: &str) -> Option<usize> {
        self.0.iter().position(|item| item.target == target)
    }

    pub fn contains(&self, target: &str) -> bool {
        self.position(target).is_some()
    }

    /// Index of the single active item for `current_path`, if any.
    ///
    /// When several internal items match, the longest target wins.
    pub fn active_index(&self, current_path: &str) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (index, item) in self.0.iter().enumerate() {
            let Some(len) = item.match_len(current_path) else {
                continue;
            };
            if best.is_none_or(|(_, best_len)| len > best_len) {
                best = Some((index, len));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Target of the active item for `current_path`, if any.
    pub fn active_target(&self, current_path: &str) -> Option<&str> {
        self.active_index(current_path)
            .map(|index| self.0[index].target.as_str())
    }
}

impl<'a> IntoIterator for &'a NavItems {
    type Item = &'a NavItem;
    type IntoIter = std::slice::Iter<'a, NavItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Drop query, fragment and trailing slashes. The root stays `/`.
fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_PATH
    } else {
        trimmed
    }
}

fn target_key(item: &NavItem) -> (bool, &str) {
    if item.external {
        (true, item.target.as_str())
    } else {
        (false, normalize_path(&item.target))
    }
}

fn is_absolute_url(target: &str) -> bool {
    let rest = target
        .strip_prefix("https://")
        .or_else(|| target.strip_prefix("http://"));

    match rest {
        Some(rest) => {
            let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
            let authority = &rest[..authority_end];
            let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
            let host = host.split(':').next().unwrap_or_default();
            !host.is_empty()
        }
        None => false,
    }
}
