//! Configuration management for termcard
//!
//! The config carries the profile shown on the card and the gradient
//! anchor palettes for the four border edges. Defaults are compiled in;
//! a TOML file under `~/.config/termcard/` overrides them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub borders: BorderPalette,
}

/// The person shown on the card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Display name, rendered bold in the greeting block
    #[serde(default = "default_name")]
    pub name: String,
    /// Full name; carried in the config but not rendered on the card
    #[serde(default = "default_full_name")]
    pub full_name: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_links")]
    pub links: Vec<LinkEntry>,
}

/// One labeled, clickable link row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkEntry {
    pub label: String,
    pub url: String,
    /// Text shown for the link; `@handle` forms are rewritten to profile
    /// URLs for the X and Bluesky labels
    pub display_text: String,
    /// Emoji shown before the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Section header this link is grouped under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Gradient anchor colors for the four border edges, as hex codes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorderPalette {
    #[serde(default = "default_top_colors")]
    pub top: Vec<String>,
    #[serde(default = "default_right_colors")]
    pub right: Vec<String>,
    #[serde(default = "default_bottom_colors")]
    pub bottom: Vec<String>,
    #[serde(default = "default_left_colors")]
    pub left: Vec<String>,
}

/// Configuration problems caught before rendering starts.
///
/// The render pipeline assumes well-formed input, so violations are
/// rejected here, at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("display name must not be empty")]
    EmptyName,

    #[error("at least one link is required")]
    NoLinks,

    #[error("link {index} ({label}) has an empty label or display text")]
    EmptyLink { index: usize, label: String },

    #[error("border palette for the {edge} edge has no colors")]
    EmptyPalette { edge: &'static str },
}

fn default_name() -> String {
    "Zane".to_string()
}

fn default_full_name() -> String {
    "guangzan wang".to_string()
}

fn default_title() -> String {
    "Developer".to_string()
}

fn default_description() -> String {
    "Building awesome things".to_string()
}

fn default_links() -> Vec<LinkEntry> {
    vec![
        LinkEntry {
            label: "GitHub".to_string(),
            url: "https://github.com/guangzan".to_string(),
            display_text: "https://github.com/guangzan".to_string(),
            emoji: Some("🐙".to_string()),
            section: None,
        },
        LinkEntry {
            label: "X".to_string(),
            url: "https://x.com/_guangzan".to_string(),
            display_text: "@_guangzan".to_string(),
            emoji: Some("🐦".to_string()),
            section: None,
        },
        LinkEntry {
            label: "Bluesky".to_string(),
            url: "https://bsky.app/profile/guangzan".to_string(),
            display_text: "@guangzan".to_string(),
            emoji: Some("🦋".to_string()),
            section: None,
        },
        LinkEntry {
            label: "Web".to_string(),
            url: "https://www.cnblogs.com/guangzan".to_string(),
            display_text: "https://www.cnblogs.com/guangzan".to_string(),
            emoji: Some("🌐".to_string()),
            section: None,
        },
    ]
}

fn default_top_colors() -> Vec<String> {
    [
        "#03FFFF", "#00C8FF", "#0096FF", "#3164FF", "#6332FF", "#9601FF", "#C801FF", "#FF00DD",
        "#FF0096",
    ]
    .map(String::from)
    .to_vec()
}

fn default_right_colors() -> Vec<String> {
    ["#FF0096", "#FF3332", "#FF6400", "#FF9601", "#FFC803", "#FFFF00"]
        .map(String::from)
        .to_vec()
}

fn default_bottom_colors() -> Vec<String> {
    ["#03FFC8", "#03FF64", "#64FF33", "#C7FE04", "#FFFF00"]
        .map(String::from)
        .to_vec()
}

fn default_left_colors() -> Vec<String> {
    ["#03FFC8", "#03FFFF"].map(String::from).to_vec()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: default_name(),
            full_name: default_full_name(),
            title: default_title(),
            description: default_description(),
            links: default_links(),
        }
    }
}

impl Default for BorderPalette {
    fn default() -> Self {
        Self {
            top: default_top_colors(),
            right: default_right_colors(),
            bottom: default_bottom_colors(),
            left: default_left_colors(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/termcard/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get the config directory path (~/.config/termcard)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("termcard"))
    }

    /// Load configuration from the default location, or return defaults if
    /// no config file exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            debug!("no config file, using built-in defaults");
            Ok(Config::default())
        }
    }

    /// Load and validate configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Check the invariants the render pipeline relies on.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.profile.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.profile.links.is_empty() {
            return Err(ConfigError::NoLinks);
        }
        for (index, link) in self.profile.links.iter().enumerate() {
            if link.label.trim().is_empty() || link.display_text.trim().is_empty() {
                return Err(ConfigError::EmptyLink {
                    index,
                    label: link.label.clone(),
                });
            }
        }
        for (edge, colors) in [
            ("top", &self.borders.top),
            ("right", &self.borders.right),
            ("bottom", &self.borders.bottom),
            ("left", &self.borders.left),
        ] {
            if colors.is_empty() {
                return Err(ConfigError::EmptyPalette { edge });
            }
        }
        Ok(())
    }
}
