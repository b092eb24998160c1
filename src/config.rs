//! Configuration management for the application.
//!
//! Handles loading, validating, and saving application configuration in
//! TOML format with platform-specific directory resolution.

use crate::pager::{BreakpointStep, Breakpoints};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Deck viewer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Terminal-column breakpoints controlling cards per page
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<BreakpointStep>,
    /// Character budget for quote previews on cards
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

/// Default card layout: one card on narrow terminals, two from 70 columns,
/// three from 100.
fn default_breakpoints() -> Vec<BreakpointStep> {
    vec![
        BreakpointStep {
            min_width: 0,
            items_per_page: 1,
        },
        BreakpointStep {
            min_width: 70,
            items_per_page: 2,
        },
        BreakpointStep {
            min_width: 100,
            items_per_page: 3,
        },
    ]
}

fn default_preview_chars() -> usize {
    200
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
            preview_chars: default_preview_chars(),
        }
    }
}

impl DeckConfig {
    /// Breakpoint mapping for the pager.
    #[must_use]
    pub fn breakpoint_map(&self) -> Breakpoints {
        Breakpoints::new(self.breakpoints.clone())
    }
}

/// UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display the key hint bar until the user dismisses it
    pub show_hints: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_hints: true,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/QuoteDeck/config.toml`
/// - macOS: `~/Library/Application Support/QuoteDeck/config.toml`
/// - Windows: `%APPDATA%\QuoteDeck\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Deck viewer settings
    #[serde(default)]
    pub deck: DeckConfig,
    /// User interface preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("QuoteDeck");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }
}
