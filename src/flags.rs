//! Persistent boolean flags behind an injectable store.
//!
//! The viewer remembers a couple of one-shot user choices (hint bar
//! dismissed, and similar) across runs. The `FlagStore` trait keeps that
//! concern out of the UI logic so it stays testable without touching the
//! filesystem; `TomlFlagStore` is the production implementation,
//! `MemoryFlagStore` backs tests and headless runs.

use crate::config::Config;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Flag name for a dismissed key-hint bar.
pub const HINTS_DISMISSED: &str = "hints_dismissed";

/// Key-value store for persistent boolean flags.
pub trait FlagStore {
    /// Reads a flag; absent flags read as `false`.
    fn get_flag(&self, key: &str) -> bool;

    /// Writes a flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be persisted.
    fn set_flag(&mut self, key: &str, value: bool) -> Result<()>;
}

/// Flag file contents.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FlagFile {
    #[serde(default)]
    flags: BTreeMap<String, bool>,
}

/// File-backed flag store: `QuoteDeck/flags.toml` in the config directory.
#[derive(Debug)]
pub struct TomlFlagStore {
    path: PathBuf,
    file: FlagFile,
}

impl TomlFlagStore {
    /// Opens the default flag file, creating an empty store when it does
    /// not exist yet.
    pub fn open() -> Result<Self> {
        Self::open_at(Config::config_dir()?.join("flags.toml"))
    }

    /// Opens a flag store at an explicit path.
    pub fn open_at(path: PathBuf) -> Result<Self> {
        let file = if path.exists() {
            let content = fs::read_to_string(&path)
                .context(format!("Failed to read flag file: {}", path.display()))?;
            toml::from_str(&content)
                .context(format!("Failed to parse flag file: {}", path.display()))?
        } else {
            FlagFile::default()
        };

        Ok(Self { path, file })
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create flag directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(&self.file).context("Failed to serialize flags")?;
        let temp_path = self.path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp flag file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp flag file to: {}",
            self.path.display()
        ))?;

        Ok(())
    }
}

impl FlagStore for TomlFlagStore {
    fn get_flag(&self, key: &str) -> bool {
        self.file.flags.get(key).copied().unwrap_or(false)
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        self.file.flags.insert(key.to_string(), value);
        self.persist()
    }
}

/// In-memory flag store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    flags: BTreeMap<String, bool>,
}

impl FlagStore for MemoryFlagStore {
    fn get_flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        self.flags.insert(key.to_string(), value);
        Ok(())
    }
}
