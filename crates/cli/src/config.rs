// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Optional status configuration.
//!
//! Configuration is read from TOML and only extends the built-in status
//! tables; credentials and report arguments always come from the command
//! line. Lookup order:
//! - `--config <path>` (must exist)
//! - `DWELL_CONFIG` environment variable (must exist)
//! - `<config_dir>/dwell/config.toml` (used only if present)
//!
//! ```toml
//! [statuses]
//! exclude = ["Blocked"]
//!
//! [statuses.merge]
//! "Code Review" = "In Review"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use dw_core::StatusNormalizer;

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "dwell";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub statuses: StatusConfig,
}

/// Additions to the built-in status normalization tables.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusConfig {
    /// Extra aliases, raw status name to canonical name.
    #[serde(default)]
    pub merge: BTreeMap<String, String>,
    /// Extra statuses whose time is discarded.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads configuration from a file that must exist.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Resolves and loads configuration following the lookup order above.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        if let Some(path) = crate::env::config_path() {
            return Self::from_path(&path);
        }
        match default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("using config {}", path.display());
                Self::from_path(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Builds a normalizer from the built-in tables plus this configuration.
    pub fn normalizer(&self) -> Result<StatusNormalizer> {
        let mut normalizer = StatusNormalizer::default();
        for (from, to) in &self.statuses.merge {
            normalizer = normalizer.with_merge(from, to)?;
        }
        for status in &self.statuses.exclude {
            normalizer = normalizer.with_excluded(status);
        }
        Ok(normalizer)
    }
}

/// Per-user config location, e.g. `~/.config/dwell/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
