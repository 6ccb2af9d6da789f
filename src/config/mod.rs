// SPDX-License-Identifier: MPL-2.0
//! This module handles presentation defaults, loaded from and saved to a
//! `settings.toml` file. The demo binary uses it to pick the duration and
//! anchor of the toasts it shows; embedding applications are free to ignore
//! it and pass explicit options to [`crate::Toast`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.anchor = Some(iced_toasts::Anchor::Bottom);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::{Error, Result};
use crate::toast::{Anchor, ToastDuration};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;

pub use defaults::{DEFAULT_ANCHOR, DEFAULT_DURATION};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

/// Persisted presentation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default display duration class for new toasts.
    #[serde(default)]
    pub duration: Option<ToastDuration>,
    /// Default screen edge for new toasts.
    #[serde(default)]
    pub anchor: Option<Anchor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration: Some(DEFAULT_DURATION),
            anchor: Some(DEFAULT_ANCHOR),
        }
    }
}

impl Config {
    /// Returns the configured duration class, falling back to the default.
    #[must_use]
    pub fn duration_or_default(&self) -> ToastDuration {
        self.duration.unwrap_or(DEFAULT_DURATION)
    }

    /// Returns the configured anchor, falling back to the default.
    #[must_use]
    pub fn anchor_or_default(&self) -> Anchor {
        self.anchor.unwrap_or(DEFAULT_ANCHOR)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content =
        toml::to_string_pretty(config).map_err(|err| Error::Config(err.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
