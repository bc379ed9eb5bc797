// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is a TOML file holding defaults for command-line flags.
//! It is looked up in this order:
//! - the `--config` flag
//! - `USTRIAGE_CONFIG`
//! - `<config dir>/ustriage/config.toml` (e.g. `~/.config/ustriage/config.toml`)
//!
//! Every key is optional. A missing file at the default location means
//! built-in defaults; a missing file that was asked for explicitly is an
//! error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "ustriage";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Defaults read from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Tracker project to report on.
    pub project: Option<String>,
    /// Team or user whose subscriptions are reported.
    pub lpname: Option<String>,
    /// Tag selecting the tagged view and the tagged expiration policy.
    pub tag: Option<String>,
    /// Tag keeping bugs out of the expired sections.
    pub exempt_tag: Option<String>,
    pub expire_tagged: Option<i64>,
    pub expire: Option<i64>,
    pub recent_days: Option<i64>,
    pub max_head_tail: Option<u32>,
    /// JSON export to read bugs from. Relative paths are resolved against
    /// the directory holding the config file.
    pub source: Option<PathBuf>,
    pub full_urls: Option<bool>,
    pub extended: Option<bool>,
    pub show_tagged: Option<bool>,
    pub show_subscribed: Option<bool>,
}

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Named by the user; it must exist.
    Explicit(PathBuf),
    /// The per-user default; it may be absent.
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Explicit(path) | ConfigLocation::Default(path) => path,
        }
    }
}

/// Picks the configuration file from the flag, the environment and the
/// platform config directory, in that order.
pub fn locate(
    flag: Option<&Path>,
    env: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Option<ConfigLocation> {
    if let Some(path) = flag {
        return Some(ConfigLocation::Explicit(path.to_path_buf()));
    }
    if let Some(path) = env {
        return Some(ConfigLocation::Explicit(path));
    }
    config_dir.map(|dir| ConfigLocation::Default(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)))
}

/// The per-user default configuration path, if the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

impl Config {
    /// Parses configuration text and checks value ranges.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let mut config = Config::parse(&content)?;

        if let (Some(source), Some(dir)) = (config.source.as_ref(), path.parent()) {
            if source.is_relative() {
                config.source = Some(dir.join(source));
            }
        }

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the configuration at `location`, if any.
    pub fn load_from(location: Option<&ConfigLocation>) -> Result<Self> {
        match location {
            None => Ok(Config::default()),
            Some(ConfigLocation::Default(path)) if !path.exists() => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Ok(Config::default())
            }
            Some(ConfigLocation::Explicit(path)) if !path.exists() => {
                Err(Error::ConfigNotFound(path.clone()))
            }
            Some(location) => Config::load(location.path()),
        }
    }

    fn validate(&self) -> Result<()> {
        let days = [
            ("expire_tagged", self.expire_tagged),
            ("expire", self.expire),
            ("recent_days", self.recent_days),
        ];
        for (key, value) in days {
            if value.is_some_and(|v| v < 0) {
                return Err(Error::Config(format!("{} cannot be negative", key)));
            }
        }
        if self.max_head_tail == Some(0) {
            return Err(Error::Config("max_head_tail must be at least 1".to_string()));
        }

        let names = [
            ("project", &self.project),
            ("lpname", &self.lpname),
            ("tag", &self.tag),
            ("exempt_tag", &self.exempt_tag),
        ];
        for (key, value) in names {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(Error::Config(format!("{} cannot be empty", key)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
