// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles target-pattern.toml parsing with version validation and unknown key
//! warnings:
//!
//! ```toml
//! version = 1
//!
//! [filter]
//! pattern = "//services/..."
//! strict = false
//!
//! [output]
//! format = "text"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::pattern::Pattern;

/// Config file name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "target-pattern.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "filter", "output"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config plus any top-level keys we do not recognize.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(flatten)]
    config: Config,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Label filtering defaults.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[filter]` section.
#[derive(Debug, Default, Deserialize)]
pub struct FilterConfig {
    /// Pattern used when none is given on the command line.
    pub pattern: Option<Pattern>,

    /// Fail on unparseable labels instead of skipping them.
    #[serde(default)]
    pub strict: bool,
}

/// `[output]` section.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Default output format.
    pub format: Option<OutputFormat>,
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown top-level keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            tracing::warn!("{}: unrecognized field `{}` (ignored)", path.display(), key);
        }
    }

    Ok(flexible.config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
