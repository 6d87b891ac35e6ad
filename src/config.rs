use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "almanac.toml";

/// Top-level Almanac configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Clock settings.
    #[serde(default)]
    pub clock: ClockToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockToml {
    /// Seconds added to every reading; negative shifts backward.
    #[serde(default)]
    pub offset_seconds: i64,
    /// RFC 3339 string; when set, the clock is frozen at this instant.
    #[serde(default)]
    pub fixed: Option<DateTime<Utc>>,
}

impl AlmanacConfig {
    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG`] if it exists.
    ///
    /// An explicitly named file must exist. A missing default file yields the
    /// default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}
