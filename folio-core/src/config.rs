//! Dashboard configuration (TOML).
//!
//! Looked up at `--config PATH` when given, otherwise at
//! `$XDG_CONFIG_HOME/folio/config.toml`. An explicit path must load; the
//! default path is optional and falls back to defaults when missing or broken.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::range::TimeRange;
use crate::view::{ChartTab, Selection};

/// Environment variable overriding `logging.level`.
pub const LOG_ENV: &str = "FOLIO_LOG";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub dashboard: DashboardConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Initial dashboard state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_range: TimeRange,
    /// Fixed anchor date; today when absent.
    pub anchor: Option<NaiveDate>,
    pub tab: ChartTab,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval of the TUI loop.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Where the TUI writes its log file.
    pub directory: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: PathBuf::from("logs"),
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file; the path that was looked for, if any.
    Defaults(Option<PathBuf>),
    /// The default file exists but could not be used.
    Fallback(FolioError),
}

/// Result of [`FolioConfig::load`].
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: FolioConfig,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Log how the config was obtained. Call once logging is installed.
    pub fn report(&self) {
        match &self.source {
            ConfigSource::File(path) => {
                tracing::info!(path = %path.display(), "loaded config");
            }
            ConfigSource::Defaults(Some(path)) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
            }
            ConfigSource::Defaults(None) => {
                tracing::debug!("no config directory, using defaults");
            }
            ConfigSource::Fallback(err) => {
                tracing::warn!(error = %err, "ignoring config file, using defaults");
            }
        }
    }
}

impl FolioConfig {
    /// `$XDG_CONFIG_HOME/folio/config.toml` (platform equivalent elsewhere).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FolioError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| FolioError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load from an explicit path (errors propagate) or from the default
    /// location (errors degrade to defaults).
    ///
    /// Nothing is logged here: loading runs before the subscriber exists, so
    /// callers install logging from `config` and then call
    /// [`LoadedConfig::report`].
    pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            return Ok(LoadedConfig {
                config,
                source: ConfigSource::File(path.to_path_buf()),
            });
        }
        Ok(match Self::default_path() {
            Some(path) => Self::load_optional(&path),
            None => LoadedConfig {
                config: Self::default(),
                source: ConfigSource::Defaults(None),
            },
        })
    }

    /// Load `path` if it exists, falling back to defaults when it is missing
    /// or broken.
    pub fn load_optional(path: &Path) -> LoadedConfig {
        if !path.exists() {
            return LoadedConfig {
                config: Self::default(),
                source: ConfigSource::Defaults(Some(path.to_path_buf())),
            };
        }
        match Self::from_file(path) {
            Ok(config) => LoadedConfig {
                config,
                source: ConfigSource::File(path.to_path_buf()),
            },
            Err(err) => LoadedConfig {
                config: Self::default(),
                source: ConfigSource::Fallback(err),
            },
        }
    }

    /// Log level after applying the `FOLIO_LOG` override.
    pub fn log_level(&self) -> Result<String> {
        let level = std::env::var(LOG_ENV).unwrap_or_else(|_| self.logging.level.clone());
        validate_log_level(&level)
    }

    /// Starting selection, anchored at the configured date or `today`.
    pub fn initial_selection(&self, today: NaiveDate) -> Selection {
        Selection::new(
            Some(self.dashboard.anchor.unwrap_or(today)),
            self.dashboard.default_range,
        )
    }
}

fn validate_log_level(level: &str) -> Result<String> {
    let normalized = level.trim().to_ascii_lowercase();
    if LOG_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(FolioError::InvalidLogLevel(level.to_string()))
    }
}
