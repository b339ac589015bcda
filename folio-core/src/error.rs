//! Structured error types for the fallible edges of the dashboard.
//!
//! The derivation path (resolve → filter → metrics) never fails; these errors
//! only come from reading configuration and parsing user-supplied values.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by config loading and argument parsing.
///
/// Displayable in both CLI and TUI contexts.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid date '{input}' (expected YYYY-MM-DD or 'today')")]
    InvalidDate { input: String },

    #[error("invalid month '{input}' (expected YYYY-MM)")]
    InvalidMonth { input: String },

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
