//! UDdup: URL pattern deduplication
//!
//! This crate collapses lists of URLs that share a structural pattern (same
//! path prefix, differing only in the last path segment or in the shape of
//! the query string) so that a scanner only has to test one representative
//! per endpoint.

pub mod config;
pub mod dedup;
pub mod input;
pub mod output;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for UDdup operations
#[derive(Debug, Error)]
pub enum UddupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("URL list is not an existing file: {}", .0.display())]
    MissingInput(PathBuf),
}

/// Errors raised while persisting results
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for UDdup operations
pub type Result<T> = std::result::Result<T, UddupError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use dedup::{DedupStats, Deduplicator, KeptSet};
pub use crate::url::{classify_path, ParsedUrl, PathClass};
