//! Configuration module for UDdup
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file, and merging it with command-line flags.
//!
//! # Example
//!
//! ```no_run
//! use uddup::config::{load_config, CliOverrides};
//! use std::path::Path;
//!
//! let config = load_config(Path::new("uddup.toml"))
//!     .unwrap()
//!     .merge_cli(CliOverrides::default());
//! println!("Saving to: {:?}", config.output.path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CliOverrides, Config, InputConfig, OutputConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config, read_config};
pub use validation::validate;
