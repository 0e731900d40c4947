//! Output module for presenting deduplication results
//!
//! This module handles:
//! - The start-up banner
//! - Printing kept URLs and saving them to a file
//! - The end-of-run summary

mod banner;
mod summary;
mod writer;

pub use banner::{banner, print_banner};
pub use summary::{format_summary, print_summary};
pub use writer::{print_urls, save_urls, write_urls};

use crate::url::ParsedUrl;
use std::path::Path;

/// Message shown when the results file cannot be written
pub const SAVE_FAILED_MESSAGE: &str = "[X] Failed to save the output to a file.";

/// Prints the results and, when requested, saves them to a file
///
/// A failure to save is reported and logged but never aborts the run: the
/// results have already been printed at that point.
///
/// # Returns
///
/// * `true` - Results were printed and, if requested, saved
/// * `false` - Saving to the output file failed
pub fn emit_results(urls: &[ParsedUrl], output_path: Option<&Path>) -> bool {
    if let Err(e) = print_urls(urls) {
        tracing::error!("Failed to print results: {}", e);
    }

    let Some(path) = output_path else {
        return true;
    };

    match save_urls(path, urls) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("{}", e);
            println!("{}", SAVE_FAILED_MESSAGE);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_emit_results_without_file() {
        let urls = vec![ParsedUrl::parse("https://example.com/")];
        assert!(emit_results(&urls, None));
    }

    #[test]
    fn test_emit_results_saves_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let urls = vec![ParsedUrl::parse("https://example.com/a/b?x=1")];

        assert!(emit_results(&urls, Some(&path)));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "https://example.com/a/b?x=1\n"
        );
    }

    #[test]
    fn test_emit_results_save_failure_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let urls = vec![ParsedUrl::parse("https://example.com/")];

        assert!(!emit_results(&urls, Some(&path)));
    }
}
