//! URL handling module for UDdup
//!
//! This module provides lenient URL splitting, the fixed suffix tables and
//! the path classification that drives the deduplication decision.

mod parse;
mod suffix;

// Re-export main types and functions
pub use parse::ParsedUrl;
pub use suffix::{is_ignored_suffix, is_web_suffix, IGNORED_SUFFIXES, WEB_SUFFIXES};

/// How a URL path is handled by the deduplicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathClass {
    /// Empty path: the URL is a bare host or root, always kept
    Root,
    /// Static asset or document, always dropped
    Ignored,
    /// Dynamic page extension, always kept
    WebPage,
    /// A single path segment, nothing to generalize over
    SingleSegment,
    /// Two or more segments; `pattern` is every segment but the last
    Patterned { pattern: String },
}

/// Strips every leading and trailing `/` from a path
pub fn trim_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// Classifies a trimmed URL path
///
/// The checks run in a fixed priority order:
/// 1. Empty path
/// 2. Ignored suffix (checked before web suffixes, so `xml` is ignored)
/// 3. Web page suffix
/// 4. Segment count
///
/// # Examples
///
/// ```
/// use uddup::url::{classify_path, PathClass};
///
/// assert_eq!(classify_path(""), PathClass::Root);
/// assert_eq!(classify_path("img/logo.png"), PathClass::Ignored);
/// assert_eq!(classify_path("a/index.php"), PathClass::WebPage);
/// assert_eq!(classify_path("about"), PathClass::SingleSegment);
/// assert_eq!(
///     classify_path("shop/items/42"),
///     PathClass::Patterned { pattern: "shop/items".to_string() }
/// );
/// ```
pub fn classify_path(trimmed: &str) -> PathClass {
    if trimmed.is_empty() {
        return PathClass::Root;
    }

    if is_ignored_suffix(trimmed) {
        return PathClass::Ignored;
    }

    if is_web_suffix(trimmed) {
        return PathClass::WebPage;
    }

    match trimmed.rsplit_once('/') {
        Some((pattern, _last)) => PathClass::Patterned {
            pattern: pattern.to_string(),
        },
        None => PathClass::SingleSegment,
    }
}
