//! Query string key comparison
//!
//! Only parameter names matter here. Values are ignored, keys are opaque
//! tokens (no decoding), and repeated keys are counted every time they occur.

/// Extracts the parameter names of a query string, in order
///
/// Every `&`-separated piece yields a key (the text before its first `=`),
/// even when the piece is empty or has no `=`.
///
/// # Examples
///
/// ```
/// use uddup::dedup::query_keys;
///
/// assert_eq!(query_keys("id=1&cat=2"), vec!["id", "cat"]);
/// assert_eq!(query_keys("flag&=x&id=1=2"), vec!["flag", "", "id"]);
/// ```
pub fn query_keys(query: &str) -> Vec<&str> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').map_or(pair, |(key, _)| key))
        .collect()
}

/// Returns true if every key of `old` also appears in `new`
pub fn all_params_exist(old: &str, new: &str) -> bool {
    let new_keys = query_keys(new);
    query_keys(old).iter().all(|key| new_keys.contains(key))
}

/// Returns true if `new` has strictly more keys than `old`
pub fn has_more_params(old: &str, new: &str) -> bool {
    query_keys(new).len() > query_keys(old).len()
}
