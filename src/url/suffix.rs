/// Static assets and documents that are never worth testing
///
/// Entries carry no leading dot: a path matches when it simply ends with the
/// entry, so `"assets/access"` matches `"css"` as well.
pub const IGNORED_SUFFIXES: &[&str] = &[
    "css", "js", "gif", "jpg", "png", "jpeg", "svg", "xml", "txt", "json", "ico", "webp", "otf",
    "ttf", "woff", "woff2", "eot", "swf", "zip", "pdf", "doc", "ppt", "docx", "xls", "xlsx",
    "ogg", "mp4", "mp3", "mov",
];

/// Dynamic page extensions that are kept as-is, without pattern collapsing
pub const WEB_SUFFIXES: &[&str] = &[
    "htm", "html", "xhtml", "shtml", "jhtml", "cfm", "jsp", "jspx", "wss", "action", "php",
    "php4", "php5", "py", "rb", "pl", "do", "xml", "rss", "cgi", "axd", "asx", "asmx", "ashx",
    "asp", "aspx", "dll",
];

/// Returns true if the trimmed path ends with an ignored suffix
pub fn is_ignored_suffix(path: &str) -> bool {
    IGNORED_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

/// Returns true if the trimmed path ends with a web page suffix
pub fn is_web_suffix(path: &str) -> bool {
    WEB_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}
