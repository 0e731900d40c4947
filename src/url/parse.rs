use std::fmt;

/// Schemes whose last path segment may carry `;params`
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

/// Schemes that are written with a `//netloc` part even when it is empty
const USES_NETLOC: &[&str] = &[
    "", "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https",
    "shttp", "snews", "prospero", "rtsp", "rtspu", "rsync", "svn", "svn+ssh", "sftp", "nfs",
    "git", "git+ssh", "ws", "wss", "itms-services",
];

/// A URL split into its raw components
///
/// Splitting never fails and never rewrites the text:
/// no percent-encoding, no case folding of the host, no path normalization.
/// Anything that does not look like a URL simply ends up in `path`.
///
/// Two values are equal when every component is equal, which is the identity
/// used by [`KeptSet`](crate::dedup::KeptSet).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedUrl {
    scheme: String,
    netloc: String,
    path: String,
    params: String,
    query: String,
    fragment: String,
}

impl ParsedUrl {
    /// Splits a URL string into its components
    ///
    /// # Examples
    ///
    /// ```
    /// use uddup::url::ParsedUrl;
    ///
    /// let url = ParsedUrl::parse("https://example.com/shop/view?id=1");
    /// assert_eq!(url.scheme(), "https");
    /// assert_eq!(url.netloc(), "example.com");
    /// assert_eq!(url.path(), "/shop/view");
    /// assert_eq!(url.query(), "id=1");
    ///
    /// // Nothing is rejected
    /// let junk = ParsedUrl::parse("not a url");
    /// assert_eq!(junk.path(), "not a url");
    /// ```
    pub fn parse(input: &str) -> Self {
        let cleaned: String = input
            .trim_start_matches(|c: char| c <= ' ')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();

        let (scheme, rest) = split_scheme(&cleaned);

        let (netloc, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after
                    .find(|c: char| matches!(c, '/' | '?' | '#'))
                    .unwrap_or(after.len());
                (&after[..end], &after[end..])
            }
            None => ("", rest),
        };

        let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
        let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));

        let (path, params) = if USES_PARAMS.contains(&scheme.as_str()) {
            split_params(rest)
        } else {
            (rest, "")
        };

        Self {
            scheme,
            netloc: netloc.to_string(),
            path: path.to_string(),
            params: params.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        }
    }

    /// Lowercased scheme, empty when none was recognised
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Network location (host, optional userinfo and port)
    pub fn netloc(&self) -> &str {
        &self.netloc
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `;params` tail of the last path segment, without the `;`
    pub fn params(&self) -> &str {
        &self.params
    }

    /// Query string without the leading `?`
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Path with all leading and trailing `/` removed
    pub fn trimmed_path(&self) -> &str {
        super::trim_path(&self.path)
    }
}

impl fmt::Display for ParsedUrl {
    /// Writes the canonical string form, re-assembled from the components
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut path = self.path.clone();
        if !self.params.is_empty() {
            path.push(';');
            path.push_str(&self.params);
        }

        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }

        if !self.netloc.is_empty() {
            write!(f, "//{}", self.netloc)?;
            if !path.is_empty() && !path.starts_with('/') {
                f.write_str("/")?;
            }
        } else if path.starts_with("//")
            || (!self.scheme.is_empty()
                && USES_NETLOC.contains(&self.scheme.as_str())
                && (path.is_empty() || path.starts_with('/')))
        {
            f.write_str("//")?;
        }
        f.write_str(&path)?;

        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

/// Splits off a leading `scheme:` when the text before the first `:` is a
/// valid scheme name
fn split_scheme(input: &str) -> (String, &str) {
    if let Some((candidate, rest)) = input.split_once(':') {
        let valid = candidate
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && candidate
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if valid {
            return (candidate.to_ascii_lowercase(), rest);
        }
    }
    (String::new(), input)
}

/// Splits `;params` from the last path segment
fn split_params(path: &str) -> (&str, &str) {
    let last_segment = path.rfind('/').unwrap_or(0);
    match path[last_segment..].find(';') {
        Some(offset) => {
            let at = last_segment + offset;
            (&path[..at], &path[at + 1..])
        }
        None => (path, ""),
    }
}
