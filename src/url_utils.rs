//! URL Utility Functions
//!
//! Percent-decoding for rendered text and metadata values, plus the small
//! amount of URL handling the fetcher needs: scheme normalisation,
//! validation and host extraction.

use std::borrow::Cow;

use url::Url;

/// Decode `%XX` escapes in `s`.
///
/// Decoding never fails outward: if the escapes do not form valid UTF-8 a
/// warning is logged and the original string is returned unchanged.
/// Malformed escapes (a `%` not followed by two hex digits) are kept as
/// literal text. `+` is not treated as a space.
///
/// # Examples
///
/// ```
/// use webpage_fetcher::url_utils::percent_decode;
///
/// assert_eq!(percent_decode("caf%C3%A9"), "café");
/// assert_eq!(percent_decode("100%"), "100%");
/// assert_eq!(percent_decode("bad %FF byte"), "bad %FF byte");
/// ```
#[must_use]
pub fn percent_decode(s: &str) -> String {
    if !s.contains('%') {
        return s.to_string();
    }

    match urlencoding::decode(s) {
        Ok(Cow::Borrowed(decoded)) => decoded.to_string(),
        Ok(Cow::Owned(decoded)) => decoded,
        Err(err) => {
            tracing::warn!(error = %err, input = s, "percent-decoding failed, keeping original text");
            s.to_string()
        }
    }
}

/// Add `https://` when the URL carries no scheme.
///
/// # Examples
///
/// ```
/// use webpage_fetcher::url_utils::ensure_scheme;
///
/// assert_eq!(ensure_scheme("example.com"), "https://example.com");
/// assert_eq!(ensure_scheme("http://example.com"), "http://example.com");
/// ```
#[must_use]
pub fn ensure_scheme(url: &str) -> String {
    let url = url.trim();
    if has_scheme(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or
/// `.`, terminated by `://`.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// True when `url` parses and names a host.
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    host(url).is_some()
}

/// Host part of `url`, if it parses and has one.
#[must_use]
pub fn host(url: &str) -> Option<String> {
    Url::parse(url.trim())
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .filter(|h| !h.is_empty())
}

/// Host of `url` followed by `:port` when a non-default port is given.
///
/// # Examples
///
/// ```
/// use webpage_fetcher::url_utils::host_with_port;
///
/// assert_eq!(host_with_port("http://localhost:8080/x").as_deref(), Some("localhost:8080"));
/// assert_eq!(host_with_port("https://example.com:443/").as_deref(), Some("example.com"));
/// ```
#[must_use]
pub fn host_with_port(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str().filter(|h| !h.is_empty())?;
    Some(match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_escapes() {
        assert_eq!(percent_decode("a%20b"), "a b");
        assert_eq!(percent_decode("%E6%97%A5%E6%9C%AC"), "日本");
    }

    #[test]
    fn plus_is_not_space() {
        assert_eq!(percent_decode("a+b"), "a+b");
    }

    #[test]
    fn invalid_utf8_keeps_original() {
        assert_eq!(percent_decode("%C3%28"), "%C3%28");
    }

    #[test]
    fn text_without_escapes_passes_through() {
        assert_eq!(percent_decode("plain text"), "plain text");
        assert_eq!(percent_decode(""), "");
    }

    #[test]
    fn ensure_scheme_adds_https_only_when_missing() {
        assert_eq!(ensure_scheme("example.com/path"), "https://example.com/path");
        assert_eq!(ensure_scheme("  example.com "), "https://example.com");
        assert_eq!(ensure_scheme("https://example.com"), "https://example.com");
        assert_eq!(ensure_scheme("ftp://files.example.com"), "ftp://files.example.com");
    }

    #[test]
    fn validity_requires_a_host() {
        assert!(is_valid_url("https://example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("mailto:someone@example.com"));
    }

    #[test]
    fn host_extraction() {
        assert_eq!(host("https://en.wikipedia.org/wiki/Rust"), Some("en.wikipedia.org".to_string()));
        assert_eq!(host("https://www.example.com:8080/x"), Some("www.example.com".to_string()));
        assert_eq!(host("garbage"), None);
    }
}
