//! Character encoding detection and transcoding.
//!
//! Page HTML read from disk or stdin arrives as bytes. The charset comes
//! from a byte order mark, then a `<meta>` declaration in the first
//! kilobyte, then defaults to UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How far into the document charset declarations are looked for.
const SNIFF_LEN: usize = 1024;

/// Matches both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?\bcharset\s*=\s*["']?([A-Za-z0-9_.:-]+)"#).expect("valid regex")
});

/// Detect the encoding of an HTML byte stream.
///
/// Returns the encoding and the number of BOM bytes to skip.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(html) {
        return (encoding, bom_len);
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    let declared = META_CHARSET_RE
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()));

    (declared.unwrap_or(UTF_8), 0)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use webpage_fetcher::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1252\"><p>\x93quoted\x94</p>";
/// assert!(transcode_to_utf8(html).contains("\u{201C}quoted\u{201D}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (encoding, bom_len) = detect_encoding(html);
    let body = &html[bom_len..];

    let (decoded, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8() {
        let (encoding, bom) = detect_encoding(b"<html><body>plain</body></html>");
        assert_eq!(encoding, UTF_8);
        assert_eq!(bom, 0);
    }

    #[test]
    fn meta_charset_is_honoured() {
        let (encoding, _) = detect_encoding(br#"<meta charset="ISO-8859-1">"#);
        // WHATWG maps ISO-8859-1 to windows-1252.
        assert_eq!(encoding.name(), "windows-1252");

        let (encoding, _) = detect_encoding(b"<META CHARSET=shift_jis>");
        assert_eq!(encoding.name(), "Shift_JIS");
    }

    #[test]
    fn http_equiv_declaration_is_honoured() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=KOI8-R">"#;
        let (encoding, _) = detect_encoding(html);
        assert_eq!(encoding.name(), "KOI8-R");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let (encoding, _) = detect_encoding(br#"<meta charset="no-such-charset">"#);
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn bom_wins_over_meta() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice(br#"<meta charset="windows-1252"><p>ok</p>"#);
        let (encoding, bom) = detect_encoding(&html);
        assert_eq!(encoding, UTF_8);
        assert_eq!(bom, 3);
        assert!(transcode_to_utf8(&html).starts_with("<meta"));
    }

    #[test]
    fn latin1_bytes_are_transcoded() {
        let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
        assert!(transcode_to_utf8(html).contains("Café"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let result = transcode_to_utf8(b"<p>ok \xFF\xFE still ok</p>");
        assert!(result.contains("ok"));
        assert!(result.contains("still ok"));
        assert!(result.contains('\u{FFFD}'));
    }
}
