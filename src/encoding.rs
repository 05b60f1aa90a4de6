//! Character encoding detection and transcoding.
//!
//! Web pages still arrive in legacy encodings; this module detects the
//! charset declared in the document head and converts the bytes to UTF-8
//! before extraction.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Match `<meta charset="...">` declarations.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});

/// Detect the character encoding declared in the first 1024 bytes.
///
/// Handles both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">` forms
/// (the charset attribute pattern matches inside the content value too).
/// Defaults to UTF-8 when no declaration is found or the label is unknown.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    META_CHARSET
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with the Unicode replacement character
/// rather than surfaced as errors; a mangled character is recoverable,
/// a failed extraction is not.
///
/// # Examples
///
/// ```
/// use article_density::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// assert!(transcode_to_utf8(html).contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
