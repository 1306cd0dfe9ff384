//! Text normalization for CMS field values
//!
//! WordPress delivers rendered titles and ACF text fields with HTML entities
//! encoded, and list-style fields as newline-delimited blobs. These helpers
//! convert raw field values into clean display-ready strings.
//!
//! This is a best-effort normalizer, not an HTML parser: malformed or partial
//! entities are left as-is.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches decimal (`&#39;`) and hex (`&#x27;`) numeric character references.
static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(x[0-9a-fA-F]{1,6}|[0-9]{1,7});").unwrap());

/// Matches tag markup, non-greedy so adjacent tags decode independently.
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*?>").unwrap());

/// Decode numeric character references and the standard named HTML entities.
///
/// Idempotent on already-decoded text. `&amp;` is replaced last so that
/// decoded text containing a literal `&` is not re-interpreted.
pub fn decode_html_entities(text: &str) -> String {
    let decoded = NUMERIC_ENTITY.replace_all(text, |caps: &regex::Captures| {
        let body = &caps[1];
        let code = if let Some(hex) = body.strip_prefix('x') {
            u32::from_str_radix(hex, 16)
        } else {
            body.parse::<u32>()
        };
        match code.ok().and_then(char::from_u32) {
            Some(c) => c.to_string(),
            // Out-of-range reference: leave the original text alone
            None => caps[0].to_string(),
        }
    });

    decoded
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Strip all tag markup from an HTML fragment and decode entities.
///
/// Intended for listing/summary contexts (excerpts, card descriptions) where
/// rich text must become plain text. Block-level whitespace is not preserved.
pub fn strip_html(html: &str) -> String {
    let stripped = TAG.replace_all(html, "");
    decode_html_entities(stripped.trim())
}

/// Split a newline-delimited CMS field into trimmed, non-empty lines.
pub fn parse_newline_list(text: Option<&str>) -> Vec<String> {
    match text {
        Some(text) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        None => Vec::new(),
    }
}
