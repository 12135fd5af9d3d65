//! Text helpers for participant rows and markup.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters a URI component keeps as-is: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Human-readable name for a participant identifier.
///
/// `jane.doe@example.com` becomes `Jane Doe`: the local part is kept, `.` and
/// `_` turn into spaces and every word gets an uppercase first letter.
pub fn format_display_name(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let local = raw.split('@').next().unwrap_or_default();

    let mut out = String::with_capacity(local.len());
    let mut prev_word = false;
    for c in local.chars() {
        let c = if c == '.' || c == '_' { ' ' } else { c };
        let word = is_word_char(c);
        if word && !prev_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_word = word;
    }
    out
}

/// Two-letter badge text: first and last word initials, or the first two
/// letters of a single word.
pub fn initials_from_name(raw: &str) -> String {
    let name = format_display_name(raw);
    let parts: Vec<&str> = name.split_whitespace().collect();

    match parts.as_slice() {
        [] => String::new(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}

/// Escapes text for HTML bodies and quoted attributes. Absent input is empty.
pub fn escape_html(value: Option<&str>) -> String {
    let value = value.unwrap_or_default();
    // `&` goes first so the entities produced below are not escaped again.
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn escape(value: &str) -> String {
    escape_html(Some(value))
}

/// Percent-encodes a path segment or query value the way browsers'
/// `encodeURIComponent` does.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
