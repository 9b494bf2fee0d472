//! Locale-independent number formatting and parsing for the line formats.
//!
//! Every numeric field in a blueprint line is rendered with a dot decimal
//! separator and the shortest representation that parses back to the same
//! value, so `1.0` renders as `1` and `0.1` renders as `0.1`.

use std::str::FromStr;

/// Render a float the way every line format expects it.
pub fn format_float(value: f32) -> String {
    // -0.0 renders as "-0"; keep it, it parses back to the same bits
    value.to_string()
}

/// Parse a float, tolerating surrounding whitespace and a leading `+`.
/// Returns `None` for anything that is not a finite-or-infinite float literal.
pub fn parse_float(token: &str) -> Option<f32> {
    let trimmed = token.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }
    f32::from_str(trimmed).ok()
}

/// Parse an integer, tolerating surrounding whitespace.
pub fn parse_int(token: &str) -> Option<i32> {
    i32::from_str(token.trim()).ok()
}

/// Parse a boolean case-insensitively (`true` / `false`).
pub fn parse_bool(token: &str) -> Option<bool> {
    let trimmed = token.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Render a boolean as `True` / `False`.
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
