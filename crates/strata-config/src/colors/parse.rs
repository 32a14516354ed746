//! Internal color literal parsing helpers.
//!
//! Handles the low-level conversion of hex and `rgb()` string formats
//! into [`Rgb`] values. Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;
use strata_common::Rgb;

/// Regex for hex color: #RGB or #RRGGBB.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Regex for `rgb(r,g,b)` with 0-255 integer channels.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

/// Regex for design tokens: dot-separated lowercase identifiers.
pub(crate) static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_-]*(\.[a-z0-9_-]+)+$").unwrap());

/// Parse a hex color string (#RGB or #RRGGBB).
pub(super) fn parse_hex(s: &str) -> Option<Rgb> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    Rgb::from_hex(s)
}

/// Parse an `rgb(r,g,b)` color string.
pub(super) fn parse_rgb(s: &str) -> Option<Rgb> {
    let caps = RGB_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    Some(Rgb::from_bytes(r, g, b))
}

/// Parse any supported color literal.
pub(super) fn parse_literal(s: &str) -> Option<Rgb> {
    if s.starts_with('#') {
        parse_hex(s)
    } else if s.starts_with("rgb(") {
        parse_rgb(s)
    } else {
        None
    }
}
