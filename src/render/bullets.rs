//! Bullet glyph normalization.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Decorative bullet glyphs recognized at the start of a line.
pub const BULLET_GLYPHS: [char; 5] = ['•', '◦', '▪', '▸', '‣'];

/// Leading whitespace followed by a bullet glyph.
static LEADING_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[•◦▪▸‣]").expect("bullet pattern is valid"));

/// Check whether a character is a recognized bullet glyph.
pub fn is_bullet(c: char) -> bool {
    BULLET_GLYPHS.contains(&c)
}

/// Replace a leading bullet glyph with `-`.
///
/// Only the first non-whitespace character is considered. Leading
/// whitespace and the rest of the line are kept as they are; lines
/// without a leading bullet are returned borrowed.
pub fn normalize_bullet(line: &str) -> Cow<'_, str> {
    LEADING_BULLET.replace(line, "${1}-")
}
