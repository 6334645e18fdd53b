//! Detection of monospace-only lines and code block runs.

use crate::classify::{classify, normalize_text, Style};

use super::bullets::is_bullet;

/// Check whether a line consists of monospace content only.
///
/// The line must contain at least one monospace character, and every
/// ASCII letter or digit in it (after normalization) must come from a
/// monospace character. Plain punctuation and whitespace are allowed.
pub fn is_mono_only(line: &str) -> bool {
    let mut has_mono = false;
    for c in line.chars() {
        let class = classify(c);
        if class.is(Style::Mono) {
            has_mono = true;
        } else if class.is_alphanumeric() {
            return false;
        }
    }
    has_mono
}

/// Mono-only flag for every line, aligned to line indices.
pub fn mono_flags<S: AsRef<str>>(lines: &[S]) -> Vec<bool> {
    lines.iter().map(|line| is_mono_only(line.as_ref())).collect()
}

/// Length of the run of `true` flags starting at `start`.
pub fn mono_run_len(flags: &[bool], start: usize) -> usize {
    flags
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|&&flag| flag).count())
}

/// Convert a mono-only line that stands outside a fenced block.
///
/// Leading indentation and a list marker stay outside the span; the
/// rest of the line, minus trailing whitespace, becomes one inline code
/// span with every character normalized.
pub fn convert_mono_line(line: &str) -> String {
    let (prefix, rest) = split_list_prefix(line);
    let body = rest.trim_end();
    let trailing = &rest[body.len()..];

    let mut output = String::with_capacity(line.len());
    output.push_str(prefix);
    output.push_str(&Style::Mono.wrap(&normalize_text(body)));
    output.push_str(trailing);
    output
}

/// Split leading whitespace plus an optional list marker from the content.
fn split_list_prefix(line: &str) -> (&str, &str) {
    let content = line.trim_start();
    let mut split = line.len() - content.len();

    if let Some(after_marker) = content.strip_prefix(|c: char| c == '-' || is_bullet(c)) {
        let after_gap = after_marker.trim_start();
        if after_gap.len() < after_marker.len() && !after_gap.is_empty() {
            split = line.len() - after_gap.len();
        }
    }

    line.split_at(split)
}
