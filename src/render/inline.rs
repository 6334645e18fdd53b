//! Inline span merging for a single line.
//!
//! Consecutive scalar values of the same style are collected into one
//! span and wrapped in that style's Markdown delimiters. A run of spaces
//! or tabs stays inside the span only when it sits between two
//! characters of the same style.

use crate::classify::classify;

use super::ConversionStats;

/// Convert styled runs in one line to inline Markdown spans.
pub fn convert_inline(line: &str) -> String {
    let mut stats = ConversionStats::new();
    convert_inline_with_stats(line, &mut stats)
}

pub(crate) fn convert_inline_with_stats(line: &str, stats: &mut ConversionStats) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut output = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        let current = classify(chars[i]);
        let Some(style) = current.style else {
            output.push(chars[i]);
            i += 1;
            continue;
        };

        let mut span = String::new();
        span.push(current.ch);
        stats.styled_chars += 1;

        let mut j = i + 1;
        while j < chars.len() {
            let next = classify(chars[j]);
            if next.is(style) {
                span.push(next.ch);
                stats.styled_chars += 1;
                j += 1;
            } else if is_blank(chars[j]) {
                let k = skip_blanks(&chars, j);
                if k < chars.len() && classify(chars[k]).is(style) {
                    span.extend(&chars[j..k]);
                    j = k;
                } else {
                    break;
                }
            } else {
                break;
            }
        }

        output.push_str(&style.wrap(&span));
        stats.record_span(style);
        i = j;
    }

    output
}

/// Space or tab; the only characters allowed to bridge a span.
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Index of the first non-blank character at or after `from`.
fn skip_blanks(chars: &[char], from: usize) -> usize {
    chars[from..]
        .iter()
        .position(|&c| !is_blank(c))
        .map_or(chars.len(), |offset| from + offset)
}
