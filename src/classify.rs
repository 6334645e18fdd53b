//! Classification of Unicode mathematical alphanumeric symbols.
//!
//! Each styled symbol maps linearly onto a plain ASCII letter or digit.
//! The lookup table is static and ordered: bold ranges are tried first,
//! then italic, then monospace, and within a style ranges are tried in
//! table order. The first range containing a codepoint wins.

use serde::{Deserialize, Serialize};

/// Markdown emphasis implied by a styled codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    /// Mathematical bold (serif and sans-serif)
    Bold,
    /// Mathematical italic (serif and sans-serif)
    Italic,
    /// Mathematical monospace
    Mono,
}

impl Style {
    /// Markdown delimiter placed on both sides of a span.
    pub fn delimiter(self) -> &'static str {
        match self {
            Style::Bold => "**",
            Style::Italic => "*",
            Style::Mono => "`",
        }
    }

    /// Wrap `span` in this style's Markdown delimiters.
    pub fn wrap(self, span: &str) -> String {
        let delimiter = self.delimiter();
        let mut out = String::with_capacity(span.len() + delimiter.len() * 2);
        out.push_str(delimiter);
        out.push_str(span);
        out.push_str(delimiter);
        out
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::Mono => "mono",
        };
        f.write_str(name)
    }
}

/// A contiguous block of styled codepoints mapping onto an ASCII run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRange {
    /// First codepoint of the block (inclusive)
    pub first: u32,
    /// Last codepoint of the block (inclusive)
    pub last: u32,
    /// ASCII codepoint that `first` maps to
    pub base: u8,
    /// Style of every codepoint in the block
    pub style: Style,
}

impl StyledRange {
    const fn new(first: u32, last: u32, base: u8, style: Style) -> Self {
        Self {
            first,
            last,
            base,
            style,
        }
    }

    /// Check whether `cp` falls inside this range.
    pub fn contains(&self, cp: u32) -> bool {
        (self.first..=self.last).contains(&cp)
    }

    /// Map a contained codepoint onto its ASCII character.
    fn map(&self, cp: u32) -> char {
        // Ranges span at most 26 codepoints, so the offset always fits.
        char::from(self.base + (cp - self.first) as u8)
    }
}

/// Styled ranges in priority order: bold, italic, monospace.
pub const STYLED_RANGES: &[StyledRange] = &[
    // Bold sans-serif
    StyledRange::new(0x1D5D4, 0x1D5ED, b'A', Style::Bold),
    StyledRange::new(0x1D5EE, 0x1D607, b'a', Style::Bold),
    StyledRange::new(0x1D7EC, 0x1D7F5, b'0', Style::Bold),
    // Bold serif
    StyledRange::new(0x1D400, 0x1D419, b'A', Style::Bold),
    StyledRange::new(0x1D41A, 0x1D433, b'a', Style::Bold),
    StyledRange::new(0x1D7CE, 0x1D7D7, b'0', Style::Bold),
    // Italic sans-serif
    StyledRange::new(0x1D608, 0x1D621, b'A', Style::Italic),
    StyledRange::new(0x1D622, 0x1D63B, b'a', Style::Italic),
    // Italic serif
    StyledRange::new(0x1D434, 0x1D44D, b'A', Style::Italic),
    StyledRange::new(0x1D44E, 0x1D467, b'a', Style::Italic),
    // Monospace
    StyledRange::new(0x1D670, 0x1D689, b'A', Style::Mono),
    StyledRange::new(0x1D68A, 0x1D6A3, b'a', Style::Mono),
    StyledRange::new(0x1D7F6, 0x1D7FF, b'0', Style::Mono),
];

/// Result of classifying a single scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Normalized character (the input itself when unstyled)
    pub ch: char,
    /// Style, or `None` for plain characters
    pub style: Option<Style>,
}

impl Classification {
    /// Check whether the normalized character is an ASCII letter or digit.
    pub fn is_alphanumeric(&self) -> bool {
        self.ch.is_ascii_alphanumeric()
    }

    /// Check whether the character carries the given style.
    pub fn is(&self, style: Style) -> bool {
        self.style == Some(style)
    }
}

/// Classify one scalar value against [`STYLED_RANGES`].
pub fn classify(c: char) -> Classification {
    let cp = c as u32;
    match STYLED_RANGES.iter().find(|range| range.contains(cp)) {
        Some(range) => Classification {
            ch: range.map(cp),
            style: Some(range.style),
        },
        None => Classification {
            ch: c,
            style: None,
        },
    }
}

/// Style of a scalar value, if any.
pub fn style_of(c: char) -> Option<Style> {
    classify(c).style
}

/// Replace every styled scalar value with its plain character.
///
/// No Markdown delimiters are added.
pub fn normalize_text(text: &str) -> String {
    text.chars().map(|c| classify(c).ch).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(cp: u32) -> char {
        char::from_u32(cp).unwrap()
    }

    #[test]
    fn test_every_range_maps_linearly() {
        for range in STYLED_RANGES {
            for cp in range.first..=range.last {
                let result = classify(ch(cp));
                let expected = char::from(range.base + (cp - range.first) as u8);
                assert_eq!(result.ch, expected, "codepoint U+{:X}", cp);
                assert_eq!(result.style, Some(range.style), "codepoint U+{:X}", cp);
            }
        }
    }

    #[test]
    fn test_unstyled_passthrough() {
        for c in ['a', 'Z', '0', ' ', '(', 'é', '한', '•', '\u{1F600}'] {
            assert_eq!(classify(c), Classification { ch: c, style: None });
        }
    }

    #[test]
    fn test_range_boundaries() {
        // Just outside the bold serif block and the monospace digits
        assert_eq!(classify(ch(0x1D3FF)).style, None);
        assert_eq!(classify(ch(0x1D6A4)).style, None);
        assert_eq!(classify(ch(0x1D7CD)).style, None);

        assert_eq!(classify(ch(0x1D7FF)).ch, '9');
        assert_eq!(classify(ch(0x1D7FF)).style, Some(Style::Mono));
    }

    #[test]
    fn test_ranges_do_not_overlap() {
        for (i, a) in STYLED_RANGES.iter().enumerate() {
            for b in &STYLED_RANGES[i + 1..] {
                assert!(
                    a.last < b.first || b.last < a.first,
                    "{:?} overlaps {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_sample_letters() {
        assert_eq!(classify('𝗕'), Classification { ch: 'B', style: Some(Style::Bold) });
        assert_eq!(classify('𝐛'), Classification { ch: 'b', style: Some(Style::Bold) });
        assert_eq!(classify('𝘐'), Classification { ch: 'I', style: Some(Style::Italic) });
        assert_eq!(classify('𝑥'), Classification { ch: 'x', style: Some(Style::Italic) });
        assert_eq!(classify('𝚌'), Classification { ch: 'c', style: Some(Style::Mono) });
        assert_eq!(classify('𝟷'), Classification { ch: '1', style: Some(Style::Mono) });
        assert_eq!(classify('𝟭'), Classification { ch: '1', style: Some(Style::Bold) });
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("𝚏𝚞𝚗𝚌 𝚖𝚊𝚒𝚗()"), "func main()");
        assert_eq!(normalize_text("𝗕𝗼𝗹𝗱 and 𝘐𝘵𝘢𝘭𝘪𝘤"), "Bold and Italic");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_style_wrap() {
        assert_eq!(Style::Bold.wrap("x"), "**x**");
        assert_eq!(Style::Italic.wrap("x"), "*x*");
        assert_eq!(Style::Mono.wrap("x"), "`x`");
        assert_eq!(Style::Mono.to_string(), "mono");
    }
}
