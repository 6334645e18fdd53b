//! Conversion result with statistics.

use crate::classify::Style;
use serde::{Deserialize, Serialize};

/// Result of converting a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted Markdown
    pub content: String,

    /// Conversion statistics
    pub stats: ConversionStats,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, stats: ConversionStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected during conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of input lines
    pub line_count: u32,

    /// Number of `**bold**` spans emitted
    pub bold_spans: u32,

    /// Number of `*italic*` spans emitted
    pub italic_spans: u32,

    /// Number of inline code spans emitted
    pub mono_spans: u32,

    /// Number of styled scalar values replaced by plain characters
    pub styled_chars: u32,

    /// Number of bullet glyphs replaced by `-`
    pub bullets_normalized: u32,

    /// Number of fenced code blocks emitted
    pub code_blocks: u32,

    /// Number of lines placed inside fenced code blocks
    pub code_block_lines: u32,
}

impl ConversionStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one emitted inline span.
    pub fn record_span(&mut self, style: Style) {
        match style {
            Style::Bold => self.bold_spans += 1,
            Style::Italic => self.italic_spans += 1,
            Style::Mono => self.mono_spans += 1,
        }
    }

    /// Total number of inline spans.
    pub fn span_count(&self) -> u32 {
        self.bold_spans + self.italic_spans + self.mono_spans
    }

    /// Check whether conversion changed anything.
    pub fn is_unchanged(&self) -> bool {
        self.styled_chars == 0 && self.bullets_normalized == 0
    }
}
