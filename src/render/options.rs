//! Conversion options and configuration.

use crate::error::{Error, Result};

/// Default number of consecutive mono-only lines that form a code block.
pub const DEFAULT_MIN_CODE_BLOCK_LINES: usize = 3;

/// Default fence line for code blocks.
pub const DEFAULT_FENCE: &str = "```";

/// Options for converting styled text to Markdown.
///
/// The defaults reproduce the standard conversion exactly.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Replace a leading bullet glyph (•, ◦, ▪, ▸, ‣) with `-`
    pub normalize_bullets: bool,

    /// Turn runs of mono-only lines into fenced code blocks
    pub detect_code_blocks: bool,

    /// Minimum run length of mono-only lines for a fenced block
    pub min_code_block_lines: usize,

    /// Line that opens and closes a fenced block
    pub fence: String,

    /// Collect conversion statistics
    pub collect_stats: bool,
}

impl ConvertOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable bullet normalization.
    pub fn with_bullets(mut self, normalize: bool) -> Self {
        self.normalize_bullets = normalize;
        self
    }

    /// Enable or disable fenced code block detection.
    pub fn with_code_blocks(mut self, detect: bool) -> Self {
        self.detect_code_blocks = detect;
        self
    }

    /// Set the minimum number of mono-only lines for a fenced block.
    ///
    /// Values below 1 are raised to 1.
    pub fn with_min_code_block_lines(mut self, lines: usize) -> Self {
        self.min_code_block_lines = lines.max(1);
        self
    }

    /// Set the fence line (e.g. "~~~").
    pub fn with_fence(mut self, fence: impl Into<String>) -> Self {
        self.fence = fence.into();
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Check option values that the builder cannot clamp.
    pub fn validate(&self) -> Result<()> {
        if self.min_code_block_lines == 0 {
            return Err(Error::InvalidOption(
                "min_code_block_lines must be at least 1".into(),
            ));
        }
        if self.fence.is_empty() || self.fence.contains('\n') {
            return Err(Error::InvalidOption(
                "fence must be a single non-empty line".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            normalize_bullets: true,
            detect_code_blocks: true,
            min_code_block_lines: DEFAULT_MIN_CODE_BLOCK_LINES,
            fence: DEFAULT_FENCE.to_string(),
            collect_stats: false,
        }
    }
}
