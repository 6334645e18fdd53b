//! # unstyle
//!
//! Convert Unicode "styled" text to Markdown.
//!
//! Social media posts and chat messages often fake formatting with the
//! Mathematical Alphanumeric Symbols block: 𝗯𝗼𝗹𝗱, 𝘪𝘵𝘢𝘭𝘪𝘤 and 𝚖𝚘𝚗𝚘𝚜𝚙𝚊𝚌𝚎
//! letters that look styled but are unreadable to search engines,
//! screen readers and Markdown tooling. This library maps them back to
//! plain ASCII and expresses the styling as Markdown.
//!
//! ## Quick Start
//!
//! ```
//! let markdown = unstyle::convert("𝗕𝗼𝗹𝗱 and 𝘐𝘵𝘢𝘭𝘪𝘤");
//! assert_eq!(markdown, "**Bold** and *Italic*");
//! ```
//!
//! ## Features
//!
//! - **Inline spans**: bold, italic and monospace runs become `**..**`,
//!   `*..*` and `` `..` ``
//! - **Bullets**: leading `•`, `◦`, `▪`, `▸`, `‣` become `-`
//! - **Code blocks**: three or more monospace-only lines become a fenced block
//! - **Parallel batches**: convert many documents at once with Rayon
//! - **Sample checking**: run input/expected pairs and report mismatches

pub mod check;
pub mod classify;
pub mod error;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use check::{CheckReport, SampleCase};
pub use classify::{classify, Classification, Style, StyledRange, STYLED_RANGES};
pub use error::{Error, Result};
pub use render::{ConversionStats, ConvertOptions, ConvertResult};

use rayon::prelude::*;
use std::io::Read;
use std::path::Path;

/// Convert styled text to Markdown with default options.
///
/// Conversion never fails: characters outside the styled ranges pass
/// through unchanged, and the empty string converts to itself.
///
/// # Example
///
/// ```
/// assert_eq!(unstyle::convert("𝚟𝚊𝚛 𝚡 = 𝟷𝟶"), "`var x = 10`");
/// ```
pub fn convert(text: &str) -> String {
    render::to_markdown(text, &ConvertOptions::default())
}

/// Convert styled text to Markdown with custom options.
///
/// # Example
///
/// ```
/// use unstyle::{convert_with_options, ConvertOptions};
///
/// let options = ConvertOptions::new().with_bullets(false);
/// assert_eq!(convert_with_options("• 𝗕", &options), "• **B**");
/// ```
pub fn convert_with_options(text: &str, options: &ConvertOptions) -> String {
    render::to_markdown(text, options)
}

/// Convert styled text and collect statistics.
pub fn convert_with_stats(text: &str, options: &ConvertOptions) -> ConvertResult {
    render::to_markdown_with_stats(text, options)
}

/// Convert a UTF-8 text file to Markdown.
///
/// # Example
///
/// ```no_run
/// let markdown = unstyle::convert_file("post.txt").unwrap();
/// std::fs::write("post.md", markdown).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<String> {
    convert_file_with_options(path, &ConvertOptions::default())
}

/// Convert a UTF-8 text file to Markdown with custom options.
pub fn convert_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<String> {
    let bytes = std::fs::read(path)?;
    convert_bytes_with_options(&bytes, options)
}

/// Convert UTF-8 bytes to Markdown.
///
/// Invalid UTF-8 is rejected with [`Error::Encoding`].
pub fn convert_bytes(data: &[u8]) -> Result<String> {
    convert_bytes_with_options(data, &ConvertOptions::default())
}

/// Convert UTF-8 bytes to Markdown with custom options.
pub fn convert_bytes_with_options(data: &[u8], options: &ConvertOptions) -> Result<String> {
    options.validate()?;
    let text = std::str::from_utf8(data).map_err(|e| Error::Encoding(e.to_string()))?;
    Ok(render::to_markdown(text, options))
}

/// Convert everything readable from a reader.
pub fn convert_reader<R: Read>(mut reader: R) -> Result<String> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    convert_bytes(&data)
}

/// Read and convert a UTF-8 text file asynchronously.
#[cfg(feature = "async")]
pub async fn convert_file_async<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    convert_bytes_with_options(&bytes, options)
}

/// Convert many documents in parallel.
///
/// Output order matches input order.
///
/// # Example
///
/// ```
/// let out = unstyle::convert_batch(&["𝗕", "𝘐"], &unstyle::ConvertOptions::default());
/// assert_eq!(out, vec!["**B**", "*I*"]);
/// ```
pub fn convert_batch<S>(texts: &[S], options: &ConvertOptions) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    log::debug!("Converting batch of {} documents", texts.len());
    texts
        .par_iter()
        .map(|text| render::to_markdown(text.as_ref(), options))
        .collect()
}

/// Builder for converting styled text.
///
/// # Example
///
/// ```
/// use unstyle::Unstyle;
///
/// let result = Unstyle::new()
///     .min_code_block_lines(2)
///     .fence("~~~")
///     .convert_with_stats("𝚊\n𝚋");
/// assert_eq!(result.content, "~~~\na\nb\n~~~");
/// assert_eq!(result.stats.code_blocks, 1);
/// ```
pub struct Unstyle {
    options: ConvertOptions,
}

impl Unstyle {
    /// Create a new Unstyle builder.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Keep bullet glyphs as they are.
    pub fn keep_bullets(mut self) -> Self {
        self.options = self.options.with_bullets(false);
        self
    }

    /// Never emit fenced code blocks.
    pub fn no_code_blocks(mut self) -> Self {
        self.options = self.options.with_code_blocks(false);
        self
    }

    /// Set the minimum number of monospace-only lines for a code block.
    pub fn min_code_block_lines(mut self, lines: usize) -> Self {
        self.options = self.options.with_min_code_block_lines(lines);
        self
    }

    /// Set the code block fence line.
    pub fn fence(mut self, fence: impl Into<String>) -> Self {
        self.options = self.options.with_fence(fence);
        self
    }

    /// Get the configured options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert text.
    pub fn convert(&self, text: &str) -> String {
        render::to_markdown(text, &self.options)
    }

    /// Convert text and collect statistics.
    pub fn convert_with_stats(&self, text: &str) -> ConvertResult {
        render::to_markdown_with_stats(text, &self.options)
    }

    /// Convert a file.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        convert_file_with_options(path, &self.options)
    }
}

impl Default for Unstyle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_scenarios() {
        assert_eq!(convert("𝗕𝗼𝗹𝗱 𝘁𝗲𝘅𝘁"), "**Bold text**");
        assert_eq!(convert("𝘐𝘵𝘢𝘭𝘪𝘤 𝘵𝘦𝘹𝘵"), "*Italic text*");
        assert_eq!(convert("𝚌𝚘𝚍𝚎()"), "`code()`");
        assert_eq!(convert("𝗕𝗼𝗹𝗱 and 𝘐𝘵𝘢𝘭𝘪𝘤"), "**Bold** and *Italic*");
        assert_eq!(convert("𝚟𝚊𝚛 𝚡 = 𝟷𝟶"), "`var x = 10`");
    }

    #[test]
    fn test_convert_is_stable() {
        let inputs = [
            "• 𝗕𝗼𝗹𝗱 𝘁𝗶𝘁𝗹𝗲\n\n𝘐𝘵𝘢𝘭𝘪𝘤\n\n• 𝙰𝙱𝙲\n• 𝙳𝙴𝙵\n• 𝙶𝙷𝙸",
            "𝚌𝚘𝚍𝚎()",
            "plain ‣ text\n  ▪ nested 𝑥",
            "",
        ];
        for input in inputs {
            let once = convert(input);
            assert_eq!(convert(&once), once, "input {:?}", input);
        }
    }

    // ==================== Byte and Reader Input ====================

    #[test]
    fn test_convert_bytes_valid() {
        let data = "𝗕𝗼𝗹𝗱".as_bytes();
        assert_eq!(convert_bytes(data).unwrap(), "**Bold**");
    }

    #[test]
    fn test_convert_bytes_invalid_utf8() {
        // A truncated four-byte sequence
        let data = [0xF0, 0x9D, 0x97];
        let result = convert_bytes(&data);
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_convert_bytes_rejects_invalid_options() {
        let mut options = ConvertOptions::new();
        options.min_code_block_lines = 0;
        let result = convert_bytes_with_options(b"text", &options);
        assert!(matches!(result, Err(Error::InvalidOption(_))));
    }

    #[test]
    fn test_convert_reader() {
        let reader = std::io::Cursor::new("• 𝘐𝘵".as_bytes().to_vec());
        assert_eq!(convert_reader(reader).unwrap(), "- *It*");
    }

    #[test]
    fn test_convert_file_missing() {
        let result = convert_file("definitely/not/here.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_convert_file_async() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.txt");
        std::fs::write(&path, "𝘐𝘵").unwrap();

        let result = convert_file_async(&path, &ConvertOptions::default()).await;
        assert_eq!(result.unwrap(), "*It*");
    }

    // ==================== Batch Conversion ====================

    #[test]
    fn test_convert_batch_preserves_order() {
        let inputs: Vec<String> = (0..64)
            .map(|i| if i % 2 == 0 { "𝗕".to_string() } else { "𝘐".to_string() })
            .collect();
        let outputs = convert_batch(&inputs, &ConvertOptions::default());

        assert_eq!(outputs.len(), 64);
        for (i, out) in outputs.iter().enumerate() {
            let expected = if i % 2 == 0 { "**B**" } else { "*I*" };
            assert_eq!(out, expected);
        }
    }

    // ==================== Builder Pattern Tests ====================

    #[test]
    fn test_unstyle_builder_default() {
        let builder = Unstyle::default();
        assert!(builder.options().normalize_bullets);
        assert!(builder.options().detect_code_blocks);
        assert_eq!(builder.options().min_code_block_lines, 3);
    }

    #[test]
    fn test_unstyle_builder_chained() {
        let builder = Unstyle::new()
            .keep_bullets()
            .no_code_blocks()
            .min_code_block_lines(5)
            .fence("~~~");

        assert!(!builder.options().normalize_bullets);
        assert!(!builder.options().detect_code_blocks);
        assert_eq!(builder.options().min_code_block_lines, 5);
        assert_eq!(builder.options().fence, "~~~");
        assert_eq!(builder.convert("• 𝚊\n𝚋\n𝚌"), "• `a`\n`b`\n`c`");
    }
}
