//! Rendering module for converting styled text to Markdown.

pub mod block;
pub mod bullets;
pub mod inline;
mod markdown;
mod options;
mod result;

pub use block::is_mono_only;
pub use bullets::{normalize_bullet, BULLET_GLYPHS};
pub use inline::convert_inline;
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownConverter};
pub use options::{ConvertOptions, DEFAULT_FENCE, DEFAULT_MIN_CODE_BLOCK_LINES};
pub use result::{ConversionStats, ConvertResult};
