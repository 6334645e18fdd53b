//! Markdown assembly for styled text documents.

use std::borrow::Cow;

use crate::classify::{normalize_text, style_of, Style};

use super::block::{convert_mono_line, mono_flags, mono_run_len};
use super::bullets::normalize_bullet;
use super::inline::{convert_inline, convert_inline_with_stats};
use super::{ConversionStats, ConvertOptions, ConvertResult};

/// Convert styled text to Markdown.
pub fn to_markdown(text: &str, options: &ConvertOptions) -> String {
    let converter = MarkdownConverter::new(options.clone());
    converter.convert(text)
}

/// Convert styled text to Markdown with statistics.
pub fn to_markdown_with_stats(text: &str, options: &ConvertOptions) -> ConvertResult {
    let mut options = options.clone();
    options.collect_stats = true;
    let converter = MarkdownConverter::new(options);
    converter.convert_with_stats(text)
}

/// Document-level converter.
///
/// Bullets are normalized first, then every line is checked for
/// monospace-only content. Runs of such lines at least
/// `min_code_block_lines` long become fenced code blocks; all other
/// lines are converted one at a time.
pub struct MarkdownConverter {
    options: ConvertOptions,
    stats: ConversionStats,
}

impl MarkdownConverter {
    /// Create a new converter.
    ///
    /// A `min_code_block_lines` of 0 is treated as 1.
    pub fn new(mut options: ConvertOptions) -> Self {
        options.min_code_block_lines = options.min_code_block_lines.max(1);
        Self {
            options,
            stats: ConversionStats::new(),
        }
    }

    /// Convert a document to Markdown.
    pub fn convert(mut self, text: &str) -> String {
        self.convert_internal(text)
    }

    /// Convert a document to Markdown with conversion statistics.
    ///
    /// Statistics stay zero unless `collect_stats` is set.
    pub fn convert_with_stats(mut self, text: &str) -> ConvertResult {
        let content = self.convert_internal(text);
        ConvertResult::new(content, self.stats)
    }

    fn convert_internal(&mut self, text: &str) -> String {
        let lines: Vec<Cow<'_, str>> = text
            .split('\n')
            .map(|line| self.normalize_line(line))
            .collect();

        if self.options.collect_stats && !text.is_empty() {
            self.stats.line_count = lines.len() as u32;
        }

        let flags = mono_flags(&lines);
        let mut output: Vec<String> = Vec::with_capacity(lines.len());
        let mut i = 0;

        while i < lines.len() {
            let run = mono_run_len(&flags, i);

            if self.options.detect_code_blocks && run >= self.options.min_code_block_lines {
                log::debug!("Code block: lines {}..{}", i + 1, i + run);
                self.emit_code_block(&mut output, &lines[i..i + run]);
                i += run;
            } else {
                output.push(self.convert_line(&lines[i], flags[i]));
                i += 1;
            }
        }

        let result = output.join("\n");

        if self.options.collect_stats {
            log::debug!(
                "Converted {} lines: {} spans, {} code blocks",
                self.stats.line_count,
                self.stats.span_count(),
                self.stats.code_blocks
            );
        }

        result
    }

    fn normalize_line<'a>(&mut self, line: &'a str) -> Cow<'a, str> {
        if !self.options.normalize_bullets {
            return Cow::Borrowed(line);
        }

        let normalized = normalize_bullet(line);
        if self.options.collect_stats && matches!(normalized, Cow::Owned(_)) {
            self.stats.bullets_normalized += 1;
        }
        normalized
    }

    fn emit_code_block(&mut self, output: &mut Vec<String>, lines: &[Cow<'_, str>]) {
        output.push(self.options.fence.clone());
        output.extend(lines.iter().map(|line| normalize_text(line)));
        output.push(self.options.fence.clone());

        if self.options.collect_stats {
            self.stats.styled_chars += lines.iter().map(|line| count_styled(line)).sum::<u32>();
            self.stats.code_blocks += 1;
            self.stats.code_block_lines += lines.len() as u32;
        }
    }

    fn convert_line(&mut self, line: &str, mono_only: bool) -> String {
        if mono_only {
            log::trace!("Mono-only line outside a code block: {:?}", line);
            if self.options.collect_stats {
                self.stats.styled_chars += count_styled(line);
                self.stats.record_span(Style::Mono);
            }
            convert_mono_line(line)
        } else if self.options.collect_stats {
            convert_inline_with_stats(line, &mut self.stats)
        } else {
            convert_inline(line)
        }
    }
}

fn count_styled(line: &str) -> u32 {
    line.chars().filter(|&c| style_of(c).is_some()).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(text: &str) -> String {
        to_markdown(text, &ConvertOptions::default())
    }

    #[test]
    fn test_bullet_list() {
        assert_eq!(convert("• Item 1\n• Item 2"), "- Item 1\n- Item 2");
    }

    #[test]
    fn test_three_mono_lines_fenced() {
        let input = "𝚏𝚞𝚗𝚌 𝚖𝚊𝚒𝚗()\n𝚏𝚞𝚗𝚌 𝚝𝚎𝚜𝚝()\n𝚏𝚞𝚗𝚌 𝚑𝚎𝚕𝚕𝚘()";
        assert_eq!(
            convert(input),
            "```\nfunc main()\nfunc test()\nfunc hello()\n```"
        );
    }

    #[test]
    fn test_two_mono_lines_inline() {
        let input = "𝚏𝚘𝚘()\n𝚋𝚊𝚛()";
        assert_eq!(convert(input), "`foo()`\n`bar()`");
    }

    #[test]
    fn test_fenced_block_between_text() {
        let input = "Intro\n𝚊\n𝚋\n𝚌\nOutro";
        assert_eq!(convert(input), "Intro\n```\na\nb\nc\n```\nOutro");
    }

    #[test]
    fn test_fenced_block_keeps_bullet_marker() {
        let input = "• 𝙰𝙱𝙲_𝟷𝟸𝟹\n• 𝙳𝙴𝙵_𝟺𝟻𝟼\n• 𝙶𝙷𝙸_𝟽𝟾𝟿";
        assert_eq!(
            convert(input),
            "```\n- ABC_123\n- DEF_456\n- GHI_789\n```"
        );
    }

    #[test]
    fn test_blank_line_breaks_run() {
        let input = "𝚊\n𝚋\n\n𝚌";
        assert_eq!(convert(input), "`a`\n`b`\n\n`c`");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_trailing_newline_preserved() {
        assert_eq!(convert("𝗕\n"), "**B**\n");
    }

    #[test]
    fn test_carriage_return_stays_with_line() {
        assert_eq!(convert("𝗕𝗼𝗹𝗱\r\nplain"), "**Bold**\r\nplain");
    }

    #[test]
    fn test_bullets_disabled() {
        let options = ConvertOptions::new().with_bullets(false);
        assert_eq!(to_markdown("• 𝗕", &options), "• **B**");
    }

    #[test]
    fn test_code_blocks_disabled() {
        let options = ConvertOptions::new().with_code_blocks(false);
        assert_eq!(to_markdown("𝚊\n𝚋\n𝚌", &options), "`a`\n`b`\n`c`");
    }

    #[test]
    fn test_custom_threshold_and_fence() {
        let options = ConvertOptions::new()
            .with_min_code_block_lines(2)
            .with_fence("~~~");
        assert_eq!(to_markdown("𝚊\n𝚋", &options), "~~~\na\nb\n~~~");
    }

    #[test]
    fn test_stats_collected() {
        let input = "• 𝗕𝗼𝗹𝗱 𝘁𝗶𝘁𝗹𝗲\n\n𝘐𝘵𝘢𝘭𝘪𝘤\n𝚊\n𝚋\n𝚌";
        let result = to_markdown_with_stats(input, &ConvertOptions::default());

        assert_eq!(
            result.content,
            "- **Bold title**\n\n*Italic*\n```\na\nb\nc\n```"
        );
        assert_eq!(result.stats.line_count, 6);
        assert_eq!(result.stats.bullets_normalized, 1);
        assert_eq!(result.stats.bold_spans, 1);
        assert_eq!(result.stats.italic_spans, 1);
        assert_eq!(result.stats.mono_spans, 0);
        assert_eq!(result.stats.code_blocks, 1);
        assert_eq!(result.stats.code_block_lines, 3);
        assert_eq!(result.stats.styled_chars, 9 + 6 + 3);
    }

    #[test]
    fn test_stats_skipped_without_flag() {
        let input = "• 𝗕𝗼𝗹𝗱
𝘐𝘵
𝚊
𝚋
𝚌";
        let result = MarkdownConverter::new(ConvertOptions::default()).convert_with_stats(input);

        assert_eq!(result.content, "- **Bold**
*It*
```
a
b
c
```");
        assert_eq!(result.stats, ConversionStats::default());
    }

    #[test]
    fn test_stats_collected_with_flag() {
        let options = ConvertOptions::new().with_stats(true);
        let result = MarkdownConverter::new(options).convert_with_stats("𝘐𝘵
𝚊");

        assert_eq!(result.stats.line_count, 2);
        assert_eq!(result.stats.italic_spans, 1);
        assert_eq!(result.stats.mono_spans, 1);
    }

    #[test]
    fn test_zero_min_code_block_lines_terminates() {
        let mut options = ConvertOptions::new();
        options.min_code_block_lines = 0;

        assert_eq!(to_markdown("plain", &options), "plain");
        assert_eq!(to_markdown("𝚊
plain

𝚋", &options), "```
a
```
plain

```
b
```");
        assert_eq!(to_markdown("", &options), "");
    }
}
