//! Sample case checking.
//!
//! A sample case pairs an input with its expected Markdown. Cases are
//! loaded from a JSON array (`[{"name": ..., "input": ..., "expected": ...}]`)
//! or taken from the built-in set, converted, and compared for equality.
//!
//! # Example
//!
//! ```
//! use unstyle::check::{builtin_cases, run_cases};
//!
//! let report = run_cases(&builtin_cases());
//! assert!(report.all_passed());
//! ```

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::{to_markdown, ConvertOptions};

/// An input paired with its expected conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCase {
    /// Short case name
    pub name: String,
    /// Styled input text
    pub input: String,
    /// Expected Markdown output
    pub expected: String,
}

impl SampleCase {
    /// Create a new sample case.
    pub fn new(
        name: impl Into<String>,
        input: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            expected: expected.into(),
        }
    }
}

/// Outcome of running one case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// The case that was run
    pub case: SampleCase,
    /// Actual conversion output
    pub actual: String,
    /// Whether the output matched
    pub passed: bool,
}

/// Outcomes of a case run, in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    /// Per-case outcomes
    pub outcomes: Vec<CaseOutcome>,
}

impl CheckReport {
    /// Number of cases that matched.
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Cases that did not match.
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// Check whether every case matched.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Total number of cases.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check whether the report has no cases.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Run cases with default options.
pub fn run_cases(cases: &[SampleCase]) -> CheckReport {
    run_cases_with_options(cases, &ConvertOptions::default())
}

/// Run cases with the given options.
pub fn run_cases_with_options(cases: &[SampleCase], options: &ConvertOptions) -> CheckReport {
    let outcomes = cases
        .par_iter()
        .map(|case| {
            let actual = to_markdown(&case.input, options);
            let passed = actual == case.expected;
            if !passed {
                log::debug!("Case {:?} failed", case.name);
            }
            CaseOutcome {
                case: case.clone(),
                actual,
                passed,
            }
        })
        .collect();

    CheckReport { outcomes }
}

/// Parse cases from a JSON array.
pub fn parse_cases(json: &str) -> Result<Vec<SampleCase>> {
    let cases: Vec<SampleCase> = serde_json::from_str(json)?;
    if let Some(unnamed) = cases.iter().position(|c| c.name.trim().is_empty()) {
        return Err(Error::CaseFile(format!("case #{} has an empty name", unnamed + 1)));
    }
    Ok(cases)
}

/// Load cases from a JSON file.
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<SampleCase>> {
    let bytes = fs::read(path)?;
    let json = String::from_utf8(bytes)?;
    parse_cases(&json)
}

/// Built-in sample cases covering every conversion rule.
pub fn builtin_cases() -> Vec<SampleCase> {
    vec![
        SampleCase::new("Bold text", "𝗕𝗼𝗹𝗱 𝘁𝗲𝘅𝘁", "**Bold text**"),
        SampleCase::new("Italic text", "𝘐𝘵𝘢𝘭𝘪𝘤 𝘵𝘦𝘹𝘵", "*Italic text*"),
        SampleCase::new("Inline code", "𝚌𝚘𝚍𝚎()", "`code()`"),
        SampleCase::new(
            "Mixed bold and italic",
            "𝗕𝗼𝗹𝗱 and 𝘐𝘵𝘢𝘭𝘪𝘤",
            "**Bold** and *Italic*",
        ),
        SampleCase::new("Bullet list", "• Item 1\n• Item 2", "- Item 1\n- Item 2"),
        SampleCase::new(
            "Multi-line code block",
            "𝚏𝚞𝚗𝚌 𝚖𝚊𝚒𝚗()\n𝚏𝚞𝚗𝚌 𝚝𝚎𝚜𝚝()\n𝚏𝚞𝚗𝚌 𝚑𝚎𝚕𝚕𝚘()",
            "```\nfunc main()\nfunc test()\nfunc hello()\n```",
        ),
        SampleCase::new(
            "Complex document",
            "• 𝗕𝗼𝗹𝗱 𝘁𝗶𝘁𝗹𝗲\n\n𝘐𝘵𝘢𝘭𝘪𝘤 𝘥𝘦𝘴𝘤𝘳𝘪𝘱𝘵𝘪𝘰𝘯\n\n• 𝙰𝙱𝙲_𝟷𝟸𝟹\n• 𝙳𝙴𝙵_𝟺𝟻𝟼\n• 𝙶𝙷𝙸_𝟽𝟾𝟿",
            "- **Bold title**\n\n*Italic description*\n\n```\n- ABC_123\n- DEF_456\n- GHI_789\n```",
        ),
        SampleCase::new("Code with numbers", "𝚟𝚊𝚛 𝚡 = 𝟷𝟶", "`var x = 10`"),
        SampleCase::new(
            "Serif bold and italic",
            "𝐒𝐞𝐫𝐢𝐟 then 𝑠𝑙𝑎𝑛𝑡",
            "**Serif** then *slant*",
        ),
        SampleCase::new(
            "Double space inside span",
            "𝚏𝚘𝚘  𝚋𝚊𝚛 plain",
            "`foo  bar` plain",
        ),
    ]
}
