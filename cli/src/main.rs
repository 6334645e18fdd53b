//! unstyle CLI - Unicode styled text to Markdown converter

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unstyle::check::{builtin_cases, load_cases, run_cases_with_options, CheckReport};
use unstyle::{convert_batch, convert_with_options, convert_with_stats, ConvertOptions};

#[derive(Parser)]
#[command(name = "unstyle")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Unicode bold, italic and monospace text to Markdown", long_about = None)]
struct Cli {
    /// Input text file ("-" or omitted for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(flatten)]
    convert: ConvertArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct ConvertArgs {
    /// Keep bullet glyphs instead of replacing them with "-"
    #[arg(long)]
    no_bullets: bool,

    /// Never emit fenced code blocks
    #[arg(long)]
    no_code_blocks: bool,

    /// Minimum number of monospace-only lines for a code block
    #[arg(long, value_name = "N", default_value_t = unstyle::render::DEFAULT_MIN_CODE_BLOCK_LINES)]
    min_block_lines: usize,
}

impl From<&ConvertArgs> for ConvertOptions {
    fn from(args: &ConvertArgs) -> Self {
        ConvertOptions::new()
            .with_bullets(!args.no_bullets)
            .with_code_blocks(!args.no_code_blocks)
            .with_min_code_block_lines(args.min_block_lines)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text files to Markdown files
    Convert {
        /// Input text files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        convert: ConvertArgs,
    },

    /// Run sample cases and report mismatches
    Check {
        /// JSON case file (built-in samples if not specified)
        #[arg(value_name = "CASES")]
        cases: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        convert: ConvertArgs,
    },

    /// Show conversion statistics for a file
    Info {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            inputs,
            output,
            convert,
        }) => cmd_convert(&inputs, output.as_deref(), &convert),
        Some(Commands::Check {
            cases,
            json,
            convert,
        }) => cmd_check(cases.as_deref(), json, &convert),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let reads_stdin = cli.input.is_none() || cli.input.as_deref() == Some(Path::new("-"));
            if reads_stdin && io::stdin().is_terminal() {
                println!("{}", "Usage: unstyle <FILE> [-o OUTPUT]".yellow());
                println!("       unstyle --help for more information");
                Ok(())
            } else {
                cmd_single(cli.input.as_deref(), cli.output.as_deref(), &cli.convert)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read a file, or stdin for "-" and no path.
fn read_input(input: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) if path != Path::new("-") => {
            let bytes = fs::read(path)?;
            String::from_utf8(bytes).map_err(|e| format!("{}: {}", path.display(), e).into())
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn cmd_single(
    input: Option<&Path>,
    output: Option<&Path>,
    args: &ConvertArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let markdown = convert_with_options(&text, &args.into());

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markdown);
    }

    Ok(())
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
    args: &ConvertArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("unstyle_output"));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading files...");
    let mut texts = Vec::with_capacity(inputs.len());
    for input in inputs {
        texts.push(read_input(Some(input))?);
        pb.inc(1);
    }

    pb.set_message("Converting...");
    let converted = convert_batch(&texts, &args.into());

    let mut written = Vec::with_capacity(inputs.len());
    for (input, markdown) in inputs.iter().zip(&converted) {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let filename = format!("{}.md", stem);
        fs::write(output_dir.join(&filename), markdown)?;
        written.push(filename);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, filename) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), filename);
    }

    Ok(())
}

fn cmd_check(
    cases: Option<&Path>,
    json: bool,
    args: &ConvertArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let cases = match cases {
        Some(path) => load_cases(path)?,
        None => builtin_cases(),
    };

    let report = run_cases_with_options(&cases, &args.into());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report)?;
    }

    if !report.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report(report: &CheckReport) -> Result<(), Box<dyn std::error::Error>> {
    for outcome in &report.outcomes {
        if outcome.passed {
            println!("{} {}", "PASS:".green().bold(), outcome.case.name);
        } else {
            println!("{} {}", "FAIL:".red().bold(), outcome.case.name);
            println!("   Input:    {}", serde_json::to_string(&outcome.case.input)?);
            println!("   Expected: {}", serde_json::to_string(&outcome.case.expected)?);
            println!("   Got:      {}", serde_json::to_string(&outcome.actual)?);
        }
    }

    println!();
    let summary = format!("{}/{} passed", report.passed_count(), report.len());
    if report.all_passed() {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.red().bold());
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(Some(input))?;
    let result = convert_with_stats(&text, &ConvertOptions::default());
    let stats = &result.stats;

    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Styled characters".bold(), stats.styled_chars);
    println!(
        "{}: {}",
        "Changed".bold(),
        if stats.is_unchanged() { "No" } else { "Yes" }
    );

    println!();
    println!("{}", "Markdown Output".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Bold spans".bold(), stats.bold_spans);
    println!("{}: {}", "Italic spans".bold(), stats.italic_spans);
    println!("{}: {}", "Code spans".bold(), stats.mono_spans);
    println!("{}: {}", "Bullets".bold(), stats.bullets_normalized);
    println!(
        "{}: {} ({} lines)",
        "Code blocks".bold(),
        stats.code_blocks,
        stats.code_block_lines
    );
    println!("{}: {}", "Output bytes".bold(), result.content_len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unstyle".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Unicode styled text to Markdown converter");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unstyle".dimmed());
    println!("License: MIT");
}
