//! CLI binary for wegleitung2md.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig`, prints stage progress to stdout and reports the line
//! statistics at the end. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wegleitung2md::{
    convert_to_file, ConversionConfig, ConversionProgressCallback, ConversionStats, Profile,
    ProgressCallback, Stage, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE,
};

// ── Console progress callback ────────────────────────────────────────────────

/// Prints one line per stage and the final line counts to stdout.
struct ConsoleProgress {
    input: String,
    output: String,
}

impl ConversionProgressCallback for ConsoleProgress {
    fn on_stage_start(&self, stage: Stage) {
        match stage {
            Stage::Reading => println!("Reading {}...", self.input),
            Stage::Cleaning => println!("Cleaning text..."),
            Stage::Structuring => println!("Structuring as Markdown..."),
            Stage::PostProcessing => println!("Post-processing..."),
            Stage::Assembling => {}
            Stage::Writing => println!("Writing to {}...", self.output),
        }
    }

    fn on_conversion_complete(&self, stats: &ConversionStats) {
        println!("Done! Created {}", self.output);
        println!("Original lines: {}", stats.input_lines);
        println!("Cleaned lines: {}", stats.output_lines);
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert the default files in the current directory
  wegleitung2md

  # Explicit input and output
  wegleitung2md "Kanton Zürich.txt" -o Kanton_Zuerich_Wegleitung_2025.md

  # Reproduce the first pipeline version
  wegleitung2md --profile initial

PROFILES:
  refined (default)  headings < 80 chars, ### subsections, index entries
                     excluded, duplicate headings dropped, index letters
                     bolded, table of contents extracted
  initial            headings < 100 chars, ## only, numbers up to 4 digits
                     kept, basic header, no post-processing
"#;

/// Clean PDF-extracted Wegleitung text into Markdown.
#[derive(Parser, Debug)]
#[command(
    name = "wegleitung2md",
    version,
    about = "Clean PDF-extracted tax guidance text into Markdown",
    long_about = "Strip PDF extraction artifacts (form-field digits, widget glyphs, field \
references) from the Kanton Zürich Wegleitung text, rebuild page markers and headings, \
and write a Markdown document with a fixed header for retrieval use.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Extracted text file.
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Markdown file to write (overwritten).
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Heuristic preset: initial or refined.
    #[arg(long, value_enum, default_value = "refined")]
    profile: ProfileArg,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum ProfileArg {
    Initial,
    Refined,
}

impl From<ProfileArg> for Profile {
    fn from(v: ProfileArg) -> Self {
        match v {
            ProfileArg::Initial => Profile::Initial,
            ProfileArg::Refined => Profile::Refined,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // stdout carries the operator report, so logs stay on stderr and are
    // quiet unless asked for.
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let progress: Option<ProgressCallback> = if cli.quiet {
        None
    } else {
        let console = Arc::new(ConsoleProgress {
            input: cli.input.display().to_string(),
            output: cli.output.display().to_string(),
        });
        Some(console as ProgressCallback)
    };

    let config = build_config(&cli, progress)?;

    // ── Run conversion ───────────────────────────────────────────────────
    convert_to_file(&cli.input, &cli.output, &config).with_context(|| {
        format!(
            "Failed to convert '{}' to '{}'",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<ConversionConfig> {
    let mut builder = ConversionConfig::builder().profile(cli.profile.clone().into());

    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}
