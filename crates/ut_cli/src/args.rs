// crates/ut_cli/src/args.rs
//
// CLI argument surface (types + validation).
//
// Rules:
// - Positional DIGITS (u32, default 100): digits kept after the decimal point
// - Input is stdin unless --input names a local file (no scheme://)
// - --format text|json (json requires the `report-json` feature)
// - -q/--quiet silences logs; -v/--verbose raises them (repeatable)

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use ut_io::looks_like_url_strict;
use ut_report::DEFAULT_DIGITS;

/// Output format of the report.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// Four lines: chi-squared V, K+, K-, poker V.
    Text,
    /// One JSON object with values and bucket counts.
    Json,
}

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "ut",
    version,
    disable_help_subcommand = true,
    about = "Chi-squared, Kolmogorov-Smirnov and poker tests over exact rationals read from stdin"
)]
pub struct Args {
    /// Digits kept after the decimal point (truncated, not rounded).
    #[arg(value_name = "DIGITS", default_value_t = DEFAULT_DIGITS)]
    pub digits: u32,

    /// Read the sample from a local file instead of stdin.
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Suppress all log output on stderr.
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Errors surfaced by argument validation (after clap parsing).
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
    FormatUnavailable(&'static str),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
            FormatUnavailable(s) => write!(f, "format not available in this build: {s}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Ensure a provided path is local (no scheme); existence is checked on open.
#[inline]
fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    let shown = p.to_string_lossy();
    if looks_like_url_strict(&shown) {
        return Err(CliError::NonLocalPath(shown.into_owned()));
    }
    Ok(())
}

/// Post-parse checks that clap cannot express.
pub fn validate(args: &Args) -> Result<(), CliError> {
    if let Some(p) = &args.input {
        ensure_local_path(p)?;
    }
    if args.format == Format::Json && !cfg!(feature = "report-json") {
        return Err(CliError::FormatUnavailable("json"));
    }
    Ok(())
}

/// Log filter directive implied by -q / -v (used when UT_LOG is unset).
pub fn default_log_directive(args: &Args) -> &'static str {
    if args.quiet {
        return "off";
    }
    match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
