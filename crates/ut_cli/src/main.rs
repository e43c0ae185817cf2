// crates/ut_cli/src/main.rs
//
// Wires up exit codes, typed error mapping, CLI parsing, logging, and the run
// path (read sample → pipeline → render → stdout). The report is rendered in
// full before the first byte is written, so failures never leave partial output.

mod args;

mod exitcodes {
    /// Exit codes
    pub const OK: u8 = 0;
    pub const VALIDATION: u8 = 2;
    pub const IO: u8 = 4;
    pub const STATISTIC: u8 = 5;
}

use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::{Args, Format};
use ut_io::IoError;
use ut_pipeline::{run_from_path, run_from_reader, PipelineError, PipelineOutputs, RunConfig};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Bad arguments or malformed input tokens
    Validation(String),
    /// Read/write/path errors
    Io(String),
    /// Statistic precondition failures (empty sample)
    Statistic(String),
    /// Report rendering errors
    Render(String),
}

impl fmt::Display for MainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "invalid input: {m}"),
            MainError::Io(m) => write!(f, "io: {m}"),
            MainError::Statistic(m) => write!(f, "{m}"),
            MainError::Render(m) => write!(f, "render: {m}"),
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(a) => a,
        Err(e) => {
            // --help / --version print to stdout and succeed.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { exitcodes::VALIDATION } else { exitcodes::OK });
        }
    };

    init_logging(&args);

    if let Err(e) = args::validate(&args) {
        eprintln!("ut: error: {e}");
        return ExitCode::from(exitcodes::VALIDATION);
    }

    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("ut: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc)
}

/// Logs go to stderr; `UT_LOG` overrides the -v default, `-q` wins over both.
fn init_logging(args: &Args) {
    let filter = if args.quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_env("UT_LOG")
            .unwrap_or_else(|_| EnvFilter::new(args::default_log_directive(args)))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let cfg = RunConfig { digits: args.digits };

    let outs = match &args.input {
        Some(path) => run_from_path(path, &cfg),
        None => run_from_reader(io::stdin().lock(), &cfg),
    }
    .map_err(map_pipeline_err)?;

    let text = render(args.format, &outs)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| MainError::Io(format!("write stdout: {e}")))?;

    tracing::debug!(n = outs.sample_size, digits = args.digits, "report written");
    Ok(())
}

fn render(format: Format, outs: &PipelineOutputs) -> Result<String, MainError> {
    match format {
        Format::Text => Ok(ut_report::render_text(&outs.report)),
        #[cfg(feature = "report-json")]
        Format::Json => ut_report::render_json(&outs.report).map_err(|e| MainError::Render(e.to_string())),
        #[cfg(not(feature = "report-json"))]
        Format::Json => Err(MainError::Render("json renderer not compiled in".into())),
    }
}

/// Map our typed errors to the exit-code table.
fn map_error(e: &MainError) -> u8 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Io(_) => IO,
        MainError::Statistic(_) => STATISTIC,
        MainError::Render(_) => IO,
    }
}

/// Translate ut_pipeline::PipelineError into MainError buckets.
fn map_pipeline_err(e: PipelineError) -> MainError {
    match &e {
        PipelineError::Input(IoError::Parse { .. }) => MainError::Validation(e.to_string()),
        PipelineError::Input(_) => MainError::Io(e.to_string()),
        PipelineError::Statistic(_) => MainError::Statistic(e.to_string()),
    }
}
