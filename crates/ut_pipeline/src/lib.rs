//! ut_pipeline — deterministic pipeline surface (load → chi-squared → kolmogorov → poker → report).
//!
//! Stays free of process concerns (args, exit codes, stdout) and delegates
//! parsing to `ut_io`, math to `ut_algo`, and rendering to `ut_report`.
//! Every statistic is computed and rendered before the caller sees anything,
//! so a failure never leaves a partial report.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use ut_algo::{kolmogorov_smirnov, AlgoError, ChiSquaredOutcome, ChiSquaredTest, KsStatistics};
use ut_core::SampleSet;
use ut_io::IoError;
use ut_report::{build_model, DecimalRenderer, ReportModel, DEFAULT_DIGITS};

/// Run configuration supplied once at start-up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunConfig {
    /// Digits kept after the decimal point in every rendered value.
    pub digits: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { digits: DEFAULT_DIGITS }
    }
}

/// Exact results of every stage plus the rendered report.
#[derive(Clone, Debug)]
pub struct PipelineOutputs {
    pub sample_size: usize,
    pub chi_squared: ChiSquaredOutcome,
    pub ks: KsStatistics,
    pub poker: ChiSquaredOutcome,
    pub report: ReportModel,
}

/// Single error surface for the pipeline orchestration.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input could not be read or contained a malformed token.
    #[error("input: {0}")]
    Input(#[from] IoError),
    /// A statistic precondition failed (empty sample).
    #[error("statistic: {0}")]
    Statistic(#[from] AlgoError),
}

/// Run all three tests over an already-sorted sample.
pub fn run_sample(sample: &SampleSet, cfg: &RunConfig) -> Result<PipelineOutputs, PipelineError> {
    let span = tracing::debug_span!("pipeline", n = sample.len(), digits = cfg.digits);
    let _enter = span.enter();

    // Renderer precision is fixed before any value is produced.
    let renderer = DecimalRenderer::new(cfg.digits);

    // --- CHI-SQUARED ---
    let chi_squared = ChiSquaredTest::new(sample).execute();

    // --- KOLMOGOROV-SMIRNOV ---
    let ks = kolmogorov_smirnov(sample)?;
    tracing::debug!(k_plus = %ks.k_plus, k_minus = %ks.k_minus, "kolmogorov-smirnov");

    // --- POKER ---
    let poker = ChiSquaredTest::poker(sample).execute();

    // --- BUILD REPORT ---
    let report = build_model(sample.len(), &renderer, &chi_squared, &ks, &poker);

    Ok(PipelineOutputs {
        sample_size: sample.len(),
        chi_squared,
        ks,
        poker,
        report,
    })
}

/// Read a whole stream, then run.
pub fn run_from_reader<R: Read>(reader: R, cfg: &RunConfig) -> Result<PipelineOutputs, PipelineError> {
    let sample = ut_io::read_sample(reader)?;
    run_sample(&sample, cfg)
}

/// Read a local file, then run.
pub fn run_from_path(path: &Path, cfg: &RunConfig) -> Result<PipelineOutputs, PipelineError> {
    let sample = ut_io::load_sample_from_path(path)?;
    run_sample(&sample, cfg)
}
