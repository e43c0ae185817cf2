//! crates/ut_algo/src/lib.rs
//! Statistic algorithms over a sorted `SampleSet`. Exact rational arithmetic
//! throughout; no I/O, no rendering.
#![forbid(unsafe_code)]

use thiserror::Error;

pub use ut_core::{ExactRational, SampleSet};

// ----------------------------- Errors ------------------------------------------------

/// Precondition failures of the statistic layer.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AlgoError {
    /// Kolmogorov-Smirnov needs at least one observation.
    #[error("empty sample: at least one value is required")]
    EmptySample,
}

// ----------------------------- Modules -----------------------------------------------

pub mod chi_squared;
pub mod kolmogorov;
pub mod poker;

// Tight, explicit re-exports (avoid wildcard export drift).
pub use chi_squared::{
    boundary, pearson_statistic, probability_mass, Binning, BucketCounts, ChiSquaredOutcome,
    ChiSquaredTest, CHI_SQUARED_BUCKETS, POKER_BUCKETS,
};
pub use kolmogorov::{kolmogorov_smirnov, KsStatistics};
pub use poker::{bin_by_hands, Hand, HAND_SIZE};
