//! Chi-squared goodness-of-fit over the sorted sample.
//!
//! Contract:
//! - Bucket `i` (1-based) has upper boundary `a(i) = i²/100` and probability
//!   mass `p(i) = a(i) − a(i−1)`. The same table serves both binnings, so the
//!   poker test (k = 7) reuses the first seven masses as-is.
//! - `V = Σ_{i=1..k} (y_i − n·p_i)² / (n·p_i)` with `n` the full sample size.
//! - Boundary walk compares `f64` approximations (truncated toward zero) of
//!   value and boundary. Values at or past `a(k)` are not counted.
//! - Empty sample: all counts are 0 and `V = 0` (no division by `n·p_i = 0`).

use ut_core::{ExactRational, SampleSet};

use crate::poker::bin_by_hands;

/// Buckets used by the plain chi-squared test.
pub const CHI_SQUARED_BUCKETS: usize = 10;
/// Buckets used by the poker test (one per hand).
pub const POKER_BUCKETS: usize = 7;

/// How the sample is distributed into buckets before the shared statistic runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Binning {
    /// Walk sorted values across the `i²/100` boundaries (k = 10).
    BoundaryWalk,
    /// Classify consecutive 5-tuples into poker hands (k = 7).
    PokerHands,
}

impl Binning {
    /// Number of buckets `k`.
    pub const fn buckets(self) -> usize {
        match self {
            Binning::BoundaryWalk => CHI_SQUARED_BUCKETS,
            Binning::PokerHands => POKER_BUCKETS,
        }
    }

    /// Stable code used in logs and reports.
    pub const fn code(self) -> &'static str {
        match self {
            Binning::BoundaryWalk => "chi_squared",
            Binning::PokerHands => "poker",
        }
    }
}

/// Observed counts `y_1..y_k`; index 0 of the backing vector is bucket 1.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BucketCounts {
    counts: Vec<u64>,
}

impl BucketCounts {
    pub fn zeroed(k: usize) -> Self {
        Self { counts: vec![0; k] }
    }

    /// Number of buckets `k`.
    pub fn buckets(&self) -> usize {
        self.counts.len()
    }

    /// Count for 1-based bucket `i`; `None` outside `1..=k`.
    pub fn get(&self, i: usize) -> Option<u64> {
        i.checked_sub(1).and_then(|ix| self.counts.get(ix)).copied()
    }

    /// Increment 1-based bucket `i`. Out-of-range indexes are ignored.
    pub fn bump(&mut self, i: usize) {
        if let Some(c) = i.checked_sub(1).and_then(|ix| self.counts.get_mut(ix)) {
            *c += 1;
        }
    }

    /// Sum of all in-range counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }
}

/// Cumulative boundary `a(i) = i²/100`.
pub fn boundary(i: u32) -> ExactRational {
    let i = u64::from(i);
    ExactRational::from(i * i) / ExactRational::from(100u64)
}

/// Probability mass `p(i) = a(i) − a(i−1)`, for `i ≥ 1`.
pub fn probability_mass(i: u32) -> ExactRational {
    boundary(i) - boundary(i.saturating_sub(1))
}

/// Pearson statistic for `counts` against a sample of size `n`.
pub fn pearson_statistic(counts: &BucketCounts, n: usize) -> ExactRational {
    let mut v = ExactRational::zero();
    if n == 0 {
        return v;
    }
    let n = ExactRational::from(n as u64);
    for (ix, &y) in counts.as_slice().iter().enumerate() {
        let n_p = &n * &probability_mass(ix as u32 + 1);
        let up = ExactRational::from(y) - &n_p;
        v = v + (&up * &up) / n_p;
    }
    v
}

/// Boundary-walk binning into `k` buckets.
fn bin_by_boundaries(sample: &SampleSet, k: usize) -> BucketCounts {
    let mut y = BucketCounts::zeroed(k);
    // Upper boundaries as floats, index 0 = a(1).
    let bounds: Vec<f64> = (1..=k as u32).map(|i| boundary(i).to_f64_approx()).collect();

    let mut i = 1usize;
    for x in sample {
        let xf = x.to_f64_approx();
        while i <= k && xf >= bounds[i - 1] {
            i += 1;
        }
        if i > k {
            break;
        }
        y.bump(i);
    }

    let dropped = sample.len() as u64 - y.total();
    if dropped > 0 {
        tracing::warn!(dropped, "values at or beyond the last bucket boundary were not counted");
    }
    y
}

/// Result of one chi-squared style test: the counts it observed and `V`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChiSquaredOutcome {
    pub binning: Binning,
    pub counts: BucketCounts,
    pub v: ExactRational,
}

/// A chi-squared test bound to a sample and a binning strategy.
#[derive(Clone, Copy, Debug)]
pub struct ChiSquaredTest<'a> {
    sample: &'a SampleSet,
    binning: Binning,
}

impl<'a> ChiSquaredTest<'a> {
    /// Plain chi-squared (boundary walk, k = 10).
    pub fn new(sample: &'a SampleSet) -> Self {
        Self::with_binning(sample, Binning::BoundaryWalk)
    }

    /// Poker test (hand classification, k = 7).
    pub fn poker(sample: &'a SampleSet) -> Self {
        Self::with_binning(sample, Binning::PokerHands)
    }

    pub fn with_binning(sample: &'a SampleSet, binning: Binning) -> Self {
        Self { sample, binning }
    }

    pub fn binning(&self) -> Binning {
        self.binning
    }

    /// Populate bucket counts from the sample.
    pub fn compute_y(&self) -> BucketCounts {
        match self.binning {
            Binning::BoundaryWalk => bin_by_boundaries(self.sample, self.binning.buckets()),
            Binning::PokerHands => bin_by_hands(self.sample),
        }
    }

    /// Pearson statistic over `counts`, using the full sample size.
    pub fn compute_v(&self, counts: &BucketCounts) -> ExactRational {
        pearson_statistic(counts, self.sample.len())
    }

    /// `compute_y` then `compute_v`.
    pub fn execute(&self) -> ChiSquaredOutcome {
        let counts = self.compute_y();
        tracing::debug!(test = self.binning.code(), counts = ?counts.as_slice(), "bucket counts");
        let v = self.compute_v(&counts);
        ChiSquaredOutcome {
            binning: self.binning,
            counts,
            v,
        }
    }
}
