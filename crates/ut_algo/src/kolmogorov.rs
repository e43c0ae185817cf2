//! One-sided Kolmogorov-Smirnov statistics against the uniform CDF.
//!
//! For the sorted sample `x₁ ≤ … ≤ xₙ`:
//! - `K+ = max_j ( j/n − x_j )`
//! - `K− = max_j ( x_j − (j−1)/n )`
//!
//! Single pass; a candidate replaces the running maximum only when strictly
//! greater, so the first maximum seen is kept on ties.

use ut_core::{ExactRational, SampleSet};

use crate::AlgoError;

/// The pair of one-sided statistics.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KsStatistics {
    pub k_plus: ExactRational,
    pub k_minus: ExactRational,
}

/// Compute `K+` and `K−`. Requires `n ≥ 1`.
pub fn kolmogorov_smirnov(sample: &SampleSet) -> Result<KsStatistics, AlgoError> {
    if sample.is_empty() {
        return Err(AlgoError::EmptySample);
    }
    let n = sample.size_rational();

    let mut best: Option<KsStatistics> = None;
    for (j, x) in sample.ranked() {
        let plus = ExactRational::from(j) / &n - x;
        let minus = x - &(ExactRational::from(j - 1) / &n);
        match best.as_mut() {
            None => {
                best = Some(KsStatistics {
                    k_plus: plus,
                    k_minus: minus,
                })
            }
            Some(b) => {
                if b.k_plus < plus {
                    b.k_plus = plus;
                }
                if b.k_minus < minus {
                    b.k_minus = minus;
                }
            }
        }
    }

    best.ok_or(AlgoError::EmptySample)
}
