//! crates/ut_core/src/sample.rs
//! Immutable, ascending sample. Built once from parsed input; tests borrow it read-only.

use core::ops::Index;

use crate::rational::ExactRational;

/// Sorted sample `x₁ ≤ … ≤ xₙ`. Ranks are 1-based.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleSet {
    values: Vec<ExactRational>,
}

impl SampleSet {
    /// Take ownership of raw values and sort them ascending (exact order).
    pub fn from_unsorted(mut values: Vec<ExactRational>) -> Self {
        values.sort();
        Self { values }
    }

    /// Sample size `n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `n` as an exact rational (the divisor used by every statistic).
    pub fn size_rational(&self) -> ExactRational {
        ExactRational::from(self.values.len() as u64)
    }

    #[inline]
    pub fn as_slice(&self) -> &[ExactRational] {
        &self.values
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ExactRational> {
        self.values.iter()
    }

    /// `(j, x_j)` pairs with `j` starting at 1.
    pub fn ranked(&self) -> impl Iterator<Item = (u64, &ExactRational)> + '_ {
        self.values.iter().enumerate().map(|(i, x)| (i as u64 + 1, x))
    }

    /// Value at 1-based rank `j`, if `1 ≤ j ≤ n`.
    pub fn rank(&self, j: usize) -> Option<&ExactRational> {
        j.checked_sub(1).and_then(|i| self.values.get(i))
    }
}

impl FromIterator<ExactRational> for SampleSet {
    fn from_iter<I: IntoIterator<Item = ExactRational>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl Index<usize> for SampleSet {
    type Output = ExactRational;
    /// Zero-based access into the sorted values.
    fn index(&self, i: usize) -> &ExactRational {
        &self.values[i]
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a ExactRational;
    type IntoIter = core::slice::Iter<'a, ExactRational>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
