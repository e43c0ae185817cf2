//! Poker-hand binning for the poker test.
//!
//! The sorted sample is cut into consecutive, non-overlapping groups of
//! `HAND_SIZE`; a trailing remainder shorter than a hand is discarded. Each
//! group is classified by the multiplicities of equal values, highest hand
//! first, and counted in the bucket equal to its discriminant: `pair` = 1 …
//! `five of a kind` = 6. `nothing` lands on the overflow index 0 and is never
//! counted; bucket 7 exists for the statistic but no hand maps to it.

use ut_core::SampleSet;

use crate::chi_squared::{BucketCounts, POKER_BUCKETS};

/// Values per hand.
pub const HAND_SIZE: usize = 5;

/// Equality pattern of a 5-tuple. The discriminant is the bucket index.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Hand {
    Nothing = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    FullHouse = 4,
    FourOfAKind = 5,
    FiveOfAKind = 6,
}

impl Hand {
    /// Bucket index used by the statistic. `Nothing` is 0, outside `1..=k`.
    pub const fn bucket(self) -> usize {
        self as usize
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Hand::Nothing => "nothing",
            Hand::Pair => "pair",
            Hand::TwoPair => "two pair",
            Hand::ThreeOfAKind => "three of a kind",
            Hand::FullHouse => "full house",
            Hand::FourOfAKind => "four of a kind",
            Hand::FiveOfAKind => "five of a kind",
        }
    }

    /// Classify a hand by how many values are equal to each other.
    ///
    /// Works for any ordering of the five values; sorted input is not required.
    pub fn classify<T: PartialEq>(hand: &[T; HAND_SIZE]) -> Hand {
        // Sizes of the equality classes, largest first.
        let mut seen = [false; HAND_SIZE];
        let mut sizes: Vec<usize> = Vec::with_capacity(HAND_SIZE);
        for i in 0..HAND_SIZE {
            if seen[i] {
                continue;
            }
            let mut size = 0;
            for j in i..HAND_SIZE {
                if !seen[j] && hand[j] == hand[i] {
                    seen[j] = true;
                    size += 1;
                }
            }
            sizes.push(size);
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));

        match sizes.as_slice() {
            [5] => Hand::FiveOfAKind,
            [4, ..] => Hand::FourOfAKind,
            [3, 2] => Hand::FullHouse,
            [3, ..] => Hand::ThreeOfAKind,
            [2, 2, ..] => Hand::TwoPair,
            [2, ..] => Hand::Pair,
            _ => Hand::Nothing,
        }
    }
}

/// Count hands over consecutive groups of the sorted sample.
pub fn bin_by_hands(sample: &SampleSet) -> BucketCounts {
    let mut y = BucketCounts::zeroed(POKER_BUCKETS);
    let mut groups = sample.as_slice().chunks_exact(HAND_SIZE);
    for group in groups.by_ref() {
        // chunks_exact yields exactly HAND_SIZE values per group.
        let values: [_; HAND_SIZE] = core::array::from_fn(|i| &group[i]);
        let hand = Hand::classify(&values);
        tracing::trace!(hand = hand.name(), "classified");
        // Bucket 0 (nothing) is out of range and ignored by `bump`.
        y.bump(hand.bucket());
    }
    let remainder = groups.remainder().len();
    if remainder > 0 {
        tracing::debug!(remainder, "trailing values shorter than a hand were discarded");
    }
    y
}
