//! ut_core — Core types for the uniformity tests.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! workspace (`ut_io`, `ut_algo`, `ut_pipeline`, `ut_report`, `ut_cli`):
//!
//! - `ExactRational`: arbitrary-precision rational, always canonical
//! - Literal parsing (`-0.25`, `.5`, `3/8`) into exact values
//! - `SampleSet`: immutable, ascending sample with 1-based ranks
//!
//! No floats are used for arithmetic; the single floating approximation
//! (`ExactRational::to_f64_approx`) exists for the chi-squared bucket walk.

#![forbid(unsafe_code)]

pub mod rational;
pub mod sample;

pub use rational::ExactRational;
pub use sample::SampleSet;

pub mod errors {
    use thiserror::Error;

    /// Error set for literal parsing and rational construction.
    #[derive(Clone, Debug, Eq, PartialEq, Error)]
    pub enum CoreError {
        /// Token is not a decimal (`[+-]digits[.digits]`) or fraction (`[+-]digits/digits`) literal.
        #[error("invalid rational literal: {token:?}")]
        InvalidLiteral { token: String },
        /// Fraction literal or constructor with a zero denominator.
        #[error("zero denominator in {token:?}")]
        ZeroDenominator { token: String },
    }
}

pub use errors::CoreError;
