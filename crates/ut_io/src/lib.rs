//! crates/ut_io/src/lib.rs
//! Input crate: turns a token stream into a sorted `SampleSet`.
//!
//! - Shared error type (`IoError`) with `From` conversions.
//! - Strict offline posture: file paths only, never URLs.
//! - Malformed input is fatal; nothing is returned for a partially read stream.

#![forbid(unsafe_code)]

use thiserror::Error;

use ut_core::CoreError;

/// Unified error for ut_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying read failure (including non-UTF-8 input).
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    /// A token that is not a rational literal. `index` is 1-based.
    #[error("token #{index} {token:?}: {source}")]
    Parse {
        index: usize,
        token: String,
        #[source]
        source: CoreError,
    },

    /// Path rejected before opening (URL scheme, missing file, ...).
    #[error("path error: {0}")]
    Path(String),
}

pub type IoResult<T> = Result<T, IoError>;

/// Returns true if `s` looks like a URL: any `<scheme>://` (including
/// `file://`), or a bare `http:`, `https:` or `file:` prefix.
#[inline]
pub fn looks_like_url_strict(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://")
        || ["http:", "https:", "file:"].iter().any(|p| lower.starts_with(p))
}


pub mod reader;

pub use reader::{load_sample_from_path, parse_tokens, read_sample};
