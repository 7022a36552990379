//! Edit distance metrics and their normalized similarities.
//!
//! Three metrics are provided, each with an unbounded distance, a bounded
//! variant with early exit, and a normalized similarity in `[0, 1]`:
//!
//! - [`levenshtein`]: insertions, deletions, and substitutions, unit cost
//! - [`indel`]: insertions and deletions only (the basis of [`crate::scoring::ratio`])
//! - [`hamming`]: substitutions only, equal-length inputs
//!
//! Levenshtein and Indel run on Myers/Hyyro bit-parallel kernels after
//! trimming the common prefix and suffix; inputs up to 64 elements use a
//! single machine word. The bounded variants switch to a banded dynamic
//! program that abandons the computation as soon as every cell of a row
//! exceeds the cap.
//!
//! The metric-generic entry points work on `&str` and compare Unicode
//! scalar values:
//!
//! ```rust
//! use fuzzmatch::{distance, Metric};
//!
//! let dist = distance("kitten", "sitting", Metric::Levenshtein, None).unwrap();
//! assert_eq!(dist, Some(3));
//!
//! // A cap turns the result into None when exceeded.
//! let dist = distance("kitten", "sitting", Metric::Levenshtein, Some(2)).unwrap();
//! assert_eq!(dist, None);
//! ```

use thiserror::Error;

pub mod hamming;
pub mod indel;
pub mod levenshtein;
pub mod pattern;

/// Which edit distance to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Metric {
    Levenshtein,
    Indel,
    Hamming,
}

impl Metric {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::Indel => "indel",
            Metric::Hamming => "hamming",
        }
    }
}

/// Errors from distance computations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistanceError {
    #[error("inputs must have equal length for hamming distance (left: {left}, right: {right})")]
    LengthMismatch { left: usize, right: usize },
}

/// Edit distance between two strings under the chosen metric.
///
/// With `max_distance` set, `Ok(None)` means the true distance exceeds the
/// cap; otherwise the exact distance comes back. The bounded form exists for
/// callers that only care whether two strings are close, where the early
/// exit makes far-apart pairs cheap.
///
/// # Errors
///
/// Returns [`DistanceError::LengthMismatch`] for [`Metric::Hamming`] on
/// inputs of unequal length.
pub fn distance(
    a: &str,
    b: &str,
    metric: Metric,
    max_distance: Option<usize>,
) -> Result<Option<usize>, DistanceError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    match (metric, max_distance) {
        (Metric::Levenshtein, None) => Ok(Some(levenshtein::distance(&a, &b))),
        (Metric::Levenshtein, Some(max)) => Ok(levenshtein::bounded_distance(&a, &b, max)),
        (Metric::Indel, None) => Ok(Some(indel::distance(&a, &b))),
        (Metric::Indel, Some(max)) => Ok(indel::bounded_distance(&a, &b, max)),
        (Metric::Hamming, None) => hamming::distance(&a, &b).map(Some),
        (Metric::Hamming, Some(max)) => hamming::bounded_distance(&a, &b, max),
    }
}

/// Normalized similarity in `[0, 1]` under the chosen metric.
///
/// Levenshtein normalizes by the longer length, Indel by the length sum,
/// Hamming by the shared length. Two empty strings are identical and
/// score 1 under every metric.
///
/// # Errors
///
/// Returns [`DistanceError::LengthMismatch`] for [`Metric::Hamming`] on
/// inputs of unequal length.
pub fn similarity(a: &str, b: &str, metric: Metric) -> Result<f64, DistanceError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    match metric {
        Metric::Levenshtein => Ok(levenshtein::normalized_similarity(&a, &b)),
        Metric::Indel => Ok(indel::normalized_similarity(&a, &b)),
        Metric::Hamming => hamming::normalized_similarity(&a, &b),
    }
}
