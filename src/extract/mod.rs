//! Batch scoring of a query against a candidate set.
//!
//! The engine applies one [`Scorer`](crate::Scorer) across a collection of
//! candidates and returns the survivors:
//!
//! - [`extract`]: score every candidate, filter by cutoff, optionally rank
//! - [`extract_one`]: the single best candidate, if any survives
//! - [`score_matrix`]: the full pairwise score matrix of two collections
//!
//! With a result limit the output is ranked by descending score, ties
//! keeping candidate order. Without one the output stays in candidate
//! order, so callers can line results up with their input. Candidate sets
//! at or above 100 entries are scored on the rayon thread pool; scoring is
//! pure, so the two paths produce identical results.
//!
//! ## Example
//!
//! ```rust
//! use fuzzmatch::{extract, ExtractOptions, Scorer};
//!
//! let candidates = ["atlanta falcons", "new york giants"];
//! let options = ExtractOptions { limit: Some(1), ..Default::default() };
//! let matches = extract("new york jets", &candidates, Scorer::Ratio, &options).unwrap();
//!
//! assert_eq!(matches[0].candidate, "new york giants");
//! ```

pub mod engine;

pub use engine::{extract, extract_one, score_matrix};

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::utils::validation::ValidationError;

/// A scored candidate returned by the batch engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractMatch<'a> {
    /// The candidate string as supplied by the caller
    pub candidate: &'a str,

    /// Score under the chosen scorer, rounded to one decimal place
    pub score: f64,

    /// Position of the candidate in the input collection
    pub index: usize,
}

/// Options for a batch extraction
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Drop results scoring below this value
    pub cutoff: Option<f64>,

    /// Keep only the best N results, ranked by descending score.
    /// `None` returns every surviving result in candidate order.
    pub limit: Option<usize>,

    /// Apply [`default_process`](crate::default_process) to the query and
    /// every candidate before scoring
    pub preprocess: bool,

    /// Cooperative cancellation flag, checked before each candidate
    pub cancel: Option<Arc<AtomicBool>>,
}

/// Errors from batch extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid parameter: {0}")]
    Validation(#[from] ValidationError),

    #[error("extraction cancelled")]
    Cancelled,
}
