//! # fuzzmatch
//!
//! A library for fuzzy string matching: edit distances, similarity
//! scorers, and batch extraction.
//!
//! Real-world strings rarely match exactly. Names carry typos, titles
//! reorder their words, and identifiers differ in case or separators.
//! `fuzzmatch` quantifies how close two strings are and finds the best
//! matches for a query within a list of candidates.
//!
//! ## Features
//!
//! - **Edit distances**: Levenshtein, Indel, and Hamming, with optional
//!   bounds for early exit
//! - **Bit-parallel cores**: distances run over word-sized blocks instead
//!   of character-by-character DP
//! - **Similarity scorers**: plain, partial, token-based, and weighted
//!   combinations on a 0-100 scale
//! - **Preprocessing**: Unicode-aware lowercasing and symbol stripping
//! - **Batch extraction**: rank candidates with cutoffs and limits,
//!   scored in parallel for large sets
//!
//! ## Example
//!
//! ```rust
//! use fuzzmatch::{extract, ExtractOptions, Scorer};
//!
//! let candidates = ["new york mets", "new york jets", "atlanta falcons"];
//! let options = ExtractOptions {
//!     limit: Some(1),
//!     ..ExtractOptions::default()
//! };
//! let best = extract("new york jets", &candidates, Scorer::WRatio, &options).unwrap();
//!
//! assert_eq!(best[0].candidate, "new york jets");
//! assert_eq!(best[0].score, 100.0);
//! ```
//!
//! ## Modules
//!
//! - [`distance`]: Edit distance metrics and the [`Metric`] dispatcher
//! - [`scoring`]: Normalized similarity scorers on the 0-100 scale
//! - [`extract`]: Batch ranking of candidates against a query
//! - [`preprocess`]: Default string normalization
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod distance;
pub mod extract;
pub mod preprocess;
pub mod scoring;
pub mod utils;

// Re-export commonly used types for convenience
pub use distance::{distance, similarity, DistanceError, Metric};
pub use extract::{extract, extract_one, score_matrix, ExtractError, ExtractMatch, ExtractOptions};
pub use preprocess::default_process;
pub use scoring::{score, ScoreError, Scorer};
