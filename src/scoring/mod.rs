//! Named scorers over the distance primitives.
//!
//! Every scorer takes two strings and produces a percentage in `0.0..=100.0`,
//! rounded to one decimal place. The variants differ in how they slice and
//! rearrange the inputs before measuring Indel similarity:
//!
//! | Scorer | Strategy |
//! |--------|----------|
//! | `ratio` | whole strings as given |
//! | `partial_ratio` | best window of the longer string |
//! | `token_sort_ratio` | tokens sorted, then compared |
//! | `token_set_ratio` | best recombination of shared/unique tokens |
//! | `token_ratio` | max of the two token variants |
//! | `partial_token_*` | token variants under the window scan |
//! | `wratio` | weighted composite of all of the above |
//! | `qratio` | `ratio`, but any empty input scores 0 |
//!
//! Empty inputs short-circuit before any scorer logic runs: one empty side
//! scores 0, two empty sides score 100 (identical by convention), except
//! for `qratio` which scores 0 either way.
//!
//! [`score`] is the uniform entry point used by the batch engine and the
//! CLI; the per-scorer functions are conveniences over it:
//!
//! ```rust
//! use fuzzmatch::{score, Scorer};
//!
//! let s = score("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear",
//!               Scorer::TokenSortRatio, false, None).unwrap();
//! assert_eq!(s, 100.0);
//! ```

use thiserror::Error;

use crate::preprocess::default_process;
use crate::utils::validation::{validate_cutoff, ValidationError};

mod partial;
mod ratio;
mod token;
mod weighted;

/// Which scoring strategy to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Scorer {
    Ratio,
    #[value(name = "partial_ratio")]
    PartialRatio,
    #[value(name = "token_sort_ratio")]
    TokenSortRatio,
    #[value(name = "token_set_ratio")]
    TokenSetRatio,
    #[value(name = "token_ratio")]
    TokenRatio,
    #[value(name = "partial_token_sort_ratio")]
    PartialTokenSortRatio,
    #[value(name = "partial_token_set_ratio")]
    PartialTokenSetRatio,
    #[value(name = "partial_token_ratio")]
    PartialTokenRatio,
    #[value(name = "wratio")]
    WRatio,
    #[value(name = "qratio")]
    QRatio,
}

impl Scorer {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Scorer::Ratio => "ratio",
            Scorer::PartialRatio => "partial_ratio",
            Scorer::TokenSortRatio => "token_sort_ratio",
            Scorer::TokenSetRatio => "token_set_ratio",
            Scorer::TokenRatio => "token_ratio",
            Scorer::PartialTokenSortRatio => "partial_token_sort_ratio",
            Scorer::PartialTokenSetRatio => "partial_token_set_ratio",
            Scorer::PartialTokenRatio => "partial_token_ratio",
            Scorer::WRatio => "wratio",
            Scorer::QRatio => "qratio",
        }
    }

    /// Unrounded score of two raw strings.
    ///
    /// The batch engine calls this per candidate and rounds once at the
    /// boundary, so composite work never accumulates rounding error.
    pub(crate) fn compute(self, a: &str, b: &str) -> f64 {
        if a.is_empty() || b.is_empty() {
            // Two empty strings count as identical; QRatio instead treats
            // any empty input as a miss.
            return if a.is_empty() && b.is_empty() && self != Scorer::QRatio {
                100.0
            } else {
                0.0
            };
        }
        match self {
            Scorer::Ratio | Scorer::QRatio => ratio::ratio_score(a, b),
            Scorer::PartialRatio => partial::partial_ratio_score(a, b),
            Scorer::TokenSortRatio => token::token_sort_ratio_score(a, b),
            Scorer::TokenSetRatio => token::token_set_ratio_score(a, b),
            Scorer::TokenRatio => token::token_ratio_score(a, b),
            Scorer::PartialTokenSortRatio => token::partial_token_sort_ratio_score(a, b),
            Scorer::PartialTokenSetRatio => token::partial_token_set_ratio_score(a, b),
            Scorer::PartialTokenRatio => token::partial_token_ratio_score(a, b),
            Scorer::WRatio => weighted::weighted_ratio_score(a, b),
        }
    }
}

/// Errors from the scoring entry points
#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("invalid parameter: {0}")]
    Validation(#[from] ValidationError),
}

/// Round to one decimal place, half away from zero.
///
/// Applied exactly once, at the public boundary. Cutoffs compare against
/// the rounded value, so a cutoff of 96.6 keeps a raw score of 96.55.
pub(crate) fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

/// Score a single pair of strings with the chosen scorer.
///
/// With `preprocess` set, [`default_process`] is applied to both sides
/// first. A score below `cutoff` collapses to 0.
///
/// # Errors
///
/// Returns [`ScoreError::Validation`] if `cutoff` lies outside
/// `0.0..=100.0`.
pub fn score(
    a: &str,
    b: &str,
    scorer: Scorer,
    preprocess: bool,
    cutoff: Option<f64>,
) -> Result<f64, ScoreError> {
    if let Some(cutoff) = cutoff {
        validate_cutoff(cutoff)?;
    }
    let rounded = if preprocess {
        let a = default_process(a);
        let b = default_process(b);
        round_score(scorer.compute(&a, &b))
    } else {
        round_score(scorer.compute(a, b))
    };
    Ok(match cutoff {
        Some(cutoff) if rounded < cutoff => 0.0,
        _ => rounded,
    })
}

/// Indel similarity of the whole strings as a percentage.
///
/// ```rust
/// use fuzzmatch::scoring::ratio;
///
/// assert_eq!(ratio("this is a test", "this is a test!"), 96.6);
/// ```
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    round_score(Scorer::Ratio.compute(a, b))
}

/// Best [`ratio`] of the shorter string against every window of the longer.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    round_score(Scorer::PartialRatio.compute(a, b))
}

/// [`ratio`] of the strings with their tokens sorted.
///
/// ```rust
/// use fuzzmatch::scoring::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear"), 100.0);
/// ```
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    round_score(Scorer::TokenSortRatio.compute(a, b))
}

/// Best [`ratio`] among recombinations of shared and unique tokens.
#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    round_score(Scorer::TokenSetRatio.compute(a, b))
}

/// Maximum of [`token_sort_ratio`] and [`token_set_ratio`].
#[must_use]
pub fn token_ratio(a: &str, b: &str) -> f64 {
    round_score(Scorer::TokenRatio.compute(a, b))
}

/// [`partial_ratio`] of the strings with their tokens sorted.
#[must_use]
pub fn partial_token_sort_ratio(a: &str, b: &str) -> f64 {
    round_score(Scorer::PartialTokenSortRatio.compute(a, b))
}

/// Token-set comparison under the window scan; any shared token scores 100.
#[must_use]
pub fn partial_token_set_ratio(a: &str, b: &str) -> f64 {
    round_score(Scorer::PartialTokenSetRatio.compute(a, b))
}

/// Maximum of [`partial_token_sort_ratio`] and [`partial_token_set_ratio`].
#[must_use]
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    round_score(Scorer::PartialTokenRatio.compute(a, b))
}

/// Weighted composite of the ratio, partial, and token scorers.
///
/// Constants are fixed: token scores are scaled by 0.95; once the length
/// disparity reaches 1.5 the partial scorers participate, scaled by 0.9,
/// dropping to 0.6 at a disparity of 8. The unscaled plain ratio always
/// competes, so it wins ties.
#[must_use]
pub fn wratio(a: &str, b: &str) -> f64 {
    round_score(Scorer::WRatio.compute(a, b))
}

/// [`ratio`] with stricter empty handling: any empty input scores 0.
#[must_use]
pub fn qratio(a: &str, b: &str) -> f64 {
    round_score(Scorer::QRatio.compute(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SCORERS: [Scorer; 10] = [
        Scorer::Ratio,
        Scorer::PartialRatio,
        Scorer::TokenSortRatio,
        Scorer::TokenSetRatio,
        Scorer::TokenRatio,
        Scorer::PartialTokenSortRatio,
        Scorer::PartialTokenSetRatio,
        Scorer::PartialTokenRatio,
        Scorer::WRatio,
        Scorer::QRatio,
    ];

    #[test]
    fn test_identical_strings_score_100() {
        for scorer in ALL_SCORERS {
            let s = score("fuzzy wuzzy", "fuzzy wuzzy", scorer, false, None).unwrap();
            assert!((s - 100.0).abs() < 1e-9, "{} on identical input", scorer.name());
        }
    }

    #[test]
    fn test_one_empty_scores_0() {
        for scorer in ALL_SCORERS {
            let s = score("hello", "", scorer, false, None).unwrap();
            assert!(s.abs() < 1e-9, "{} with one empty input", scorer.name());
        }
    }

    #[test]
    fn test_both_empty_convention() {
        for scorer in ALL_SCORERS {
            let s = score("", "", scorer, false, None).unwrap();
            let expected = if scorer == Scorer::QRatio { 0.0 } else { 100.0 };
            assert!(
                (s - expected).abs() < 1e-9,
                "{} with both inputs empty",
                scorer.name()
            );
        }
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // Raw score 96.5517... rounds half away from zero to 96.6.
        assert!((ratio("this is a test", "this is a test!") - 96.6).abs() < 1e-12);
        assert!((round_score(12.34) - 12.3).abs() < 1e-12);
        // Exactly representable halves round away from zero.
        assert!((round_score(99.25) - 99.3).abs() < 1e-12);
        assert!((round_score(0.25) - 0.3).abs() < 1e-12);
        assert!((round_score(0.04) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_cutoff_collapses_low_scores() {
        let s = score("this is a test", "this is a test!", Scorer::Ratio, false, Some(97.0));
        assert!(s.unwrap().abs() < 1e-9);
        let s = score("this is a test", "this is a test!", Scorer::Ratio, false, Some(90.0));
        assert!((s.unwrap() - 96.6).abs() < 1e-9);
    }

    #[test]
    fn test_cutoff_compares_rounded_value() {
        // Raw 96.5517 rounds to 96.6, which survives a 96.6 cutoff.
        let s = score("this is a test", "this is a test!", Scorer::Ratio, false, Some(96.6));
        assert!((s.unwrap() - 96.6).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_cutoff_rejected() {
        for cutoff in [-1.0, 100.5, f64::NAN] {
            let result = score("a", "b", Scorer::Ratio, false, Some(cutoff));
            assert!(matches!(result, Err(ScoreError::Validation(_))), "cutoff {cutoff}");
        }
    }

    #[test]
    fn test_preprocess_flag() {
        let raw = score("NEW YORK!", "new york", Scorer::Ratio, false, None).unwrap();
        let processed = score("NEW YORK!", "new york", Scorer::Ratio, true, None).unwrap();
        assert!(raw < 100.0);
        assert!((processed - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_scorer_names() {
        let expected = [
            "ratio",
            "partial_ratio",
            "token_sort_ratio",
            "token_set_ratio",
            "token_ratio",
            "partial_token_sort_ratio",
            "partial_token_set_ratio",
            "partial_token_ratio",
            "wratio",
            "qratio",
        ];
        for (scorer, name) in ALL_SCORERS.iter().zip(expected) {
            assert_eq!(scorer.name(), name);
        }
    }

    #[test]
    fn test_wratio_token_branch() {
        assert!((wratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear") - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_qratio_matches_ratio_on_non_empty() {
        let pairs = [("hello", "hallo"), ("abc", "abc"), ("a b", "b a")];
        for (a, b) in pairs {
            assert!((qratio(a, b) - ratio(a, b)).abs() < 1e-9);
        }
    }
}
