//! Whole-string Indel similarity, the building block for every other scorer.

use crate::distance::indel;

/// Unrounded Indel similarity percentage of the full strings.
///
/// Composite scorers compare intermediate strings with this and round only
/// the final result, so the value here keeps full precision.
pub(crate) fn ratio_score(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    indel::normalized_similarity(&a, &b) * 100.0
}
