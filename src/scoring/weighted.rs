//! The composite weighted scorer.

use crate::scoring::partial::partial_ratio_score;
use crate::scoring::ratio::ratio_score;
use crate::scoring::token::{partial_token_ratio_score, token_ratio_score};
use crate::utils::count_to_f64;

/// Down-weighting applied to token-based scores, which compare rearranged
/// strings rather than the originals.
const UNBASE_SCALE: f64 = 0.95;

/// Length disparity beyond which the partial scorers join the mix.
const PARTIAL_THRESHOLD: f64 = 1.5;

/// Length disparity beyond which partial matches carry little weight.
const LONG_THRESHOLD: f64 = 8.0;

/// Best of several scoring strategies, weighted by how comparable the
/// input lengths are. Requires non-empty inputs.
///
/// - length ratio < 1.5: `max(ratio, token_ratio * 0.95)`
/// - length ratio < 8:   `max(ratio, partial_ratio * 0.9, partial_token_ratio * 0.95 * 0.9)`
/// - otherwise:          same as above with scale 0.6 instead of 0.9
///
/// The plain ratio enters every branch unscaled, so it wins ties against
/// the derived scores.
pub(crate) fn weighted_ratio_score(a: &str, b: &str) -> f64 {
    let base = ratio_score(a, b);

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let len_ratio =
        count_to_f64(len_a.max(len_b)) / count_to_f64(len_a.min(len_b));

    if len_ratio < PARTIAL_THRESHOLD {
        return base.max(token_ratio_score(a, b) * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio < LONG_THRESHOLD { 0.9 } else { 0.6 };
    base.max(partial_ratio_score(a, b) * partial_scale)
        .max(partial_token_ratio_score(a, b) * UNBASE_SCALE * partial_scale)
}
