//! Indel distance: insertions and deletions only, no substitution.
//!
//! Defined through the longest common subsequence, `m + n - 2 * LCS`. The LCS
//! length comes from the Hyyro bit-parallel recurrence, single-word for
//! patterns up to 64 elements and blockwise beyond. The windowed scorers
//! reuse one pattern mask across many texts via [`distance_with`].

use std::hash::Hash;

use crate::distance::pattern::{trim_common_affix, PatternMask};
use crate::utils::count_to_f64;

/// Minimum number of insertions and deletions turning `a` into `b`.
#[must_use]
pub fn distance<T: Copy + Eq + Hash>(a: &[T], b: &[T]) -> usize {
    let (a, b) = trim_common_affix(a, b);
    if a.is_empty() || b.is_empty() {
        return a.len() + b.len();
    }
    // LCS is symmetric; the shorter side as pattern spans fewer words.
    let (pattern, text) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let pm = PatternMask::new(pattern);
    a.len() + b.len() - 2 * lcs_with(&pm, text)
}

/// Indel distance of `text` against a prebuilt pattern mask.
///
/// No affix trimming here: window scans slide `text` under a fixed pattern,
/// and rebuilding the mask per window would defeat the point.
pub(crate) fn distance_with<T: Copy + Eq + Hash>(pm: &PatternMask<T>, text: &[T]) -> usize {
    pm.len() + text.len() - 2 * lcs_with(pm, text)
}

/// Distance capped at `max_distance`; `None` once the cap is provably
/// exceeded, exact value otherwise.
#[must_use]
pub fn bounded_distance<T: Copy + Eq + Hash>(
    a: &[T],
    b: &[T],
    max_distance: usize,
) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max_distance {
        return None;
    }
    let (a, b) = trim_common_affix(a, b);
    if a.is_empty() || b.is_empty() {
        let dist = a.len() + b.len();
        return (dist <= max_distance).then_some(dist);
    }

    let n = b.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                (curr[j] + 1).min(prev[j + 1] + 1)
            };
            row_min = row_min.min(curr[j + 1]);
        }
        if row_min > max_distance {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (prev[n] <= max_distance).then_some(prev[n])
}

/// Similarity in `[0, 1]`: `1 - distance / (len(a) + len(b))`.
///
/// The length sum is the worst case (delete everything, insert everything),
/// so the ratio is bounded. Two empty sequences score 1.
#[must_use]
pub fn normalized_similarity<T: Copy + Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    1.0 - count_to_f64(distance(a, b)) / count_to_f64(total)
}

/// LCS length of `text` against the mask's pattern.
///
/// Hyyro's recurrence: each matched pattern position clears one bit of the
/// running row. The subtraction cannot borrow (matched bits are a subset of
/// the row) and the final OR restores every unmatched set bit, so cleared
/// bits never appear above the pattern length and counting zero bits over
/// whole words is exact.
pub(crate) fn lcs_with<T: Copy + Eq + Hash>(pm: &PatternMask<T>, text: &[T]) -> usize {
    if pm.len() == 0 || text.is_empty() {
        return 0;
    }

    if pm.words() == 1 {
        let mut row = u64::MAX;
        for element in text {
            let matched = row & pm.word(element, 0);
            row = row.wrapping_add(matched) | row.wrapping_sub(matched);
        }
        (!row).count_ones() as usize
    } else {
        let words = pm.words();
        let mut row = vec![u64::MAX; words];
        for element in text {
            let lanes = pm.lanes(element);
            let mut carry = 0u64;
            for w in 0..words {
                let r = row[w];
                let matched = r & lanes.map_or(0, |l| l[w]);
                let (partial, c1) = r.overflowing_add(matched);
                let (sum, c2) = partial.overflowing_add(carry);
                carry = u64::from(c1) | u64::from(c2);
                row[w] = sum | (r ^ matched);
            }
        }
        row.iter().map(|w| (!w).count_ones() as usize).sum()
    }
}
