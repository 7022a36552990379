//! Uniform-cost Levenshtein distance.
//!
//! The unbounded path runs Myers' bit-parallel algorithm: a single 64-bit
//! word when the pattern fits, blockwise words otherwise. The bounded path
//! uses a rolling two-row table that gives up as soon as the best value in
//! the current row exceeds the caller's limit. Both agree with the textbook
//! dynamic program on every input.

use std::hash::Hash;

use crate::distance::pattern::{trim_common_affix, PatternMask};
use crate::utils::count_to_f64;

/// Minimum number of insertions, deletions, and substitutions turning `a`
/// into `b`.
#[must_use]
pub fn distance<T: Copy + Eq + Hash>(a: &[T], b: &[T]) -> usize {
    let (a, b) = trim_common_affix(a, b);
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    // The shorter side becomes the pattern so the automaton spans fewer words.
    let (pattern, text) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if pattern.len() <= 64 {
        myers_64(pattern, text)
    } else {
        myers_blocks(pattern, text)
    }
}

/// Distance capped at `max_distance`.
///
/// Returns `None` as soon as the distance provably exceeds the cap, without
/// finishing the table. `Some(d)` is always the exact distance.
#[must_use]
pub fn bounded_distance<T: Copy + Eq + Hash>(
    a: &[T],
    b: &[T],
    max_distance: usize,
) -> Option<usize> {
    // Length difference is a lower bound on the distance.
    if a.len().abs_diff(b.len()) > max_distance {
        return None;
    }
    let (a, b) = trim_common_affix(a, b);
    if a.is_empty() || b.is_empty() {
        let dist = a.len().max(b.len());
        return (dist <= max_distance).then_some(dist);
    }

    let n = b.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (curr[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost);
            row_min = row_min.min(curr[j + 1]);
        }
        // Every path to the final cell crosses this row, so the row minimum
        // is a lower bound on the final distance.
        if row_min > max_distance {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (prev[n] <= max_distance).then_some(prev[n])
}

/// Similarity in `[0, 1]`: `1 - distance / max(len)`.
///
/// Two empty sequences are identical, so they score 1.
#[must_use]
pub fn normalized_similarity<T: Copy + Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - count_to_f64(distance(a, b)) / count_to_f64(longest)
}

/// Myers' algorithm for patterns of at most 64 elements.
///
/// VP/VN track the vertical deltas of the rightmost table column; the bit at
/// `high` reports whether the final distance grew or shrank at each step.
fn myers_64<T: Copy + Eq + Hash>(pattern: &[T], text: &[T]) -> usize {
    debug_assert!(!pattern.is_empty() && pattern.len() <= 64);
    let pm = PatternMask::new(pattern);

    let mut vp = u64::MAX;
    let mut vn = 0u64;
    let mut dist = pattern.len();
    let high = 1u64 << (pattern.len() - 1);

    for element in text {
        let eq = pm.word(element, 0);
        let d0 = (((eq & vp).wrapping_add(vp)) ^ vp) | eq | vn;
        let hp = vn | !(d0 | vp);
        let hn = d0 & vp;
        if hp & high != 0 {
            dist += 1;
        }
        if hn & high != 0 {
            dist -= 1;
        }
        let hp = (hp << 1) | 1;
        let hn = hn << 1;
        vp = hn | !(d0 | hp);
        vn = hp & d0;
    }
    dist
}

/// Blockwise Myers for patterns longer than 64 elements.
///
/// Identical recurrence per word; the addition carry and the shifted-out
/// HP/HN bits propagate from each word into the next. Only the last word
/// needs masking, since the invalid bits above the pattern length would
/// otherwise leak through the negations.
fn myers_blocks<T: Copy + Eq + Hash>(pattern: &[T], text: &[T]) -> usize {
    let pm = PatternMask::new(pattern);
    let words = pm.words();
    let last = words - 1;
    let tail_bits = pattern.len() - 64 * last;
    let valid = lower_bits(tail_bits);
    let high = 1u64 << (tail_bits - 1);

    let mut vp = vec![u64::MAX; words];
    let mut vn = vec![0u64; words];
    vp[last] = valid;
    let mut dist = pattern.len();

    for element in text {
        let lanes = pm.lanes(element);
        let mut add_carry = 0u64;
        let mut hp_in = 1u64;
        let mut hn_in = 0u64;

        for w in 0..words {
            let eq = lanes.map_or(0, |l| l[w]);
            let pv = vp[w];
            let nv = vn[w];

            let (partial, c1) = (eq & pv).overflowing_add(add_carry);
            let (sum, c2) = partial.overflowing_add(pv);
            add_carry = u64::from(c1) | u64::from(c2);

            let d0 = (sum ^ pv) | eq | nv;
            let hp = nv | !(d0 | pv);
            let hn = d0 & pv;

            if w == last {
                if hp & high != 0 {
                    dist += 1;
                }
                if hn & high != 0 {
                    dist -= 1;
                }
            }

            let hp_shift = (hp << 1) | hp_in;
            let hn_shift = (hn << 1) | hn_in;
            vp[w] = hn_shift | !(d0 | hp_shift);
            vn[w] = hp_shift & d0;
            hp_in = hp >> 63;
            hn_in = hn >> 63;
        }

        vp[last] &= valid;
        vn[last] &= valid;
    }
    dist
}

fn lower_bits(count: usize) -> u64 {
    if count >= 64 {
        u64::MAX
    } else {
        (1u64 << count) - 1
    }
}
