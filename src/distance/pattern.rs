//! Blockwise pattern bitmasks shared by the bit-parallel distance kernels.
//!
//! Myers' Levenshtein automaton and the Hyyro LCS recurrence both start from
//! the same precomputed table: for every element of the pattern, a bitmask of
//! the positions where it occurs, split into 64-bit words. Building the table
//! once and reusing it is what makes windowed searches (scoring one pattern
//! against many texts) cheap.

use std::collections::HashMap;
use std::hash::Hash;

/// Per-element position bitmasks for a pattern, split into 64-bit words.
///
/// Word `w` of the mask for element `e` has bit `i` set when
/// `pattern[w * 64 + i] == e`.
pub(crate) struct PatternMask<T> {
    masks: HashMap<T, Vec<u64>>,
    len: usize,
    words: usize,
}

impl<T: Copy + Eq + Hash> PatternMask<T> {
    pub(crate) fn new(pattern: &[T]) -> Self {
        let words = pattern.len().div_ceil(64).max(1);
        let mut masks: HashMap<T, Vec<u64>> = HashMap::new();
        for (i, &element) in pattern.iter().enumerate() {
            let lanes = masks.entry(element).or_insert_with(|| vec![0u64; words]);
            lanes[i / 64] |= 1u64 << (i % 64);
        }
        Self {
            masks,
            len: pattern.len(),
            words,
        }
    }

    /// Length of the pattern the masks were built from.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of 64-bit words per mask.
    pub(crate) fn words(&self) -> usize {
        self.words
    }

    /// All mask words for `element`, or `None` if it never occurs.
    pub(crate) fn lanes(&self, element: &T) -> Option<&[u64]> {
        self.masks.get(element).map(Vec::as_slice)
    }

    /// Single mask word, zero when the element does not occur.
    pub(crate) fn word(&self, element: &T, w: usize) -> u64 {
        self.masks.get(element).map_or(0, |lanes| lanes[w])
    }
}

/// Drop the longest shared prefix and suffix from both slices.
///
/// Matching affixes never change an edit distance, so the kernels only run on
/// the differing core. The suffix is taken after the prefix to avoid counting
/// overlapping elements twice.
pub(crate) fn trim_common_affix<'a, T: PartialEq>(a: &'a [T], b: &'a [T]) -> (&'a [T], &'a [T]) {
    let prefix = a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    (&a[..a.len() - suffix], &b[..b.len() - suffix])
}
