//! Best-window alignment of the shorter string inside the longer one.

use crate::distance::indel;
use crate::distance::pattern::PatternMask;
use crate::utils::count_to_f64;

/// Unrounded partial ratio of two strings.
pub(crate) fn partial_ratio_score(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    partial_ratio_chars(&a, &b)
}

/// Best Indel similarity of the shorter sequence over every window of the
/// longer one, including partial overhangs at both ends.
///
/// For equal lengths the window scan is tried in both orientations, since
/// either string can act as the pattern and the overhang windows are not
/// symmetric.
pub(crate) fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.len() <= b.len() {
        let mut best = best_window_score(a, b);
        if best < 100.0 && a.len() == b.len() {
            best = best.max(best_window_score(b, a));
        }
        best
    } else {
        best_window_score(b, a)
    }
}

/// Scan `longer` with the `shorter` pattern. Requires
/// `shorter.len() <= longer.len()` and both non-empty.
///
/// The pattern mask is built once and shared by every window, which is the
/// whole advantage over re-running the full distance per shift. Returns
/// early as soon as a window matches perfectly.
fn best_window_score(shorter: &[char], longer: &[char]) -> f64 {
    let pm = PatternMask::new(shorter);
    let s_len = shorter.len();
    let l_len = longer.len();
    let mut best = 0.0f64;

    // Growing prefixes of the text, shorter than the pattern.
    for end in 1..s_len.min(l_len) {
        best = best.max(window_score(&pm, &longer[..end]));
        if best >= 100.0 {
            return 100.0;
        }
    }
    // Full-width windows.
    for start in 0..=(l_len - s_len) {
        best = best.max(window_score(&pm, &longer[start..start + s_len]));
        if best >= 100.0 {
            return 100.0;
        }
    }
    // Shrinking suffixes of the text.
    for start in (l_len - s_len + 1)..l_len {
        best = best.max(window_score(&pm, &longer[start..]));
        if best >= 100.0 {
            return 100.0;
        }
    }
    best
}

fn window_score(pm: &PatternMask<char>, window: &[char]) -> f64 {
    let total = pm.len() + window.len();
    let dist = indel::distance_with(pm, window);
    (1.0 - count_to_f64(dist) / count_to_f64(total)) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Window scan by brute force: full Indel distance per window, no shared
    /// mask, no early exit.
    fn naive_scan(pattern: &[char], text: &[char]) -> f64 {
        let score = |window: &[char]| {
            let total = pattern.len() + window.len();
            let dist = crate::distance::indel::distance(pattern, window);
            (1.0 - dist as f64 / total as f64) * 100.0
        };
        let s_len = pattern.len();
        let l_len = text.len();
        let mut best = 0.0f64;
        for end in 1..s_len.min(l_len) {
            best = best.max(score(&text[..end]));
        }
        for start in 0..=(l_len - s_len) {
            best = best.max(score(&text[start..start + s_len]));
        }
        for start in (l_len - s_len + 1)..l_len {
            best = best.max(score(&text[start..]));
        }
        best
    }

    fn naive_partial(a: &[char], b: &[char]) -> f64 {
        if a.len() <= b.len() {
            let mut best = naive_scan(a, b);
            if best < 100.0 && a.len() == b.len() {
                best = best.max(naive_scan(b, a));
            }
            best
        } else {
            naive_scan(b, a)
        }
    }

    #[test]
    fn test_substring_scores_full() {
        assert!((partial_ratio_score("test", "this is a test") - 100.0).abs() < 1e-9);
        assert!((partial_ratio_score("this is a test", "this is a test!") - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_inputs() {
        assert!((partial_ratio_score("", "") - 100.0).abs() < 1e-9);
        assert!(partial_ratio_score("", "abc").abs() < 1e-9);
        assert!(partial_ratio_score("abc", "").abs() < 1e-9);
    }

    #[test]
    fn test_overhang_beats_full_window() {
        // "bcd" against "abc": the best alignment hangs off the end,
        // matching "bc" with one element unpaired on each side.
        let score = partial_ratio_score("bcd", "abc");
        let expected = naive_partial(&chars("bcd"), &chars("abc"));
        assert!((score - expected).abs() < 1e-9);
        assert!(score > 50.0);
    }

    #[test]
    fn test_matches_brute_force() {
        let cases = [
            ("abcd", "bcda"),
            ("fuzzy", "wuzzy fuzzy was a bear"),
            ("similar", "dissimilarity"),
            ("aabbbbaa", "bbbaabab"),
            ("short", "a much longer string containing shrt inside"),
        ];
        for (a, b) in cases {
            let (av, bv) = (chars(a), chars(b));
            let fast = partial_ratio_chars(&av, &bv);
            let slow = naive_partial(&av, &bv);
            assert!(
                (fast - slow).abs() < 1e-9,
                "mismatch for {a:?} vs {b:?}: {fast} vs {slow}"
            );
        }
    }

    #[test]
    fn test_equal_length_is_symmetric() {
        let pairs = [
            ("abcd", "bcda"),
            ("aabbbbaa", "bbbaabab"),
            ("xyzw", "wxyz"),
            ("hello", "olleh"),
        ];
        for (a, b) in pairs {
            let forward = partial_ratio_score(a, b);
            let backward = partial_ratio_score(b, a);
            assert!(
                (forward - backward).abs() < 1e-9,
                "asymmetric for {a:?} vs {b:?}: {forward} vs {backward}"
            );
        }
    }

    #[test]
    fn test_long_pattern_uses_blockwise_kernel() {
        let base: String = "the quick brown fox jumps over the lazy dog. ".repeat(3);
        let needle = &base[10..90];
        let score = partial_ratio_score(needle, &base);
        assert!((score - 100.0).abs() < 1e-9);
    }
}
