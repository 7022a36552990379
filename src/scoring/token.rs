//! Token-based scorers: whitespace-split, order-insensitive comparisons.

use std::collections::BTreeSet;

use crate::scoring::partial::partial_ratio_score;
use crate::scoring::ratio::ratio_score;

/// Split on whitespace, sort the tokens, rejoin with single spaces.
fn sorted_token_join(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// The deduplicated token sets of two strings, partitioned into the shared
/// part and each side's remainder, each rejoined in sorted order.
struct TokenParts {
    /// Tokens present on both sides.
    shared: String,
    /// Shared tokens followed by tokens only the left side has.
    left: String,
    /// Shared tokens followed by tokens only the right side has.
    right: String,
    has_shared: bool,
    /// Neither side produced a single token.
    no_tokens: bool,
}

fn split_shared_tokens(a: &str, b: &str) -> TokenParts {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    // BTreeSet iteration is already sorted, so the joins need no extra sort.
    let shared_tokens: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let shared = shared_tokens.join(" ");
    let left = join_with_shared(&shared, &only_a);
    let right = join_with_shared(&shared, &only_b);
    TokenParts {
        has_shared: !shared_tokens.is_empty(),
        no_tokens: tokens_a.is_empty() && tokens_b.is_empty(),
        shared,
        left,
        right,
    }
}

fn join_with_shared(shared: &str, only: &[&str]) -> String {
    if only.is_empty() {
        shared.to_string()
    } else if shared.is_empty() {
        only.join(" ")
    } else {
        format!("{shared} {}", only.join(" "))
    }
}

/// Ratio of the two strings after sorting their tokens.
pub(crate) fn token_sort_ratio_score(a: &str, b: &str) -> f64 {
    ratio_score(&sorted_token_join(a), &sorted_token_join(b))
}

/// Best ratio among recombinations of the shared and per-side token sets.
///
/// When one token set contains the other, the shared part compared against
/// itself yields 100, which is the scorer's defining behavior.
pub(crate) fn token_set_ratio_score(a: &str, b: &str) -> f64 {
    let parts = split_shared_tokens(a, b);
    if parts.no_tokens {
        return 0.0;
    }
    if !parts.has_shared {
        return ratio_score(&parts.left, &parts.right);
    }
    ratio_score(&parts.shared, &parts.left)
        .max(ratio_score(&parts.shared, &parts.right))
        .max(ratio_score(&parts.left, &parts.right))
}

/// Maximum of the sort and set variants.
pub(crate) fn token_ratio_score(a: &str, b: &str) -> f64 {
    token_sort_ratio_score(a, b).max(token_set_ratio_score(a, b))
}

/// Partial ratio of the two strings after sorting their tokens.
pub(crate) fn partial_token_sort_ratio_score(a: &str, b: &str) -> f64 {
    partial_ratio_score(&sorted_token_join(a), &sorted_token_join(b))
}

/// Token-set comparison under the partial ratio.
///
/// Any shared token means the shared part aligns perfectly inside both
/// recombinations, so the score short-circuits to 100 without scanning.
pub(crate) fn partial_token_set_ratio_score(a: &str, b: &str) -> f64 {
    let parts = split_shared_tokens(a, b);
    if parts.left.is_empty() || parts.right.is_empty() {
        return 0.0;
    }
    if parts.has_shared {
        return 100.0;
    }
    partial_ratio_score(&parts.left, &parts.right)
}

/// Maximum of the partial sort and partial set variants.
pub(crate) fn partial_token_ratio_score(a: &str, b: &str) -> f64 {
    partial_token_sort_ratio_score(a, b).max(partial_token_set_ratio_score(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_token_join() {
        assert_eq!(sorted_token_join("fuzzy wuzzy was a bear"), "a bear fuzzy was wuzzy");
        assert_eq!(sorted_token_join("  spaced   out  "), "out spaced");
        assert_eq!(sorted_token_join(""), "");
    }

    #[test]
    fn test_token_sort_ignores_word_order() {
        let score = token_sort_ratio_score("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear");
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_token_sort_partial_credit() {
        let score = token_sort_ratio_score("great is rust", "java is great");
        assert!(score > 50.0 && score < 100.0);
    }

    #[test]
    fn test_token_set_deduplicates() {
        let score = token_set_ratio_score("fuzzy fuzzy was a bear", "fuzzy was a bear");
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_token_set_subset_scores_full() {
        let score = token_set_ratio_score("a bear", "fuzzy was a bear");
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_token_set_no_shared_tokens() {
        let score = token_set_ratio_score("abc def", "uvw xyz");
        let direct = ratio_score("abc def", "uvw xyz");
        assert!((score - direct).abs() < 1e-9);
    }

    #[test]
    fn test_token_set_whitespace_only() {
        assert!(token_set_ratio_score("   ", " ").abs() < 1e-9);
    }

    #[test]
    fn test_token_ratio_is_max_of_variants() {
        let cases = [
            ("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear"),
            ("fuzzy fuzzy was a bear", "fuzzy was a bear"),
            ("new york jets", "atlanta falcons"),
            ("one two three", "three two"),
        ];
        for (a, b) in cases {
            let expected = token_sort_ratio_score(a, b).max(token_set_ratio_score(a, b));
            assert!(
                (token_ratio_score(a, b) - expected).abs() < 1e-9,
                "token_ratio not the max for {a:?} vs {b:?}"
            );
        }
    }

    #[test]
    fn test_partial_token_set_shared_token_short_circuits() {
        let score = partial_token_set_ratio_score("new york mets", "new york giants");
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_token_set_one_side_without_tokens() {
        assert!(partial_token_set_ratio_score("   ", "hello").abs() < 1e-9);
        assert!(partial_token_set_ratio_score("hello", "   ").abs() < 1e-9);
    }

    #[test]
    fn test_partial_token_sort_substring_tokens() {
        let score = partial_token_sort_ratio_score("bear fuzzy", "fuzzy wuzzy bear was");
        // Sorted joins are "bear fuzzy" and "bear fuzzy was wuzzy"; the
        // shorter is a prefix window of the longer.
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_token_ratio_is_max_of_variants() {
        let cases = [
            ("the quick brown fox", "quick fox jumps"),
            ("fuzzy wuzzy was a bear", "wuzzy fuzzy"),
            ("one two three", "four five"),
        ];
        for (a, b) in cases {
            let expected =
                partial_token_sort_ratio_score(a, b).max(partial_token_set_ratio_score(a, b));
            assert!(
                (partial_token_ratio_score(a, b) - expected).abs() < 1e-9,
                "partial_token_ratio not the max for {a:?} vs {b:?}"
            );
        }
    }
}
