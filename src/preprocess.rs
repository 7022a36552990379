//! String normalization applied before scoring.

/// Normalize a string for scoring: lowercase, replace every
/// non-alphanumeric character with a space, collapse whitespace runs,
/// and trim the ends.
///
/// The transform is idempotent, so callers may pass already-processed
/// strings without changing the result. Lowercasing happens before the
/// separator replacement: some lowercase expansions introduce combining
/// marks (e.g. dotted capital I), and those must be replaced in the same
/// pass to keep a second application a no-op.
///
/// ```rust
/// use fuzzmatch::default_process;
///
/// assert_eq!(default_process("  C'est   la Vie!"), "c est la vie");
/// ```
#[must_use]
pub fn default_process(input: &str) -> String {
    let spaced: String = input
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(default_process("HeLLo World"), "hello world");
    }

    #[test]
    fn test_strips_separators() {
        assert_eq!(default_process("this is a test!!!"), "this is a test");
        assert_eq!(default_process("new-york_jets"), "new york jets");
        assert_eq!(default_process("a.b.c"), "a b c");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        assert_eq!(default_process("  fuzzy\t\twuzzy  \n bear "), "fuzzy wuzzy bear");
        assert_eq!(default_process("   "), "");
        assert_eq!(default_process(""), "");
    }

    #[test]
    fn test_keeps_digits_and_letters() {
        assert_eq!(default_process("Route 66!"), "route 66");
        assert_eq!(default_process("héllo wörld"), "héllo wörld");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "  C'est   la Vie!",
            "HELLO, WORLD!!",
            "İstanbul",
            "ẞharp",
            "already clean",
            "",
        ];
        for input in inputs {
            let once = default_process(input);
            assert_eq!(default_process(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_all_separators_yield_empty() {
        assert_eq!(default_process("!!! --- ???"), "");
    }
}
