// crates/countrykit-core/src/text.rs

//! Case folding for query comparison.
//!
//! Matching is strictly case-insensitive: no transliteration, no accent
//! stripping. `to_lowercase` (rather than ASCII lowercasing) keeps
//! comparisons correct for the non-ASCII native names in the dataset.

/// Convert a string into a folded key suitable for comparison.
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Case-insensitive substring match.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_only() {
        assert_eq!(fold_key("United States"), "united states");
        assert_eq!(fold_key("ÖSTERREICH"), "österreich");
        // No transliteration: accents survive folding.
        assert_ne!(fold_key("México"), "mexico");
    }

    #[test]
    fn equality_ignores_case() {
        assert!(equals_folded("Europe", "europe"));
        assert!(equals_folded("NORTH AMERICA", "North America"));
        assert!(!equals_folded("Europe", "Asia"));
    }

    #[test]
    fn substring_ignores_case() {
        assert!(contains_folded("United Kingdom", "KING"));
        assert!(contains_folded("Україна", "УКРА"));
        assert!(!contains_folded("France", "united"));
    }
}
