//! Category Suggestions
//!
//! Autocomplete narrowing over the distinct-categories projection, for
//! the draft's category input.

/// Maximum suggestions returned for one query
const MAX_SUGGESTIONS: usize = 5;

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut remaining = target.chars();
    query
        .chars()
        .all(|needle| (&mut remaining).any(|c| c == needle))
}

/// Narrow categories to those fuzzy-matching the partial input
///
/// An empty query yields no suggestions (nothing typed, no popup); the
/// full category list is available separately for dropdown rendering.
pub fn suggestions(query: &str, categories: &[String]) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    categories
        .iter()
        .filter(|category| fuzzy_match(query, category))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_match_in_order() {
        assert!(fuzzy_match("grc", "groceries"));
        assert!(fuzzy_match("GROC", "groceries"));
        assert!(fuzzy_match("", "anything"));
        assert!(!fuzzy_match("grz", "groceries"));
        assert!(!fuzzy_match("groceries", "groc"));
    }

    #[test]
    fn test_suggestions_filter_and_cap() {
        let categories: Vec<String> = [
            "groceries", "gadgets", "garden", "gas", "games", "gifts", "rent",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        // Six categories start with 'g'; the list caps at five
        assert_eq!(suggestions("g", &categories).len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions("rent", &categories), vec!["rent".to_string()]);
        assert!(suggestions("xyz", &categories).is_empty());
        assert!(suggestions("  ", &categories).is_empty());
    }
}
