// 🏷️ Merchant Category Classifier
// Free text (merchant name, transcript, receipt text) → category id
//
// Matching policy:
// - Lowercase + trim the text, then test every keyword as a plain substring
// - Longest matching keyword wins ("pak n save" beats "food")
// - Equal lengths: first match in lexicon order wins (entry, then keyword)

use crate::lexicon::Lexicon;
use serde::Serialize;
use tracing::debug;

// ============================================================================
// MATCH RESULT
// ============================================================================

/// The winning keyword and the category that owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordMatch<'a> {
    pub category_id: &'a str,
    pub keyword: &'a str,
}

// ============================================================================
// CLASSIFIER
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CategoryClassifier {
    lexicon: Lexicon,
}

impl CategoryClassifier {
    pub fn new(lexicon: Lexicon) -> Self {
        CategoryClassifier { lexicon }
    }

    /// Suggest a category id for the text, or `None` if nothing matches
    pub fn classify(&self, text: &str) -> Option<&str> {
        self.best_match(text).map(|m| m.category_id)
    }

    /// Like [`classify`](Self::classify) but also reports the keyword that won
    pub fn best_match(&self, text: &str) -> Option<KeywordMatch<'_>> {
        self.best_match_where(text, |_| true)
    }

    /// Scan only categories accepted by `filter` (e.g. income categories)
    pub fn best_match_where<F>(&self, text: &str, filter: F) -> Option<KeywordMatch<'_>>
    where
        F: Fn(&str) -> bool,
    {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        let mut best: Option<(KeywordMatch<'_>, usize)> = None;

        for (category_id, keyword) in self.lexicon.pairs() {
            if keyword.is_empty() || !filter(category_id) || !normalized.contains(keyword) {
                continue;
            }

            let len = keyword.chars().count();
            // Strictly longer only: ties keep the earlier match
            if best.as_ref().map_or(true, |(_, best_len)| len > *best_len) {
                best = Some((KeywordMatch { category_id, keyword }, len));
            }
        }

        match &best {
            Some((m, _)) => debug!(category = m.category_id, keyword = m.keyword, "Keyword match"),
            None => debug!(text = %normalized, "No keyword match"),
        }

        best.map(|(m, _)| m)
    }

    /// Keywords for a category, empty if the id is unknown
    pub fn keywords_for_category(&self, category_id: &str) -> &[String] {
        self.lexicon.keywords_for(category_id)
    }

    /// Every category id present in the lexicon
    pub fn known_category_ids(&self) -> Vec<&str> {
        self.lexicon.category_ids()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconEntry;

    fn builtin() -> CategoryClassifier {
        CategoryClassifier::new(Lexicon::builtin())
    }

    #[test]
    fn test_simple_keyword_match() {
        let classifier = builtin();

        assert_eq!(classifier.classify("mcdonalds"), Some("food-dining"));
        assert_eq!(classifier.classify("lunch at Chipotle"), Some("food-dining"));
        assert_eq!(classifier.classify("paid bp for gas"), Some("transportation"));
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let classifier = builtin();
        assert_eq!(classifier.classify("  MCDONALDS Queen St "), Some("food-dining"));
        assert_eq!(classifier.classify("Z Energy Ponsonby"), Some("transportation"));
    }

    #[test]
    fn test_longest_match_wins() {
        let classifier = builtin();

        let m = classifier.best_match("woolworths shopping").unwrap();
        assert_eq!(m, KeywordMatch { category_id: "food-dining", keyword: "woolworths" });

        // "uber eats" (food) beats "uber" (transport)
        assert_eq!(classifier.classify("Uber Eats order"), Some("food-dining"));

        // "farmers market" (food) beats "farmers" (shopping)
        assert_eq!(classifier.classify("farmers market"), Some("food-dining"));
        assert_eq!(classifier.classify("Farmers Albany"), Some("shopping"));

        // "mobile" (bills) beats "mobil" (transport)
        assert_eq!(classifier.classify("mobile top up"), Some("bills-utilities"));

        // "rent received" (income) beats "rent" (housing)
        assert_eq!(classifier.classify("rent received"), Some("rental-income"));
        assert_eq!(classifier.classify("weekly rent"), Some("housing"));
    }

    #[test]
    fn test_partial_word_matches_count() {
        let classifier = builtin();
        // "mcdonald" inside "mcdonalds", "coffee" inside "coffees"
        assert_eq!(classifier.classify("two coffees"), Some("food-dining"));
    }

    #[test]
    fn test_no_match() {
        let classifier = builtin();

        assert_eq!(classifier.classify("random unrelated text"), None);
        assert_eq!(classifier.classify(""), None);
        assert_eq!(classifier.classify("   "), None);
    }

    #[test]
    fn test_equal_length_tie_uses_lexicon_order() {
        let food_first = CategoryClassifier::new(Lexicon::from_entries(vec![
            LexiconEntry::new("food-dining", ["lunch"]),
            LexiconEntry::new("transportation", ["train"]),
        ]));
        let transport_first = CategoryClassifier::new(Lexicon::from_entries(vec![
            LexiconEntry::new("transportation", ["train"]),
            LexiconEntry::new("food-dining", ["lunch"]),
        ]));

        let text = "lunch on the train";
        assert_eq!(food_first.classify(text), Some("food-dining"));
        assert_eq!(transport_first.classify(text), Some("transportation"));
    }

    #[test]
    fn test_filter_restricts_categories() {
        let classifier = builtin();

        // "gift" (expense) would win otherwise
        let m = classifier
            .best_match_where("gift", |id| id == "gifts-received")
            .is_none();
        assert!(m);

        let income = classifier.best_match_where("received a gift from mum", |id| id != "gifts-donations");
        assert_eq!(income.map(|m| m.category_id), Some("gifts-received"));
    }

    #[test]
    fn test_keywords_and_ids() {
        let classifier = builtin();

        assert!(classifier
            .keywords_for_category("transportation")
            .contains(&"bp".to_string()));
        assert!(classifier.keywords_for_category("nope").is_empty());
        assert!(classifier.known_category_ids().contains(&"salary"));
    }

    #[test]
    fn test_classify_is_repeatable() {
        let classifier = builtin();
        let first = classifier.classify("pak n save food");
        for _ in 0..3 {
            assert_eq!(classifier.classify("pak n save food"), first);
        }
        assert_eq!(first, Some("food-dining"));
    }
}
