// 📖 Lexicon - Keywords as Data
// Ordered mapping of category id → lowercase keywords used for classification.
//
// Order matters: when two keywords of the same length match, the one from the
// earlier entry (then the earlier keyword) wins. Keeping the lexicon as a Vec
// makes that order explicit instead of depending on map iteration.

use serde::{Deserialize, Serialize};

// ============================================================================
// LEXICON ENTRY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Category id this entry suggests
    pub category: String,

    /// Substrings that indicate the category (lowercase)
    pub keywords: Vec<String>,
}

impl LexiconEntry {
    pub fn new<I, S>(category: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LexiconEntry {
            category: category.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// LEXICON
// ============================================================================

/// The business-name mapping. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Build from entries, trimming and lowercasing every keyword.
    ///
    /// Structural checks (unknown categories, empty keywords) happen in
    /// [`crate::Catalog::new`], which knows the category sets.
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| LexiconEntry {
                category: entry.category.trim().to_string(),
                keywords: entry
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .collect(),
            })
            .collect();

        Lexicon { entries }
    }

    /// Built-in lexicon for the default category set
    pub fn builtin() -> Self {
        Lexicon::from_entries(default_entries())
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Every (category, keyword) pair in scan order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|entry| {
            entry
                .keywords
                .iter()
                .map(move |k| (entry.category.as_str(), k.as_str()))
        })
    }

    /// Keywords for a category, empty if the id is unknown
    pub fn keywords_for(&self, category_id: &str) -> &[String] {
        self.entries
            .iter()
            .find(|entry| entry.category == category_id)
            .map(|entry| entry.keywords.as_slice())
            .unwrap_or(&[])
    }

    /// All category ids in lexicon order
    pub fn category_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.category.as_str()).collect()
    }

    pub fn keyword_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.keywords.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn default_entries() -> Vec<LexiconEntry> {
    vec![
        // ====================================================================
        // EXPENSE
        // ====================================================================
        LexiconEntry::new("food-dining", [
            "restaurant", "cafe", "coffee", "food", "lunch", "dinner", "breakfast",
            "takeaway", "bakery", "pizza", "sushi", "mcdonald", "kfc", "burger king",
            "subway", "domino", "starbucks", "hell pizza", "uber eats", "doordash",
            "menulog", "delivereasy", "woolworths", "countdown", "pak n save", "paknsave",
            "new world", "four square", "fresh choice", "supervalue", "supermarket",
            "grocery", "groceries", "farmers market", "butcher",
        ]),
        LexiconEntry::new("transportation", [
            "bp", "z energy", "mobil", "caltex", "gull", "shell", "petrol", "fuel",
            "gas station", "gas", "uber", "lyft", "taxi", "bus", "train", "ferry",
            "parking", "wilson parking", "at hop", "snapper", "metlink", "toll",
            "car wash", "wof", "rego", "mechanic", "tyres",
        ]),
        LexiconEntry::new("shopping", [
            "shopping", "mall", "amazon", "ebay", "trade me", "the warehouse",
            "warehouse stationery", "kmart", "farmers", "briscoes", "noel leeming",
            "jb hi-fi", "harvey norman", "mitre 10", "bunnings", "clothing", "shoes",
            "h&m", "zara", "uniqlo", "kathmandu",
        ]),
        LexiconEntry::new("entertainment", [
            "cinema", "movie", "event cinemas", "hoyts", "concert", "ticketek",
            "ticketmaster", "bowling", "steam", "playstation", "xbox", "nintendo",
            "pub", "nightclub",
        ]),
        LexiconEntry::new("bills-utilities", [
            "electricity", "power bill", "power", "mercury", "genesis", "contact energy",
            "meridian", "trustpower", "water bill", "watercare", "internet", "broadband",
            "spark", "one nz", "vodafone", "2degrees", "skinny", "phone bill", "mobile",
            "utilities",
        ]),
        LexiconEntry::new("healthcare", [
            "doctor", "gp visit", "pharmacy", "chemist", "chemist warehouse", "unichem",
            "dentist", "dental", "hospital", "physio", "optometrist", "specsavers",
            "medical", "prescription",
        ]),
        LexiconEntry::new("education", [
            "school", "tuition", "university", "course", "textbook", "udemy", "coursera",
            "kindergarten", "daycare",
        ]),
        LexiconEntry::new("travel", [
            "flight", "airline", "air new zealand", "jetstar", "qantas", "airbnb",
            "hotel", "motel", "booking.com", "expedia", "hostel", "travel", "holiday",
        ]),
        LexiconEntry::new("housing", [
            "rent", "mortgage", "landlord", "property manager", "tenancy", "body corporate",
        ]),
        LexiconEntry::new("personal-care", [
            "haircut", "hairdresser", "barber", "salon", "massage", "beauty", "cosmetics",
            "mecca", "gym", "les mills", "fitness",
        ]),
        LexiconEntry::new("insurance", [
            "insurance", "aa insurance", "tower insurance", "southern cross", "premium",
        ]),
        LexiconEntry::new("gifts-donations", [
            "gift", "present", "donation", "charity", "red cross", "koha", "fundraiser",
        ]),
        LexiconEntry::new("subscriptions", [
            "subscription", "netflix", "spotify", "disney+", "disney plus", "neon",
            "apple music", "youtube premium", "prime video", "icloud", "google one",
            "chatgpt", "adobe",
        ]),
        LexiconEntry::new("other-expense", [
            "bank fee", "fee", "atm", "withdrawal", "penalty",
        ]),
        // ====================================================================
        // INCOME
        // ====================================================================
        LexiconEntry::new("salary", [
            "salary", "wages", "payroll", "paycheck", "payday", "employer", "bonus",
        ]),
        LexiconEntry::new("freelance", [
            "freelance", "contract work", "invoice paid", "client payment", "consulting",
        ]),
        LexiconEntry::new("business", [
            "business income", "business", "revenue", "shopify payout", "stripe payout",
        ]),
        LexiconEntry::new("investments", [
            "dividend", "interest", "investment", "sharesies", "kiwisaver", "crypto", "shares",
        ]),
        LexiconEntry::new("rental-income", [
            "rental income", "rent received", "rental", "boarder",
        ]),
        LexiconEntry::new("gifts-received", [
            "gift from", "birthday money", "received a gift", "inheritance",
        ]),
        LexiconEntry::new("refunds", [
            "refund", "reimbursement", "cashback", "cash back", "rebate",
        ]),
        LexiconEntry::new("other-income", [
            "lotto", "prize", "winnings", "side income",
        ]),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_normalized() {
        let lexicon = Lexicon::from_entries(vec![LexiconEntry::new(
            "food-dining",
            ["  Pak N Save ", "COFFEE"],
        )]);

        assert_eq!(lexicon.keywords_for("food-dining"), ["pak n save", "coffee"]);
    }

    #[test]
    fn test_keywords_for_unknown_category_is_empty() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.keywords_for("does-not-exist").is_empty());
    }

    #[test]
    fn test_category_ids_in_order() {
        let lexicon = Lexicon::builtin();
        let ids = lexicon.category_ids();

        assert_eq!(ids.first(), Some(&"food-dining"));
        assert_eq!(ids.last(), Some(&"other-income"));
        assert_eq!(ids.len(), 22);
    }

    #[test]
    fn test_pairs_follow_entry_then_keyword_order() {
        let lexicon = Lexicon::from_entries(vec![
            LexiconEntry::new("a", ["x", "y"]),
            LexiconEntry::new("b", ["z"]),
        ]);

        let pairs: Vec<_> = lexicon.pairs().collect();
        assert_eq!(pairs, vec![("a", "x"), ("a", "y"), ("b", "z")]);
    }

    #[test]
    fn test_builtin_has_no_duplicate_keywords() {
        let lexicon = Lexicon::builtin();
        let mut seen = std::collections::HashSet::new();

        for (_, keyword) in lexicon.pairs() {
            assert!(seen.insert(keyword), "duplicate keyword: {}", keyword);
        }
        assert_eq!(seen.len(), lexicon.keyword_count());
    }

    #[test]
    fn test_serializes_as_array() {
        let lexicon = Lexicon::from_entries(vec![LexiconEntry::new("salary", ["payroll"])]);
        let json = serde_json::to_string(&lexicon).unwrap();
        assert_eq!(json, r#"[{"category":"salary","keywords":["payroll"]}]"#);
    }
}
