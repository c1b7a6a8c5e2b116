// ⚙️ Catalog - categories + lexicon, built once at startup
//
// Sources, in priority order:
// 1. An explicit JSON file (`--catalog` / `TXN_CATALOG`)
// 2. The built-in defaults
//
// After construction the catalog is read-only; share it as `Arc<Catalog>`.

use crate::classifier::{CategoryClassifier, KeywordMatch};
use crate::entities::{Category, CategoryRegistry, CategoryType};
use crate::error::{CatalogError, Result};
use crate::lexicon::{Lexicon, LexiconEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Environment variable naming a catalog JSON file
pub const CATALOG_ENV: &str = "TXN_CATALOG";

// ============================================================================
// FILE FORMAT
// ============================================================================

/// On-disk shape of a catalog.
///
/// ```json
/// {
///   "expense_categories": [{ "id": "food-dining", "name": "Food & Dining" }],
///   "income_categories": [{ "id": "salary", "name": "Salary" }],
///   "lexicon": [{ "category": "food-dining", "keywords": ["cafe"] }]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub expense_categories: Vec<Category>,
    pub income_categories: Vec<Category>,
    #[serde(default)]
    pub lexicon: Vec<LexiconEntry>,
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Clone)]
pub struct Catalog {
    categories: CategoryRegistry,
    classifier: CategoryClassifier,
}

impl Catalog {
    /// Validate and assemble a catalog.
    ///
    /// Rejects duplicate category ids (across both sets), lexicon entries for
    /// unknown categories, repeated lexicon entries, and empty keywords.
    pub fn new(categories: CategoryRegistry, lexicon: Lexicon) -> Result<Self> {
        let mut ids = HashSet::new();
        for category in categories.all_categories() {
            if !ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut seen_entries = HashSet::new();
        for entry in lexicon.entries() {
            if !ids.contains(entry.category.as_str()) {
                return Err(CatalogError::UnknownCategory(entry.category.clone()));
            }
            if !seen_entries.insert(entry.category.as_str()) {
                return Err(CatalogError::DuplicateLexiconEntry(entry.category.clone()));
            }
            if entry.keywords.iter().any(|k| k.is_empty()) {
                return Err(CatalogError::EmptyKeyword(entry.category.clone()));
            }
        }

        Ok(Catalog {
            categories,
            classifier: CategoryClassifier::new(lexicon),
        })
    }

    /// Built-in categories and lexicon
    pub fn builtin() -> Self {
        Catalog {
            categories: CategoryRegistry::with_defaults(),
            classifier: CategoryClassifier::new(Lexicon::builtin()),
        }
    }

    pub fn from_catalog_file(file: CatalogFile) -> Result<Self> {
        let categories = CategoryRegistry::from_parts(file.expense_categories, file.income_categories);
        Catalog::new(categories, Lexicon::from_entries(file.lexicon))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Catalog::from_catalog_file(file)
    }

    /// Load catalog from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Catalog::from_json(&content)?;

        info!(
            path = %path.as_ref().display(),
            categories = catalog.categories.count(),
            keywords = catalog.lexicon().keyword_count(),
            "Loaded catalog"
        );

        Ok(catalog)
    }

    /// Load from an optional path, falling back to the built-in catalog
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Catalog::from_file(p),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Use `TXN_CATALOG` when set, built-in defaults otherwise
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CATALOG_ENV) {
            Some(path) if !path.is_empty() => Catalog::from_file(path),
            _ => Ok(Catalog::builtin()),
        }
    }

    pub fn to_catalog_file(&self) -> CatalogFile {
        CatalogFile {
            expense_categories: self.categories.expense().to_vec(),
            income_categories: self.categories.income().to_vec(),
            lexicon: self.lexicon().entries().to_vec(),
        }
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn classifier(&self) -> &CategoryClassifier {
        &self.classifier
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.classifier.lexicon()
    }

    pub fn classify(&self, text: &str) -> Option<&str> {
        self.classifier.classify(text)
    }

    /// Best keyword match, optionally limited to one category type
    pub fn best_match(&self, text: &str, kind: Option<CategoryType>) -> Option<KeywordMatch<'_>> {
        match kind {
            Some(kind) => self
                .classifier
                .best_match_where(text, |id| self.categories.type_of(id) == Some(kind)),
            None => self.classifier.best_match(text),
        }
    }

    /// Resolve a suggestion to its category metadata
    pub fn suggest(&self, text: &str, kind: Option<CategoryType>) -> Option<&Category> {
        self.best_match(text, kind)
            .and_then(|m| self.categories.find_by_id(m.category_id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "expense_categories": [
            { "id": "food-dining", "name": "Food & Dining", "icon": "🍽️" },
            { "id": "transportation", "name": "Transportation" }
        ],
        "income_categories": [
            { "id": "salary", "name": "Salary" }
        ],
        "lexicon": [
            { "category": "food-dining", "keywords": ["Cafe", " pak n save "] },
            { "category": "transportation", "keywords": ["bp"] },
            { "category": "salary", "keywords": ["payroll"] }
        ]
    }"#;

    #[test]
    fn test_builtin_catalog_is_consistent() {
        let builtin = Catalog::builtin();
        let file = builtin.to_catalog_file();

        // Rebuilding through validation must succeed
        let rebuilt = Catalog::from_catalog_file(file).unwrap();
        assert_eq!(rebuilt.categories().count(), builtin.categories().count());
        assert_eq!(rebuilt.lexicon(), builtin.lexicon());
    }

    #[test]
    fn test_every_lexicon_key_is_a_category() {
        let catalog = Catalog::builtin();
        for id in catalog.classifier().known_category_ids() {
            assert!(catalog.categories().contains(id), "missing category {}", id);
        }
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(SMALL).unwrap();

        assert_eq!(catalog.categories().count(), 3);
        assert_eq!(catalog.classify("PAK N SAVE Albany"), Some("food-dining"));
        assert_eq!(catalog.classify("bp connect"), Some("transportation"));
        assert_eq!(catalog.classify("nothing"), None);
    }

    #[test]
    fn test_lexicon_is_optional_in_json() {
        let json = r#"{ "expense_categories": [], "income_categories": [] }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.lexicon().is_empty());
        assert_eq!(catalog.classify("anything"), None);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let categories = CategoryRegistry::from_parts(vec![Category::new("food-dining", "Food")], vec![]);
        let lexicon = Lexicon::from_entries(vec![LexiconEntry::new("travel", ["hotel"])]);

        let err = Catalog::new(categories, lexicon).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(id) if id == "travel"));
    }

    #[test]
    fn test_duplicate_category_across_sets_rejected() {
        let categories = CategoryRegistry::from_parts(
            vec![Category::new("gifts", "Gifts")],
            vec![Category::new("gifts", "Gifts")],
        );

        let err = Catalog::new(categories, Lexicon::default()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory(_)));
    }

    #[test]
    fn test_duplicate_lexicon_entry_rejected() {
        let categories = CategoryRegistry::from_parts(vec![Category::new("food-dining", "Food")], vec![]);
        let lexicon = Lexicon::from_entries(vec![
            LexiconEntry::new("food-dining", ["cafe"]),
            LexiconEntry::new("food-dining", ["bakery"]),
        ]);

        let err = Catalog::new(categories, lexicon).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateLexiconEntry(_)));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let categories = CategoryRegistry::from_parts(vec![Category::new("food-dining", "Food")], vec![]);
        let lexicon = Lexicon::from_entries(vec![LexiconEntry::new("food-dining", ["cafe", "   "])]);

        let err = Catalog::new(categories, lexicon).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyKeyword(_)));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_suggest_by_kind() {
        let catalog = Catalog::builtin();

        let any = catalog.suggest("gift for sam", None).unwrap();
        assert_eq!(any.id, "gifts-donations");

        let income = catalog.suggest("gift from grandma", Some(CategoryType::Income)).unwrap();
        assert_eq!(income.id, "gifts-received");

        assert!(catalog.suggest("bp", Some(CategoryType::Income)).is_none());
    }

    #[test]
    fn test_load_without_path_is_builtin() {
        let catalog = Catalog::load(None).unwrap();
        assert_eq!(catalog.categories().count(), Catalog::builtin().categories().count());
    }
}
