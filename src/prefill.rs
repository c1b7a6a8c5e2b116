// 📝 Prefill - structured guess → editable form values
//
// The voice/receipt pipeline returns a loose guess (amount as text or number,
// merchant, description). This turns it into what the entry form pre-fills:
// a validated amount or a message, plus a category suggestion the user can
// change.

use crate::amount::{self, AmountInput};
use crate::config::Catalog;
use crate::entities::CategoryType;
use serde::{Deserialize, Serialize};

// ============================================================================
// INPUT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryGuess {
    #[serde(default)]
    pub amount: Option<AmountInput>,

    #[serde(default)]
    pub merchant: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Restrict suggestions to expense or income categories
    #[serde(default)]
    pub kind: Option<CategoryType>,
}

// ============================================================================
// OUTPUT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntrySuggestion {
    /// Raw amount as received, for echoing back into the field
    pub amount_input: Option<String>,

    /// Parsed and range-checked amount
    pub amount: Option<f64>,

    /// Message to show under the amount field
    pub amount_error: Option<String>,

    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub matched_keyword: Option<String>,
}

impl EntrySuggestion {
    pub fn has_valid_amount(&self) -> bool {
        self.amount.is_some()
    }

    pub fn has_category(&self) -> bool {
        self.category_id.is_some()
    }
}

/// Build the form suggestion for one guess.
///
/// Merchant text is classified first; the description is only consulted when
/// the merchant yields nothing. A missing amount is left blank, not flagged.
pub fn prefill(catalog: &Catalog, guess: &EntryGuess) -> EntrySuggestion {
    let mut suggestion = EntrySuggestion::default();

    if let Some(input) = &guess.amount {
        suggestion.amount_input = Some(input.as_display());
        match amount::validate(input) {
            Ok(value) => suggestion.amount = Some(value),
            Err(e) => suggestion.amount_error = Some(e.to_string()),
        }
    }

    let texts = [guess.merchant.as_deref(), guess.description.as_deref()];
    let best = texts
        .iter()
        .flatten()
        .find_map(|text| catalog.best_match(text, guess.kind));

    if let Some(m) = best {
        suggestion.category_id = Some(m.category_id.to_string());
        suggestion.category_name = catalog
            .categories()
            .find_by_id(m.category_id)
            .map(|c| c.name.clone());
        suggestion.matched_keyword = Some(m.keyword.to_string());
    }

    suggestion
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill_from_receipt_guess() {
        let catalog = Catalog::builtin();
        let guess = EntryGuess {
            amount: Some("$1,234.56".into()),
            merchant: Some("PAK N SAVE Albany".to_string()),
            description: None,
            kind: None,
        };

        let s = prefill(&catalog, &guess);

        assert_eq!(s.amount, Some(1234.56));
        assert_eq!(s.amount_error, None);
        assert_eq!(s.category_id.as_deref(), Some("food-dining"));
        assert_eq!(s.category_name.as_deref(), Some("Food & Dining"));
        assert_eq!(s.matched_keyword.as_deref(), Some("pak n save"));
    }

    #[test]
    fn test_merchant_before_description() {
        let catalog = Catalog::builtin();
        let guess = EntryGuess {
            merchant: Some("Z Energy".to_string()),
            description: Some("coffee and a pie".to_string()),
            ..Default::default()
        };

        let s = prefill(&catalog, &guess);
        assert_eq!(s.category_id.as_deref(), Some("transportation"));
    }

    #[test]
    fn test_description_used_when_merchant_unknown() {
        let catalog = Catalog::builtin();
        let guess = EntryGuess {
            merchant: Some("Joe's".to_string()),
            description: Some("haircut".to_string()),
            ..Default::default()
        };

        let s = prefill(&catalog, &guess);
        assert_eq!(s.category_id.as_deref(), Some("personal-care"));
    }

    #[test]
    fn test_invalid_amount_reports_message() {
        let catalog = Catalog::builtin();
        let guess = EntryGuess {
            amount: Some(AmountInput::Number(0.0)),
            ..Default::default()
        };

        let s = prefill(&catalog, &guess);
        assert_eq!(s.amount, None);
        assert_eq!(s.amount_error.as_deref(), Some("Amount must be greater than zero"));
        assert!(!s.has_category());
    }

    #[test]
    fn test_guess_from_pipeline_json() {
        let catalog = Catalog::builtin();
        let guess: EntryGuess = serde_json::from_str(
            r#"{ "amount": "3.500,00", "description": "monthly salary", "kind": "income" }"#,
        )
        .unwrap();

        let s = prefill(&catalog, &guess);
        assert_eq!(s.amount, Some(3500.0));
        assert_eq!(s.amount_input.as_deref(), Some("3.500,00"));
        assert_eq!(s.category_id.as_deref(), Some("salary"));
    }

    #[test]
    fn test_empty_guess() {
        let s = prefill(&Catalog::builtin(), &EntryGuess::default());
        assert_eq!(s, EntrySuggestion::default());
        assert!(!s.has_valid_amount());
    }
}
