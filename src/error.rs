// ⚠️ Error types
// Amount failures are user-facing: their Display text is what the form shows.

use thiserror::Error;

/// Why an amount field was rejected.
///
/// The messages are shown verbatim under the amount input, so they are
/// written for the person typing, not for logs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    #[error("Please enter a valid amount (e.g. 1234.56 or 1,234.56)")]
    Empty,

    #[error("Please enter a valid amount (e.g. 1234.56 or 1,234.56)")]
    Unparseable(String),

    #[error("Amount must be greater than zero")]
    NotPositive(f64),

    #[error("Amount cannot exceed $99,999,999.99")]
    ExceedsMaximum(f64),
}

impl AmountError {
    /// Format errors block submission with formatting help; range errors name the bound.
    pub fn is_format_error(&self) -> bool {
        matches!(self, AmountError::Empty | AmountError::Unparseable(_))
    }
}

/// Errors raised while building a [`crate::Catalog`].
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    #[error("Lexicon references unknown category: {0}")]
    UnknownCategory(String),

    #[error("Duplicate lexicon entry for category: {0}")]
    DuplicateLexiconEntry(String),

    #[error("Empty keyword in lexicon entry for category: {0}")]
    EmptyKeyword(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
