// Transaction Entry Normalizer - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod amount;       // Currency input parsing, validation, display
pub mod batch;        // CSV batch normalization
pub mod classifier;   // Longest-match keyword classifier
pub mod config;       // Catalog: categories + lexicon, built once
pub mod entities;     // Category entity and registry
pub mod error;
pub mod lexicon;      // Ordered category → keywords mapping
pub mod prefill;      // Structured guess → form suggestion

#[cfg(feature = "server")]
pub mod server;       // REST API

// Re-export commonly used types
pub use amount::{
    AmountInput, MAX_AMOUNT,
    parse_amount, is_valid, validate, validation_error,
    format_for_display, format_currency,
};
pub use batch::{BatchSummary, EntryRow, NormalizedRow, normalize_csv, normalize_file};
pub use classifier::{CategoryClassifier, KeywordMatch};
pub use config::{Catalog, CatalogFile, CATALOG_ENV};
pub use entities::{Category, CategoryType, CategoryRegistry};
pub use error::{AmountError, CatalogError};
pub use lexicon::{Lexicon, LexiconEntry};
pub use prefill::{EntryGuess, EntrySuggestion, prefill};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
