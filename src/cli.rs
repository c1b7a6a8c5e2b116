//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use txn_normalizer::{CategoryType, CATALOG_ENV};

/// Normalize amounts and suggest categories for transaction entries
#[derive(Parser)]
#[command(name = "txn-normalizer")]
#[command(about = "Amount parsing and merchant category suggestions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Catalog JSON file (categories + lexicon); built-in defaults when omitted
    #[arg(long, env = CATALOG_ENV, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and validate an amount ("$1,234.56", "1.234,56", ...)
    Parse {
        input: String,
    },

    /// Format a number for display
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Round to whole units
        #[arg(long)]
        no_cents: bool,

        /// Prefix with a currency symbol
        #[arg(long)]
        currency: bool,
    },

    /// Suggest a category for merchant or free text
    Classify {
        text: String,

        /// Only consider expense or income categories
        #[arg(short, long)]
        kind: Option<CategoryType>,
    },

    /// List expense and income categories
    Categories,

    /// Show the lexicon keywords for a category
    Keywords {
        id: String,
    },

    /// Normalize a CSV of `description,amount` rows
    Batch {
        file: PathBuf,

        /// Output CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
