//! txn-normalizer CLI
//!
//! Usage:
//!   txn-normalizer parse "1.234,56"          Parse and validate an amount
//!   txn-normalizer classify "pak n save"     Suggest a category
//!   txn-normalizer batch entries.csv         Normalize a CSV file

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use txn_normalizer::{amount, batch, Catalog};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let catalog = Catalog::load(cli.catalog.as_deref()).context("Failed to load catalog")?;

    match cli.command {
        Commands::Parse { input } => cmd_parse(&input),
        Commands::Format { value, no_cents, currency } => {
            cmd_format(value, !no_cents, currency);
            Ok(())
        }
        Commands::Classify { text, kind } => {
            cmd_classify(&catalog, &text, kind);
            Ok(())
        }
        Commands::Categories => {
            cmd_categories(&catalog);
            Ok(())
        }
        Commands::Keywords { id } => cmd_keywords(&catalog, &id),
        Commands::Batch { file, output } => {
            let summary = batch::normalize_file(&catalog, &file, output.as_deref())?;
            eprintln!("✓ {}", summary.summary());
            Ok(())
        }
    }
}

fn cmd_parse(input: &str) -> Result<()> {
    match amount::validate(input) {
        Ok(value) => {
            println!("{}", value);
            println!("✓ {}", amount::format_currency(value, true));
            Ok(())
        }
        Err(e) => anyhow::bail!("{}", e),
    }
}

fn cmd_format(value: f64, show_cents: bool, currency: bool) {
    if currency {
        println!("{}", amount::format_currency(value, show_cents));
    } else {
        println!("{}", amount::format_for_display(value, show_cents));
    }
}

fn cmd_classify(catalog: &Catalog, text: &str, kind: Option<txn_normalizer::CategoryType>) {
    match catalog.best_match(text, kind) {
        Some(m) => {
            let name = catalog
                .categories()
                .find_by_id(m.category_id)
                .map(|c| c.name.as_str())
                .unwrap_or(m.category_id);
            println!("{}", m.category_id);
            println!("  {} (matched \"{}\")", name, m.keyword);
        }
        None => println!("No category suggestion"),
    }
}

fn cmd_categories(catalog: &Catalog) {
    let registry = catalog.categories();

    println!("Expense categories:");
    for c in registry.expense() {
        println!("  {} {:<18} {}", c.icon.as_deref().unwrap_or(" "), c.id, c.name);
    }

    println!("\nIncome categories:");
    for c in registry.income() {
        println!("  {} {:<18} {}", c.icon.as_deref().unwrap_or(" "), c.id, c.name);
    }
}

fn cmd_keywords(catalog: &Catalog, id: &str) -> Result<()> {
    if !catalog.categories().contains(id) {
        anyhow::bail!("Unknown category: {}", id);
    }

    for keyword in catalog.classifier().keywords_for_category(id) {
        println!("{}", keyword);
    }
    Ok(())
}
