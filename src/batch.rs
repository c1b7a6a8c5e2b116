// 📂 Batch normalization - CSV in, CSV out
// Runs prefill over every `description,amount` row of a file.

use crate::amount::AmountInput;
use crate::config::Catalog;
use crate::prefill::{prefill, EntryGuess};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

// ============================================================================
// ROWS
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct EntryRow {
    pub description: String,
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NormalizedRow {
    pub description: String,
    pub amount_input: String,
    pub amount: Option<f64>,
    pub amount_error: Option<String>,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub matched_keyword: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub valid_amounts: usize,
    pub categorized: usize,
}

impl BatchSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} rows, {} valid amounts, {} categorized",
            self.rows, self.valid_amounts, self.categorized
        )
    }
}

// ============================================================================
// NORMALIZATION
// ============================================================================

pub fn normalize_row(catalog: &Catalog, row: &EntryRow) -> NormalizedRow {
    let guess = EntryGuess {
        amount: Some(AmountInput::Text(row.amount.clone())),
        merchant: None,
        description: Some(row.description.clone()),
        kind: None,
    };
    let suggestion = prefill(catalog, &guess);

    NormalizedRow {
        description: row.description.clone(),
        amount_input: row.amount.clone(),
        amount: suggestion.amount,
        amount_error: suggestion.amount_error,
        category_id: suggestion.category_id,
        category_name: suggestion.category_name,
        matched_keyword: suggestion.matched_keyword,
    }
}

/// Read rows from `reader`, write normalized rows to `writer`
pub fn normalize_csv<R: Read, W: Write>(catalog: &Catalog, reader: R, writer: W) -> Result<BatchSummary> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let mut wtr = csv::Writer::from_writer(writer);
    let mut summary = BatchSummary::default();

    for (line, result) in rdr.deserialize().enumerate() {
        let row: EntryRow = result.with_context(|| format!("Failed to deserialize row {}", line + 1))?;
        let normalized = normalize_row(catalog, &row);

        summary.rows += 1;
        if normalized.amount.is_some() {
            summary.valid_amounts += 1;
        }
        if normalized.category_id.is_some() {
            summary.categorized += 1;
        }
        debug!(row = line + 1, category = ?normalized.category_id, "Normalized row");

        wtr.serialize(&normalized).context("Failed to write normalized row")?;
    }

    wtr.flush().context("Failed to flush output")?;
    Ok(summary)
}

/// File-to-file variant; `output = None` writes to stdout
pub fn normalize_file(catalog: &Catalog, input: &Path, output: Option<&Path>) -> Result<BatchSummary> {
    let file = std::fs::File::open(input)
        .with_context(|| format!("Failed to open CSV file: {:?}", input))?;

    let summary = match output {
        Some(path) => {
            let out = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            normalize_csv(catalog, file, out)?
        }
        None => normalize_csv(catalog, file, std::io::stdout().lock())?,
    };

    info!(input = %input.display(), "{}", summary.summary());
    Ok(summary)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_csv() {
        let catalog = Catalog::builtin();
        let input = "description,amount\n\
                     Countdown Ponsonby,\"$45,99\"\n\
                     random unrelated text,abc\n\
                     Netflix,\"1.234,50\"\n";
        let mut out = Vec::new();

        let summary = normalize_csv(&catalog, input.as_bytes(), &mut out).unwrap();

        assert_eq!(summary, BatchSummary { rows: 3, valid_amounts: 2, categorized: 2 });

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "description,amount_input,amount,amount_error,category_id,category_name,matched_keyword"
        );
        assert_eq!(lines[1], "Countdown Ponsonby,\"$45,99\",45.99,,food-dining,Food & Dining,countdown");
        // message contains a comma, so the writer quotes it
        assert!(lines[2].starts_with("random unrelated text,abc,,\"Please enter a valid amount"));
        assert!(lines[2].ends_with(",,,"));
        assert!(lines[3].ends_with("1234.5,,subscriptions,Subscriptions,netflix"));
    }

    #[test]
    fn test_missing_amount_column_value() {
        let catalog = Catalog::builtin();
        let input = "description,amount\nhaircut,\n";
        let mut out = Vec::new();

        let summary = normalize_csv(&catalog, input.as_bytes(), &mut out).unwrap();
        assert_eq!(summary.rows, 1);
        assert_eq!(summary.valid_amounts, 0);
        assert_eq!(summary.categorized, 1);
    }

    #[test]
    fn test_missing_description_column_is_an_error() {
        let catalog = Catalog::builtin();
        let input = "merchant,amount\nx,1\n";
        let mut out = Vec::new();

        assert!(normalize_csv(&catalog, input.as_bytes(), &mut out).is_err());
    }

    #[test]
    fn test_summary_text() {
        let summary = BatchSummary { rows: 4, valid_amounts: 3, categorized: 2 };
        assert_eq!(summary.summary(), "4 rows, 3 valid amounts, 2 categorized");
    }
}
