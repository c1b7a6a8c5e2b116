// 💵 Currency Input Normalizer
// Turns typed, spoken, or OCR'd amount text into a validated number.
//
// Handles both grouping conventions:
// - "1,234,567.89" (comma thousands, dot decimal)
// - "1.234.567,89" (dot thousands, comma decimal)

use crate::error::AmountError;
use serde::{Deserialize, Serialize};

/// Largest amount the ledger can store: NUMERIC(10,2).
pub const MAX_AMOUNT: f64 = 99_999_999.99;

/// Currency symbols stripped before parsing.
pub const CURRENCY_SYMBOLS: [char; 5] = ['$', '€', '£', '¥', '₹'];

// ============================================================================
// AMOUNT INPUT
// ============================================================================

/// An amount as it arrives from a form field or the parsing pipeline.
///
/// Untagged so that `12.5` and `"12,50"` in JSON both deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Parse without range checks (see [`parse_amount`]).
    pub fn parse(&self) -> Result<f64, AmountError> {
        match self {
            AmountInput::Number(n) if n.is_nan() => Err(AmountError::Unparseable(n.to_string())),
            AmountInput::Number(n) => Ok(*n),
            AmountInput::Text(text) => parse_amount_text(text),
        }
    }

    /// Original text, for echoing back to the user.
    pub fn as_display(&self) -> String {
        match self {
            AmountInput::Number(n) => n.to_string(),
            AmountInput::Text(text) => text.clone(),
        }
    }
}

impl From<f64> for AmountInput {
    fn from(n: f64) -> Self {
        AmountInput::Number(n)
    }
}

impl From<i32> for AmountInput {
    fn from(n: i32) -> Self {
        AmountInput::Number(f64::from(n))
    }
}

impl From<&str> for AmountInput {
    fn from(text: &str) -> Self {
        AmountInput::Text(text.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(text: String) -> Self {
        AmountInput::Text(text)
    }
}

impl From<&AmountInput> for AmountInput {
    fn from(input: &AmountInput) -> Self {
        input.clone()
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse an amount. Numbers pass through untouched; text is cleaned first.
///
/// No range validation happens here: `-5` parses to `-5.0`.
pub fn parse_amount(input: impl Into<AmountInput>) -> Result<f64, AmountError> {
    input.into().parse()
}

/// Parse amount text.
///
/// Steps:
/// 1. Strip currency symbols, whitespace and letters ("USD 12" → "12")
/// 2. Decide which separator is the decimal point (see [`normalize_separators`])
/// 3. Parse strictly as `f64`; anything left over is a format error
pub fn parse_amount_text(input: &str) -> Result<f64, AmountError> {
    if input.trim().is_empty() {
        return Err(AmountError::Empty);
    }

    let cleaned: String = input
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && !c.is_whitespace() && !c.is_alphabetic())
        .collect();

    let normalized = normalize_separators(&cleaned);

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AmountError::Unparseable(input.to_string())),
    }
}

/// Rewrite `.`/`,` so that at most one `.` remains, as the decimal point.
///
/// - Both present: whichever comes last is the decimal point
/// - One comma with at most two characters after it: decimal comma ("100,50")
/// - Any other commas: thousands separators ("1,000,000")
/// - Several dots in groups of three: thousands separators ("1.000.000")
/// - Several dots otherwise: the last one is the decimal point ("1.234.56")
fn normalize_separators(cleaned: &str) -> String {
    let last_dot = cleaned.rfind('.');
    let last_comma = cleaned.rfind(',');

    match (last_dot, last_comma) {
        (Some(dot), Some(comma)) => keep_decimal_at(cleaned, dot.max(comma)),
        (None, Some(comma)) => {
            let comma_count = cleaned.matches(',').count();
            let trailing = cleaned[comma + 1..].chars().count();
            if comma_count == 1 && trailing <= 2 {
                cleaned.replacen(',', ".", 1)
            } else {
                cleaned.replace(',', "")
            }
        }
        (Some(dot), None) => {
            let groups: Vec<&str> = cleaned.split('.').collect();
            if groups.len() <= 2 {
                return cleaned.to_string();
            }
            let thousands_grouped = groups[1..]
                .iter()
                .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()));
            if thousands_grouped {
                cleaned.replace('.', "")
            } else {
                keep_decimal_at(cleaned, dot)
            }
        }
        (None, None) => cleaned.to_string(),
    }
}

/// Drop every separator except the one at `decimal_idx`, which becomes `.`.
fn keep_decimal_at(cleaned: &str, decimal_idx: usize) -> String {
    let mut out = String::with_capacity(cleaned.len());
    for (idx, c) in cleaned.char_indices() {
        match c {
            '.' | ',' if idx == decimal_idx => out.push('.'),
            '.' | ',' => {}
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Range check for an already-parsed value: `0 < value <= MAX_AMOUNT`.
pub fn check_range(value: f64) -> Result<f64, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::Unparseable(value.to_string()));
    }
    if value <= 0.0 {
        return Err(AmountError::NotPositive(value));
    }
    if value > MAX_AMOUNT {
        return Err(AmountError::ExceedsMaximum(value));
    }
    Ok(value)
}

/// Parse and range-check. Errors come back in priority order:
/// format, then "greater than zero", then the maximum.
pub fn validate(input: impl Into<AmountInput>) -> Result<f64, AmountError> {
    parse_amount(input).and_then(check_range)
}

pub fn is_valid(input: impl Into<AmountInput>) -> bool {
    validate(input).is_ok()
}

/// Message to show under the amount field, or `None` when the value is fine.
pub fn validation_error(input: impl Into<AmountInput>) -> Option<String> {
    validate(input).err().map(|e| e.to_string())
}

// ============================================================================
// DISPLAY
// ============================================================================

/// Render with `,` thousands grouping and 0 or 2 decimals.
///
/// Rounding is half away from zero on the scaled value: 1234.5 → "1,235",
/// 2.5 → "3", -2.5 → "-3". Non-finite values render as "0".
pub fn format_for_display(value: f64, show_cents: bool) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let (sign, body) = format_parts(value, show_cents);
    format!("{}{}", sign, body)
}

/// Like [`format_for_display`] with a `$` after the sign: "-$1,234.50".
pub fn format_currency(value: f64, show_cents: bool) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }

    let (sign, body) = format_parts(value, show_cents);
    format!("{}${}", sign, body)
}

fn format_parts(value: f64, show_cents: bool) -> (&'static str, String) {
    let decimals: usize = if show_cents { 2 } else { 0 };
    let scaled = (value.abs() * 10f64.powi(decimals as i32)).round();

    // {:.0} prints every integral digit without an exponent
    let mut digits = format!("{:.0}", scaled);
    if digits.len() <= decimals {
        digits = format!("{:0>width$}", digits, width = decimals + 1);
    }

    let (int_part, frac_part) = digits.split_at(digits.len() - decimals);
    let mut body = group_thousands(int_part);
    if decimals > 0 {
        body.push('.');
        body.push_str(frac_part);
    }

    let sign = if value < 0.0 && scaled != 0.0 { "-" } else { "" };
    (sign, body)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
