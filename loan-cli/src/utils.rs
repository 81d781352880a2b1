use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Error returned when command-line text cannot be read as an amount or rate.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{0}' must be a whole, non-negative number")]
    NotWhole(String),

    #[error("amount '{0}' is too large")]
    TooLarge(String),

    #[error("invalid percentage '{input}': {source}")]
    InvalidPercent {
        input: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Normalizes a currency amount: trims whitespace, drops a leading `$`,
/// and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .trim_start()
        .replace(',', "")
}

/// Parses a whole currency amount such as `25000`, `25,000` or `$25,000`.
///
/// Empty or whitespace-only input is treated as 0 so that input validation
/// reports it as a missing positive value. A fractional part of zero
/// (`25000.00`) is accepted.
pub fn parse_amount(s: &str) -> Result<u64, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(0);
    }
    let value: Decimal = normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    if !value.fract().is_zero() || value < Decimal::ZERO {
        return Err(ParseAmountError::NotWhole(s.to_string()));
    }
    value
        .to_u64()
        .ok_or_else(|| ParseAmountError::TooLarge(s.to_string()))
}

/// Parses an annual rate in percent such as `5`, `5.0` or `5.0%`.
pub fn parse_percent(s: &str) -> Result<f64, ParseAmountError> {
    let trimmed = s.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    number
        .parse()
        .map_err(|e| ParseAmountError::InvalidPercent {
            input: s.to_string(),
            source: e,
        })
}
