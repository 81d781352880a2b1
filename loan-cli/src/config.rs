//! Calculator configuration loaded from a TOML file.
//!
//! Every key is optional; anything left out falls back to the built-in
//! defaults.
//!
//! ```toml
//! log_level = "info"
//!
//! [defaults]
//! purchase_price = 25000
//! down_payment = 5000
//! apr = 5.0
//! term = 48
//! yearly_income = 60000
//!
//! [thresholds]
//! min_down_payment_ratio = "0.20"
//! max_term_months = 48
//! max_payment_income_ratio = "0.10"
//! ```

use std::path::{Path, PathBuf};

use clap::Args;
use loan_core::{AffordabilityThresholds, LoanInput, ThresholdError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::utils::{parse_amount, parse_percent};

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid affordability thresholds: {0}")]
    InvalidThresholds(#[from] ThresholdError),
}

/// Starting loan values and the limits the affordability rules apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Log filter applied after the file is loaded, unless `--log-level` was given.
    pub log_level: Option<String>,
    pub defaults: LoanInput,
    pub thresholds: AffordabilityThresholds,
}

impl CalculatorConfig {
    /// Parses configuration from TOML text and validates the thresholds.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading calculator config");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

/// Loan values given on the command line. Each one replaces the matching
/// configured default.
#[derive(Debug, Clone, Default, PartialEq, Args)]
pub struct LoanOverrides {
    /// Total price of the car before any down payment (e.g. 25,000)
    #[arg(long, value_parser = parse_amount)]
    pub purchase_price: Option<u64>,

    /// Amount of money paid upfront
    #[arg(long, value_parser = parse_amount)]
    pub down_payment: Option<u64>,

    /// Annual percentage rate of the loan (e.g. 5.0 or 5.0%)
    #[arg(long, value_parser = parse_percent)]
    pub apr: Option<f64>,

    /// Length of the loan in months
    #[arg(long)]
    pub term: Option<u32>,

    /// Yearly income before taxes
    #[arg(long, value_parser = parse_amount)]
    pub yearly_income: Option<u64>,
}

impl LoanOverrides {
    /// Returns `base` with every supplied value substituted in.
    pub fn apply(
        &self,
        base: LoanInput,
    ) -> LoanInput {
        LoanInput {
            purchase_price: self.purchase_price.unwrap_or(base.purchase_price),
            down_payment: self.down_payment.unwrap_or(base.down_payment),
            apr: self.apr.unwrap_or(base.apr),
            term: self.term.unwrap_or(base.term),
            yearly_income: self.yearly_income.unwrap_or(base.yearly_income),
        }
    }
}
