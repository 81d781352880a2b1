//! Affordability heuristics for a car loan.
//!
//! Three independent rules judge a loan against the buyer's finances:
//!
//! | Rule | Passes when |
//! |------|-------------|
//! | Down payment | down payment ≥ 20% of the purchase price |
//! | Loan duration | term ≤ 48 months |
//! | Monthly payment | payment ≤ 10% of gross monthly income |
//!
//! The thresholds are configurable via [`AffordabilityThresholds`]; the
//! defaults are the values above. Every rule is evaluated on each call,
//! even when an earlier one fails.
//!
//! # Example
//!
//! ```
//! use loan_core::{LoanInput, evaluate_affordability};
//!
//! let result = evaluate_affordability(&LoanInput::default());
//!
//! assert!(result.good_down_payment);
//! assert!(result.good_loan_duration);
//! assert!(result.good_monthly_payment);
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::decimal_to_f64;
use crate::{LoanInput, LoanResult};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Default minimum down payment: 20% of the purchase price.
pub const DEFAULT_MIN_DOWN_PAYMENT_RATIO: Decimal = dec!(0.20);

/// Default maximum loan term: four years.
pub const DEFAULT_MAX_TERM_MONTHS: u32 = 4 * 12;

/// Default payment budget: 10% of gross monthly income.
pub const DEFAULT_MAX_PAYMENT_INCOME_RATIO: Decimal = dec!(0.10);

/// Errors raised when affordability thresholds are out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThresholdError {
    /// The down payment ratio must be between 0 and 1.
    #[error("minimum down payment ratio must be between 0 and 1, got {0}")]
    InvalidDownPaymentRatio(Decimal),

    /// The payment-to-income ratio must be between 0 and 1.
    #[error("maximum payment-to-income ratio must be between 0 and 1, got {0}")]
    InvalidPaymentIncomeRatio(Decimal),

    /// The maximum term must be at least one month.
    #[error("maximum loan term must be at least one month")]
    ZeroMaxTerm,
}

/// Limits applied by the affordability rules.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use loan_core::AffordabilityThresholds;
///
/// let thresholds = AffordabilityThresholds::default();
///
/// assert_eq!(thresholds.min_down_payment_ratio, dec!(0.20));
/// assert_eq!(thresholds.max_term_months, 48);
/// assert_eq!(thresholds.max_payment_income_ratio, dec!(0.10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffordabilityThresholds {
    /// Smallest acceptable share of the purchase price paid upfront.
    pub min_down_payment_ratio: Decimal,

    /// Longest acceptable loan term, in months.
    pub max_term_months: u32,

    /// Largest acceptable share of gross monthly income spent on the payment.
    pub max_payment_income_ratio: Decimal,
}

impl Default for AffordabilityThresholds {
    fn default() -> Self {
        Self {
            min_down_payment_ratio: DEFAULT_MIN_DOWN_PAYMENT_RATIO,
            max_term_months: DEFAULT_MAX_TERM_MONTHS,
            max_payment_income_ratio: DEFAULT_MAX_PAYMENT_INCOME_RATIO,
        }
    }
}

impl AffordabilityThresholds {
    /// Validates the threshold values.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError`] if:
    /// - `min_down_payment_ratio` is not in [0, 1]
    /// - `max_payment_income_ratio` is not in [0, 1]
    /// - `max_term_months` is zero
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use loan_core::{AffordabilityThresholds, ThresholdError};
    ///
    /// let thresholds = AffordabilityThresholds {
    ///     min_down_payment_ratio: dec!(1.5),
    ///     ..AffordabilityThresholds::default()
    /// };
    ///
    /// assert_eq!(
    ///     thresholds.validate(),
    ///     Err(ThresholdError::InvalidDownPaymentRatio(dec!(1.5)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if !is_unit_ratio(self.min_down_payment_ratio) {
            return Err(ThresholdError::InvalidDownPaymentRatio(
                self.min_down_payment_ratio,
            ));
        }
        if !is_unit_ratio(self.max_payment_income_ratio) {
            return Err(ThresholdError::InvalidPaymentIncomeRatio(
                self.max_payment_income_ratio,
            ));
        }
        if self.max_term_months == 0 {
            return Err(ThresholdError::ZeroMaxTerm);
        }
        Ok(())
    }
}

fn is_unit_ratio(value: Decimal) -> bool {
    (Decimal::ZERO..=Decimal::ONE).contains(&value)
}

/// Applies the affordability rules with a validated set of thresholds.
#[derive(Debug, Clone, Default)]
pub struct AffordabilityCalculator {
    thresholds: AffordabilityThresholds,
}

impl AffordabilityCalculator {
    /// Creates a calculator after validating `thresholds`.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError`] if any threshold is out of range.
    pub fn new(thresholds: AffordabilityThresholds) -> Result<Self, ThresholdError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Returns the thresholds this calculator applies.
    pub fn thresholds(&self) -> &AffordabilityThresholds {
        &self.thresholds
    }

    /// Computes the monthly payment and all three affordability flags.
    ///
    /// # Example
    ///
    /// ```
    /// use loan_core::{AffordabilityCalculator, LoanInput};
    ///
    /// let calculator = AffordabilityCalculator::default();
    /// let input = LoanInput {
    ///     purchase_price: 100_000,
    ///     down_payment: 5_000,
    ///     term: 96,
    ///     ..LoanInput::default()
    /// };
    ///
    /// let result = calculator.evaluate(&input);
    ///
    /// assert!(!result.good_down_payment);
    /// assert!(!result.good_loan_duration);
    /// ```
    pub fn evaluate(
        &self,
        input: &LoanInput,
    ) -> LoanResult {
        let monthly_payment = input.monthly_payment();

        let result = LoanResult {
            monthly_payment,
            good_down_payment: self.good_down_payment(input),
            good_loan_duration: self.good_loan_duration(input),
            good_monthly_payment: self.good_monthly_payment(input, monthly_payment),
        };

        debug!(
            monthly_payment = result.monthly_payment,
            good_down_payment = result.good_down_payment,
            good_loan_duration = result.good_loan_duration,
            good_monthly_payment = result.good_monthly_payment,
            "evaluated loan affordability"
        );

        result
    }

    /// Down payment ≥ ratio × purchase price, compared exactly in decimal.
    fn good_down_payment(
        &self,
        input: &LoanInput,
    ) -> bool {
        let required = self.thresholds.min_down_payment_ratio * Decimal::from(input.purchase_price);
        Decimal::from(input.down_payment) >= required
    }

    fn good_loan_duration(
        &self,
        input: &LoanInput,
    ) -> bool {
        input.term <= self.thresholds.max_term_months
    }

    /// Payment ≤ ratio × (yearly income ÷ 12), evaluated in `f64` in that
    /// order so the boundary matches the payment's own precision.
    fn good_monthly_payment(
        &self,
        input: &LoanInput,
        monthly_payment: f64,
    ) -> bool {
        let monthly_income = input.yearly_income as f64 / MONTHS_PER_YEAR;
        let budget = decimal_to_f64(self.thresholds.max_payment_income_ratio) * monthly_income;
        monthly_payment <= budget
    }
}

/// Evaluates `input` against the default thresholds.
///
/// Equivalent to `AffordabilityCalculator::default().evaluate(input)`.
pub fn evaluate_affordability(input: &LoanInput) -> LoanResult {
    AffordabilityCalculator::default().evaluate(input)
}
