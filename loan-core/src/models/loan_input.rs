use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::compute_monthly_payment;

/// Reasons a [`LoanInput`] falls outside the calculator's valid domain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoanInputError {
    #[error("purchase price must be positive")]
    ZeroPurchasePrice,

    #[error("down payment must be positive")]
    ZeroDownPayment,

    #[error("APR must be positive, got {0}")]
    NonPositiveApr(f64),

    #[error("APR must be finite, got {0}")]
    NonFiniteApr(f64),

    #[error("loan term must be at least one month")]
    ZeroTerm,

    #[error("yearly income must be positive")]
    ZeroYearlyIncome,
}

/// The five values a buyer supplies to the calculator.
///
/// Currency amounts are whole units. The default matches a typical
/// starting point: a $25,000 car with $5,000 down at 5% over four years
/// on a $60,000 income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanInput {
    /// Total price of the car before any down payment.
    pub purchase_price: u64,

    /// Amount paid upfront.
    pub down_payment: u64,

    /// Annual percentage rate, in percent (5.0 means 5%).
    pub apr: f64,

    /// Length of the loan in months.
    pub term: u32,

    /// Yearly income before taxes.
    pub yearly_income: u64,
}

impl Default for LoanInput {
    fn default() -> Self {
        Self {
            purchase_price: 25_000,
            down_payment: 5_000,
            apr: 5.0,
            term: 48,
            yearly_income: 60_000,
        }
    }
}

impl LoanInput {
    /// Checks every field against the calculator's domain.
    ///
    /// A down payment larger than the purchase price is accepted; the loan
    /// amount is then non-positive and the payment is zero.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoanInputError`] found, checking fields in
    /// declaration order.
    ///
    /// # Example
    ///
    /// ```
    /// use loan_core::{LoanInput, LoanInputError};
    ///
    /// let input = LoanInput { term: 0, ..LoanInput::default() };
    ///
    /// assert_eq!(input.validate(), Err(LoanInputError::ZeroTerm));
    /// ```
    pub fn validate(&self) -> Result<(), LoanInputError> {
        if self.purchase_price == 0 {
            return Err(LoanInputError::ZeroPurchasePrice);
        }
        if self.down_payment == 0 {
            return Err(LoanInputError::ZeroDownPayment);
        }
        if self.apr.is_infinite() {
            return Err(LoanInputError::NonFiniteApr(self.apr));
        }
        if self.apr.is_nan() || self.apr <= 0.0 {
            return Err(LoanInputError::NonPositiveApr(self.apr));
        }
        if self.term == 0 {
            return Err(LoanInputError::ZeroTerm);
        }
        if self.yearly_income == 0 {
            return Err(LoanInputError::ZeroYearlyIncome);
        }
        Ok(())
    }

    /// Amount borrowed; negative when the down payment exceeds the price.
    pub fn loan_amount(&self) -> f64 {
        self.purchase_price as f64 - self.down_payment as f64
    }

    /// Monthly payment for this input. See [`compute_monthly_payment`].
    pub fn monthly_payment(&self) -> f64 {
        compute_monthly_payment(self.purchase_price, self.down_payment, self.apr, self.term)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_matches_starting_scenario() {
        let input = LoanInput::default();

        assert_eq!(input.purchase_price, 25_000);
        assert_eq!(input.down_payment, 5_000);
        assert_eq!(input.apr, 5.0);
        assert_eq!(input.term, 48);
        assert_eq!(input.yearly_income, 60_000);
    }

    #[test]
    fn validate_accepts_default() {
        assert_eq!(LoanInput::default().validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_down_payment_above_price() {
        let input = LoanInput {
            down_payment: 30_000,
            ..LoanInput::default()
        };

        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_purchase_price() {
        let input = LoanInput {
            purchase_price: 0,
            ..LoanInput::default()
        };

        assert_eq!(input.validate(), Err(LoanInputError::ZeroPurchasePrice));
    }

    #[test]
    fn validate_rejects_zero_down_payment() {
        let input = LoanInput {
            down_payment: 0,
            ..LoanInput::default()
        };

        assert_eq!(input.validate(), Err(LoanInputError::ZeroDownPayment));
    }

    #[test]
    fn validate_rejects_zero_apr() {
        let input = LoanInput {
            apr: 0.0,
            ..LoanInput::default()
        };

        assert_eq!(input.validate(), Err(LoanInputError::NonPositiveApr(0.0)));
    }

    #[test]
    fn validate_rejects_negative_apr() {
        let input = LoanInput {
            apr: -1.5,
            ..LoanInput::default()
        };

        assert_eq!(input.validate(), Err(LoanInputError::NonPositiveApr(-1.5)));
    }

    #[test]
    fn validate_rejects_nan_apr() {
        let input = LoanInput {
            apr: f64::NAN,
            ..LoanInput::default()
        };

        assert!(matches!(
            input.validate(),
            Err(LoanInputError::NonPositiveApr(apr)) if apr.is_nan()
        ));
    }

    #[test]
    fn validate_rejects_infinite_apr() {
        let input = LoanInput {
            apr: f64::INFINITY,
            ..LoanInput::default()
        };

        assert_eq!(
            input.validate(),
            Err(LoanInputError::NonFiniteApr(f64::INFINITY))
        );
    }

    #[test]
    fn validate_rejects_zero_term() {
        let input = LoanInput {
            term: 0,
            ..LoanInput::default()
        };

        assert_eq!(input.validate(), Err(LoanInputError::ZeroTerm));
    }

    #[test]
    fn validate_rejects_zero_yearly_income() {
        let input = LoanInput {
            yearly_income: 0,
            ..LoanInput::default()
        };

        assert_eq!(input.validate(), Err(LoanInputError::ZeroYearlyIncome));
    }

    #[test]
    fn validate_reports_first_failing_field() {
        let input = LoanInput {
            purchase_price: 0,
            term: 0,
            ..LoanInput::default()
        };

        assert_eq!(input.validate(), Err(LoanInputError::ZeroPurchasePrice));
    }

    #[test]
    fn loan_amount_goes_negative_when_over_covered() {
        let input = LoanInput {
            down_payment: 26_000,
            ..LoanInput::default()
        };

        assert_eq!(input.loan_amount(), -1_000.0);
    }

    #[test]
    fn monthly_payment_delegates_to_formula() {
        let input = LoanInput::default();

        assert_eq!(
            input.monthly_payment(),
            compute_monthly_payment(25_000, 5_000, 5.0, 48)
        );
    }
}
