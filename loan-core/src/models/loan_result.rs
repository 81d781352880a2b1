use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::currency_from_f64;

/// Outcome of evaluating a [`LoanInput`](crate::LoanInput).
///
/// All four values are derived from the same input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Amortized payment owed each month.
    pub monthly_payment: f64,

    /// Down payment is at least the minimum share of the purchase price.
    pub good_down_payment: bool,

    /// Term is no longer than the maximum number of months.
    pub good_loan_duration: bool,

    /// Monthly payment fits within the allowed share of monthly income.
    pub good_monthly_payment: bool,
}

impl LoanResult {
    /// Monthly payment rounded half-up to cents, or `None` if it is not finite.
    pub fn monthly_payment_rounded(&self) -> Option<Decimal> {
        currency_from_f64(self.monthly_payment)
    }

    /// True when all three heuristics pass.
    pub fn is_affordable(&self) -> bool {
        self.good_down_payment && self.good_loan_duration && self.good_monthly_payment
    }
}
