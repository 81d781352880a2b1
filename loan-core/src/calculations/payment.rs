//! Amortized monthly payment for a fixed-rate loan.
//!
//! The payment is the level amount that retires the borrowed balance in
//! `term` equal monthly installments:
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Loan amount: purchase price − down payment |
//! | 2    | If the loan amount is zero or less, no payment is owed |
//! | 3    | Monthly rate: APR ÷ 100 ÷ 12 |
//! | 4    | Payment: loan × rate ÷ (1 − (1 + rate)^−term) |
//! | 5    | With a zero rate the payment is simply loan ÷ term |
//!
//! # Example
//!
//! ```
//! use loan_core::compute_monthly_payment;
//!
//! // $20,000 borrowed at 5% over 48 months
//! let payment = compute_monthly_payment(25_000, 5_000, 5.0, 48);
//!
//! assert!((payment - 460.5858714129317).abs() < 1e-9);
//! ```

use tracing::debug;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Computes the monthly payment for an amortizing loan.
///
/// # Arguments
///
/// * `purchase_price` - Total price before the down payment
/// * `down_payment` - Amount paid upfront
/// * `apr` - Annual percentage rate in percent (5.0 means 5%)
/// * `term` - Number of monthly payments
///
/// # Returns
///
/// The payment owed each month. Zero when the down payment covers the
/// whole price.
///
/// The caller must ensure `term > 0`. A zero term is not guarded and
/// produces a non-finite value.
///
/// # Examples
///
/// ```
/// use loan_core::compute_monthly_payment;
///
/// // Fully covered by the down payment
/// assert_eq!(compute_monthly_payment(25_000, 25_000, 5.0, 48), 0.0);
///
/// // Interest-free: the balance is split evenly
/// assert_eq!(compute_monthly_payment(25_000, 5_000, 0.0, 48), 20_000.0 / 48.0);
/// ```
pub fn compute_monthly_payment(
    purchase_price: u64,
    down_payment: u64,
    apr: f64,
    term: u32,
) -> f64 {
    let loan_amount = purchase_price as f64 - down_payment as f64;

    if loan_amount <= 0.0 {
        debug!(
            purchase_price,
            down_payment,
            "down payment covers the purchase price; no payment owed"
        );
        return 0.0;
    }

    let monthly_rate = apr / 100.0 / MONTHS_PER_YEAR;
    let term = f64::from(term);

    if monthly_rate > 0.0 {
        (loan_amount * monthly_rate) / (1.0 - (1.0 + monthly_rate).powf(-term))
    } else {
        debug!(apr, "non-positive rate; splitting the loan evenly across the term");
        loan_amount / term
    }
}
