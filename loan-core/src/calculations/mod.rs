//! Loan calculation modules.
//!
//! [`payment`] holds the amortized-payment formula and [`affordability`]
//! applies the heuristics that judge a loan against the buyer's finances.

pub mod affordability;
pub mod common;
pub mod payment;

pub use affordability::{
    AffordabilityCalculator, AffordabilityThresholds, ThresholdError, evaluate_affordability,
};
pub use payment::compute_monthly_payment;
