//! Monthly payment and affordability calculations for car loans.
//!
//! The crate is a pure calculation core: it takes a [`LoanInput`] and
//! produces a [`LoanResult`] without touching any I/O. Presentation layers
//! decide when to recompute and how to display the outcome.

pub mod calculations;
pub mod models;

pub use calculations::{
    AffordabilityCalculator, AffordabilityThresholds, ThresholdError, compute_monthly_payment,
    evaluate_affordability,
};
pub use models::*;
