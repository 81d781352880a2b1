//! Command-line front end for the car-loan affordability calculator.
//!
//! Gathers loan inputs from flags, a TOML config file, or a CSV batch,
//! runs them through [`loan_core`], and renders the results.

pub mod config;
pub mod csv_loader;
pub mod logging;
pub mod report;
pub mod utils;
