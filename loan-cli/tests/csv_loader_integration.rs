//! Integration tests that run on-disk fixtures through the loader, the
//! calculator and the report writers.

use std::path::{Path, PathBuf};

use loan_cli::config::CalculatorConfig;
use loan_cli::{csv_loader, report};
use loan_core::{AffordabilityCalculator, LoanInput};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_fixture_file_succeeds() {
    let scenarios = csv_loader::load_from_file(&fixture_path("sample_scenarios.csv"))
        .expect("fixture file should load without error");

    assert_eq!(scenarios.len(), 4);
    assert_eq!(scenarios[1].label, "paid in cash");
}

#[test]
fn test_fixture_scenarios_evaluate_as_expected() {
    let scenarios = csv_loader::load_from_file(&fixture_path("sample_scenarios.csv")).unwrap();
    let calculator = AffordabilityCalculator::default();

    let results: Vec<_> = scenarios
        .iter()
        .map(|scenario| calculator.evaluate(&scenario.input))
        .collect();

    assert_eq!(results[0].monthly_payment_rounded(), Some(dec!(460.59)));
    assert!(results[0].is_affordable());

    assert_eq!(results[1].monthly_payment, 0.0);
    assert!(results[1].good_monthly_payment);

    assert!(results[2].monthly_payment < results[0].monthly_payment);

    assert!(!results[3].good_down_payment);
    assert!(!results[3].good_loan_duration);
}

#[test]
fn test_fixture_batch_renders_as_csv() {
    let scenarios = csv_loader::load_from_file(&fixture_path("sample_scenarios.csv")).unwrap();
    let calculator = AffordabilityCalculator::default();
    let rows: Vec<_> = scenarios
        .into_iter()
        .map(|scenario| {
            let result = calculator.evaluate(&scenario.input);
            (scenario, result)
        })
        .collect();
    let mut buffer = Vec::new();

    report::write_csv(&mut buffer, &rows).unwrap();

    let output = String::from_utf8(buffer).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "commuter,460.59,true,true,true");
    assert_eq!(lines[2], "paid in cash,0.00,true,true,true");
    assert_eq!(lines[4], "truck,1202.69,false,false,false");
}

#[test]
fn test_config_fixture_changes_defaults_and_thresholds() {
    let config = CalculatorConfig::load_from_file(&fixture_path("calculator.toml"))
        .expect("config fixture should load");
    let calculator = AffordabilityCalculator::new(config.thresholds.clone()).unwrap();

    let result = calculator.evaluate(&config.defaults);

    assert_eq!(config.log_level.as_deref(), Some("info"));
    assert_eq!(
        config.defaults,
        LoanInput {
            purchase_price: 30_000,
            down_payment: 6_000,
            apr: 7.5,
            term: 60,
            yearly_income: 70_000,
        }
    );
    // 60 months passes only because the fixture raises the limit
    assert!(result.good_loan_duration);
    assert_eq!(result.monthly_payment_rounded(), Some(dec!(480.91)));
    assert!(result.good_monthly_payment);
}
