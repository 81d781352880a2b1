//! Rendering of affordability results for the terminal or as CSV.

use std::io;

use clap::ValueEnum;
use loan_core::LoanResult;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::csv_loader::LoanScenario;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// One CSV row per scenario
    Csv,
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn money(result: &LoanResult) -> String {
    result
        .monthly_payment_rounded()
        .map(|amount| format!("${amount:.2}"))
        .unwrap_or_else(|| "n/a".to_string())
}

/// Formats a single result as a block of labelled lines.
pub fn render_text(result: &LoanResult) -> String {
    format!(
        "Monthly Payment:      {}\n\
         Good Down Payment:    {}\n\
         Good Loan Duration:   {}\n\
         Good Monthly Payment: {}\n",
        money(result),
        yes_no(result.good_down_payment),
        yes_no(result.good_loan_duration),
        yes_no(result.good_monthly_payment),
    )
}

/// Formats a batch as one text block per scenario, each headed by its label.
pub fn render_batch_text(rows: &[(LoanScenario, LoanResult)]) -> String {
    let mut out = String::new();
    for (idx, (scenario, result)) in rows.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("[{}]\n", scenario.label));
        out.push_str(&render_text(result));
    }
    out
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    label: &'a str,
    monthly_payment: Option<Decimal>,
    good_down_payment: bool,
    good_loan_duration: bool,
    good_monthly_payment: bool,
}

/// Writes a batch as CSV with a header row.
pub fn write_csv<W: io::Write>(
    writer: W,
    rows: &[(LoanScenario, LoanResult)],
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for (scenario, result) in rows {
        writer.serialize(ReportRow {
            label: &scenario.label,
            monthly_payment: result.monthly_payment_rounded(),
            good_down_payment: result.good_down_payment,
            good_loan_duration: result.good_loan_duration,
            good_monthly_payment: result.good_monthly_payment,
        })?;
    }
    writer.flush()?;
    Ok(())
}
