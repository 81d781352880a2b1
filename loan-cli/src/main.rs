use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use loan_cli::config::{CalculatorConfig, LoanOverrides};
use loan_cli::report::{self, OutputFormat};
use loan_cli::{csv_loader, logging};
use loan_core::AffordabilityCalculator;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Car-loan affordability calculator.
///
/// Computes the monthly payment for a loan and checks it against three
/// rules of thumb: at least 20% down, no more than 48 months, and a payment
/// of no more than 10% of gross monthly income.
#[derive(Debug, Parser)]
#[command(name = "car-loan")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    loan: LoanOverrides,

    /// TOML file with default loan values and affordability thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV file of loan scenarios to evaluate instead of a single loan
    #[arg(
        short,
        long,
        conflicts_with_all = ["purchase_price", "down_payment", "apr", "term", "yearly_income"]
    )]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter, e.g. `debug` or `warn,loan_core=debug` (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref())?;
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => CalculatorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if let (None, Some(level)) = (&cli.log_level, &config.log_level) {
        logging::set_log_level(level)?;
    }

    let calculator = AffordabilityCalculator::new(config.thresholds.clone())
        .context("Invalid affordability thresholds")?;
    debug!(thresholds = ?calculator.thresholds(), "calculator ready");

    match &cli.file {
        Some(path) => run_batch(&calculator, path, cli.format),
        None => run_single(&calculator, &config, &cli.loan, cli.format),
    }
}

fn run_single(
    calculator: &AffordabilityCalculator,
    config: &CalculatorConfig,
    overrides: &LoanOverrides,
    format: OutputFormat,
) -> Result<()> {
    let input = overrides.apply(config.defaults);
    input.validate().context("Invalid loan input")?;
    info!(?input, "evaluating loan");

    let result = calculator.evaluate(&input);

    match format {
        OutputFormat::Text => print!("{}", report::render_text(&result)),
        OutputFormat::Csv => {
            let scenario = csv_loader::LoanScenario {
                label: "loan".to_string(),
                input,
            };
            report::write_csv(io::stdout().lock(), &[(scenario, result)])
                .context("Failed to write CSV report")?;
        }
    }
    Ok(())
}

fn run_batch(
    calculator: &AffordabilityCalculator,
    path: &Path,
    format: OutputFormat,
) -> Result<()> {
    let scenarios = csv_loader::load_from_file(path)
        .with_context(|| format!("Failed to load scenarios: {}", path.display()))?;
    info!(count = scenarios.len(), "evaluating loan scenarios");

    let rows: Vec<_> = scenarios
        .into_iter()
        .map(|scenario| {
            let result = calculator.evaluate(&scenario.input);
            (scenario, result)
        })
        .collect();

    match format {
        OutputFormat::Text => print!("{}", report::render_batch_text(&rows)),
        OutputFormat::Csv => report::write_csv(io::stdout().lock(), &rows)
            .context("Failed to write CSV report")?,
    }
    Ok(())
}
