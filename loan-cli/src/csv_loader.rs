//! CSV loader for batches of loan scenarios.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so their order does not matter.
//!
//! | Column | Required | Type | Notes |
//! |-----------------|----------|---------|-----------------------------------------|
//! | `label` | no | string | Defaults to `row N` when absent or empty |
//! | `purchase_price`| yes | integer | Whole currency units |
//! | `down_payment` | yes | integer | |
//! | `apr` | yes | decimal | Percent per year, e.g. `5.0` |
//! | `term` | yes | integer | Months |
//! | `yearly_income` | yes | integer | |
//!
//! ### Example
//!
//! ```csv
//! label,purchase_price,down_payment,apr,term,yearly_income
//! commuter,25000,5000,5.0,48,60000
//! truck,100000,5000,5.0,96,60000
//! ```
use std::io::Read;
use std::path::Path;

use loan_core::{LoanInput, LoanInputError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    label: Option<String>,
    purchase_price: u64,
    down_payment: u64,
    apr: f64,
    term: u32,
    yearly_income: u64,
}

/// One named set of loan inputs from a batch file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanScenario {
    pub label: String,
    pub input: LoanInput,
}

/// Errors that can occur while loading scenarios.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV is structurally invalid or a cell has the wrong type.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A row parsed but its values fall outside the calculator's domain.
    /// `row` is 1-based (header = row 0).
    #[error("invalid loan on row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: LoanInputError,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<LoanScenario, CsvLoadError> {
    let input = LoanInput {
        purchase_price: row.purchase_price,
        down_payment: row.down_payment,
        apr: row.apr,
        term: row.term,
        yearly_income: row.yearly_income,
    };
    input
        .validate()
        .map_err(|source| CsvLoadError::InvalidRow {
            row: row_number,
            source,
        })?;

    let label = row
        .label
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| format!("row {row_number}"));

    Ok(LoanScenario { label, input })
}

/// Reads every scenario from `reader`, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is malformed or a required column
///   is missing.
/// * [`CsvLoadError::InvalidRow`] for the first row that fails validation.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<LoanScenario>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let scenarios = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = scenarios.len(), "loaded loan scenarios");
    Ok(scenarios)
}

/// Opens `path` and delegates to [`load_from_reader`].
pub fn load_from_file(path: &Path) -> Result<Vec<LoanScenario>, CsvLoadError> {
    let file = std::fs::File::open(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file)
}
