mod loan_input;
mod loan_result;

pub use loan_input::{LoanInput, LoanInputError};
pub use loan_result::LoanResult;
