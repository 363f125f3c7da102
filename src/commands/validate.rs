use crate::EXIT_SUCCESS;
use crate::cli::Cli;
use crate::error::Result;

use super::{load_baseline, report_error};

#[must_use]
pub fn run_validate(cli: &Cli) -> i32 {
    match run_validate_impl(cli) {
        Ok(message) => {
            println!("{message}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e, cli),
    }
}

/// Load, schema-check and compile the selected baseline.
///
/// # Errors
/// Returns the first error that prevents the baseline from loading.
pub fn run_validate_impl(cli: &Cli) -> Result<String> {
    let baseline = load_baseline(cli)?;
    Ok(format!(
        "Baseline is valid: {} ({} rules)",
        baseline.source(),
        baseline.len()
    ))
}
