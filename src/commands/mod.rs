pub mod analyse;
pub mod demo;
pub mod show;
pub mod validate;

pub use analyse::{parse_observed, run_analyse, run_analyse_impl};
pub use demo::{SAMPLE_HEADERS, demo_sections, run_demo, run_demo_impl};
pub use show::{format_baseline_text, run_show, run_show_impl};
pub use validate::{run_validate, run_validate_impl};

use tracing::debug;

use crate::EXIT_CONFIG_ERROR;
use crate::baseline::{Baseline, FileBaselineLoader};
use crate::checker::Finding;
use crate::cli::Cli;
use crate::error::{HeaderExposerError, Result};
use crate::output::{
    ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, RatingLabels, TextFormatter,
};

/// Load the baseline selected by the global options.
///
/// # Errors
/// Returns the loader's error for a missing, unreadable or invalid baseline.
pub fn load_baseline(cli: &Cli) -> Result<Baseline> {
    FileBaselineLoader::new(cli.strip_explanation_colors())
        .load_or_discover(cli.baseline_path.as_deref())
}

/// Format findings in the format selected on the command line.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_findings(findings: &[Finding], cli: &Cli, labels: RatingLabels) -> Result<String> {
    match cli.format {
        OutputFormat::Text => TextFormatter::new(cli.color_mode())
            .with_labels(labels)
            .with_summary(!cli.quiet)
            .format(findings),
        OutputFormat::Json => JsonFormatter.format(findings),
    }
}

/// Print `error` to stderr and return the error exit code.
#[must_use]
pub fn report_error(error: &HeaderExposerError, cli: &Cli) -> i32 {
    debug!(?error, "Command failed");
    ErrorOutput::new(cli.color_mode()).print(error);
    EXIT_CONFIG_ERROR
}
