use std::io::Read;

use tracing::info;

use crate::checker::{ObservedHeaders, RatingSummary, analyze};
use crate::cli::{AnalyseArgs, Cli};
use crate::error::{DocumentSource, HeaderExposerError, Result};
use crate::output::RatingLabels;
use crate::{EXIT_BAD_RATING, EXIT_SUCCESS};

use super::{format_findings, load_baseline, report_error};

#[must_use]
pub fn run_analyse(args: &AnalyseArgs, cli: &Cli) -> i32 {
    match run_analyse_impl(args, cli) {
        Ok((output, exit_code)) => {
            print!("{output}");
            exit_code
        }
        Err(e) => report_error(&e, cli),
    }
}

/// Analyse the selected input and return the formatted findings with the exit code.
///
/// # Errors
/// Returns an error if the baseline or the input cannot be loaded.
pub fn run_analyse_impl(args: &AnalyseArgs, cli: &Cli) -> Result<(String, i32)> {
    let baseline = load_baseline(cli)?;

    let (text, origin) = read_input(args)?;
    let observed = parse_observed(&text, args.json, &origin)?;
    info!(source = %origin, headers = observed.len(), "Read observed headers");

    let findings = analyze(&observed, &baseline, cli.short());
    let output = format_findings(&findings, cli, RatingLabels::FULLWIDTH)?;

    let exit_code = if args.strict && RatingSummary::from_findings(&findings).has_bad() {
        EXIT_BAD_RATING
    } else {
        EXIT_SUCCESS
    };
    Ok((output, exit_code))
}

/// Parse header input as a raw dump or, with `json`, as a JSON object.
///
/// # Errors
/// Returns `HeaderParse` for a malformed dump line or `Parse` for invalid JSON.
pub fn parse_observed(text: &str, json: bool, origin: &DocumentSource) -> Result<ObservedHeaders> {
    if json {
        ObservedHeaders::from_json_str(text, origin)
    } else {
        ObservedHeaders::parse_dump(text)
    }
}

fn read_input(args: &AnalyseArgs) -> Result<(String, DocumentSource)> {
    match args.input_file() {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| {
                HeaderExposerError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            Ok((text, DocumentSource::file(path)))
        }
        None => {
            let mut text = String::new();
            std::io::stdin().lock().read_to_string(&mut text)?;
            Ok((text, DocumentSource::Stdin))
        }
    }
}

#[cfg(test)]
#[path = "analyse_tests.rs"]
mod tests;
