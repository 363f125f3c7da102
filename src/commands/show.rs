use std::fmt::Write;

use serde::Serialize;

use crate::EXIT_SUCCESS;
use crate::baseline::{Baseline, HeaderRule};
use crate::cli::Cli;
use crate::error::Result;
use crate::output::OutputFormat;

use super::{load_baseline, report_error};

#[derive(Serialize)]
struct ShowDocument<'a> {
    source: String,
    headers: Vec<&'a HeaderRule>,
}

#[must_use]
pub fn run_show(cli: &Cli) -> i32 {
    match run_show_impl(cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e, cli),
    }
}

/// Render the loaded baseline's rules.
///
/// # Errors
/// Returns an error if the baseline cannot be loaded or serialized.
pub fn run_show_impl(cli: &Cli) -> Result<String> {
    let baseline = load_baseline(cli)?;

    match cli.format {
        OutputFormat::Text => Ok(format_baseline_text(&baseline)),
        OutputFormat::Json => {
            let document = ShowDocument {
                source: baseline.source().to_string(),
                headers: baseline.rules().iter().map(|rule| rule.rule()).collect(),
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&document)?))
        }
    }
}

/// Human-readable listing of every rule in declaration order.
#[must_use]
pub fn format_baseline_text(baseline: &Baseline) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Baseline: {} ({} rules)",
        baseline.source(),
        baseline.len()
    );

    for compiled in baseline.rules() {
        let rule = compiled.rule();
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", rule.name);
        let _ = writeln!(output, "  validation: {}", rule.validation_pattern);
        let _ = writeln!(
            output,
            "  ratings: default={}, invalid={}, absent={}",
            rule.default_rating, rule.invalid_rating, rule.absent_rating
        );
        let _ = writeln!(
            output,
            "  patterns: {} rating, {} explanation ({})",
            rule.rating_patterns.len(),
            rule.explanation_patterns.len(),
            if rule.case_sensitive_patterns {
                "case-sensitive"
            } else {
                "case-insensitive"
            }
        );
        if let Some(description) = &rule.description {
            let _ = writeln!(output, "  {description}");
        }
        if !rule.references.is_empty() {
            let _ = writeln!(output, "  References:");
            for reference in &rule.references {
                let _ = writeln!(output, "    - {reference}");
            }
        }
    }

    output
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
