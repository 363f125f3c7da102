use std::fmt::Write;

use serde_json::{Map, Value};
use tracing::warn;

use crate::EXIT_SUCCESS;
use crate::baseline::Baseline;
use crate::checker::{Finding, ObservedHeaders, ObservedValue, analyze, analyze_rule};
use crate::cli::{Cli, DemoArgs};
use crate::error::Result;
use crate::output::{ErrorOutput, JsonFormatter, OutputFormat, RatingLabels};

use super::{format_findings, load_baseline, report_error};

/// Example values shown by `demo`, good and bad, per header.
pub const SAMPLE_HEADERS: &[(&str, &[&str])] = &[
    (
        "Strict-Transport-Security",
        &[
            "max-age=31536000; includeSubDomains",
            "max-age=potato; includeSubDomains",
            "max-age=-5",
            "max-age=25.8; preload",
            "max-age=212; includeSubDomains; preload",
            "max-age=0",
            "max-age=31536000; includeSubDomains; preload",
        ],
    ),
    (
        "X-Frame-Options",
        &[
            "DENY",
            "Gloubiboulga",
            "ALLOW-FROM china",
            "SAMEORIGIN",
            "DENIS",
            "SAMEORANGINA",
        ],
    ),
    ("X-Content-Type-Options", &["nosniff", "sniff"]),
    (
        "Content-Security-Policy",
        &[
            "default-src 'none'; frame-ancestors 'none'",
            "default-src 'self'; script-src 'self' 'unsafe-inline'",
            "script-src 'unsafe-eval'",
            ";;",
        ],
    ),
    (
        "X-Permitted-Cross-Domain-Policies",
        &["none", "master-only", "all", "sometimes"],
    ),
    (
        "Referrer-Policy",
        &[
            "no-referrer",
            "strict-origin-when-cross-origin",
            "no-referrer-when-downgrade",
            "origin, unsafe-url",
            "everything",
        ],
    ),
];

#[must_use]
pub fn run_demo(args: &DemoArgs, cli: &Cli) -> i32 {
    match run_demo_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e, cli),
    }
}

/// Build the demo output.
///
/// # Errors
/// Returns an error if the baseline cannot be loaded or the output cannot be serialized.
pub fn run_demo_impl(args: &DemoArgs, cli: &Cli) -> Result<String> {
    let baseline = load_baseline(cli)?;

    let (sections, missing) = demo_sections(&baseline, args.samples_only);
    for name in &missing {
        warn!(header = %name, "No baseline rule for sample header");
        if !cli.quiet {
            ErrorOutput::new(cli.color_mode())
                .print_warning(&format!("The baseline has no rule for {name}; skipping its samples"));
        }
    }

    match cli.format {
        OutputFormat::Text => {
            let mut output = String::new();
            for (title, findings) in &sections {
                let _ = writeln!(output, "== {title} ==\n");
                output.push_str(&format_findings(findings, cli, RatingLabels::SPACED)?);
                output.push('\n');
            }
            Ok(output)
        }
        OutputFormat::Json => {
            let mut document = Map::new();
            for (title, findings) in &sections {
                document.insert(section_key(title), JsonFormatter.to_value(findings)?);
            }
            Ok(format!("{}\n", serde_json::to_string_pretty(&Value::Object(document))?))
        }
    }
}

/// Demo findings grouped into titled sections, plus the sample headers that
/// have no rule in `baseline`.
///
/// Unless `samples_only` is set, the first two sections rate an empty header
/// set in detailed and short form.
#[must_use]
pub fn demo_sections(
    baseline: &Baseline,
    samples_only: bool,
) -> (Vec<(&'static str, Vec<Finding>)>, Vec<&'static str>) {
    let mut sections = Vec::new();

    if !samples_only {
        let empty = ObservedHeaders::new();
        sections.push(("No headers, detailed", analyze(&empty, baseline, false)));
        sections.push(("No headers, short", analyze(&empty, baseline, true)));
    }

    let mut samples = Vec::new();
    let mut missing = Vec::new();
    for (name, values) in SAMPLE_HEADERS {
        let Some(rule) = baseline.find_rule(name) else {
            missing.push(*name);
            continue;
        };
        samples.extend(
            values
                .iter()
                .map(|value| analyze_rule(rule, ObservedValue::Present((*value).to_string()), true)),
        );
    }
    sections.push(("Sample values", samples));

    (sections, missing)
}

fn section_key(title: &str) -> String {
    title
        .to_lowercase()
        .replace(", ", "_")
        .replace(' ', "_")
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
