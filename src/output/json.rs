use serde::Serialize;

use crate::checker::{Finding, ObservedValue, RatingSummary};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    findings: Vec<JsonFinding<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    good: usize,
    medium: usize,
    bad: usize,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    header: &'a str,
    /// `null` when the header is absent.
    value: &'a ObservedValue,
    rating: &'static str,
    explanations: &'a [String],
    references: &'a [String],
}

impl JsonFormatter {
    /// The findings document as a JSON value, for embedding in larger documents.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_value(&self, findings: &[Finding]) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(build_output(findings))?)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, findings: &[Finding]) -> Result<String> {
        Ok(serde_json::to_string_pretty(&build_output(findings))?)
    }
}

fn build_output(findings: &[Finding]) -> JsonOutput<'_> {
    let summary = RatingSummary::from_findings(findings);
    JsonOutput {
        summary: Summary {
            total: summary.total,
            good: summary.good,
            medium: summary.medium,
            bad: summary.bad,
        },
        findings: findings.iter().map(convert_finding).collect(),
    }
}

fn convert_finding(finding: &Finding) -> JsonFinding<'_> {
    JsonFinding {
        header: &finding.header,
        value: &finding.value,
        rating: finding.rating.as_str(),
        explanations: &finding.explanations,
        references: &finding.references,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
