use std::io::Write;

use crate::checker::{Finding, ObservedValue, RatingSummary};
use crate::error::Result;

use super::{ColorMode, OutputFormatter, RatingLabels, ansi};

pub struct TextFormatter {
    use_colors: bool,
    labels: RatingLabels,
    show_summary: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
            labels: RatingLabels::FULLWIDTH,
            show_summary: true,
        }
    }

    #[must_use]
    pub const fn with_labels(mut self, labels: RatingLabels) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub const fn with_summary(mut self, show: bool) -> Self {
        self.show_summary = show;
        self
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn display_value(&self, value: &ObservedValue) -> String {
        match value {
            ObservedValue::Absent => self.colorize("Absent", ansi::DIM),
            ObservedValue::Present(v) if v.is_empty() => self.colorize("Empty", ansi::DIM),
            ObservedValue::Present(v) => v.clone(),
        }
    }

    fn format_finding(&self, finding: &Finding, output: &mut Vec<u8>) {
        let label = self.labels.render(finding.rating, self.use_colors);
        let header = self.colorize(&finding.header, ansi::BOLD);
        writeln!(
            output,
            "{label} {header}: {}",
            self.display_value(&finding.value)
        )
        .ok();

        if !finding.explanations.is_empty() {
            writeln!(output, "    {}", finding.explanations.join(" ")).ok();
        }

        if !finding.references.is_empty() {
            writeln!(output, "    References:").ok();
            for reference in &finding.references {
                writeln!(output, "      - {}", self.colorize(reference, ansi::CYAN)).ok();
            }
        }
    }

    fn format_summary(&self, summary: &RatingSummary) -> String {
        let good = self.colorize(&summary.good.to_string(), ansi::GREEN);
        let medium = self.colorize(&summary.medium.to_string(), ansi::YELLOW);
        let bad = self.colorize(&summary.bad.to_string(), ansi::RED);
        format!(
            "Summary: {} headers rated, {good} good, {medium} medium, {bad} bad",
            summary.total
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, findings: &[Finding]) -> Result<String> {
        let mut output = Vec::new();

        for finding in findings {
            self.format_finding(finding, &mut output);
            writeln!(output).ok();
        }

        if self.show_summary {
            let summary = RatingSummary::from_findings(findings);
            writeln!(output, "{}", self.format_summary(&summary)).ok();
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
