use crate::baseline::Rating;

use super::headers::ObservedValue;

/// The evaluation result for one baseline rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub header: String,
    pub value: ObservedValue,
    pub rating: Rating,
    pub explanations: Vec<String>,
    /// Empty in short mode.
    pub references: Vec<String>,
}

impl Finding {
    #[must_use]
    pub const fn is_bad(&self) -> bool {
        matches!(self.rating, Rating::Bad)
    }
}

/// Per-rating counts over a list of findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingSummary {
    pub total: usize,
    pub good: usize,
    pub medium: usize,
    pub bad: usize,
}

impl RatingSummary {
    #[must_use]
    pub fn from_findings(findings: &[Finding]) -> Self {
        findings.iter().fold(Self::default(), |mut summary, finding| {
            summary.total += 1;
            match finding.rating {
                Rating::Good => summary.good += 1,
                Rating::Medium => summary.medium += 1,
                Rating::Bad => summary.bad += 1,
            }
            summary
        })
    }

    #[must_use]
    pub const fn has_bad(&self) -> bool {
        self.bad > 0
    }
}
