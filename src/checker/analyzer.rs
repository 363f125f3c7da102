use tracing::debug;

use crate::baseline::Baseline;

use super::finding::Finding;
use super::headers::{ObservedHeaders, ObservedValue};
use super::rule::CompiledRule;

/// Rate every baseline rule against a set of observed response headers.
///
/// Findings follow the baseline's rule order. Observed headers without a
/// rule are ignored. In `short` mode rule descriptions and references are
/// left out.
#[must_use]
pub fn analyze(observed: &ObservedHeaders, baseline: &Baseline, short: bool) -> Vec<Finding> {
    baseline
        .rules()
        .iter()
        .map(|rule| analyze_rule(rule, observed.lookup(rule.name()), short))
        .collect()
}

/// Build the finding for a single rule and observed value.
#[must_use]
pub fn analyze_rule(compiled: &CompiledRule, value: ObservedValue, short: bool) -> Finding {
    let rule = compiled.rule();
    let mut explanations = Vec::new();

    if !short && let Some(description) = &rule.description {
        explanations.push(description.clone());
    }

    let evaluation = match &value {
        ObservedValue::Absent => compiled.absent(),
        ObservedValue::Present(raw) => compiled.evaluate(raw),
    };
    debug!(header = %rule.name, rating = %evaluation.rating, absent = value.is_absent(), "Rated header");
    explanations.extend(evaluation.explanations);

    explanations.extend(rule.final_explanation.clone());

    Finding {
        header: rule.name.clone(),
        value,
        rating: evaluation.rating,
        explanations,
        references: if short {
            Vec::new()
        } else {
            rule.references.clone()
        },
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
