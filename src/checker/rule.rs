use crate::baseline::{HeaderRule, Rating};
use crate::error::{HeaderExposerError, Result};

use super::pattern::{RulePattern, SubstitutionTemplate};

/// Used when a rule does not configure `invalid_explanation`.
pub const DEFAULT_INVALID_EXPLANATION: &str = "The header is malformed.";

/// Used when a rule does not configure `absent_explanation`.
pub const DEFAULT_ABSENT_EXPLANATION: &str = "The header is absent.";

/// Rating and ordered explanation fragments for one header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub rating: Rating,
    pub explanations: Vec<String>,
}

#[derive(Debug, Clone)]
struct CompiledExplanation {
    pattern: RulePattern,
    present: Option<SubstitutionTemplate>,
    absent: Option<String>,
}

/// A header rule with every pattern compiled using the rule's case setting.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: HeaderRule,
    validation: RulePattern,
    ratings: Vec<(RulePattern, Rating)>,
    explanations: Vec<CompiledExplanation>,
}

impl CompiledRule {
    /// Compile all patterns of `rule`.
    ///
    /// # Errors
    /// Returns [`HeaderExposerError::Pattern`] naming the rule and the field
    /// holding the first pattern that fails to compile.
    pub fn compile(rule: HeaderRule) -> Result<Self> {
        let case_sensitive = rule.case_sensitive_patterns;
        let compile = |source: &str, field: String| {
            RulePattern::compile(source, case_sensitive).map_err(|source| {
                HeaderExposerError::Pattern {
                    header: rule.name.clone(),
                    field,
                    source,
                }
            })
        };

        let validation = compile(&rule.validation_pattern, "validation_pattern".to_string())?;

        let ratings = rule
            .rating_patterns
            .iter()
            .enumerate()
            .map(|(i, rp)| {
                compile(&rp.pattern, format!("rating_patterns[{i}].pattern"))
                    .map(|pattern| (pattern, rp.rating))
            })
            .collect::<Result<Vec<_>>>()?;

        let explanations = rule
            .explanation_patterns
            .iter()
            .enumerate()
            .map(|(i, ep)| {
                compile(&ep.pattern, format!("explanation_patterns[{i}].pattern")).map(
                    |pattern| CompiledExplanation {
                        pattern,
                        present: ep.present.as_deref().map(SubstitutionTemplate::parse),
                        absent: ep.absent.clone(),
                    },
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rule,
            validation,
            ratings,
            explanations,
        })
    }

    #[must_use]
    pub const fn rule(&self) -> &HeaderRule {
        &self.rule
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.rule.name
    }

    /// Validate, rate and explain a present header value.
    #[must_use]
    pub fn evaluate(&self, value: &str) -> Evaluation {
        if !self.validation.matches_prefix(value) {
            let mut explanations = vec![
                self.rule
                    .invalid_explanation
                    .clone()
                    .unwrap_or_else(|| DEFAULT_INVALID_EXPLANATION.to_string()),
            ];
            explanations.extend(self.rule.absent_or_invalid_explanation.clone());
            return Evaluation {
                rating: self.rule.invalid_rating,
                explanations,
            };
        }

        // Later rating patterns override earlier ones.
        let rating = self
            .ratings
            .iter()
            .rev()
            .find(|(pattern, _)| pattern.matches_prefix(value))
            .map_or(self.rule.default_rating, |(_, rating)| *rating);

        let explanations = self
            .explanations
            .iter()
            .filter_map(|exp| {
                if exp.pattern.matches_prefix(value) {
                    exp.present
                        .as_ref()
                        .map(|template| exp.pattern.substitute(value, template))
                } else {
                    exp.absent.clone()
                }
            })
            .collect();

        Evaluation {
            rating,
            explanations,
        }
    }

    /// Rating and explanations for a header missing from the response.
    #[must_use]
    pub fn absent(&self) -> Evaluation {
        let mut explanations = vec![
            self.rule
                .absent_explanation
                .clone()
                .unwrap_or_else(|| DEFAULT_ABSENT_EXPLANATION.to_string()),
        ];
        explanations.extend(self.rule.absent_or_invalid_explanation.clone());
        Evaluation {
            rating: self.rule.absent_rating,
            explanations,
        }
    }
}

/// Evaluate `value` against a rule that has not been compiled yet.
///
/// # Errors
/// Returns [`HeaderExposerError::Pattern`] if one of the rule's patterns is invalid.
pub fn evaluate(value: &str, rule: &HeaderRule) -> Result<Evaluation> {
    Ok(CompiledRule::compile(rule.clone())?.evaluate(value))
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
