mod analyzer;
mod finding;
mod headers;
mod pattern;
mod rule;

pub use analyzer::{analyze, analyze_rule};
pub use finding::{Finding, RatingSummary};
pub use headers::{ObservedHeaders, ObservedValue};
pub use pattern::{RulePattern, SubstitutionTemplate};
pub use rule::{
    CompiledRule, DEFAULT_ABSENT_EXPLANATION, DEFAULT_INVALID_EXPLANATION, Evaluation, evaluate,
};
