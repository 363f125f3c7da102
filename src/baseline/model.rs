use std::fmt;

use serde::{Deserialize, Serialize};

/// Security rating of a header. The set is closed: baseline documents may
/// only use these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Good,
    Medium,
    #[default]
    Bad,
}

impl Rating {
    pub const ALL: [Self; 3] = [Self::Good, Self::Medium, Self::Bad];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Medium => "medium",
            Self::Bad => "bad",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" => Ok(Self::Good),
            "medium" => Ok(Self::Medium),
            "bad" => Ok(Self::Bad),
            _ => Err(format!("Unknown rating: {s}")),
        }
    }
}

/// Top level of a baseline JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaselineDocument {
    pub headers: Vec<HeaderRule>,
}

/// One header's validation, rating and explanation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderRule {
    /// Header name, compared case-insensitively against observed headers.
    pub name: String,

    /// A value must match this at its start to be considered well-formed.
    pub validation_pattern: String,

    /// Compile every pattern of this rule case-sensitively (default: false).
    #[serde(default)]
    pub case_sensitive_patterns: bool,

    #[serde(default)]
    pub default_rating: Rating,

    #[serde(default)]
    pub invalid_rating: Rating,

    #[serde(default)]
    pub absent_rating: Rating,

    /// Evaluated in order; the last matching pattern decides the rating.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rating_patterns: Vec<RatingPattern>,

    /// Evaluated in order; each contributes at most one explanation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub explanation_patterns: Vec<ExplanationPattern>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_explanation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absent_explanation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absent_or_invalid_explanation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_explanation: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingPattern {
    pub pattern: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExplanationPattern {
    pub pattern: String,

    /// Substitution template applied to the value when the pattern matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present: Option<String>,

    /// Literal text emitted when the pattern does not match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absent: Option<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
