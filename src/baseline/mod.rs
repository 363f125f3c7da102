mod loader;
mod model;
mod schema;

pub use loader::{
    BASELINE_ENV_VAR, BaselineLoader, FileBaselineLoader, FileSystem, RealFileSystem,
};
pub use model::{BaselineDocument, ExplanationPattern, HeaderRule, Rating, RatingPattern};
pub use schema::{BASELINE_SCHEMA_JSON, validate_document};

use std::path::Path;

use serde_json::Value;

use crate::checker::CompiledRule;
use crate::error::{DocumentSource, HeaderExposerError, Result};
use crate::markup;

/// The baseline shipped with the binary.
pub const BUILTIN_BASELINE_JSON: &str = include_str!("baseline.json");

/// A validated baseline with every rule pattern compiled.
///
/// Construction either succeeds completely or fails; there is no partially
/// loaded baseline.
#[derive(Debug, Clone)]
pub struct Baseline {
    source: DocumentSource,
    rules: Vec<CompiledRule>,
}

impl Baseline {
    /// Build a baseline from raw JSON text.
    ///
    /// Color tags are rendered (or stripped when `no_colors` is set) before
    /// parsing. The document is then checked against the baseline schema and
    /// every pattern is compiled.
    ///
    /// # Errors
    /// Returns `Parse`, `Schema` or `Pattern` errors tagged with `source`.
    pub fn from_json_str(text: &str, source: DocumentSource, no_colors: bool) -> Result<Self> {
        let rendered = markup::render_json(text, no_colors);

        let value: Value =
            serde_json::from_str(&rendered).map_err(|e| HeaderExposerError::Parse {
                origin: source.clone(),
                source: e,
            })?;
        validate_document(&value, &source)?;

        let document: BaselineDocument =
            serde_json::from_value(value).map_err(|e| HeaderExposerError::Schema {
                origin: source.clone(),
                errors: vec![e.to_string()],
            })?;

        let rules = document
            .headers
            .into_iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { source, rules })
    }

    /// The baseline compiled into the binary.
    ///
    /// # Errors
    /// Only fails if the embedded document is broken.
    pub fn builtin(no_colors: bool) -> Result<Self> {
        Self::from_json_str(BUILTIN_BASELINE_JSON, DocumentSource::BuiltIn, no_colors)
    }

    #[must_use]
    pub const fn source(&self) -> &DocumentSource {
        &self.source
    }

    /// Rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Find the first rule for `name`, compared case-insensitively.
    #[must_use]
    pub fn find_rule(&self, name: &str) -> Option<&CompiledRule> {
        self.rules
            .iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Load and compile the baseline at `path`.
///
/// # Errors
/// Returns `NotFound` if `path` does not exist, otherwise the errors of
/// [`Baseline::from_json_str`].
pub fn load(path: &Path, no_colors: bool) -> Result<Baseline> {
    FileBaselineLoader::new(no_colors).load_from_path(path)
}

#[cfg(test)]
#[path = "baseline_tests.rs"]
mod tests;
