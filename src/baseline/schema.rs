//! Structural validation of baseline documents against the embedded JSON Schema.

use std::sync::OnceLock;

use jsonschema::Draft;
use serde_json::Value;

use crate::error::{DocumentSource, HeaderExposerError, Result};

/// The baseline JSON Schema. Field names, types and the rating enum are a
/// compatibility contract with existing baseline documents.
pub const BASELINE_SCHEMA_JSON: &str = include_str!("baseline_schema.json");

/// Caps the number of messages carried by a schema error.
const MAX_ERRORS: usize = 10;

static VALIDATOR: OnceLock<std::result::Result<jsonschema::Validator, String>> = OnceLock::new();

fn compiled_validator() -> std::result::Result<&'static jsonschema::Validator, String> {
    VALIDATOR
        .get_or_init(|| {
            let schema: Value = serde_json::from_str(BASELINE_SCHEMA_JSON)
                .map_err(|e| format!("embedded baseline schema is not valid JSON: {e}"))?;
            jsonschema::options()
                .with_draft(Draft::Draft7)
                .build(&schema)
                .map_err(|e| format!("embedded baseline schema does not compile: {e}"))
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Validate a parsed baseline document.
///
/// # Errors
/// Returns [`HeaderExposerError::Schema`] listing the first few violations.
pub fn validate_document(instance: &Value, origin: &DocumentSource) -> Result<()> {
    let validator = compiled_validator().map_err(|e| HeaderExposerError::Schema {
        origin: origin.clone(),
        errors: vec![e],
    })?;

    if validator.is_valid(instance) {
        return Ok(());
    }

    let errors = validator
        .iter_errors(instance)
        .take(MAX_ERRORS)
        .enumerate()
        .map(|(i, e)| format!("{:02}: {e}", i + 1))
        .collect();

    Err(HeaderExposerError::Schema {
        origin: origin.clone(),
        errors,
    })
}
