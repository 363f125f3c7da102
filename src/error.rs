use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Where a JSON document (baseline or header set) came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A file on disk.
    File(PathBuf),
    /// The baseline compiled into the binary.
    BuiltIn,
    /// Standard input.
    Stdin,
}

impl DocumentSource {
    #[must_use]
    pub fn file(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::BuiltIn => write!(f, "<built-in baseline>"),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}

#[derive(Error, Debug)]
pub enum HeaderExposerError {
    #[error("Baseline file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read file: {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {origin} at line {}, column {}", .source.line(), .source.column())]
    Parse {
        origin: DocumentSource,
        #[source]
        source: serde_json::Error,
    },

    #[error("Baseline {origin} does not conform to the baseline schema")]
    Schema {
        origin: DocumentSource,
        errors: Vec<String>,
    },

    #[error("Invalid regex in {field} of header rule '{header}'")]
    Pattern {
        header: String,
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Malformed header on line {line}: {content}")]
    HeaderParse { line: usize, content: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl HeaderExposerError {
    /// Short category label used by the stderr error printer.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFound",
            Self::FileAccess { .. } => "FileAccess",
            Self::Parse { .. } => "Parse",
            Self::Schema { .. } => "Schema",
            Self::Pattern { .. } => "Pattern",
            Self::HeaderParse { .. } => "HeaderParse",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Underlying cause, if one is worth showing on its own line.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::Parse { source, .. } => Some(source.to_string()),
            Self::Schema { errors, .. } if !errors.is_empty() => Some(errors.join("\n    ")),
            Self::Pattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => {
                Some("Check the --baseline-path argument or the HEADEREXPOSER_BASELINE variable")
            }
            Self::Schema { .. } => Some("Run `headerexposer show` on the built-in baseline for a reference document"),
            Self::Pattern { .. } => Some("Patterns use Rust regex syntax; look-around and backreferences are not supported"),
            Self::HeaderParse { .. } => Some("Headers must be formatted as \"Name: value\" lines"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HeaderExposerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
