mod error_output;
mod json;
mod ratings;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use ratings::RatingLabels;
pub use text::TextFormatter;

use std::io::IsTerminal;

use crate::checker::Finding;
use crate::error::Result;

/// Trait for formatting findings into various output formats.
pub trait OutputFormatter {
    /// Format the findings into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, findings: &[Finding]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode for standard output.
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => !no_color_set() && std::io::stdout().is_terminal(),
        }
    }
}

/// Per <https://no-color.org>, presence of the variable (any value) disables color.
fn no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
