use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "headerexposer")]
#[command(author, version, about = "Rate HTTP security headers against a JSON baseline")]
#[command(long_about = "Analyse HTTP response headers against a declarative baseline of \
    validation, rating and explanation rules.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - A header was rated bad (with --strict)\n  \
    2 - Baseline, input or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress warnings and summaries
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Baseline file (defaults to $HEADEREXPOSER_BASELINE, the user config
    /// directory, then the built-in baseline)
    #[arg(short, long, global = true)]
    pub baseline_path: Option<PathBuf>,

    /// Strip color tags from baseline explanations
    #[arg(long, global = true)]
    pub no_explanation_colors: bool,

    /// Include header descriptions and references
    #[arg(long, global = true)]
    pub detailed: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color.into()
    }

    /// Baseline color tags are stripped on request or when output is uncolored.
    #[must_use]
    pub fn strip_explanation_colors(&self) -> bool {
        self.no_explanation_colors || !self.color_mode().use_colors()
    }

    /// Short mode hides descriptions and references.
    #[must_use]
    pub const fn short(&self) -> bool {
        !self.detailed
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyse a header dump (e.g. from `curl -sI`) against the baseline
    #[command(alias = "analyze")]
    Analyse(AnalyseArgs),

    /// Show what the baseline reports for sample header values
    Demo(DemoArgs),

    /// List the baseline's header rules
    Show,

    /// Check that the baseline loads, conforms to the schema and compiles
    Validate,
}

#[derive(Parser, Debug)]
pub struct AnalyseArgs {
    /// Header dump to read ("-" or omitted for stdin)
    pub input: Option<PathBuf>,

    /// Read a JSON object of header names to values instead of a dump
    #[arg(long)]
    pub json: bool,

    /// Exit with code 1 if any header is rated bad
    #[arg(long)]
    pub strict: bool,
}

impl AnalyseArgs {
    /// The input file, or `None` when reading stdin.
    #[must_use]
    pub fn input_file(&self) -> Option<&std::path::Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Only show the sample values, not the empty-header findings
    #[arg(long)]
    pub samples_only: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
