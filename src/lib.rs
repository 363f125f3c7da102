pub mod baseline;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod markup;
pub mod output;

pub use error::{HeaderExposerError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_BAD_RATING: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
