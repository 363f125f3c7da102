use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{DocumentSource, HeaderExposerError, Result};

use super::Baseline;

/// Environment variable naming a baseline file.
pub const BASELINE_ENV_VAR: &str = "HEADEREXPOSER_BASELINE";

const USER_BASELINE_NAME: &str = "baseline.json";

/// Trait for loading a baseline from its possible sources.
pub trait BaselineLoader {
    /// Load the first baseline found in the search order.
    ///
    /// # Errors
    /// Returns an error if the selected baseline cannot be read, parsed,
    /// validated or compiled.
    fn load(&self) -> Result<Baseline>;

    /// Load the baseline at a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or invalid.
    fn load_from_path(&self, path: &Path) -> Result<Baseline>;
}

/// Trait for filesystem and environment access (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Platform-specific configuration directory for headerexposer.
    ///
    /// - Windows: `%APPDATA%\headerexposer\config`
    /// - macOS: `~/Library/Application Support/headerexposer`
    /// - Linux: `~/.config/headerexposer` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;

    /// Read an environment variable, ignoring unset and empty values.
    fn env_var(&self, key: &str) -> Option<String>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "headerexposer")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}

/// Loads baselines from the filesystem.
///
/// Search order:
/// 1. `HEADEREXPOSER_BASELINE` environment variable
/// 2. `baseline.json` in the platform-specific user config directory
/// 3. The baseline compiled into the binary
///
/// An explicit `--baseline-path` bypasses the search via [`BaselineLoader::load_from_path`].
#[derive(Debug)]
pub struct FileBaselineLoader<F: FileSystem = RealFileSystem> {
    fs: F,
    no_colors: bool,
}

impl Default for FileBaselineLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl FileBaselineLoader<RealFileSystem> {
    #[must_use]
    pub const fn new(no_colors: bool) -> Self {
        Self {
            fs: RealFileSystem,
            no_colors,
        }
    }
}

impl<F: FileSystem> FileBaselineLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F, no_colors: bool) -> Self {
        Self { fs, no_colors }
    }

    fn user_baseline_path(&self) -> Option<PathBuf> {
        self.fs
            .config_dir()
            .map(|dir| dir.join(USER_BASELINE_NAME))
    }

    /// Resolve which baseline `load` would use, without reading it.
    #[must_use]
    pub fn discover(&self) -> DocumentSource {
        if let Some(path) = self.fs.env_var(BASELINE_ENV_VAR) {
            return DocumentSource::File(PathBuf::from(path));
        }
        if let Some(path) = self.user_baseline_path()
            && self.fs.exists(&path)
        {
            return DocumentSource::File(path);
        }
        DocumentSource::BuiltIn
    }

    /// Load a specific path when given, otherwise search.
    ///
    /// # Errors
    /// Same as [`BaselineLoader::load_from_path`].
    pub fn load_or_discover(&self, path: Option<&Path>) -> Result<Baseline> {
        match path {
            Some(path) => self.load_from_path(path),
            None => self.load(),
        }
    }
}

impl<F: FileSystem> BaselineLoader for FileBaselineLoader<F> {
    fn load(&self) -> Result<Baseline> {
        match self.discover() {
            DocumentSource::File(path) => self.load_from_path(&path),
            _ => {
                debug!("Using built-in baseline");
                Baseline::builtin(self.no_colors)
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Baseline> {
        if !self.fs.exists(path) {
            return Err(HeaderExposerError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| HeaderExposerError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                })?;

        let baseline = Baseline::from_json_str(&content, DocumentSource::file(path), self.no_colors)?;
        info!(path = %path.display(), rules = baseline.len(), "Loaded baseline");
        Ok(baseline)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
