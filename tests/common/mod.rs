#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the headerexposer binary.
#[macro_export]
macro_rules! headerexposer {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("headerexposer"))
    };
}

/// A small baseline exercising most rule fields.
pub const FIXTURE_BASELINE: &str = r#"{
    "headers": [
        {
            "name": "X-Frame-Options",
            "description": "[blue]X-Frame-Options[normal] controls framing.",
            "validation_pattern": "\\s*(DENY|SAMEORIGIN|ALLOW-FROM\\s+\\S+)\\s*$",
            "rating_patterns": [
                {"pattern": "\\s*DENY", "rating": "good"},
                {"pattern": "\\s*SAMEORIGIN", "rating": "good"}
            ],
            "explanation_patterns": [
                {"pattern": "\\s*ALLOW-FROM\\s+(\\S+).*", "present": "[red]Framing allowed from \\1.[normal]"}
            ],
            "absent_explanation": "[red]The header is absent.[normal]",
            "references": ["https://developer.mozilla.org/docs/Web/HTTP/Headers/X-Frame-Options"]
        },
        {
            "name": "Server",
            "validation_pattern": ".*",
            "default_rating": "medium",
            "absent_rating": "good",
            "absent_explanation": "The server software is not disclosed."
        }
    ]
}"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the fixture baseline and returns its path.
    pub fn create_baseline(&self) -> PathBuf {
        self.create_file("baseline.json", FIXTURE_BASELINE)
    }

    /// A command isolated from the user's environment: no baseline
    /// override, no user config directory and no colors.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = headerexposer!();
        cmd.current_dir(self.path())
            .env_remove("HEADEREXPOSER_BASELINE")
            .env_remove("HEADEREXPOSER_LOG")
            .env_remove("RUST_LOG")
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("NO_COLOR", "1");
        cmd
    }
}
