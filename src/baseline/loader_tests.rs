use std::collections::HashMap;

use super::*;

const USER_BASELINE: &str =
    r#"{"headers": [{"name": "Server", "validation_pattern": ".*"}]}"#;

#[derive(Debug, Default)]
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    env: HashMap<String, String>,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    fn with_config_dir(mut self, dir: &str) -> Self {
        self.config_dir = Some(PathBuf::from(dir));
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }

    fn env_var(&self, key: &str) -> Option<String> {
        self.env.get(key).cloned()
    }
}

#[test]
fn falls_back_to_builtin() {
    let loader = FileBaselineLoader::with_fs(MockFileSystem::default(), false);
    assert_eq!(loader.discover(), DocumentSource::BuiltIn);

    let baseline = loader.load().unwrap();
    assert_eq!(baseline.source(), &DocumentSource::BuiltIn);
    assert!(baseline.find_rule("X-Frame-Options").is_some());
}

#[test]
fn user_config_dir_baseline_is_used() {
    let fs = MockFileSystem::default()
        .with_config_dir("/home/user/.config/headerexposer")
        .with_file("/home/user/.config/headerexposer/baseline.json", USER_BASELINE);
    let loader = FileBaselineLoader::with_fs(fs, false);

    let baseline = loader.load().unwrap();
    assert_eq!(baseline.len(), 1);
    assert_eq!(
        baseline.source(),
        &DocumentSource::File(PathBuf::from("/home/user/.config/headerexposer/baseline.json"))
    );
}

#[test]
fn missing_user_baseline_is_skipped() {
    let fs = MockFileSystem::default().with_config_dir("/home/user/.config/headerexposer");
    let loader = FileBaselineLoader::with_fs(fs, false);
    assert_eq!(loader.discover(), DocumentSource::BuiltIn);
}

#[test]
fn env_var_takes_precedence_over_user_config() {
    let fs = MockFileSystem::default()
        .with_config_dir("/cfg")
        .with_file("/cfg/baseline.json", USER_BASELINE)
        .with_env(BASELINE_ENV_VAR, "/env/baseline.json")
        .with_file(
            "/env/baseline.json",
            r#"{"headers": [
                {"name": "Server", "validation_pattern": ".*"},
                {"name": "X-Powered-By", "validation_pattern": ".*"}
            ]}"#,
        );
    let loader = FileBaselineLoader::with_fs(fs, false);

    let baseline = loader.load().unwrap();
    assert_eq!(baseline.len(), 2);
}

#[test]
fn env_var_pointing_nowhere_is_not_found() {
    let fs = MockFileSystem::default().with_env(BASELINE_ENV_VAR, "/missing.json");
    let loader = FileBaselineLoader::with_fs(fs, false);

    let err = loader.load().unwrap_err();
    assert!(matches!(err, HeaderExposerError::NotFound { .. }));
}

#[test]
fn explicit_path_bypasses_search() {
    let fs = MockFileSystem::default()
        .with_env(BASELINE_ENV_VAR, "/missing.json")
        .with_file("/explicit.json", USER_BASELINE);
    let loader = FileBaselineLoader::with_fs(fs, false);

    let baseline = loader
        .load_or_discover(Some(Path::new("/explicit.json")))
        .unwrap();
    assert_eq!(baseline.len(), 1);
}

#[test]
fn explicit_missing_path_is_not_found() {
    let loader = FileBaselineLoader::with_fs(MockFileSystem::default(), false);
    let err = loader.load_from_path(Path::new("/nope.json")).unwrap_err();
    assert_eq!(err.error_type(), "NotFound");
}

#[test]
fn unreadable_file_is_file_access_error() {
    struct UnreadableFs;

    impl FileSystem for UnreadableFs {
        fn read_to_string(&self, _path: &Path) -> std::io::Result<String> {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            ))
        }

        fn exists(&self, _path: &Path) -> bool {
            true
        }

        fn config_dir(&self) -> Option<PathBuf> {
            None
        }

        fn env_var(&self, _key: &str) -> Option<String> {
            None
        }
    }

    let loader = FileBaselineLoader {
        fs: UnreadableFs,
        no_colors: false,
    };
    let err = loader.load_from_path(Path::new("/locked.json")).unwrap_err();
    assert!(matches!(err, HeaderExposerError::FileAccess { .. }));
}

#[test]
fn invalid_user_baseline_is_reported_not_skipped() {
    let fs = MockFileSystem::default()
        .with_config_dir("/cfg")
        .with_file("/cfg/baseline.json", "{ not json");
    let loader = FileBaselineLoader::with_fs(fs, false);

    let err = loader.load().unwrap_err();
    assert!(matches!(err, HeaderExposerError::Parse { .. }));
}
