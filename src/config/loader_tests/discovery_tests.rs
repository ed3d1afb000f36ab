//! Tests for config file discovery (current dir, user config dir, defaults).

use std::path::{Path, PathBuf};

use crate::config::{ConfigLoader, FileConfigLoader};

use super::fake_host::FakeHost;

#[test]
fn returns_defaults_resolved_against_current_dir_when_no_config_found() {
    let fs = FakeHost::new().in_dir("/grading/fall");
    let loader = FileConfigLoader::with_fs(fs);

    let loaded = loader.load().unwrap();

    assert!(loaded.source.is_none());
    assert_eq!(loaded.base_dir, PathBuf::from("/grading/fall"));
    assert!(loaded.config.engines.is_empty());
    assert!(loaded.config.categories.ordering.is_none());
}

#[test]
fn loads_local_config_from_current_directory() {
    let content = r#"
[codebases]
organization = "cs-course"
"#;

    let fs = FakeHost::new()
        .in_dir("/grading/fall")
        .with_file("/grading/fall/.style-grade.toml", content);

    let loader = FileConfigLoader::with_fs(fs);
    let loaded = loader.load().unwrap();

    assert_eq!(
        loaded.config.codebases.organization.as_deref(),
        Some("cs-course")
    );
    assert_eq!(
        loaded.source.as_deref(),
        Some(Path::new("/grading/fall/.style-grade.toml"))
    );
    assert_eq!(loaded.base_dir, PathBuf::from("/grading/fall"));
}

#[test]
fn loads_user_config_as_fallback() {
    let content = r#"
[codebases]
organization = "fallback-org"
"#;

    let fs = FakeHost::new().with_file("/home/grader/.config/style-grade/config.toml", content);

    let loader = FileConfigLoader::with_fs(fs);
    let loaded = loader.load().unwrap();

    assert_eq!(
        loaded.config.codebases.organization.as_deref(),
        Some("fallback-org")
    );
    assert_eq!(
        loaded.base_dir,
        PathBuf::from("/home/grader/.config/style-grade")
    );
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = FakeHost::new()
        .with_file(
            "/course/.style-grade.toml",
            "[codebases]\norganization = \"local\"\n",
        )
        .with_file(
            "/home/grader/.config/style-grade/config.toml",
            "[codebases]\norganization = \"user\"\n",
        );

    let loader = FileConfigLoader::with_fs(fs);
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.config.codebases.organization.as_deref(), Some("local"));
}

#[test]
fn missing_user_config_dir_falls_back_to_defaults() {
    let fs = FakeHost::new().without_config_dir();
    let loader = FileConfigLoader::with_fs(fs);

    let loaded = loader.load().unwrap();

    assert!(loaded.source.is_none());
}

#[test]
fn load_from_missing_path_reports_file_access_error() {
    let loader = FileConfigLoader::with_fs(FakeHost::new());

    let err = loader
        .load_from_path(Path::new("/nowhere/grading.toml"))
        .unwrap_err();

    assert!(err.to_string().contains("/nowhere/grading.toml"));
}

#[test]
fn bare_file_name_uses_current_dir_as_base() {
    let fs = FakeHost::new()
        .in_dir("/course")
        .with_file("grading.toml", "");

    let loader = FileConfigLoader::with_fs(fs);
    let loaded = loader.load_from_path(Path::new("grading.toml")).unwrap();

    assert_eq!(loaded.base_dir, PathBuf::from("/course"));
}
