use std::path::Path;

use tempfile::TempDir;

use super::{generate_config_template, run_init, run_init_impl};
use crate::cli::InitArgs;
use crate::config::{Config, Settings, validate_config_semantics};
use crate::violation::Category;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[test]
fn generate_config_template_is_valid_config() {
    let template = generate_config_template();

    let config: Config = toml::from_str(&template).unwrap();

    assert_eq!(config.version.as_deref(), Some("1"));
    validate_config_semantics(&config).unwrap();
}

#[test]
fn generate_config_template_enables_structural_categories() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    let settings = Settings::resolve(&config, Path::new("/course"));

    let enabled: Vec<Category> = settings.categories.iter().map(|c| c.category()).collect();
    assert_eq!(
        enabled,
        vec![
            Category::Ordering,
            Category::Commenting,
            Category::DocType,
            Category::DocMethod,
            Category::DocConstructor,
            Category::FinalizeOverride,
            Category::UnqualifiedStaticAccess,
            Category::PrivateInstances,
            Category::Useless,
        ]
    );
    assert!(settings.engines.is_empty());
    assert_eq!(
        settings.codebases_root.as_deref(),
        Some(Path::new("/course/submissions"))
    );
    assert_eq!(settings.template.as_deref(), Some(Path::new("/course/template")));
    assert!(settings.ignore_template_violations);
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".style-grade.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, generate_config_template());
}

#[test]
fn run_init_fails_if_file_exists_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".style-grade.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "existing content");
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
}

#[test]
fn run_init_overwrites_with_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".style-grade.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    assert!(
        std::fs::read_to_string(&config_path)
            .unwrap()
            .contains("[categories.ordering]")
    );
}
