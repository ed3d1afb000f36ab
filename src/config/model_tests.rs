use super::*;

#[test]
fn codebases_config_has_expected_defaults() {
    let config = CodebasesConfig::default();
    assert!(config.root.is_none());
    assert_eq!(config.source_dir, PathBuf::from("src/main/java"));
    assert_eq!(config.extensions, vec!["java"]);
    assert!(config.exclude.is_empty());
}

#[test]
fn empty_document_yields_default_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn scoring_section_defaults_to_enabled_count_mode() {
    let config: Config = toml::from_str(
        r"
        [categories.finalize_override]
        scores = [0]
    ",
    )
    .unwrap();

    let section = config.categories.finalize_override.unwrap();
    assert!(section.enabled);
    assert_eq!(section.mode, ScoringMode::Count);
    assert!(section.examples.is_none());
}

#[test]
fn scoring_modes_deserialize_lowercase() {
    let config: Config = toml::from_str(
        r#"
        [categories.useless]
        mode = "binary"
        scores = [0]

        [categories.private_instances]
        mode = "files"
        scores = [0, 1]
    "#,
    )
    .unwrap();

    assert_eq!(
        config.categories.useless.unwrap().mode,
        ScoringMode::Binary
    );
    assert_eq!(
        config.categories.private_instances.unwrap().mode,
        ScoringMode::Files
    );
}

#[test]
fn ordering_section_defaults_to_conventional_order() {
    let config: Config = toml::from_str(
        r"
        [categories.ordering]
        scores = [0, 3]
    ",
    )
    .unwrap();

    let ordering = config.categories.ordering.unwrap();
    assert_eq!(ordering.order, MemberKind::ALL.to_vec());
    assert_eq!(ordering.scoring.scores, vec![0, 3]);
}

#[test]
fn ordering_section_accepts_custom_order() {
    let config: Config = toml::from_str(
        r#"
        [categories.ordering]
        scores = [0]
        order = ["static_fields", "instance_fields", "constructors",
                 "static_methods", "instance_methods", "nested_types"]
    "#,
    )
    .unwrap();

    let order = config.categories.ordering.unwrap().order;
    assert_eq!(order[0], MemberKind::StaticFields);
    assert_eq!(order[5], MemberKind::NestedTypes);
}

#[test]
fn doc_and_clone_sections_have_defaults() {
    let config: Config = toml::from_str(
        r"
        [categories.doc_type]
        scores = [0]

        [categories.clones]
        scores = [0]
    ",
    )
    .unwrap();

    assert_eq!(config.categories.doc_type.unwrap().min_words, 5);
    assert_eq!(config.categories.clones.unwrap().tokens, 100);
}

#[test]
fn commenting_section_requires_its_parameters() {
    let result: Result<Config, _> = toml::from_str(
        r"
        [categories.commenting]
        scores = [0]
        min_lines = 10
    ",
    );
    assert!(result.is_err());
}

#[test]
fn engines_deserialize_as_array_of_tables() {
    let config: Config = toml::from_str(
        r#"
        [[engines]]
        name = "pmd"
        command = ["pmd", "check", "-d", "{dir}"]

        [[engines]]
        name = "cpd"
        command = ["cpd", "{dir}"]
    "#,
    )
    .unwrap();

    let names: Vec<_> = config.engines.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["pmd", "cpd"]);
}
