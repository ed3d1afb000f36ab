//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    style_grade!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fixture.read(".style-grade.toml");
    assert!(content.contains("version = \"1\""));
    assert!(content.contains("[categories.commenting]"));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();
    let custom_path = fixture.path().join("grading.toml");

    style_grade!()
        .current_dir(fixture.path())
        .args(["init", "--output", custom_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(custom_path.exists());
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    style_grade!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fixture.read(".style-grade.toml"), "# existing config\n");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    style_grade!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fixture.read(".style-grade.toml").contains("[categories.ordering]"));
}

#[test]
fn generated_config_drives_check() {
    let fixture = TestFixture::new();

    style_grade!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();
    let main = "/**\n * Entry point of the assignment program.\n */\npublic class Main {\n}\n";
    fixture.create_file("template/src/main/java/Main.java", main);
    fixture.create_file("submissions/alice/src/main/java/Main.java", main);

    style_grade!()
        .current_dir(fixture.path())
        .args(["--color", "never", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ alice:"));

    assert!(fixture.read("scores.csv").starts_with(r#""Name","Hash","#));
}
