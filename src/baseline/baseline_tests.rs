use std::fs;

use tempfile::TempDir;

use super::*;
use crate::scanner::SourceSelection;
use crate::violation::ViolationType;

const TEMPLATE: &str = "class Main {\n    public int count;\n    void run() {}\n}\n";

fn baseline() -> TemplateBaseline {
    let mut baseline = TemplateBaseline::new();
    baseline.insert(Path::new("/template/src/Main.java"), TEMPLATE);
    baseline
}

fn violation_at(path: &Path, line: usize) -> Violations {
    std::iter::once(Violation::new(ViolationType::PublicInstanceField, path, line)).collect()
}

#[test]
fn inherited_line_is_suppressed() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("Main.java");
    fs::write(&file, TEMPLATE).unwrap();

    let kept = baseline().filter(violation_at(&file, 2)).unwrap();

    assert!(kept.is_empty());
}

#[test]
fn suppression_survives_shifted_lines() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("Main.java");
    fs::write(&file, format!("\n\n\n{TEMPLATE}")).unwrap();

    let kept = baseline().filter(violation_at(&file, 5)).unwrap();

    assert!(kept.is_empty());
}

#[test]
fn edited_line_is_kept() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("Main.java");
    fs::write(&file, TEMPLATE.replace("count", "total")).unwrap();

    let kept = baseline().filter(violation_at(&file, 2)).unwrap();

    assert_eq!(kept.len(), 1);
}

#[test]
fn file_without_template_counterpart_is_kept_unread() {
    let kept = baseline()
        .filter(violation_at(Path::new("/nonexistent/Other.java"), 2))
        .unwrap();

    assert_eq!(kept.len(), 1);
}

#[test]
fn line_past_end_of_file_is_kept() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("Main.java");
    fs::write(&file, TEMPLATE).unwrap();

    let kept = baseline().filter(violation_at(&file, 40)).unwrap();

    assert_eq!(kept.len(), 1);
}

#[test]
fn unreadable_submission_file_is_localized() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("Main.java");

    let err = baseline().filter(violation_at(&file, 2)).unwrap_err();

    assert_eq!(err.path(), Some(file.as_path()));
}

#[test]
fn build_indexes_template_files_by_basename() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src/pkg")).unwrap();
    fs::write(temp.path().join("src/pkg/Main.java"), TEMPLATE).unwrap();
    fs::write(temp.path().join("README.md"), "# Starter\n").unwrap();
    let selection = SourceSelection::new(PathBuf::from("src"), vec!["java".to_string()], &[])
        .unwrap();

    let baseline = TemplateBaseline::build(&Codebase::from_dir(temp.path(), None), &selection)
        .unwrap();

    assert_eq!(baseline.len(), 1);
    assert!(baseline.contains_line(Path::new("elsewhere/Main.java"), "    void run() {}"));
    assert!(!baseline.contains_line(Path::new("README.md"), "# Starter"));
}

#[test]
fn build_fails_for_missing_template() {
    let temp = TempDir::new().unwrap();
    let selection = SourceSelection::new(PathBuf::new(), vec!["java".to_string()], &[]).unwrap();
    let template = Codebase::from_dir(&temp.path().join("absent"), None);

    assert!(TemplateBaseline::build(&template, &selection).is_err());
}
