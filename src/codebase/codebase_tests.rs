use std::fs;

use tempfile::TempDir;

use super::*;

fn codebase(root: &Path) -> Codebase {
    Codebase {
        root: root.to_path_buf(),
        organization: Some("cs-course".to_string()),
        name: "hw1-alice".to_string(),
        revision: Some("0123abcd".to_string()),
    }
}

#[test]
fn from_dir_uses_directory_name() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("hw1-bob");
    fs::create_dir(&dir).unwrap();

    let cb = Codebase::from_dir(&dir, None);

    assert_eq!(cb.name, "hw1-bob");
    assert!(cb.revision.is_none());
}

#[test]
fn discover_skips_template_files_and_hidden_dirs() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    for dir in ["hw1-zed", "hw1-amy", "hw1", ".cache"] {
        fs::create_dir(root.join(dir)).unwrap();
    }
    fs::write(root.join("notes.txt"), "").unwrap();

    let found = discover(root, Some(root.join("hw1").as_path()), Some("org")).unwrap();

    let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["hw1-amy", "hw1-zed"]);
    assert_eq!(found[0].organization.as_deref(), Some("org"));
}

#[test]
fn discover_fails_for_missing_root() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent");

    assert!(discover(&missing, None, None).is_err());
}

#[test]
fn source_root_prefers_direct_child() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src/main/java")).unwrap();

    let root = codebase(temp.path()).source_root(Path::new("src/main/java"));

    assert_eq!(root, temp.path().join("src/main/java"));
}

#[test]
fn source_root_finds_nested_match() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("project/src/main/java")).unwrap();

    let root = codebase(temp.path()).source_root(Path::new("src/main/java"));

    assert_eq!(root, temp.path().join("project/src/main/java"));
}

#[test]
fn source_root_falls_back_to_codebase_root() {
    let temp = TempDir::new().unwrap();

    let root = codebase(temp.path()).source_root(Path::new("src/main/java"));

    assert_eq!(root, temp.path());
}

#[test]
fn link_points_at_revision_and_line() {
    let cb = codebase(Path::new("/subs/hw1-alice"));

    let link = cb.link(Path::new("/subs/hw1-alice/src/Main.java"), 12);

    assert_eq!(
        link.as_deref(),
        Some("https://github.com/cs-course/hw1-alice/blob/0123abcd/src/Main.java#L12")
    );
}

#[test]
fn link_requires_revision() {
    let mut cb = codebase(Path::new("/subs/hw1-alice"));
    cb.revision = None;

    assert!(cb.link(Path::new("src/Main.java"), 1).is_none());
}
