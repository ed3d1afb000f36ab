#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-grade binary.
#[macro_export]
macro_rules! style_grade {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-grade"))
    };
}

/// Creates a temporary course directory with submissions for integration tests.
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
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads a file relative to the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Creates the local style-grade config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".style-grade.toml", content);
    }

    /// Creates `Counter.java` with one method whose body has the given number of
    /// comment lines followed by statement lines.
    pub fn create_counter(&self, relative_path: &str, statements: usize, comments: usize) {
        self.create_file(relative_path, &counter_source(statements, comments));
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Source of a documented class with one `run` method starting on line 3.
pub fn counter_source(statements: usize, comments: usize) -> String {
    let mut src = String::from("class Counter {\n    int total;\n    void run() {\n");
    for i in 0..comments {
        let _ = writeln!(src, "        // step {i} of the computation");
    }
    for i in 0..statements {
        let _ = writeln!(src, "        total += {i};");
    }
    src.push_str("    }\n}\n");
    src
}

/// Config grading comment density only, with submissions under `subs/`.
pub const COMMENTING_CONFIG: &str = r#"
version = "1"

[codebases]
root = "subs"
source_dir = "src"

[categories.commenting]
scores = [0, 1, 2]
min_lines = 5
min_frequency = 10
max_frequency = 80
levenshtein_distance = 0
"#;
