//! In-memory stand-in for the grader's machine.

use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::config::FileSystem;

/// Working directory, user config directory and the files the loader may find.
pub struct FakeHost {
    working_dir: PathBuf,
    config_dir: Option<PathBuf>,
    files: HashMap<PathBuf, String>,
}

impl FakeHost {
    /// A grader working in `/course` with the usual Linux config directory.
    pub fn new() -> Self {
        Self {
            working_dir: PathBuf::from("/course"),
            config_dir: Some(PathBuf::from("/home/grader/.config/style-grade")),
            files: HashMap::new(),
        }
    }

    pub fn in_dir(mut self, dir: &str) -> Self {
        self.working_dir = PathBuf::from(dir);
        self
    }

    pub fn without_config_dir(mut self) -> Self {
        self.config_dir = None;
        self
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    /// Paths are matched as written, or relative to the working directory.
    fn file(&self, path: &Path) -> Option<&String> {
        self.files
            .get(path)
            .or_else(|| self.files.get(&self.working_dir.join(path)))
    }
}

impl FileSystem for FakeHost {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.file(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "no such file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.file(path).is_some()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.working_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}
