mod selection;

pub use selection::SourceSelection;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, StyleGradeError};

/// Decides which files below a scanned directory are kept.
pub trait SourceFilter {
    /// `relative` is the file's path below the scanned directory.
    fn accepts(&self, relative: &Path) -> bool;
}

impl<F: SourceFilter + ?Sized> SourceFilter for &F {
    fn accepts(&self, relative: &Path) -> bool {
        (**self).accepts(relative)
    }
}

/// Recursive walk that keeps the files a [`SourceFilter`] accepts.
pub struct DirectoryScanner<F: SourceFilter> {
    filter: F,
}

impl<F: SourceFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Every accepted file below `root`, sorted by path.
    ///
    /// # Errors
    /// Returns an error if `root` is not a directory.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(StyleGradeError::FileAccess {
                path: root.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            });
        }
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .strip_prefix(root)
                    .is_ok_and(|relative| self.filter.accepts(relative))
            })
            .map(walkdir::DirEntry::into_path)
            .collect();
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
