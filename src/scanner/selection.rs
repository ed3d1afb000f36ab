use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use super::{DirectoryScanner, SourceFilter};
use crate::codebase::Codebase;
use crate::config::Settings;
use crate::error::{Result, StyleGradeError};

/// Which files of a codebase are analyzed.
///
/// Sources live under the codebase's source root. A file is selected when its
/// extension is configured, no exclude glob matches its path relative to that
/// root, and it sits outside hidden directories such as `.git`. Submissions and
/// the template go through the same selection, so their files line up.
#[derive(Debug, Clone)]
pub struct SourceSelection {
    source_dir: PathBuf,
    extensions: Vec<String>,
    exclude: GlobSet,
}

impl SourceSelection {
    /// # Errors
    /// Returns an error if an exclude glob is invalid.
    pub fn new(source_dir: PathBuf, extensions: Vec<String>, exclude: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude {
            let glob = Glob::new(pattern).map_err(|source| StyleGradeError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let exclude = builder
            .build()
            .map_err(|source| StyleGradeError::InvalidPattern {
                pattern: exclude.join(", "),
                source,
            })?;
        Ok(Self {
            source_dir,
            extensions,
            exclude,
        })
    }

    /// # Errors
    /// Returns an error if an exclude glob is invalid.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            settings.source_dir.clone(),
            settings.extensions.clone(),
            &settings.exclude,
        )
    }

    #[must_use]
    pub fn root(&self, codebase: &Codebase) -> PathBuf {
        codebase.source_root(&self.source_dir)
    }

    /// Selected files of `codebase`, sorted.
    ///
    /// # Errors
    /// Returns an error if the source root is not a readable directory.
    pub fn files(&self, codebase: &Codebase) -> Result<Vec<PathBuf>> {
        DirectoryScanner::new(self).scan(&self.root(codebase))
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

impl SourceFilter for SourceSelection {
    fn accepts(&self, relative: &Path) -> bool {
        self.has_source_extension(relative)
            && !is_hidden(relative)
            && !self.exclude.is_match(relative)
    }
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
