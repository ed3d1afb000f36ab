//! Submissions under validation.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, StyleGradeError};
use crate::git::GitContext;

const GITHUB_URL: &str = "https://github.com";

/// One submission's source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codebase {
    pub root: PathBuf,
    pub organization: Option<String>,
    pub name: String,
    /// HEAD commit id; `None` when the directory is not a repository.
    pub revision: Option<String>,
}

impl Codebase {
    /// Describe the codebase rooted at `root`, reading its revision from git.
    #[must_use]
    pub fn from_dir(root: &Path, organization: Option<String>) -> Self {
        let name = root.file_name().map_or_else(
            || root.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let revision = GitContext::from_path(root).map(|ctx| ctx.commit);
        Self {
            root: root.to_path_buf(),
            organization,
            name,
            revision,
        }
    }

    /// Directory holding the sources to analyze.
    ///
    /// `source_dir` is tried directly under the root, then as the first nested
    /// directory ending with that path; the codebase root is the fallback.
    #[must_use]
    pub fn source_root(&self, source_dir: &Path) -> PathBuf {
        if source_dir.as_os_str().is_empty() {
            return self.root.clone();
        }
        let direct = self.root.join(source_dir);
        if direct.is_dir() {
            return direct;
        }
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .find(|e| e.file_type().is_dir() && e.path().ends_with(source_dir))
            .map_or_else(|| self.root.clone(), walkdir::DirEntry::into_path)
    }

    /// Hosting link to a line of a file inside this codebase.
    ///
    /// Needs organization and revision; `file` may be absolute or relative to the root.
    #[must_use]
    pub fn link(&self, file: &Path, line: usize) -> Option<String> {
        let organization = self.organization.as_deref()?;
        let revision = self.revision.as_deref()?;
        let relative = file.strip_prefix(&self.root).unwrap_or(file);
        let relative = relative.to_string_lossy().replace('\\', "/");
        Some(format!(
            "{GITHUB_URL}/{organization}/{}/blob/{revision}/{relative}#L{line}",
            self.name
        ))
    }
}

/// Every sub-directory of `root` except the template and hidden directories, by name.
///
/// # Errors
/// Returns an error if `root` cannot be listed.
pub fn discover(
    root: &Path,
    template: Option<&Path>,
    organization: Option<&str>,
) -> Result<Vec<Codebase>> {
    let entries = std::fs::read_dir(root).map_err(|source| StyleGradeError::FileAccess {
        path: root.to_path_buf(),
        source,
    })?;

    let template = template.map(normalize);
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_ok_and(|t| t.is_dir()))
        .map(|e| e.path())
        .filter(|p| !is_hidden(p) && template.as_deref() != Some(normalize(p).as_path()))
        .collect();
    dirs.sort();

    tracing::debug!(root = %root.display(), count = dirs.len(), "discovered codebases");
    Ok(dirs
        .iter()
        .map(|dir| Codebase::from_dir(dir, organization.map(str::to_string)))
        .collect())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

fn normalize(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "codebase_tests.rs"]
mod tests;
