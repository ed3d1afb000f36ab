//! Revision lookup for a codebase checkout.

use std::path::Path;

/// Repository state of a codebase at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitContext {
    /// Full hex id of the HEAD commit.
    pub commit: String,
    /// Branch name if on a branch (None for detached HEAD)
    pub branch: Option<String>,
}

impl GitContext {
    const SHORT_HASH_LEN: usize = 7;

    /// Read the HEAD commit of the repository rooted exactly at `path`.
    ///
    /// Parent repositories are not consulted: a submission directory nested inside a
    /// grading repository must not inherit the grader's revision.
    ///
    /// Returns `None` if the path is not a repository root, the repository has no
    /// commits, or any git operation fails.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let repo = gix::open(path).ok()?;
        let head_commit = repo.head_commit().ok()?;
        let commit = head_commit.id().to_string();

        let branch = repo
            .head_name()
            .ok()
            .flatten()
            .map(|name| name.shorten().to_string());

        Some(Self { commit, branch })
    }

    /// Abbreviated commit id for console output.
    #[must_use]
    pub fn short_commit(&self) -> &str {
        self.commit
            .get(..Self::SHORT_HASH_LEN)
            .unwrap_or(&self.commit)
    }
}
