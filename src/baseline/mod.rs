//! Suppression of violations inherited from the starter template.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::codebase::Codebase;
use crate::error::{Result, StyleGradeError, ValidatorError};
use crate::scanner::SourceSelection;
use crate::violation::{Violation, Violations};

/// Line contents of every template source file, indexed by file basename.
///
/// Submissions are clones of the template under another root, so files are matched
/// by name only. A violation is inherited when the text of its line in the
/// submission occurs anywhere in the template file of the same name.
#[derive(Debug, Clone, Default)]
pub struct TemplateBaseline {
    files: HashMap<String, HashSet<String>>,
}

impl TemplateBaseline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every selected source file of the template.
    ///
    /// # Errors
    /// Returns an error if the template directory or one of its files cannot be read.
    pub fn build(template: &Codebase, selection: &SourceSelection) -> Result<Self> {
        let mut baseline = Self::new();
        for path in selection.files(template)? {
            let content = fs::read_to_string(&path).map_err(|source| {
                StyleGradeError::FileAccess {
                    path: path.clone(),
                    source,
                }
            })?;
            baseline.insert(&path, &content);
        }
        tracing::debug!(
            template = %template.root.display(),
            files = baseline.len(),
            "built template baseline"
        );
        Ok(baseline)
    }

    /// Record the lines of one template file; repeated basenames accumulate.
    pub fn insert(&mut self, path: &Path, content: &str) {
        let Some(name) = basename(path) else { return };
        self.files
            .entry(name)
            .or_default()
            .extend(content.lines().map(str::to_string));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether `line` occurs in the template file named like `path`.
    #[must_use]
    pub fn contains_line(&self, path: &Path, line: &str) -> bool {
        basename(path)
            .and_then(|name| self.files.get(&name))
            .is_some_and(|lines| lines.contains(line))
    }

    /// Drop every violation whose line is inherited from the template.
    ///
    /// # Errors
    /// Returns a localized error when a submission file with a template counterpart
    /// cannot be read.
    pub fn filter(
        &self,
        violations: Violations,
    ) -> std::result::Result<Violations, ValidatorError> {
        let mut sources: HashMap<PathBuf, Vec<String>> = HashMap::new();
        let mut kept = Violations::new();
        for violation in violations {
            if self.is_inherited(&violation, &mut sources)? {
                tracing::trace!(
                    path = %violation.path.display(),
                    line = violation.start_line,
                    "suppressed template violation"
                );
            } else {
                kept.insert(violation);
            }
        }
        Ok(kept)
    }

    fn is_inherited(
        &self,
        violation: &Violation,
        sources: &mut HashMap<PathBuf, Vec<String>>,
    ) -> std::result::Result<bool, ValidatorError> {
        if !basename(&violation.path).is_some_and(|name| self.files.contains_key(&name)) {
            return Ok(false);
        }

        if !sources.contains_key(&violation.path) {
            let content = fs::read_to_string(&violation.path)
                .map_err(|e| ValidatorError::localized(violation.path.clone(), e.to_string()))?;
            sources.insert(
                violation.path.clone(),
                content.lines().map(str::to_string).collect(),
            );
        }

        let line = violation
            .start_line
            .checked_sub(1)
            .and_then(|i| sources.get(&violation.path).and_then(|lines| lines.get(i)));
        Ok(line.is_some_and(|text| self.contains_line(&violation.path, text)))
    }
}

fn basename(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "baseline_tests.rs"]
mod tests;
