mod catalog;

pub use catalog::{Category, DocDefect, ViolationType};

use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::Serialize;

/// One discovered rule breach.
///
/// Two violations are equal when type, file, and start line match. The optional
/// message and end line do not take part in equality, so the first violation
/// recorded for a location keeps its message.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub violation_type: ViolationType,
    pub path: PathBuf,
    pub start_line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Violation {
    #[must_use]
    pub fn new(violation_type: ViolationType, path: impl Into<PathBuf>, start_line: usize) -> Self {
        Self {
            violation_type,
            path: path.into(),
            start_line,
            end_line: None,
            message: None,
        }
    }

    #[must_use]
    pub const fn with_end_line(mut self, end_line: usize) -> Self {
        self.end_line = Some(end_line);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.violation_type.category()
    }

    /// The explanatory text, falling back to the type's message template.
    #[must_use]
    pub fn describe(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| self.violation_type.message())
    }
}

impl PartialEq for Violation {
    fn eq(&self, other: &Self) -> bool {
        self.violation_type == other.violation_type
            && self.path == other.path
            && self.start_line == other.start_line
    }
}

impl Eq for Violation {}

impl Hash for Violation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.violation_type.hash(state);
        self.path.hash(state);
        self.start_line.hash(state);
    }
}

/// Deduplicated set of violations, iterated in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Violations {
    items: IndexSet<Violation>,
}

impl Violations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a violation; returns false when an equal one is already present.
    pub fn insert(&mut self, violation: Violation) -> bool {
        self.items.insert(violation)
    }

    pub fn add(&mut self, violation_type: ViolationType, path: &Path, line: usize) {
        self.insert(Violation::new(violation_type, path, line));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, violation: &Violation) -> bool {
        self.items.contains(violation)
    }

    #[must_use]
    pub fn count_type(&self, violation_type: ViolationType) -> usize {
        self.items
            .iter()
            .filter(|v| v.violation_type == violation_type)
            .count()
    }

    /// Violations of one category, in insertion order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Violation> {
        self.items.iter().filter(move |v| v.category() == category)
    }

    /// Number of distinct files holding at least one violation of the category.
    #[must_use]
    pub fn files_in_category(&self, category: Category) -> usize {
        self.in_category(category)
            .map(|v| v.path.as_path())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl Extend<Violation> for Violations {
    fn extend<T: IntoIterator<Item = Violation>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<T: IntoIterator<Item = Violation>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = indexmap::set::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = indexmap::set::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
