mod csv;
mod json;
mod progress;
mod text;

pub use csv::{CsvReport, CsvWriter};
pub use json::JsonFormatter;
pub use progress::GradeProgress;
pub use text::{ColorMode, TextFormatter};

use crate::config::Settings;
use crate::error::Result;
use crate::pipeline::ValidationResult;
use crate::scoring::{self, ScoreCard};
use crate::violation::Category;

/// A validated codebase together with its scores.
#[derive(Debug, Clone)]
pub struct GradedCodebase {
    pub result: ValidationResult,
    pub score: ScoreCard,
}

impl GradedCodebase {
    #[must_use]
    pub fn new(result: ValidationResult, settings: &Settings) -> Self {
        let score = scoring::score(&result, settings);
        Self { result, score }
    }
}

/// Per-category facts every formatter needs, in configuration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CategoryColumn {
    category: Category,
    max_score: u32,
    examples: Option<usize>,
}

fn category_columns(settings: &Settings) -> Vec<CategoryColumn> {
    settings
        .categories
        .iter()
        .map(|c| CategoryColumn {
            category: c.category(),
            max_score: c.max_score(),
            examples: c.examples,
        })
        .collect()
}

/// Trait for formatting graded codebases into various output formats.
pub trait OutputFormatter {
    /// Format the graded codebases into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, graded: &[GradedCodebase]) -> Result<String>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
