//! Tabular report: one header row, then one row per codebase.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{CategoryConfig, Settings};
use crate::error::{Result, StyleGradeError};
use crate::violation::{Category, ViolationType};

use super::GradedCodebase;

const NOT_APPLICABLE: &str = "N/A";

/// Column layout: identity, one count per violation type of each enabled category,
/// one score per category, then the total.
#[derive(Debug, Clone)]
pub struct CsvReport {
    types: Vec<ViolationType>,
    categories: Vec<Category>,
}

impl CsvReport {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let categories: Vec<Category> = settings
            .categories
            .iter()
            .map(CategoryConfig::category)
            .collect();
        let types = categories.iter().flat_map(|c| c.types()).collect();
        Self { types, categories }
    }

    #[must_use]
    pub fn header(&self) -> String {
        let mut fields: Vec<String> = vec![quote("Name"), quote("Hash")];
        fields.extend(self.types.iter().map(|t| quote(t.name())));
        fields.extend(self.categories.iter().map(|c| quote(&format!("{c} Score"))));
        fields.push(quote("Total Score"));
        fields.join(",")
    }

    /// A data row; every count and score is `N/A` when validation failed.
    #[must_use]
    pub fn row(&self, graded: &GradedCodebase) -> String {
        let codebase = &graded.result.codebase;
        let mut fields = vec![
            quote(&codebase.name),
            quote(codebase.revision.as_deref().unwrap_or_default()),
        ];

        let Some(total) = graded.score.total() else {
            let width = self.types.len() + self.categories.len() + 1;
            fields.extend(std::iter::repeat_n(quote(NOT_APPLICABLE), width));
            return fields.join(",");
        };

        let violations = &graded.result.violations;
        fields.extend(self.types.iter().map(|t| violations.count_type(*t).to_string()));
        fields.extend(self.categories.iter().map(|c| {
            graded
                .score
                .category(*c)
                .map_or_else(|| quote(NOT_APPLICABLE), |s| s.to_string())
        }));
        fields.push(total.to_string());
        fields.join(",")
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Writes rows to a file as codebases complete.
pub struct CsvWriter {
    report: CsvReport,
    path: PathBuf,
    out: BufWriter<File>,
}

impl CsvWriter {
    /// Create (truncate) `path` and write the header row.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn create(path: &Path, report: CsvReport) -> Result<Self> {
        let file = File::create(path).map_err(|source| StyleGradeError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = Self {
            report,
            path: path.to_path_buf(),
            out: BufWriter::new(file),
        };
        let header = writer.report.header();
        writer.write_line(&header)?;
        Ok(writer)
    }

    /// Append and flush one codebase's row.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write(&mut self, graded: &GradedCodebase) -> Result<()> {
        let row = self.report.row(graded);
        self.write_line(&row)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")
            .and_then(|()| self.out.flush())
            .map_err(|source| StyleGradeError::FileAccess {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
