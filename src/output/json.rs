use serde::Serialize;

use crate::config::Settings;
use crate::error::Result;
use crate::scoring::ScoreCard;
use crate::violation::{Category, ViolationType};

use super::{GradedCodebase, OutputFormatter};

/// Full report of a run as one JSON document.
pub struct JsonFormatter {
    max_total: u32,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    max_total: u32,
    codebases: Vec<CodebaseReport<'a>>,
}

#[derive(Serialize)]
struct CodebaseReport<'a> {
    name: &'a str,
    revision: Option<&'a str>,
    score: &'a ScoreCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<Failure<'a>>,
    violations: Vec<ViolationReport<'a>>,
}

#[derive(Serialize)]
struct Failure<'a> {
    validator: &'a str,
    path: String,
    message: &'a str,
}

#[derive(Serialize)]
struct ViolationReport<'a> {
    #[serde(rename = "type")]
    violation_type: ViolationType,
    category: Category,
    path: String,
    start_line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_line: Option<usize>,
    message: &'a str,
}

impl JsonFormatter {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            max_total: crate::scoring::max_total(settings),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, graded: &[GradedCodebase]) -> Result<String> {
        let output = JsonOutput {
            max_total: self.max_total,
            codebases: graded.iter().map(convert).collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert(graded: &GradedCodebase) -> CodebaseReport<'_> {
    let result = &graded.result;
    let root = &result.codebase.root;
    let display = |path: &std::path::Path| {
        path.strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    };

    CodebaseReport {
        name: &result.codebase.name,
        revision: result.codebase.revision.as_deref(),
        score: &graded.score,
        failure: result.failure.as_ref().map(|f| Failure {
            validator: &f.validator,
            path: display(&f.path),
            message: &f.message,
        }),
        violations: result
            .violations
            .iter()
            .map(|v| ViolationReport {
                violation_type: v.violation_type,
                category: v.category(),
                path: display(&v.path),
                start_line: v.start_line,
                end_line: v.end_line,
                message: v.describe(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
