//! Adapter for third-party lint and clone-detection engines.
//!
//! An engine is a command run once per codebase that prints a JSON report on stdout:
//!
//! ```json
//! {
//!   "violations": [
//!     {"rule": "UnnecessaryImport", "file": "src/A.java", "begin_line": 3, "end_line": 3}
//!   ],
//!   "errors": [{"file": "src/B.java", "message": "could not parse"}]
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use super::Validator;
use crate::codebase::Codebase;
use crate::config::{CategoryConfig, CategoryParams, EngineConfig, Settings};
use crate::error::{Result, StyleGradeError, ValidatorError};
use crate::violation::{Category, Violation, ViolationType, Violations};

#[derive(Debug, Deserialize)]
struct EngineReport {
    #[serde(default)]
    violations: Vec<EngineViolation>,
    #[serde(default)]
    errors: Vec<EngineFailure>,
}

#[derive(Debug, Deserialize)]
struct EngineViolation {
    rule: String,
    file: PathBuf,
    begin_line: usize,
    #[serde(default)]
    end_line: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct EngineFailure {
    file: PathBuf,
    message: String,
}

/// Runs an external engine command and maps its rule identifiers onto the catalog.
pub struct ExternalEngine {
    config: EngineConfig,
    source_dir: PathBuf,
    placeholders: Vec<(&'static str, String)>,
    enabled: Vec<Category>,
}

impl ExternalEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            source_dir: PathBuf::new(),
            placeholders: Vec::new(),
            enabled: Vec::new(),
        }
    }

    /// The command line with every placeholder substituted.
    fn command_line(&self, dir: &Path) -> Vec<String> {
        let dir = dir.to_string_lossy();
        self.config
            .command
            .iter()
            .map(|arg| {
                self.placeholders
                    .iter()
                    .fold(arg.replace("{dir}", &dir), |arg, (key, value)| {
                        arg.replace(key, value)
                    })
            })
            .collect()
    }

    fn run(&self, codebase: &Codebase) -> std::result::Result<EngineReport, ValidatorError> {
        let args = self.command_line(&codebase.source_root(&self.source_dir));
        let Some((program, rest)) = args.split_first() else {
            return Err(ValidatorError::systemic(format!(
                "engine '{}' has an empty command",
                self.config.name
            )));
        };
        tracing::debug!(engine = %self.config.name, ?args, "running engine");

        let output = Command::new(program)
            .args(rest)
            .current_dir(&codebase.root)
            .output()
            .map_err(|e| {
                ValidatorError::systemic(format!(
                    "engine '{}' could not start '{program}': {e}",
                    self.config.name
                ))
            })?;

        match serde_json::from_slice::<EngineReport>(&output.stdout) {
            Ok(report) => Ok(report),
            Err(e) if output.status.success() => Err(ValidatorError::systemic(format!(
                "engine '{}' printed an invalid report: {e}",
                self.config.name
            ))),
            Err(_) => Err(ValidatorError::systemic(format!(
                "engine '{}' exited with {}: {}",
                self.config.name,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
        }
    }

    fn convert(
        &self,
        codebase: &Codebase,
        report: EngineReport,
    ) -> std::result::Result<Violations, ValidatorError> {
        if let Some(failure) = report.errors.into_iter().next() {
            return Err(ValidatorError::localized(
                resolve(codebase, failure.file),
                failure.message,
            ));
        }

        let mut violations = Violations::new();
        for found in report.violations {
            let ty = ViolationType::from_rule_id(&found.rule).ok_or_else(|| {
                ValidatorError::systemic(format!(
                    "engine '{}' reported unknown rule '{}'",
                    self.config.name, found.rule
                ))
            })?;
            if !self.enabled.contains(&ty.category()) {
                continue;
            }
            let mut violation = Violation::new(ty, resolve(codebase, found.file), found.begin_line);
            if let Some(end) = found.end_line {
                violation = violation.with_end_line(end);
            }
            violations.insert(violation);
        }
        Ok(violations)
    }
}

fn resolve(codebase: &Codebase, file: PathBuf) -> PathBuf {
    if file.is_absolute() {
        file
    } else {
        codebase.root.join(file)
    }
}

impl Validator for ExternalEngine {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn setup(&mut self, settings: &Settings) -> Result<()> {
        if self.config.command.is_empty() {
            return Err(StyleGradeError::Config(format!(
                "engine '{}' has an empty command",
                self.config.name
            )));
        }
        self.source_dir.clone_from(&settings.source_dir);
        self.enabled = settings.categories.iter().map(CategoryConfig::category).collect();
        self.placeholders.clear();
        for category in &settings.categories {
            match &category.params {
                CategoryParams::Clones { tokens } => {
                    self.placeholders.push(("{tokens}", tokens.to_string()));
                }
                CategoryParams::MissingOverride {
                    include_dependencies,
                } => {
                    self.placeholders
                        .push(("{include_dependencies}", include_dependencies.to_string()));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn analyze(&self, codebase: &Codebase) -> std::result::Result<Violations, ValidatorError> {
        let report = self.run(codebase)?;
        self.convert(codebase, report)
    }
}

#[cfg(test)]
#[path = "external_tests.rs"]
mod tests;
