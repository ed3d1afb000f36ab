//! Runs the configured validators over one codebase at a time.

use std::path::PathBuf;

use crate::baseline::TemplateBaseline;
use crate::codebase::Codebase;
use crate::config::Settings;
use crate::error::{Result, StyleGradeError, ValidatorError};
use crate::validator::Validator;
use crate::violation::Violations;

/// A localized failure that stopped validation of one codebase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalError {
    pub path: PathBuf,
    pub validator: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub codebase: Codebase,
    /// Violations found; partial when `failure` is set.
    pub violations: Violations,
    pub failure: Option<FatalError>,
}

impl ValidationResult {
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        self.failure.is_some()
    }

    /// One-line description of the failure, if any.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        self.failure.as_ref().map(|f| {
            format!(
                "validation of {} using {} failed at {}: {}",
                self.codebase.name,
                f.validator,
                f.path.display(),
                f.message
            )
        })
    }
}

pub struct ValidationPipeline {
    validators: Vec<Box<dyn Validator>>,
    baseline: Option<TemplateBaseline>,
}

impl ValidationPipeline {
    #[must_use]
    pub fn new(validators: Vec<Box<dyn Validator>>) -> Self {
        Self {
            validators,
            baseline: None,
        }
    }

    /// Suppress violations on lines copied from the template.
    #[must_use]
    pub fn with_baseline(mut self, baseline: TemplateBaseline) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Bind the settings to every validator.
    ///
    /// # Errors
    /// Returns the first validator setup error.
    pub fn setup(&mut self, settings: &Settings) -> Result<()> {
        for validator in &mut self.validators {
            validator.setup(settings)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn validator_names(&self) -> Vec<&str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Validate one codebase with every validator, in order.
    ///
    /// A localized failure ends this codebase and is recorded on the result.
    ///
    /// # Errors
    /// Returns an error when a validator reports a systemic failure; the whole run
    /// must stop.
    pub fn validate(&self, codebase: &Codebase) -> Result<ValidationResult> {
        let mut violations = Violations::new();
        let mut failure = None;

        for validator in &self.validators {
            let found = validator
                .analyze(codebase)
                .and_then(|found| self.suppress_inherited(found));

            match found {
                Ok(found) => {
                    tracing::debug!(
                        codebase = %codebase.name,
                        validator = validator.name(),
                        found = found.len(),
                        "validator finished"
                    );
                    violations.extend(found);
                }
                Err(ValidatorError::Localized { path, message }) => {
                    tracing::warn!(
                        codebase = %codebase.name,
                        validator = validator.name(),
                        path = %path.display(),
                        "validation aborted: {message}"
                    );
                    failure = Some(FatalError {
                        path,
                        validator: validator.name().to_string(),
                        message,
                    });
                    break;
                }
                Err(ValidatorError::Systemic(message)) => {
                    return Err(StyleGradeError::Validator {
                        validator: validator.name().to_string(),
                        message,
                    });
                }
            }
        }

        tracing::info!(
            codebase = %codebase.name,
            violations = violations.len(),
            fatal = failure.is_some(),
            "validated codebase"
        );
        Ok(ValidationResult {
            codebase: codebase.clone(),
            violations,
            failure,
        })
    }

    fn suppress_inherited(
        &self,
        found: Violations,
    ) -> std::result::Result<Violations, ValidatorError> {
        match &self.baseline {
            Some(baseline) => baseline.filter(found),
            None => Ok(found),
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
