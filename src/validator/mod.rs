//! The capability shared by every analyzer the pipeline runs.

mod external;

pub use external::ExternalEngine;

use crate::codebase::Codebase;
use crate::config::Settings;
use crate::error::{Result, ValidatorError};
use crate::violation::Violations;

/// Anything that inspects a codebase and reports violations.
///
/// A validator is configured once with [`Validator::setup`] and then reused for every
/// codebase of the run; `analyze` must not carry state from one codebase to the next.
pub trait Validator {
    /// Short name used in logs and failure messages.
    fn name(&self) -> &str;

    /// Bind run-wide settings.
    ///
    /// # Errors
    /// Returns an error if the settings cannot be applied (e.g. an invalid pattern).
    fn setup(&mut self, settings: &Settings) -> Result<()>;

    /// Report the violations found in one codebase.
    ///
    /// # Errors
    /// Returns a localized error when one file cannot be analyzed, a systemic error
    /// when the validator itself is unusable.
    fn analyze(&self, codebase: &Codebase) -> std::result::Result<Violations, ValidatorError>;
}
