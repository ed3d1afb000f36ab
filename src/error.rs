use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleGradeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Unable to load grammar: {0}")]
    Grammar(String),

    #[error("Validator '{validator}' failed: {message}")]
    Validator { validator: String, message: String },
}

/// Failure raised by a single validator while analyzing one codebase.
///
/// `Localized` failures are tied to one file and only abort the current codebase.
/// `Systemic` failures mean the validator's environment or configuration is broken
/// and abort the whole run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    #[error("{message} ({})", path.display())]
    Localized { path: PathBuf, message: String },

    #[error("{0}")]
    Systemic(String),
}

impl ValidatorError {
    #[must_use]
    pub fn localized(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Localized {
            path: path.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn systemic(message: impl Into<String>) -> Self {
        Self::Systemic(message.into())
    }

    /// The file a localized failure points at.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Localized { path, .. } => Some(path),
            Self::Systemic(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StyleGradeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
