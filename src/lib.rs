pub mod analyzer;
pub mod baseline;
pub mod cli;
pub mod codebase;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod pipeline;
pub mod scanner;
pub mod scoring;
pub mod syntax;
pub mod validator;
pub mod violation;

pub use error::{Result, StyleGradeError, ValidatorError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
