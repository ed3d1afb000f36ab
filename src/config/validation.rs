//! Configuration semantic validation.
//!
//! Runs after parsing; everything rejected here is a startup error.

use std::collections::HashSet;

use super::model::{CategoriesConfig, Config, ScoringSection};
use crate::syntax::MemberKind;
use crate::{Result, StyleGradeError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error for invalid glob patterns, an empty extension list, malformed
/// engines, or inconsistent category parameters.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_codebases(config)?;
    validate_engines(config)?;
    validate_categories(&config.categories)?;
    Ok(())
}

fn validate_codebases(config: &Config) -> Result<()> {
    if config.codebases.extensions.is_empty() {
        return Err(StyleGradeError::Config(
            "codebases.extensions must list at least one extension".to_string(),
        ));
    }
    for pattern in &config.codebases.exclude {
        globset::Glob::new(pattern).map_err(|e| StyleGradeError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_engines(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, engine) in config.engines.iter().enumerate() {
        if engine.name.trim().is_empty() {
            return Err(StyleGradeError::Config(format!(
                "engines[{i}].name must not be empty"
            )));
        }
        if engine.command.is_empty() {
            return Err(StyleGradeError::Config(format!(
                "engines[{i}].command must not be empty ('{}')",
                engine.name
            )));
        }
        if !seen.insert(engine.name.as_str()) {
            return Err(StyleGradeError::Config(format!(
                "engine '{}' is configured more than once",
                engine.name
            )));
        }
    }
    Ok(())
}

fn validate_categories(categories: &CategoriesConfig) -> Result<()> {
    if let Some(ordering) = &categories.ordering {
        check_scores("ordering", &ordering.scoring)?;
        validate_order(&ordering.order)?;
    }

    if let Some(commenting) = &categories.commenting {
        check_scores("commenting", &commenting.scoring)?;
        if commenting.min_frequency > commenting.max_frequency {
            return Err(StyleGradeError::Config(format!(
                "categories.commenting.min_frequency ({}) must not exceed max_frequency ({})",
                commenting.min_frequency, commenting.max_frequency
            )));
        }
    }

    let docs = [
        ("doc_type", &categories.doc_type),
        ("doc_field", &categories.doc_field),
        ("doc_method", &categories.doc_method),
        ("doc_constructor", &categories.doc_constructor),
    ];
    for (name, section) in docs {
        if let Some(section) = section {
            check_scores(name, &section.scoring)?;
        }
    }

    let plain = [
        ("finalize_override", &categories.finalize_override),
        ("unqualified_static_access", &categories.unqualified_static_access),
        ("private_instances", &categories.private_instances),
        ("useless", &categories.useless),
        ("string_concatenation", &categories.string_concatenation),
        ("empty_catch_block", &categories.empty_catch_block),
    ];
    for (name, section) in plain {
        if let Some(section) = section {
            check_scores(name, section)?;
        }
    }

    if let Some(section) = &categories.missing_override {
        check_scores("missing_override", &section.scoring)?;
    }
    if let Some(section) = &categories.clones {
        check_scores("clones", &section.scoring)?;
        if section.tokens == 0 {
            return Err(StyleGradeError::Config(
                "categories.clones.tokens must be greater than 0".to_string(),
            ));
        }
    }
    Ok(())
}

fn check_scores(name: &str, section: &ScoringSection) -> Result<()> {
    if section.enabled && section.scores.is_empty() {
        return Err(StyleGradeError::Config(format!(
            "categories.{name}.scores must list at least one threshold"
        )));
    }
    Ok(())
}

/// The order must name each of the six member kinds exactly once.
fn validate_order(order: &[MemberKind]) -> Result<()> {
    let distinct: HashSet<_> = order.iter().collect();
    if order.len() != MemberKind::ALL.len() || distinct.len() != order.len() {
        return Err(StyleGradeError::Config(format!(
            "categories.ordering.order must list each of the {} member kinds exactly once",
            MemberKind::ALL.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
