//! Turning violation counts into category scores.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{CategoryConfig, ScoringMode, Settings};
use crate::pipeline::ValidationResult;
use crate::violation::{Category, Violations};

/// Number of thresholds the count does not exceed.
///
/// With ascending thresholds `t0 <= t1 <= ... <= tN-1` this is `N` for a count of
/// zero (when `t0 >= 0`) and `0` once the count exceeds `tN-1`. A count equal to a
/// threshold lands in the better tier.
#[must_use]
pub fn tier(count: usize, thresholds: &[u32]) -> u32 {
    let matched = thresholds
        .iter()
        .filter(|&&t| usize::try_from(t).is_ok_and(|t| count <= t))
        .count();
    u32::try_from(matched).unwrap_or(u32::MAX)
}

/// The quantity a category's mode compares against its thresholds.
#[must_use]
pub fn measure(config: &CategoryConfig, violations: &Violations) -> usize {
    let category = config.category();
    match config.mode {
        ScoringMode::Count | ScoringMode::Binary => violations.in_category(category).count(),
        ScoringMode::Files => violations.files_in_category(category),
    }
}

#[must_use]
pub fn category_score(config: &CategoryConfig, violations: &Violations) -> u32 {
    let measured = measure(config, violations);
    match config.mode {
        ScoringMode::Binary if measured == 0 => config.max_score(),
        ScoringMode::Binary => 0,
        ScoringMode::Count | ScoringMode::Files => tier(measured, &config.scores),
    }
}

/// Scores of one codebase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreCard {
    Scored {
        categories: IndexMap<Category, u32>,
        total: u32,
    },
    /// Validation aborted; no score is defined.
    NotApplicable,
}

impl ScoreCard {
    #[must_use]
    pub fn category(&self, category: Category) -> Option<u32> {
        match self {
            Self::Scored { categories, .. } => categories.get(&category).copied(),
            Self::NotApplicable => None,
        }
    }

    #[must_use]
    pub const fn total(&self) -> Option<u32> {
        match self {
            Self::Scored { total, .. } => Some(*total),
            Self::NotApplicable => None,
        }
    }
}

/// Score every enabled category of a result, in configuration order.
#[must_use]
pub fn score(result: &ValidationResult, settings: &Settings) -> ScoreCard {
    if result.is_fatal() {
        return ScoreCard::NotApplicable;
    }
    let categories: IndexMap<Category, u32> = settings
        .categories
        .iter()
        .map(|config| (config.category(), category_score(config, &result.violations)))
        .collect();
    let total = categories.values().sum();
    ScoreCard::Scored { categories, total }
}

/// Highest total a codebase can reach.
#[must_use]
pub fn max_total(settings: &Settings) -> u32 {
    settings.categories.iter().map(CategoryConfig::max_score).sum()
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod tests;
