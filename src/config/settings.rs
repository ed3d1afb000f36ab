use std::path::{Path, PathBuf};

use super::model::{
    CategoriesConfig, ClonesSection, CommentingSection, Config, DocSection, EngineConfig,
    MissingOverrideSection, OrderingSection, ScoringMode, ScoringSection,
};
use crate::syntax::MemberKind;
use crate::violation::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentingParams {
    pub min_lines: usize,
    pub min_frequency: u32,
    pub max_frequency: u32,
    pub levenshtein_distance: usize,
}

/// Category-specific parameters, one variant per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParams {
    Ordering { order: Vec<MemberKind> },
    Commenting(CommentingParams),
    DocType { min_words: usize },
    DocField { min_words: usize },
    DocMethod { min_words: usize },
    DocConstructor { min_words: usize },
    FinalizeOverride,
    UnqualifiedStaticAccess,
    PrivateInstances,
    Useless,
    StringConcatenation,
    EmptyCatchBlock,
    MissingOverride { include_dependencies: bool },
    Clones { tokens: usize },
}

impl CategoryParams {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Ordering { .. } => Category::Ordering,
            Self::Commenting(_) => Category::Commenting,
            Self::DocType { .. } => Category::DocType,
            Self::DocField { .. } => Category::DocField,
            Self::DocMethod { .. } => Category::DocMethod,
            Self::DocConstructor { .. } => Category::DocConstructor,
            Self::FinalizeOverride => Category::FinalizeOverride,
            Self::UnqualifiedStaticAccess => Category::UnqualifiedStaticAccess,
            Self::PrivateInstances => Category::PrivateInstances,
            Self::Useless => Category::Useless,
            Self::StringConcatenation => Category::StringConcatenation,
            Self::EmptyCatchBlock => Category::EmptyCatchBlock,
            Self::MissingOverride { .. } => Category::MissingOverride,
            Self::Clones { .. } => Category::Clones,
        }
    }
}

/// Resolved configuration of one enabled category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    pub examples: Option<usize>,
    pub mode: ScoringMode,
    /// Ascending violation-count thresholds.
    pub scores: Vec<u32>,
    pub params: CategoryParams,
}

impl CategoryConfig {
    #[must_use]
    pub fn new(mode: ScoringMode, mut scores: Vec<u32>, params: CategoryParams) -> Self {
        scores.sort_unstable();
        Self {
            examples: None,
            mode,
            scores,
            params,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.params.category()
    }

    /// Score awarded with no violations.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        u32::try_from(self.scores.len()).unwrap_or(u32::MAX)
    }

    fn from_section(section: &ScoringSection, params: CategoryParams) -> Option<Self> {
        section.enabled.then(|| Self {
            examples: section.examples,
            ..Self::new(section.mode, section.scores.clone(), params)
        })
    }
}

/// Run-wide settings resolved from a [`Config`].
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory the configuration was loaded from.
    pub base_dir: PathBuf,
    /// Every sub-directory is a codebase; `None` grades `base_dir` alone.
    pub codebases_root: Option<PathBuf>,
    pub organization: Option<String>,
    pub source_dir: PathBuf,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    /// Configured template, or the conventional one beside `codebases_root`.
    pub template: Option<PathBuf>,
    pub ignore_template_violations: bool,
    pub csv_report: Option<PathBuf>,
    pub json_report: Option<PathBuf>,
    pub engines: Vec<EngineConfig>,
    /// Enabled categories, in catalog order.
    pub categories: Vec<CategoryConfig>,
}

impl Settings {
    /// Resolve a config; relative paths are taken against `base_dir`.
    #[must_use]
    pub fn resolve(config: &Config, base_dir: &Path) -> Self {
        let codebases_root = config.codebases.root.as_ref().map(|root| base_dir.join(root));
        let template = config.template.path.as_ref().map_or_else(
            || codebases_root.as_deref().map(default_template),
            |path| Some(base_dir.join(path)),
        );

        Self {
            base_dir: base_dir.to_path_buf(),
            organization: config.codebases.organization.clone(),
            source_dir: config.codebases.source_dir.clone(),
            extensions: config.codebases.extensions.clone(),
            exclude: config.codebases.exclude.clone(),
            template,
            ignore_template_violations: config.template.ignore_violations,
            csv_report: config.report.csv.as_ref().map(|p| base_dir.join(p)),
            json_report: config.report.json.as_ref().map(|p| base_dir.join(p)),
            engines: config.engines.clone(),
            categories: resolve_categories(&config.categories),
            codebases_root,
        }
    }

    #[must_use]
    pub fn category(&self, category: Category) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.category() == category)
    }
}

/// The template conventionally lives beside the submissions, named after their root.
fn default_template(root: &Path) -> PathBuf {
    root.file_name()
        .map_or_else(|| root.join("template"), |name| root.join(name))
}

fn resolve_categories(sections: &CategoriesConfig) -> Vec<CategoryConfig> {
    let doc = |section: Option<&DocSection>, make: fn(usize) -> CategoryParams| {
        section.and_then(|s| CategoryConfig::from_section(&s.scoring, make(s.min_words)))
    };
    let plain = |section: Option<&ScoringSection>, params: CategoryParams| {
        section.and_then(|s| CategoryConfig::from_section(s, params))
    };

    [
        sections.ordering.as_ref().and_then(ordering),
        sections.commenting.as_ref().and_then(commenting),
        doc(sections.doc_type.as_ref(), |min_words| CategoryParams::DocType { min_words }),
        doc(sections.doc_field.as_ref(), |min_words| CategoryParams::DocField { min_words }),
        doc(sections.doc_method.as_ref(), |min_words| CategoryParams::DocMethod { min_words }),
        doc(sections.doc_constructor.as_ref(), |min_words| {
            CategoryParams::DocConstructor { min_words }
        }),
        plain(sections.finalize_override.as_ref(), CategoryParams::FinalizeOverride),
        plain(
            sections.unqualified_static_access.as_ref(),
            CategoryParams::UnqualifiedStaticAccess,
        ),
        plain(sections.private_instances.as_ref(), CategoryParams::PrivateInstances),
        plain(sections.useless.as_ref(), CategoryParams::Useless),
        plain(
            sections.string_concatenation.as_ref(),
            CategoryParams::StringConcatenation,
        ),
        plain(sections.empty_catch_block.as_ref(), CategoryParams::EmptyCatchBlock),
        sections.missing_override.as_ref().and_then(missing_override),
        sections.clones.as_ref().and_then(clones),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn ordering(section: &OrderingSection) -> Option<CategoryConfig> {
    CategoryConfig::from_section(
        &section.scoring,
        CategoryParams::Ordering {
            order: section.order.clone(),
        },
    )
}

fn commenting(section: &CommentingSection) -> Option<CategoryConfig> {
    CategoryConfig::from_section(
        &section.scoring,
        CategoryParams::Commenting(CommentingParams {
            min_lines: section.min_lines,
            min_frequency: section.min_frequency,
            max_frequency: section.max_frequency,
            levenshtein_distance: section.levenshtein_distance,
        }),
    )
}

fn missing_override(section: &MissingOverrideSection) -> Option<CategoryConfig> {
    CategoryConfig::from_section(
        &section.scoring,
        CategoryParams::MissingOverride {
            include_dependencies: section.include_dependencies,
        },
    )
}

fn clones(section: &ClonesSection) -> Option<CategoryConfig> {
    CategoryConfig::from_section(
        &section.scoring,
        CategoryParams::Clones {
            tokens: section.tokens,
        },
    )
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
