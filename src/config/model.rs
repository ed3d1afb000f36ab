use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::syntax::MemberKind;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

const DEFAULT_SOURCE_DIR: &str = "src/main/java";
const DEFAULT_MIN_WORDS: usize = 5;
const DEFAULT_CLONE_TOKENS: usize = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub codebases: CodebasesConfig,

    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub report: ReportConfig,

    /// External lint engines, run after the structural checks in this order.
    #[serde(default)]
    pub engines: Vec<EngineConfig>,

    #[serde(default)]
    pub categories: CategoriesConfig,
}

/// Where submissions live and which files inside them are analyzed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodebasesConfig {
    /// Directory whose sub-directories are the codebases.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Owner of the submission repositories on the hosting platform.
    #[serde(default)]
    pub organization: Option<String>,

    /// Source directory inside each codebase; the codebase root is used when absent.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for CodebasesConfig {
    fn default() -> Self {
        Self {
            root: None,
            organization: None,
            source_dir: default_source_dir(),
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Starter code the submissions were cloned from.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Drop violations on lines copied verbatim from the template.
    #[serde(default)]
    pub ignore_violations: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default)]
    pub csv: Option<PathBuf>,

    #[serde(default)]
    pub json: Option<PathBuf>,
}

/// An external lint engine invoked once per codebase.
///
/// In command arguments `{dir}` becomes the codebase source directory, `{tokens}` the
/// clone threshold and `{include_dependencies}` the missing-override setting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    pub name: String,
    pub command: Vec<String>,
}

/// How violations of a category are counted before tier lookup.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Number of violations.
    #[default]
    Count,
    /// Number of distinct files with at least one violation.
    Files,
    /// Full marks with no violations, nothing otherwise.
    Binary,
}

/// Fields shared by every category section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoringSection {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum number of violations listed per codebase in the summary.
    #[serde(default)]
    pub examples: Option<usize>,

    #[serde(default)]
    pub mode: ScoringMode,

    /// Violation-count thresholds; sorted ascending on load.
    pub scores: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderingSection {
    #[serde(flatten)]
    pub scoring: ScoringSection,

    #[serde(default = "default_order")]
    pub order: Vec<MemberKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentingSection {
    #[serde(flatten)]
    pub scoring: ScoringSection,

    /// Methods with at most this many body lines are not checked.
    pub min_lines: usize,

    /// Comment percentage bounds, inclusive.
    pub min_frequency: u32,
    pub max_frequency: u32,

    /// Comments closer than this edit distance to their code are flagged.
    pub levenshtein_distance: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocSection {
    #[serde(flatten)]
    pub scoring: ScoringSection,

    #[serde(default = "default_min_words")]
    pub min_words: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MissingOverrideSection {
    #[serde(flatten)]
    pub scoring: ScoringSection,

    #[serde(default)]
    pub include_dependencies: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClonesSection {
    #[serde(flatten)]
    pub scoring: ScoringSection,

    /// Minimum duplicated token run reported by the clone engine.
    #[serde(default = "default_clone_tokens")]
    pub tokens: usize,
}

/// `[categories.<name>]` sections; an absent section disables the category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CategoriesConfig {
    #[serde(default)]
    pub ordering: Option<OrderingSection>,
    #[serde(default)]
    pub commenting: Option<CommentingSection>,
    #[serde(default)]
    pub doc_type: Option<DocSection>,
    #[serde(default)]
    pub doc_field: Option<DocSection>,
    #[serde(default)]
    pub doc_method: Option<DocSection>,
    #[serde(default)]
    pub doc_constructor: Option<DocSection>,
    #[serde(default)]
    pub finalize_override: Option<ScoringSection>,
    #[serde(default)]
    pub unqualified_static_access: Option<ScoringSection>,
    #[serde(default)]
    pub private_instances: Option<ScoringSection>,
    #[serde(default)]
    pub useless: Option<ScoringSection>,
    #[serde(default)]
    pub string_concatenation: Option<ScoringSection>,
    #[serde(default)]
    pub empty_catch_block: Option<ScoringSection>,
    #[serde(default)]
    pub missing_override: Option<MissingOverrideSection>,
    #[serde(default)]
    pub clones: Option<ClonesSection>,
}

fn default_true() -> bool {
    true
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIR)
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

fn default_order() -> Vec<MemberKind> {
    MemberKind::ALL.to_vec()
}

const fn default_min_words() -> usize {
    DEFAULT_MIN_WORDS
}

const fn default_clone_tokens() -> usize {
    DEFAULT_CLONE_TOKENS
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
