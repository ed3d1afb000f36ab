//! Structural checks run over parsed source files.

mod commented_code;
mod commenting;
mod documentation;
mod fields;
mod finalize;
mod ordering;
mod static_access;

pub use commented_code::{CommentedCodeCheck, merge_line_comments};
pub use commenting::{CommentDensityCheck, CommentMeaningCheck, levenshtein};
pub use documentation::DocumentationCheck;
pub use fields::PublicFieldCheck;
pub use finalize::FinalizeCheck;
pub use ordering::OrderingCheck;
pub use static_access::StaticAccessCheck;

use crate::codebase::Codebase;
use crate::config::{CategoryParams, Settings};
use crate::error::{Result, ValidatorError};
use crate::scanner::SourceSelection;
use crate::syntax::{JavaSyntax, SourceFile, SourceText, SyntaxProvider};
use crate::violation::Violations;

/// What a check sees of the file under inspection.
pub struct CheckContext<'a> {
    pub file: &'a SourceFile,
    pub syntax: &'a dyn SyntaxProvider,
}

pub trait Check {
    /// Record every violation of this rule found in the file.
    fn check(&self, ctx: &CheckContext<'_>, violations: &mut Violations);
}

/// Build the checks for every enabled category that has one.
#[must_use]
pub fn checks_for(settings: &Settings) -> Vec<Box<dyn Check>> {
    let mut checks: Vec<Box<dyn Check>> = Vec::new();
    for category in &settings.categories {
        match &category.params {
            CategoryParams::Ordering { order } => {
                checks.push(Box::new(OrderingCheck::new(order.clone())));
            }
            CategoryParams::Commenting(params) => {
                checks.push(Box::new(CommentDensityCheck::new(*params)));
                checks.push(Box::new(CommentMeaningCheck::new(params.levenshtein_distance)));
            }
            CategoryParams::DocType { min_words }
            | CategoryParams::DocField { min_words }
            | CategoryParams::DocMethod { min_words }
            | CategoryParams::DocConstructor { min_words } => {
                checks.push(Box::new(DocumentationCheck::new(
                    category.category(),
                    *min_words,
                )));
            }
            CategoryParams::FinalizeOverride => checks.push(Box::new(FinalizeCheck)),
            CategoryParams::UnqualifiedStaticAccess => checks.push(Box::new(StaticAccessCheck)),
            CategoryParams::PrivateInstances => checks.push(Box::new(PublicFieldCheck)),
            CategoryParams::Useless => checks.push(Box::new(CommentedCodeCheck)),
            CategoryParams::StringConcatenation
            | CategoryParams::EmptyCatchBlock
            | CategoryParams::MissingOverride { .. }
            | CategoryParams::Clones { .. } => {}
        }
    }
    checks
}

/// Runs the tree-walking checks over every source file of a codebase.
pub struct StructuralAnalyzer<P: SyntaxProvider = JavaSyntax> {
    syntax: P,
    checks: Vec<Box<dyn Check>>,
    selection: Option<SourceSelection>,
}

impl<P: SyntaxProvider> StructuralAnalyzer<P> {
    pub const NAME: &'static str = "structural";

    #[must_use]
    pub const fn new(syntax: P) -> Self {
        Self {
            syntax,
            checks: Vec::new(),
            selection: None,
        }
    }

    /// Whether any enabled category needs this analyzer.
    #[must_use]
    pub fn is_needed(settings: &Settings) -> bool {
        !checks_for(settings).is_empty()
    }

    fn read_sources(
        &self,
        codebase: &Codebase,
    ) -> std::result::Result<Vec<SourceText>, ValidatorError> {
        let selection = self
            .selection
            .as_ref()
            .ok_or_else(|| ValidatorError::systemic("structural analyzer used before setup"))?;
        let files = selection
            .files(codebase)
            .map_err(|e| ValidatorError::localized(selection.root(codebase), e.to_string()))?;

        files
            .into_iter()
            .map(|path| match std::fs::read_to_string(&path) {
                Ok(text) => Ok(SourceText::new(path, text)),
                Err(e) => Err(ValidatorError::localized(path, e.to_string())),
            })
            .collect()
    }

    /// Run every configured check over already parsed files.
    #[must_use]
    pub fn check_files(&self, files: &[SourceFile]) -> Violations {
        let mut violations = Violations::new();
        for file in files {
            let ctx = CheckContext {
                file,
                syntax: &self.syntax,
            };
            let before = violations.len();
            for check in &self.checks {
                check.check(&ctx, &mut violations);
            }
            tracing::debug!(
                path = %file.path.display(),
                found = violations.len() - before,
                "checked file"
            );
        }
        violations
    }
}

impl<P: SyntaxProvider> crate::validator::Validator for StructuralAnalyzer<P> {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn setup(&mut self, settings: &Settings) -> Result<()> {
        self.selection = Some(SourceSelection::from_settings(settings)?);
        self.checks = checks_for(settings);
        tracing::debug!(checks = self.checks.len(), "structural analyzer ready");
        Ok(())
    }

    fn analyze(&self, codebase: &Codebase) -> std::result::Result<Violations, ValidatorError> {
        let sources = self.read_sources(codebase)?;
        let files = self.syntax.parse(&sources)?;
        Ok(self.check_files(&files))
    }
}

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
