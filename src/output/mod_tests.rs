use std::path::{Path, PathBuf};

use super::*;
use crate::codebase::Codebase;
use crate::config::Config;
use crate::pipeline::FatalError;
use crate::violation::{Violation, ViolationType, Violations};

pub(crate) fn settings() -> Settings {
    let config: Config = toml::from_str(
        r#"
[categories.finalize_override]
scores = [0]
[categories.private_instances]
scores = [0, 1, 3]
examples = 1
"#,
    )
    .unwrap();
    Settings::resolve(&config, Path::new("/"))
}

pub(crate) fn codebase(name: &str) -> Codebase {
    Codebase {
        root: PathBuf::from("/subs").join(name),
        organization: Some("course".to_string()),
        name: name.to_string(),
        revision: Some("0123456789abcdef0123456789abcdef01234567".to_string()),
    }
}

/// `alice` with two public fields in `src/Point.java`.
pub(crate) fn scored() -> GradedCodebase {
    let violations: Violations = [3, 4]
        .into_iter()
        .map(|line| {
            Violation::new(
                ViolationType::PublicInstanceField,
                "/subs/alice/src/Point.java",
                line,
            )
        })
        .collect();
    let result = ValidationResult {
        codebase: codebase("alice"),
        violations,
        failure: None,
    };
    GradedCodebase::new(result, &settings())
}

/// `bob`, whose validation failed on `src/Broken.java`.
pub(crate) fn failed() -> GradedCodebase {
    let mut bob = codebase("bob");
    bob.revision = None;
    let result = ValidationResult {
        codebase: bob,
        violations: Violations::new(),
        failure: Some(FatalError {
            path: PathBuf::from("/subs/bob/src/Broken.java"),
            validator: "structural".to_string(),
            message: "syntax error at 3:7".to_string(),
        }),
    };
    GradedCodebase::new(result, &settings())
}

#[test]
fn graded_codebase_is_scored_on_creation() {
    let graded = scored();

    assert_eq!(graded.score.total(), Some(2));
    assert_eq!(graded.score.category(Category::PrivateInstances), Some(1));
    assert_eq!(failed().score, ScoreCard::NotApplicable);
}

#[test]
fn category_columns_follow_settings() {
    let columns = category_columns(&settings());

    assert_eq!(
        columns,
        vec![
            CategoryColumn {
                category: Category::FinalizeOverride,
                max_score: 1,
                examples: None,
            },
            CategoryColumn {
                category: Category::PrivateInstances,
                max_score: 3,
                examples: Some(1),
            },
        ]
    );
}
