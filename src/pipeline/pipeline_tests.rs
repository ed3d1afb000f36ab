use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use tempfile::TempDir;

use super::*;
use crate::violation::{Violation, ViolationType};

/// Replays a fixed outcome and counts how often it ran.
struct FakeValidator {
    name: &'static str,
    outcome: std::result::Result<Vec<Violation>, ValidatorError>,
    calls: Rc<Cell<usize>>,
}

impl FakeValidator {
    fn ok(name: &'static str, violations: Vec<Violation>) -> Self {
        Self {
            name,
            outcome: Ok(violations),
            calls: Rc::new(Cell::new(0)),
        }
    }

    fn failing(name: &'static str, error: ValidatorError) -> Self {
        Self {
            name,
            outcome: Err(error),
            calls: Rc::new(Cell::new(0)),
        }
    }
}

impl Validator for FakeValidator {
    fn name(&self) -> &str {
        self.name
    }

    fn setup(&mut self, _settings: &Settings) -> Result<()> {
        Ok(())
    }

    fn analyze(&self, _codebase: &Codebase) -> std::result::Result<Violations, ValidatorError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome
            .clone()
            .map(|found| found.into_iter().collect())
    }
}

fn codebase() -> Codebase {
    Codebase {
        root: PathBuf::from("/subs/alice"),
        organization: None,
        name: "alice".to_string(),
        revision: None,
    }
}

fn violation(ty: ViolationType, line: usize) -> Violation {
    Violation::new(ty, "/subs/alice/Main.java", line)
}

#[test]
fn merges_and_deduplicates_violations_of_all_validators() {
    let pipeline = ValidationPipeline::new(vec![
        Box::new(FakeValidator::ok(
            "first",
            vec![
                violation(ViolationType::FinalizeOverride, 3),
                violation(ViolationType::UnnecessaryImport, 1),
            ],
        )),
        Box::new(FakeValidator::ok(
            "second",
            vec![violation(ViolationType::FinalizeOverride, 3)],
        )),
    ]);

    let result = pipeline.validate(&codebase()).unwrap();

    assert!(!result.is_fatal());
    assert_eq!(result.violations.len(), 2);
}

#[test]
fn localized_failure_stops_this_codebase_only() {
    let third = FakeValidator::ok("third", vec![violation(ViolationType::EmptyCatchBlock, 9)]);
    let third_calls = Rc::clone(&third.calls);
    let pipeline = ValidationPipeline::new(vec![
        Box::new(FakeValidator::ok(
            "first",
            vec![violation(ViolationType::FinalizeOverride, 3)],
        )),
        Box::new(FakeValidator::failing(
            "second",
            ValidatorError::localized("/subs/alice/Broken.java", "syntax error at 2:5"),
        )),
        Box::new(third),
    ]);

    let result = pipeline.validate(&codebase()).unwrap();

    assert_eq!(result.violations.len(), 1);
    assert_eq!(third_calls.get(), 0);
    let failure = result.failure.clone().unwrap();
    assert_eq!(failure.path, Path::new("/subs/alice/Broken.java"));
    assert_eq!(failure.validator, "second");
    assert_eq!(
        result.failure_message().unwrap(),
        "validation of alice using second failed at /subs/alice/Broken.java: syntax error at 2:5"
    );

    // The same pipeline keeps working for the next codebase.
    assert!(pipeline.validate(&codebase()).is_ok());
}

#[test]
fn systemic_failure_aborts_the_run() {
    let pipeline = ValidationPipeline::new(vec![Box::new(FakeValidator::failing(
        "pmd",
        ValidatorError::systemic("pmd is not installed"),
    ))]);

    let err = pipeline.validate(&codebase()).unwrap_err();

    assert!(matches!(
        err,
        StyleGradeError::Validator { validator, message }
            if validator == "pmd" && message == "pmd is not installed"
    ));
}

#[test]
fn baseline_filters_each_validators_output() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("Main.java");
    fs::write(&file, "class Main {\n    public int count;\n    public int mine;\n}\n").unwrap();
    let mut baseline = TemplateBaseline::new();
    baseline.insert(Path::new("Main.java"), "class Main {\n    public int count;\n}\n");

    let pipeline = ValidationPipeline::new(vec![Box::new(FakeValidator::ok(
        "fields",
        vec![
            Violation::new(ViolationType::PublicInstanceField, &file, 2),
            Violation::new(ViolationType::PublicInstanceField, &file, 3),
        ],
    ))])
    .with_baseline(baseline);

    let result = pipeline.validate(&codebase()).unwrap();

    let lines: Vec<_> = result.violations.iter().map(|v| v.start_line).collect();
    assert_eq!(lines, vec![3]);
}

#[test]
fn no_validators_yield_an_empty_result() {
    let result = ValidationPipeline::new(Vec::new())
        .validate(&codebase())
        .unwrap();

    assert!(result.violations.is_empty());
    assert!(result.failure.is_none());
}
