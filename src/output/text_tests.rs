use super::*;
use crate::output::tests::{failed, scored, settings};

fn plain() -> TextFormatter {
    TextFormatter::new(ColorMode::Never, &settings())
}

#[test]
fn scored_codebase_shows_totals_and_categories() {
    let output = plain().format(&[scored()]).unwrap();

    assert!(output.contains("✓ alice (0123456): 2/4"), "{output}");
    assert!(output.contains("FinalizeOverride: 1/1 (0 violations)"));
    assert!(output.contains("PrivateInstances: 1/3 (2 violations)"));
}

#[test]
fn examples_cap_the_listed_violations() {
    let output = plain().format(&[scored()]).unwrap();

    assert!(output.contains("src/Point.java:3 Instance field should be private or protected"));
    assert!(!output.contains("src/Point.java:4"));
    assert!(output.contains("... and 1 more"));
}

#[test]
fn verbose_lists_every_violation() {
    let formatter = TextFormatter::with_verbose(ColorMode::Never, &settings(), 1);

    let output = formatter.format(&[scored()]).unwrap();

    assert!(output.contains("src/Point.java:4"));
    assert!(!output.contains("more"));
}

#[test]
fn violations_link_to_the_hosted_revision() {
    let output = plain().format(&[scored()]).unwrap();

    assert!(output.contains(
        "<https://github.com/course/alice/blob/0123456789abcdef0123456789abcdef01234567/src/Point.java#L3>"
    ));
}

#[test]
fn failed_codebase_is_not_applicable() {
    let output = plain().format(&[failed()]).unwrap();

    assert!(output.contains("✗ bob: N/A"));
    assert!(output.contains(
        "validation of bob using structural failed at /subs/bob/src/Broken.java: syntax error at 3:7"
    ));
}

#[test]
fn summary_counts_failures() {
    let output = plain().format(&[scored(), failed()]).unwrap();

    assert!(output.contains("Summary: 2 codebases graded, 1 scored, 1 failed"));
}

#[test]
fn single_codebase_has_no_summary() {
    let output = plain().format(&[scored()]).unwrap();

    assert!(!output.contains("Summary"));
}

#[test]
fn colors_wrap_scores_when_enabled() {
    let formatter = TextFormatter::new(ColorMode::Always, &settings());

    let output = formatter.format(&[scored()]).unwrap();

    assert!(output.contains("\x1b[33m2/4\x1b[0m"));
    assert!(output.contains("\x1b[32m1/1\x1b[0m"));
}
