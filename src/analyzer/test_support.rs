use crate::syntax::{JavaSyntax, SourceFile, SourceText, SyntaxProvider};
use crate::violation::{Violation, ViolationType, Violations};

use super::{Check, CheckContext};

pub fn parse_java(text: &str) -> SourceFile {
    JavaSyntax::new()
        .unwrap()
        .parse(&[SourceText::new("Main.java", text)])
        .unwrap()
        .remove(0)
}

pub fn run_check(check: &dyn Check, text: &str) -> Violations {
    let file = parse_java(text);
    let syntax = JavaSyntax::new().unwrap();
    let mut violations = Violations::new();
    check.check(
        &CheckContext {
            file: &file,
            syntax: &syntax,
        },
        &mut violations,
    );
    violations
}

/// `(type, line)` pairs in report order.
pub fn found(violations: &Violations) -> Vec<(ViolationType, usize)> {
    violations
        .iter()
        .map(|v: &Violation| (v.violation_type, v.start_line))
        .collect()
}
