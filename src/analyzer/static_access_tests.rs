use super::*;
use crate::analyzer::test_support::{found, run_check};
use crate::syntax::{Resolution, Span, Unresolved};

fn site(target: Resolution, scope: Option<Resolution>) -> AccessSite {
    AccessSite {
        kind: AccessKind::FieldAccess,
        span: Span::default(),
        target,
        scope,
    }
}

const STATIC_FIELD: Declaration = Declaration::new(DeclKind::Field, true);

#[test]
fn bare_static_field_is_never_flagged() {
    assert_eq!(violation_for(&site(Ok(STATIC_FIELD), None)), None);
}

#[test]
fn static_field_through_instance_is_flagged() {
    let scope = Declaration::new(DeclKind::Local, false);
    assert_eq!(
        violation_for(&site(Ok(STATIC_FIELD), Some(Ok(scope)))),
        Some(ViolationType::StaticFieldViaInstance)
    );
}

#[test]
fn unresolved_scope_is_skipped() {
    let scope = Err(Unresolved::new("lib.Thing"));
    assert_eq!(violation_for(&site(Ok(STATIC_FIELD), Some(scope))), None);
}

#[test]
fn enum_constant_scope_is_flagged_even_though_static() {
    let scope = Declaration::new(DeclKind::EnumConstant, true);
    assert_eq!(
        violation_for(&site(Ok(STATIC_FIELD), Some(Ok(scope)))),
        Some(ViolationType::StaticFieldViaInstance)
    );
}

#[test]
fn flags_instance_qualified_access_in_source() {
    let violations = run_check(
        &StaticAccessCheck,
        r"class Counter {
    static int total;
    static int next() { return total + 1; }
    int own;

    void run(Counter other) {
        total = 1;
        int a = other.total;
        int b = Counter.total;
        int c = this.next();
        int d = next();
        int e = other.own;
        System.out.println(a + b + c + d + e);
    }
}
",
    );

    assert_eq!(
        found(&violations),
        vec![
            (ViolationType::StaticFieldViaInstance, 8),
            (ViolationType::StaticMethodViaInstance, 10),
        ]
    );
}

#[test]
fn enum_constant_used_as_scope_is_flagged() {
    let violations = run_check(
        &StaticAccessCheck,
        r"enum Level {
    LOW, HIGH;
    static Level fallback() { return LOW; }
    Level pick() {
        return HIGH.fallback();
    }
}
",
    );

    assert_eq!(
        found(&violations),
        vec![(ViolationType::StaticMethodViaInstance, 5)]
    );
}

#[test]
fn same_named_nested_types_are_not_confused() {
    let violations = run_check(
        &StaticAccessCheck,
        r"class Tree {
    static class Node {
        static int count;
    }
}

class Chain {
    static class Node {
        int count;
    }

    int size(Node head) {
        return head.count;
    }
}
",
    );

    assert!(found(&violations).is_empty());
}
