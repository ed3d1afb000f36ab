use std::path::Path;

use super::*;
use crate::syntax::MemberKind;

#[test]
fn every_type_belongs_to_exactly_one_category() {
    for ty in ViolationType::ALL {
        let owners: Vec<_> = Category::ALL
            .iter()
            .filter(|c| c.types().contains(&ty))
            .collect();
        assert_eq!(owners.len(), 1, "{ty} has {} owning categories", owners.len());
    }
}

#[test]
fn every_category_has_types() {
    for category in Category::ALL {
        assert!(!category.types().is_empty(), "{category} has no types");
    }
}

#[test]
fn ordering_category_groups_six_types() {
    assert_eq!(Category::Ordering.types().len(), 6);
    assert_eq!(
        ViolationType::ordering(MemberKind::Constructors),
        ViolationType::OrderingConstructors
    );
}

#[test]
fn documentation_types_resolve_per_category() {
    assert_eq!(
        ViolationType::documentation(Category::DocMethod, DocDefect::SummaryTooShort),
        Some(ViolationType::DocMethodSummaryTooShort)
    );
    assert_eq!(
        ViolationType::documentation(Category::DocField, DocDefect::Missing),
        Some(ViolationType::DocFieldMissing)
    );
    assert_eq!(
        ViolationType::documentation(Category::Ordering, DocDefect::Missing),
        None
    );
}

#[test]
fn rule_ids_round_trip_through_catalog() {
    assert_eq!(
        ViolationType::from_rule_id("UnusedPrivateField"),
        Some(ViolationType::UnusedField)
    );
    assert_eq!(ViolationType::from_rule_id("CPD"), Some(ViolationType::DuplicateCode));
    assert_eq!(ViolationType::from_rule_id("NoSuchRule"), None);
    assert_eq!(ViolationType::EmptyCatchBlock.rule_ids(), vec!["EmptyCatchBlock"]);
}

#[test]
fn render_fills_positional_placeholders() {
    let message = ViolationType::OrderingStaticFields.render(&["COUNT", "Main"]);
    assert_eq!(message, "Static field 'COUNT' should be declared after 'Main'");
}

#[test]
fn equality_ignores_message_and_end_line() {
    let a = Violation::new(ViolationType::FinalizeOverride, "A.java", 3).with_message("first");
    let b = Violation::new(ViolationType::FinalizeOverride, "A.java", 3)
        .with_end_line(9)
        .with_message("second");
    assert_eq!(a, b);

    let c = Violation::new(ViolationType::FinalizeOverride, "A.java", 4);
    assert_ne!(a, c);
}

#[test]
fn set_deduplicates_and_keeps_first_message() {
    let mut violations = Violations::new();
    assert!(violations.insert(
        Violation::new(ViolationType::OrderingConstructors, "A.java", 5).with_message("first")
    ));
    assert!(!violations.insert(
        Violation::new(ViolationType::OrderingConstructors, "A.java", 5).with_message("second")
    ));

    assert_eq!(violations.len(), 1);
    let kept = violations.iter().next().unwrap();
    assert_eq!(kept.describe(), "first");
}

#[test]
fn category_queries_count_types_and_files() {
    let mut violations = Violations::new();
    violations.add(ViolationType::DocMethodMissing, Path::new("A.java"), 1);
    violations.add(ViolationType::DocMethodMissing, Path::new("A.java"), 8);
    violations.add(ViolationType::DocMethodInvalid, Path::new("B.java"), 2);
    violations.add(ViolationType::FinalizeOverride, Path::new("B.java"), 2);

    assert_eq!(violations.count_type(ViolationType::DocMethodMissing), 2);
    assert_eq!(violations.in_category(Category::DocMethod).count(), 3);
    assert_eq!(violations.files_in_category(Category::DocMethod), 2);
    assert_eq!(violations.files_in_category(Category::Clones), 0);
}

#[test]
fn describe_falls_back_to_template() {
    let violation = Violation::new(ViolationType::EmptyCatchBlock, "A.java", 1);
    assert_eq!(violation.describe(), "Catch block is empty");
}
