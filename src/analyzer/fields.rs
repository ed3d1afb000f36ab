use super::{Check, CheckContext};
use crate::syntax::{Member, TypeKind, Visibility};
use crate::violation::{ViolationType, Violations};

/// Flags mutable instance fields visible outside their type.
pub struct PublicFieldCheck;

impl Check for PublicFieldCheck {
    fn check(&self, ctx: &CheckContext<'_>, violations: &mut Violations) {
        for decl in ctx.file.all_types() {
            if !matches!(decl.kind, TypeKind::Class | TypeKind::Enum | TypeKind::Record) {
                continue;
            }
            for member in &decl.members {
                let Member::Field(field) = member else { continue };
                let modifiers = &field.modifiers;
                if matches!(modifiers.visibility, Visibility::Private | Visibility::Protected)
                    || modifiers.is_static
                    || modifiers.is_final
                {
                    continue;
                }
                violations.add(
                    ViolationType::PublicInstanceField,
                    &ctx.file.path,
                    field.name_line,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::test_support::{found, run_check};

    #[test]
    fn flags_public_and_package_instance_fields() {
        let violations = run_check(
            &PublicFieldCheck,
            r"class Point {
    public int x;
    int y;
    private int z;
    protected int w;
    static int count;
    final int id = 1;
    @Deprecated
    public String
        label;
}
",
        );

        assert_eq!(
            found(&violations),
            vec![
                (ViolationType::PublicInstanceField, 2),
                (ViolationType::PublicInstanceField, 3),
                (ViolationType::PublicInstanceField, 10),
            ]
        );
    }

    #[test]
    fn interface_constants_are_not_instance_fields() {
        let violations = run_check(&PublicFieldCheck, "interface Limits {\n    int MAX = 3;\n}\n");

        assert!(violations.is_empty());
    }
}
