use super::{Check, CheckContext};
use crate::syntax::{Member, MethodDecl, Visibility};
use crate::violation::{ViolationType, Violations};

/// Flags overrides of the object finalization hook.
pub struct FinalizeCheck;

fn is_finalizer(method: &MethodDecl) -> bool {
    method.name == "finalize"
        && method.parameters == 0
        && method.return_type == "void"
        && matches!(
            method.modifiers.visibility,
            Visibility::Public | Visibility::Protected
        )
        && method.throws.is_empty()
}

impl Check for FinalizeCheck {
    fn check(&self, ctx: &CheckContext<'_>, violations: &mut Violations) {
        for decl in ctx.file.all_types() {
            for member in &decl.members {
                if let Member::Method(method) = member
                    && is_finalizer(method)
                {
                    violations.add(
                        ViolationType::FinalizeOverride,
                        &ctx.file.path,
                        method.name_span.start_line(),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::test_support::{found, run_check};

    #[test]
    fn flags_public_and_protected_finalizers() {
        let violations = run_check(
            &FinalizeCheck,
            r"class Handle {
    protected void finalize() {
        release();
    }
    void release() {}
}
class Other {
    public void finalize() {}
}
",
        );

        assert_eq!(
            found(&violations),
            vec![
                (ViolationType::FinalizeOverride, 2),
                (ViolationType::FinalizeOverride, 8),
            ]
        );
    }

    #[test]
    fn ignores_lookalikes() {
        let violations = run_check(
            &FinalizeCheck,
            r"class Handle {
    private void finalize() {}
    void finalize(int code) {}
    protected void finalize() throws Throwable {}
    protected int finalize() { return 0; }
}
",
        );

        assert!(violations.is_empty());
    }

    #[test]
    fn finalizers_in_local_and_anonymous_classes_are_flagged() {
        let violations = run_check(
            &FinalizeCheck,
            r"class Pool {
    Runnable task() {
        class Lease {
            protected void finalize() {}
        }
        return new Runnable() {
            public void run() {}
            protected void finalize() {}
        };
    }
}
",
        );

        assert_eq!(
            found(&violations),
            vec![
                (ViolationType::FinalizeOverride, 4),
                (ViolationType::FinalizeOverride, 8),
            ]
        );
    }
}
