use super::{Check, CheckContext};
use crate::syntax::{AccessKind, AccessSite, DeclKind, Declaration};
use crate::violation::{ViolationType, Violations};

/// Flags static members reached through an instance or an enum constant.
///
/// Bare names are exempt. Sites whose target or scope could not be resolved are
/// skipped: missing type information must never produce a violation.
pub struct StaticAccessCheck;

const fn target_kind(kind: AccessKind) -> (DeclKind, ViolationType) {
    match kind {
        AccessKind::MethodCall => (DeclKind::Method, ViolationType::StaticMethodViaInstance),
        AccessKind::FieldAccess => (DeclKind::Field, ViolationType::StaticFieldViaInstance),
    }
}

/// Whether a scope expression is an acceptable qualifier for a static member.
const fn is_static_qualifier(scope: Declaration) -> bool {
    match scope.kind {
        DeclKind::Type => true,
        DeclKind::Field => scope.is_static,
        DeclKind::EnumConstant
        | DeclKind::Method
        | DeclKind::Local
        | DeclKind::Instance => false,
    }
}

fn violation_for(site: &AccessSite) -> Option<ViolationType> {
    let (expected, ty) = target_kind(site.kind);
    let target = match &site.target {
        Ok(target) => *target,
        Err(unresolved) => {
            tracing::trace!(name = %unresolved.name, "skipping unresolved access target");
            return None;
        }
    };
    if target.kind != expected || !target.is_static {
        return None;
    }

    match site.scope.as_ref()? {
        Ok(scope) => (!is_static_qualifier(*scope)).then_some(ty),
        Err(unresolved) => {
            tracing::trace!(name = %unresolved.name, "skipping unresolved access scope");
            None
        }
    }
}

impl Check for StaticAccessCheck {
    fn check(&self, ctx: &CheckContext<'_>, violations: &mut Violations) {
        for site in &ctx.file.accesses {
            if let Some(ty) = violation_for(site) {
                violations.add(ty, &ctx.file.path, site.span.start_line());
            }
        }
    }
}

#[cfg(test)]
#[path = "static_access_tests.rs"]
mod tests;
