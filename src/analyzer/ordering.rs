use super::{Check, CheckContext};
use crate::syntax::{Member, MemberKind, TypeKind};
use crate::violation::{Violation, ViolationType, Violations};

/// Flags members declared before a member of a bucket that must come first.
pub struct OrderingCheck {
    order: Vec<MemberKind>,
}

impl OrderingCheck {
    #[must_use]
    pub const fn new(order: Vec<MemberKind>) -> Self {
        Self { order }
    }

    fn rank(&self, kind: MemberKind) -> Option<usize> {
        self.order.iter().position(|k| *k == kind)
    }
}

impl Check for OrderingCheck {
    fn check(&self, ctx: &CheckContext<'_>, violations: &mut Violations) {
        for decl in ctx.file.all_types() {
            if decl.anonymous
                || !matches!(decl.kind, TypeKind::Class | TypeKind::Enum | TypeKind::Record)
            {
                continue;
            }

            let ranked: Vec<(usize, &Member)> = decl
                .members
                .iter()
                .filter_map(|m| m.kind().and_then(|k| self.rank(k)).map(|r| (r, m)))
                .collect();

            for &(rank, member) in &ranked {
                let Some(kind) = member.kind() else { continue };
                for earlier in 0..rank {
                    // The first member of the earlier bucket declared after this one.
                    let reference = ranked.iter().find(|(r, other)| {
                        *r == earlier && member.span().start < other.span().start
                    });
                    if let Some((_, reference)) = reference {
                        let ty = ViolationType::ordering(kind);
                        violations.insert(
                            Violation::new(ty, &ctx.file.path, member.span().start_line())
                                .with_message(ty.render(&[member.name(), reference.name()])),
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod tests;
