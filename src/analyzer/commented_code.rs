use super::{Check, CheckContext};
use crate::syntax::{Comment, CommentContext, CommentKind, FragmentContext, Span};
use crate::violation::{Violation, ViolationType, Violations};

/// Flags comments whose text parses as code in the place they sit.
pub struct CommentedCodeCheck;

/// Merge runs of line comments on consecutive lines starting in the same column.
///
/// The merged comment keeps the context and attachment of the first comment of the
/// run. Merging an already merged list changes nothing.
#[must_use]
pub fn merge_line_comments(comments: &[Comment]) -> Vec<Comment> {
    let mut merged: Vec<Comment> = Vec::with_capacity(comments.len());
    for comment in comments {
        if let Some(last) = merged.last_mut()
            && continues(last, comment)
        {
            last.content.push('\n');
            last.content.push_str(&comment.content);
            last.span = Span::new(last.span.start, comment.span.end);
            continue;
        }
        merged.push(comment.clone());
    }
    merged
}

fn continues(run: &Comment, next: &Comment) -> bool {
    run.kind == CommentKind::Line
        && next.kind == CommentKind::Line
        && next.span.start_line() == run.span.end_line() + 1
        && next.span.start.column == run.span.start.column
}

const fn fragment_context(context: CommentContext) -> Option<FragmentContext> {
    match context {
        CommentContext::Block => Some(FragmentContext::Statements),
        CommentContext::TypeBody => Some(FragmentContext::TypeBody),
        CommentContext::Other => None,
    }
}

impl Check for CommentedCodeCheck {
    fn check(&self, ctx: &CheckContext<'_>, violations: &mut Violations) {
        for comment in merge_line_comments(&ctx.file.comments) {
            if comment.is_doc() || comment.is_blank() {
                continue;
            }
            let Some(context) = fragment_context(comment.context) else {
                continue;
            };
            if ctx.syntax.parses_as(&comment.content, context) {
                violations.insert(
                    Violation::new(
                        ViolationType::CommentedOutCode,
                        &ctx.file.path,
                        comment.span.start_line(),
                    )
                    .with_end_line(comment.span.end_line()),
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "commented_code_tests.rs"]
mod tests;
