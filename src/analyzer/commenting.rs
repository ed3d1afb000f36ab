use super::{Check, CheckContext};
use crate::config::CommentingParams;
use crate::syntax::{Member, MethodDecl, SourceFile};
use crate::violation::{Violation, ViolationType, Violations};

/// Flags methods whose share of comment lines is outside the configured bounds.
pub struct CommentDensityCheck {
    params: CommentingParams,
}

impl CommentDensityCheck {
    #[must_use]
    pub const fn new(params: CommentingParams) -> Self {
        Self { params }
    }

    fn frequency(file: &SourceFile, method: &MethodDecl) -> Option<(usize, u32)> {
        let code_lines = file
            .lines_in(method.span.start_line(), method.span.end_line())
            .filter(|line| !is_blank_or_brace(line))
            .count()
            .checked_sub(1)?;
        if code_lines == 0 {
            return None;
        }

        let comment_lines: usize = file
            .comments
            .iter()
            .filter(|c| method.span.contains(&c.span))
            .map(|c| {
                file.lines_in(c.span.start_line(), c.span.end_line())
                    .filter(|line| !line.trim().is_empty())
                    .count()
            })
            .sum();

        let percent = comment_lines * 100 / code_lines;
        Some((code_lines, u32::try_from(percent).unwrap_or(u32::MAX)))
    }
}

fn is_blank_or_brace(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.chars().all(|c| matches!(c, '{' | '}'))
}

impl Check for CommentDensityCheck {
    fn check(&self, ctx: &CheckContext<'_>, violations: &mut Violations) {
        for decl in ctx.file.all_types() {
            for member in &decl.members {
                let Member::Method(method) = member else { continue };
                let Some((code_lines, percent)) = Self::frequency(ctx.file, method) else {
                    continue;
                };
                if code_lines <= self.params.min_lines {
                    continue;
                }

                let ty = if percent < self.params.min_frequency {
                    ViolationType::CommentFrequencyLow
                } else if percent > self.params.max_frequency {
                    ViolationType::CommentFrequencyHigh
                } else {
                    continue;
                };
                let message = format!("{} ({percent}% in '{}')", ty.message(), method.name);
                violations.insert(
                    Violation::new(ty, &ctx.file.path, method.name_span.start_line())
                        .with_message(message),
                );
            }
        }
    }
}

/// Flags comments that merely restate the code they are attached to.
pub struct CommentMeaningCheck {
    max_distance: usize,
}

impl CommentMeaningCheck {
    #[must_use]
    pub const fn new(max_distance: usize) -> Self {
        Self { max_distance }
    }
}

impl Check for CommentMeaningCheck {
    fn check(&self, ctx: &CheckContext<'_>, violations: &mut Violations) {
        for comment in &ctx.file.comments {
            if comment.is_doc() || comment.is_blank() {
                continue;
            }
            let Some(code) = comment.attached.as_deref() else { continue };

            if levenshtein(comment.content.trim(), code.trim()) < self.max_distance {
                violations.insert(
                    Violation::new(
                        ViolationType::CommentNotMeaningful,
                        &ctx.file.path,
                        comment.span.start_line(),
                    )
                    .with_end_line(comment.span.end_line()),
                );
            }
        }
    }
}

/// Character edit distance between two strings.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

#[cfg(test)]
#[path = "commenting_tests.rs"]
mod tests;
