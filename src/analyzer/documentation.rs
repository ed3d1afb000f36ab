use regex::Regex;

use super::{Check, CheckContext};
use crate::syntax::{Comment, CommentId, Member, Modifiers, Span, TypeDecl};
use crate::violation::{Category, DocDefect, ViolationType, Violations};

/// Validates documentation comments on one kind of declaration.
///
/// The category selects the declarations: `DocType` checks every type declaration,
/// `DocField`, `DocMethod` and `DocConstructor` check the matching members.
/// Methods annotated `@Override` inherit their documentation and are exempt.
pub struct DocumentationCheck {
    category: Category,
    min_words: usize,
    inline_tag: Regex,
    html_tag: Regex,
    word: Regex,
}

struct Documented<'a> {
    span: &'a Span,
    comment: Option<CommentId>,
}

impl DocumentationCheck {
    #[must_use]
    pub fn new(category: Category, min_words: usize) -> Self {
        Self {
            category,
            min_words,
            inline_tag: Regex::new(r"\{@\w+\s*([^}]*)\}").expect("Invalid regex"),
            html_tag: Regex::new(r"</?[a-zA-Z][^>]*>").expect("Invalid regex"),
            word: Regex::new(r"[\p{L}\p{N}-]+").expect("Invalid regex"),
        }
    }

    fn declarations<'a>(&self, decl: &'a TypeDecl) -> Vec<Documented<'a>> {
        if self.category == Category::DocType {
            if decl.anonymous {
                return Vec::new();
            }
            return vec![Documented {
                span: &decl.span,
                comment: decl.comment,
            }];
        }
        decl.members
            .iter()
            .filter_map(|member| match (self.category, member) {
                (Category::DocField, Member::Field(f)) => Some(documented(&f.span, f.comment)),
                (Category::DocMethod, Member::Method(m)) if !is_override(&m.modifiers) => {
                    Some(documented(&m.span, m.comment))
                }
                (Category::DocConstructor, Member::Constructor(c)) => {
                    Some(documented(&c.span, c.comment))
                }
                _ => None,
            })
            .collect()
    }

    /// The defect of a declaration's comment and the line it is reported at.
    fn inspect(&self, span: &Span, comment: Option<&Comment>) -> Option<(DocDefect, usize)> {
        let Some(comment) = comment else {
            return Some((DocDefect::Missing, span.start_line()));
        };
        if !comment.is_doc() {
            return Some((DocDefect::InvalidForm, span.start_line()));
        }

        let line = comment.span.start_line();
        let description = description(&comment.content);
        if description.is_empty() || description.starts_with("{@") {
            return Some((DocDefect::MissingSummary, line));
        }

        let rendered = self.render(&description);
        (self.word.find_iter(&rendered).count() < self.min_words)
            .then_some((DocDefect::SummaryTooShort, line))
    }

    /// Replace inline tags with their text and drop HTML markup.
    fn render(&self, description: &str) -> String {
        let expanded = self.inline_tag.replace_all(description, "$1");
        self.html_tag.replace_all(&expanded, " ").into_owned()
    }
}

const fn documented(span: &Span, comment: Option<CommentId>) -> Documented<'_> {
    Documented { span, comment }
}

fn is_override(modifiers: &Modifiers) -> bool {
    modifiers.has_annotation("Override")
}

/// Text of a documentation comment before its first block tag, one line per line.
fn description(content: &str) -> String {
    content
        .lines()
        .map(|line| line.trim_start().trim_start_matches('*').trim())
        .take_while(|line| !line.starts_with('@'))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Check for DocumentationCheck {
    fn check(&self, ctx: &CheckContext<'_>, violations: &mut Violations) {
        for decl in ctx.file.all_types() {
            for item in self.declarations(decl) {
                let comment = ctx.file.comment(item.comment);
                let Some((defect, line)) = self.inspect(item.span, comment) else {
                    continue;
                };
                if let Some(ty) = ViolationType::documentation(self.category, defect) {
                    violations.add(ty, &ctx.file.path, line);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "documentation_tests.rs"]
mod tests;
