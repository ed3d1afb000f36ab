//! Abstract syntax model consumed by the structural checks.
//!
//! A [`SyntaxProvider`] turns the source files of one codebase into [`SourceFile`]s:
//! type declarations with their members, every comment with its attachment, and the
//! method-call / field-access sites found in expressions together with what their
//! target and scope resolve to.

mod java;
mod symbols;

pub use java::JavaSyntax;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ValidatorError;

/// 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn start_line(&self) -> usize {
        self.start.line
    }

    #[must_use]
    pub const fn end_line(&self) -> usize {
        self.end.line
    }

    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// The six member buckets used by the ordering check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    NestedTypes,
    StaticFields,
    StaticMethods,
    InstanceFields,
    Constructors,
    InstanceMethods,
}

impl MemberKind {
    pub const ALL: [Self; 6] = [
        Self::NestedTypes,
        Self::StaticFields,
        Self::StaticMethods,
        Self::InstanceFields,
        Self::Constructors,
        Self::InstanceMethods,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Public,
    Protected,
    #[default]
    Package,
    Private,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    pub annotations: Vec<String>,
}

impl Modifiers {
    /// Whether an annotation with this simple name is present, qualified or not.
    #[must_use]
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations
            .iter()
            .any(|a| a.rsplit('.').next() == Some(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
    Doc,
}

/// Syntactic surroundings of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentContext {
    /// Inside a statement block.
    Block,
    /// Directly inside a type body, between members.
    TypeBody,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    pub span: Span,
    /// Text without the comment delimiters.
    pub content: String,
    pub context: CommentContext,
    /// Source text of the node this comment is attached to, if any.
    pub attached: Option<String>,
}

impl Comment {
    #[must_use]
    pub fn is_doc(&self) -> bool {
        self.kind == CommentKind::Doc
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Index into [`SourceFile::comments`].
pub type CommentId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeKind,
    pub span: Span,
    pub modifiers: Modifiers,
    pub comment: Option<CommentId>,
    pub members: Vec<Member>,
    /// Class body of a `new` expression or enum constant, named after its supertype.
    pub anonymous: bool,
    /// Local and anonymous classes declared in this type's code.
    pub locals: Vec<TypeDecl>,
}

#[derive(Debug, Clone)]
pub struct FieldDecl {
    /// Declared variable names, in declaration order.
    pub names: Vec<String>,
    /// Line of the first declared variable.
    pub name_line: usize,
    pub modifiers: Modifiers,
    pub span: Span,
    pub comment: Option<CommentId>,
}

#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: String,
    pub name_span: Span,
    pub modifiers: Modifiers,
    pub parameters: usize,
    pub return_type: String,
    pub throws: Vec<String>,
    pub span: Span,
    pub comment: Option<CommentId>,
}

#[derive(Debug, Clone)]
pub struct ConstructorDecl {
    pub name: String,
    pub modifiers: Modifiers,
    pub span: Span,
    pub comment: Option<CommentId>,
}

#[derive(Debug, Clone)]
pub enum Member {
    Type(TypeDecl),
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    Initializer(Span),
}

impl Member {
    /// Ordering bucket of this member; initializers have none.
    #[must_use]
    pub const fn kind(&self) -> Option<MemberKind> {
        match self {
            Self::Type(_) => Some(MemberKind::NestedTypes),
            Self::Field(f) if f.modifiers.is_static => Some(MemberKind::StaticFields),
            Self::Field(_) => Some(MemberKind::InstanceFields),
            Self::Method(m) if m.modifiers.is_static => Some(MemberKind::StaticMethods),
            Self::Method(_) => Some(MemberKind::InstanceMethods),
            Self::Constructor(_) => Some(MemberKind::Constructors),
            Self::Initializer(_) => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Type(t) => &t.name,
            Self::Field(f) => f.names.first().map_or("", String::as_str),
            Self::Method(m) => &m.name,
            Self::Constructor(c) => &c.name,
            Self::Initializer(_) => "initializer",
        }
    }

    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::Type(t) => &t.span,
            Self::Field(f) => &f.span,
            Self::Method(m) => &m.span,
            Self::Constructor(c) => &c.span,
            Self::Initializer(span) => span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Type,
    Field,
    Method,
    EnumConstant,
    Local,
    /// A value produced by an expression (`this`, `new T()`, a call result, ...).
    Instance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub is_static: bool,
}

impl Declaration {
    #[must_use]
    pub const fn new(kind: DeclKind, is_static: bool) -> Self {
        Self { kind, is_static }
    }
}

/// Symbol resolution could not determine a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub name: String,
}

impl Unresolved {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

pub type Resolution = Result<Declaration, Unresolved>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    MethodCall,
    FieldAccess,
}

/// A method call or field access expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessSite {
    pub kind: AccessKind,
    pub span: Span,
    pub target: Resolution,
    /// Resolution of the qualifying expression; `None` for bare names.
    pub scope: Option<Resolution>,
}

/// One parsed and resolved source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub lines: Vec<String>,
    pub types: Vec<TypeDecl>,
    /// Every comment, in source order.
    pub comments: Vec<Comment>,
    pub accesses: Vec<AccessSite>,
}

impl SourceFile {
    #[must_use]
    pub fn comment(&self, id: Option<CommentId>) -> Option<&Comment> {
        id.and_then(|id| self.comments.get(id))
    }

    /// Lines `start..=end` (1-based), clamped to the file.
    pub fn lines_in(&self, start: usize, end: usize) -> impl Iterator<Item = &str> {
        let from = start.saturating_sub(1).min(self.lines.len());
        let to = end.min(self.lines.len()).max(from);
        self.lines[from..to].iter().map(String::as_str)
    }

    /// All type declarations, outermost first. Nested member types come before
    /// the local and anonymous classes of their enclosing type.
    #[must_use]
    pub fn all_types(&self) -> Vec<&TypeDecl> {
        let mut out = Vec::new();
        let mut stack: Vec<&TypeDecl> = self.types.iter().rev().collect();
        while let Some(decl) = stack.pop() {
            out.push(decl);
            stack.extend(decl.locals.iter().rev());
            for member in decl.members.iter().rev() {
                if let Member::Type(nested) = member {
                    stack.push(nested);
                }
            }
        }
        out
    }
}

/// Raw source handed to a provider.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub path: PathBuf,
    pub text: String,
}

impl SourceText {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Where a code fragment would have to sit to be re-parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentContext {
    Statements,
    TypeBody,
}

pub trait SyntaxProvider {
    /// Parse and resolve all files of one codebase.
    ///
    /// # Errors
    /// Returns a localized error naming the first file that fails to parse.
    fn parse(&self, sources: &[SourceText]) -> std::result::Result<Vec<SourceFile>, ValidatorError>;

    /// Whether `fragment` parses cleanly when placed in `context`.
    fn parses_as(&self, fragment: &str, context: FragmentContext) -> bool;
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
