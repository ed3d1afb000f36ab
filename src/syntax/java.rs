use std::collections::HashMap;

use tree_sitter::{Language, Node, Parser, Tree};

use super::symbols::{
    MemberLookup, MethodInfo, SymbolIndex, field_text, simple_type_name, type_kind,
};
use super::{
    AccessKind, AccessSite, Comment, CommentContext, CommentId, CommentKind, ConstructorDecl,
    DeclKind, Declaration, FieldDecl, FragmentContext, Member, MethodDecl, Modifiers, Position,
    Resolution, SourceFile, SourceText, Span, SyntaxProvider, TypeDecl, TypeKind, Unresolved,
    Visibility,
};
use crate::error::{Result, StyleGradeError, ValidatorError};

/// Problem positions listed in a parse failure message.
const MAX_REPORTED_PROBLEMS: usize = 5;

/// Java provider backed by the tree-sitter grammar.
pub struct JavaSyntax {
    language: Language,
}

impl JavaSyntax {
    /// Load the grammar.
    ///
    /// # Errors
    /// Returns an error if the grammar is incompatible with the linked tree-sitter runtime.
    pub fn new() -> Result<Self> {
        let language: Language = tree_sitter_java::LANGUAGE.into();
        Parser::new()
            .set_language(&language)
            .map_err(|e| StyleGradeError::Grammar(e.to_string()))?;
        Ok(Self { language })
    }

    fn parser(&self) -> Option<Parser> {
        let mut parser = Parser::new();
        parser.set_language(&self.language).ok()?;
        Some(parser)
    }

    fn parse_tree(&self, source: &SourceText) -> std::result::Result<Tree, ValidatorError> {
        let mut parser = self
            .parser()
            .ok_or_else(|| ValidatorError::systemic("Java grammar is unavailable"))?;
        let tree = parser
            .parse(&source.text, None)
            .ok_or_else(|| ValidatorError::localized(source.path.clone(), "parser produced no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ValidatorError::localized(
                source.path.clone(),
                describe_problems(&problem_positions(root)),
            ));
        }
        Ok(tree)
    }
}

impl SyntaxProvider for JavaSyntax {
    fn parse(&self, sources: &[SourceText]) -> std::result::Result<Vec<SourceFile>, ValidatorError> {
        let trees = sources
            .iter()
            .map(|source| self.parse_tree(source))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let index = SymbolIndex::build(
            sources
                .iter()
                .zip(&trees)
                .map(|(source, tree)| (tree.root_node(), source.text.as_bytes())),
        );

        Ok(sources
            .iter()
            .zip(&trees)
            .map(|(source, tree)| lower(source, tree, &index))
            .collect())
    }

    fn parses_as(&self, fragment: &str, context: FragmentContext) -> bool {
        let wrapped = match context {
            FragmentContext::Statements => format!("class X {{ void x() {{{fragment} }} }}"),
            FragmentContext::TypeBody => format!("class X {{{fragment} }}"),
        };
        let Some(mut parser) = self.parser() else {
            return false;
        };
        parser
            .parse(&wrapped, None)
            .is_some_and(|tree| !tree.root_node().has_error())
    }
}

fn problem_positions(root: Node<'_>) -> Vec<Position> {
    let mut problems = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            problems.push(span_of(node).start);
            continue;
        }
        if node.has_error() {
            let mut cursor = node.walk();
            stack.extend(node.children(&mut cursor));
        }
    }
    problems.sort_unstable();
    if problems.is_empty() {
        problems.push(span_of(root).start);
    }
    problems
}

fn describe_problems(problems: &[Position]) -> String {
    let listed = problems
        .iter()
        .take(MAX_REPORTED_PROBLEMS)
        .map(|p| format!("{}:{}", p.line, p.column))
        .collect::<Vec<_>>()
        .join(", ");
    let hidden = problems.len().saturating_sub(MAX_REPORTED_PROBLEMS);
    if hidden > 0 {
        format!("syntax errors at {listed} and {hidden} more")
    } else {
        format!("syntax error at {listed}")
    }
}

fn span_of(node: Node<'_>) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(
        Position::new(start.row + 1, start.column + 1),
        Position::new(end.row + 1, end.column + 1),
    )
}

fn has_child(node: Node<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| c.kind() == kind);
    found
}

fn is_comment(node: Node<'_>) -> bool {
    matches!(node.kind(), "line_comment" | "block_comment")
}

/// A comment belongs to the next sibling, except a line comment trailing the
/// previous sibling on the same line.
fn attachment_target(comment: Node<'_>) -> Option<Node<'_>> {
    if comment.kind() == "line_comment"
        && let Some(prev) = comment.prev_named_sibling()
        && !is_comment(prev)
        && prev.end_position().row == comment.start_position().row
    {
        return Some(prev);
    }
    comment.next_named_sibling().filter(|next| !is_comment(*next))
}

fn comment_context(parent: &str) -> CommentContext {
    match parent {
        "block" | "constructor_body" | "switch_block_statement_group" => CommentContext::Block,
        "class_body" | "interface_body" | "enum_body_declarations" => CommentContext::TypeBody,
        _ => CommentContext::Other,
    }
}

fn split_comment<'t>(node_kind: &str, text: &'t str) -> (CommentKind, &'t str) {
    if node_kind == "line_comment" {
        return (CommentKind::Line, text.strip_prefix("//").unwrap_or(text));
    }
    let body = text.strip_suffix("*/").unwrap_or(text);
    match body.strip_prefix("/**") {
        Some(doc) if text.len() > "/**/".len() => (CommentKind::Doc, doc),
        _ => (CommentKind::Block, body.strip_prefix("/*").unwrap_or(body)),
    }
}

#[derive(Debug, Clone)]
struct Value {
    decl: Declaration,
    type_name: Option<String>,
}

impl Value {
    const fn new(kind: DeclKind, is_static: bool, type_name: Option<String>) -> Self {
        Self {
            decl: Declaration::new(kind, is_static),
            type_name,
        }
    }

    const fn instance(type_name: Option<String>) -> Self {
        Self::new(DeclKind::Instance, false, type_name)
    }
}

fn lower(source: &SourceText, tree: &Tree, index: &SymbolIndex) -> SourceFile {
    let root = tree.root_node();
    let mut lowering = Lowering {
        src: source.text.as_bytes(),
        index,
        comments: Vec::new(),
        attached: HashMap::new(),
        accesses: Vec::new(),
        types: Vec::new(),
        frames: Vec::new(),
    };

    lowering.collect_comments(root);
    let mut cursor = root.walk();
    let types = root
        .named_children(&mut cursor)
        .filter_map(|node| type_kind(node.kind()).map(|kind| lowering.lower_type(node, kind)))
        .collect();
    lowering.visit(root);

    tracing::debug!(
        path = %source.path.display(),
        comments = lowering.comments.len(),
        accesses = lowering.accesses.len(),
        "lowered source file"
    );

    SourceFile {
        path: source.path.clone(),
        lines: source.text.lines().map(str::to_string).collect(),
        types,
        comments: lowering.comments,
        accesses: lowering.accesses,
    }
}

struct Lowering<'a> {
    src: &'a [u8],
    index: &'a SymbolIndex,
    comments: Vec<Comment>,
    /// Node id to the comment attached to it.
    attached: HashMap<usize, CommentId>,
    accesses: Vec<AccessSite>,
    /// Enclosing type names, innermost last.
    types: Vec<String>,
    /// Local variables and parameters in scope, with their declared types.
    frames: Vec<HashMap<String, Option<String>>>,
}

impl<'a> Lowering<'a> {
    fn text(&self, node: Node<'_>) -> &'a str {
        node.utf8_text(self.src).unwrap_or_default()
    }

    fn collect_comments(&mut self, node: Node<'_>) {
        if is_comment(node) {
            self.push_comment(node);
            return;
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.collect_comments(child);
        }
    }

    fn push_comment(&mut self, node: Node<'_>) {
        let (kind, content) = split_comment(node.kind(), self.text(node));
        let context = node
            .parent()
            .map_or(CommentContext::Other, |p| comment_context(p.kind()));
        let target = attachment_target(node);
        let attached = target.map(|t| self.text(t).to_string());

        let id = self.comments.len();
        if let Some(target) = target {
            self.attached.entry(target.id()).or_insert(id);
        }
        self.comments.push(Comment {
            kind,
            span: span_of(node),
            content: content.to_string(),
            context,
            attached,
        });
    }

    fn comment_for(&self, node: Node<'_>) -> Option<CommentId> {
        self.attached.get(&node.id()).copied()
    }

    fn modifiers(&self, node: Node<'_>) -> Modifiers {
        let mut modifiers = Modifiers::default();
        let mut cursor = node.walk();
        let Some(list) = node.children(&mut cursor).find(|c| c.kind() == "modifiers") else {
            return modifiers;
        };
        let mut inner = list.walk();
        for item in list.children(&mut inner) {
            match item.kind() {
                "public" => modifiers.visibility = Visibility::Public,
                "protected" => modifiers.visibility = Visibility::Protected,
                "private" => modifiers.visibility = Visibility::Private,
                "static" => modifiers.is_static = true,
                "final" => modifiers.is_final = true,
                "marker_annotation" | "annotation" => {
                    if let Some(name) = field_text(item, "name", self.src) {
                        modifiers.annotations.push(name.to_string());
                    }
                }
                _ => {}
            }
        }
        modifiers
    }

    fn lower_type(&self, node: Node<'_>, kind: TypeKind) -> TypeDecl {
        let is_interface = matches!(kind, TypeKind::Interface | TypeKind::Annotation);
        let mut members = Vec::new();
        let mut locals = Vec::new();
        if let Some(body) = node.child_by_field_name("body") {
            self.lower_members(body, is_interface, &mut members);
            self.lower_locals(body, &mut locals);
        }
        TypeDecl {
            name: field_text(node, "name", self.src)
                .unwrap_or_default()
                .to_string(),
            kind,
            span: span_of(node),
            modifiers: self.modifiers(node),
            comment: self.comment_for(node),
            members,
            anonymous: false,
            locals,
        }
    }

    /// `owner` is the `new` expression or enum constant carrying `body`.
    fn lower_anonymous(&self, owner: Node<'_>, body: Node<'_>) -> TypeDecl {
        let name = field_text(owner, "type", self.src)
            .and_then(simple_type_name)
            .or_else(|| field_text(owner, "name", self.src).map(str::to_string))
            .unwrap_or_default();
        let mut members = Vec::new();
        let mut locals = Vec::new();
        self.lower_members(body, false, &mut members);
        self.lower_locals(body, &mut locals);
        TypeDecl {
            name,
            kind: TypeKind::Class,
            span: span_of(body),
            modifiers: Modifiers::default(),
            comment: None,
            members,
            anonymous: true,
            locals,
        }
    }

    /// Classes declared inside the code of a type body. Member types lower
    /// their own.
    fn lower_locals(&self, body: Node<'_>, out: &mut Vec<TypeDecl>) {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            match member.kind() {
                "enum_body_declarations" => self.lower_locals(member, out),
                kind if type_kind(kind).is_some() => {}
                _ => self.find_locals(member, out),
            }
        }
    }

    fn find_locals(&self, node: Node<'_>, out: &mut Vec<TypeDecl>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if let Some(kind) = type_kind(child.kind()) {
                out.push(self.lower_type(child, kind));
            } else if child.kind() == "class_body" {
                out.push(self.lower_anonymous(node, child));
            } else {
                self.find_locals(child, out);
            }
        }
    }

    fn lower_members(&self, body: Node<'_>, is_interface: bool, out: &mut Vec<Member>) {
        let mut cursor = body.walk();
        for node in body.named_children(&mut cursor) {
            let member = match node.kind() {
                "field_declaration" | "constant_declaration" => {
                    Some(Member::Field(self.lower_field(node, is_interface)))
                }
                "method_declaration" => Some(Member::Method(self.lower_method(node, is_interface))),
                "constructor_declaration" | "compact_constructor_declaration" => {
                    Some(Member::Constructor(ConstructorDecl {
                        name: field_text(node, "name", self.src)
                            .unwrap_or_default()
                            .to_string(),
                        modifiers: self.modifiers(node),
                        span: span_of(node),
                        comment: self.comment_for(node),
                    }))
                }
                "static_initializer" | "block" => Some(Member::Initializer(span_of(node))),
                "enum_body_declarations" => {
                    self.lower_members(node, is_interface, out);
                    None
                }
                other => type_kind(other).map(|kind| Member::Type(self.lower_type(node, kind))),
            };
            out.extend(member);
        }
    }

    fn lower_field(&self, node: Node<'_>, is_interface: bool) -> FieldDecl {
        let mut modifiers = self.modifiers(node);
        if is_interface || node.kind() == "constant_declaration" {
            modifiers.is_static = true;
            modifiers.is_final = true;
            if modifiers.visibility == Visibility::Package {
                modifiers.visibility = Visibility::Public;
            }
        }

        let span = span_of(node);
        let mut names = Vec::new();
        let mut name_line = None;
        let mut cursor = node.walk();
        for declarator in node.children_by_field_name("declarator", &mut cursor) {
            if let Some(name) = declarator.child_by_field_name("name") {
                name_line.get_or_insert(span_of(name).start_line());
                names.push(self.text(name).to_string());
            }
        }

        FieldDecl {
            names,
            name_line: name_line.unwrap_or(span.start_line()),
            modifiers,
            span,
            comment: self.comment_for(node),
        }
    }

    fn lower_method(&self, node: Node<'_>, is_interface: bool) -> MethodDecl {
        let mut modifiers = self.modifiers(node);
        if is_interface && modifiers.visibility == Visibility::Package {
            modifiers.visibility = Visibility::Public;
        }
        let span = span_of(node);
        let name = node.child_by_field_name("name");

        let parameters = node.child_by_field_name("parameters").map_or(0, |params| {
            let mut cursor = params.walk();
            let count = params
                .named_children(&mut cursor)
                .filter(|p| matches!(p.kind(), "formal_parameter" | "spread_parameter"))
                .count();
            count
        });

        let mut cursor = node.walk();
        let throws = node
            .children(&mut cursor)
            .find(|c| c.kind() == "throws")
            .map(|clause| {
                let mut inner = clause.walk();
                let names = clause
                    .named_children(&mut inner)
                    .map(|t| self.text(t).to_string())
                    .collect();
                names
            })
            .unwrap_or_default();

        MethodDecl {
            name: name.map(|n| self.text(n).to_string()).unwrap_or_default(),
            name_span: name.map_or(span, span_of),
            modifiers,
            parameters,
            return_type: field_text(node, "type", self.src)
                .unwrap_or_default()
                .to_string(),
            throws,
            span,
            comment: self.comment_for(node),
        }
    }

    /// Walk every node, tracking scopes and recording access sites.
    fn visit(&mut self, node: Node<'_>) {
        let kind = node.kind();
        let type_name = if type_kind(kind).is_some() {
            field_text(node, "name", self.src).map(str::to_string)
        } else if kind == "object_creation_expression" && has_child(node, "class_body") {
            field_text(node, "type", self.src).and_then(simple_type_name)
        } else {
            None
        };
        let opens_type = type_name.is_some();
        if let Some(name) = type_name {
            self.types.push(name);
        }

        let opens_frame = matches!(
            kind,
            "method_declaration"
                | "constructor_declaration"
                | "compact_constructor_declaration"
                | "lambda_expression"
                | "static_initializer"
        ) || (kind == "block"
            && node
                .parent()
                .is_some_and(|p| matches!(p.kind(), "class_body" | "enum_body_declarations")));
        if opens_frame {
            self.frames.push(HashMap::new());
            self.declare_parameters(node);
        }

        self.declare_locals(node);
        match kind {
            "method_invocation" => self.record_call(node),
            "field_access" => self.record_field_access(node),
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child);
        }

        if opens_frame {
            self.frames.pop();
        }
        if opens_type {
            self.types.pop();
        }
    }

    fn declare(&mut self, name: Node<'_>, type_node: Option<Node<'_>>) {
        let name = self.text(name).to_string();
        let type_name = type_node.and_then(|t| simple_type_name(self.text(t)));
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name, type_name);
        }
    }

    fn declare_parameters(&mut self, node: Node<'_>) {
        let Some(params) = node.child_by_field_name("parameters") else {
            return;
        };
        if params.kind() == "identifier" {
            self.declare(params, None);
            return;
        }
        let mut cursor = params.walk();
        let params: Vec<Node<'_>> = params.named_children(&mut cursor).collect();
        for param in params {
            match param.kind() {
                "identifier" => self.declare(param, None),
                "formal_parameter" => {
                    if let Some(name) = param.child_by_field_name("name") {
                        self.declare(name, param.child_by_field_name("type"));
                    }
                }
                "spread_parameter" => {
                    let mut inner = param.walk();
                    let declarator = param
                        .named_children(&mut inner)
                        .find(|c| c.kind() == "variable_declarator");
                    if let Some(name) = declarator.and_then(|d| d.child_by_field_name("name")) {
                        self.declare(name, None);
                    }
                }
                _ => {}
            }
        }
    }

    fn declare_locals(&mut self, node: Node<'_>) {
        match node.kind() {
            "local_variable_declaration" => {
                let type_node = node.child_by_field_name("type");
                let mut cursor = node.walk();
                let names: Vec<Node<'_>> = node
                    .children_by_field_name("declarator", &mut cursor)
                    .filter_map(|d| d.child_by_field_name("name"))
                    .collect();
                for name in names {
                    self.declare(name, type_node);
                }
            }
            "enhanced_for_statement" | "resource" | "catch_formal_parameter" => {
                if let Some(name) = node.child_by_field_name("name") {
                    let type_node = node.child_by_field_name("type").or_else(|| {
                        let mut cursor = node.walk();
                        let catch_type = node
                            .named_children(&mut cursor)
                            .find(|c| c.kind() == "catch_type")
                            .and_then(|c| c.named_child(0));
                        catch_type
                    });
                    self.declare(name, type_node);
                }
            }
            "instanceof_expression" => {
                if let Some(name) = node.child_by_field_name("name") {
                    self.declare(name, node.child_by_field_name("right"));
                }
            }
            _ => {}
        }
    }

    fn record_call(&mut self, node: Node<'_>) {
        let Some(name) = field_text(node, "name", self.src) else {
            return;
        };
        let object = node.child_by_field_name("object");
        let target = self
            .method(object, name)
            .map(|m| Declaration::new(DeclKind::Method, m.is_static));
        let scope = object.map(|o| self.value(o).map(|v| v.decl));
        self.accesses.push(AccessSite {
            kind: AccessKind::MethodCall,
            span: span_of(node),
            target,
            scope,
        });
    }

    fn record_field_access(&mut self, node: Node<'_>) {
        let Some(object) = node.child_by_field_name("object") else {
            return;
        };
        let target: Resolution = self.value(node).map(|v| v.decl);
        let scope = Some(self.value(object).map(|v| v.decl));
        self.accesses.push(AccessSite {
            kind: AccessKind::FieldAccess,
            span: span_of(node),
            target,
            scope,
        });
    }

    fn method(
        &self,
        object: Option<Node<'_>>,
        name: &str,
    ) -> std::result::Result<MethodInfo, Unresolved> {
        let found = match object {
            Some(object) => {
                let owner = self.value(object)?;
                owner
                    .type_name
                    .as_deref()
                    .and_then(|ty| self.index.method(ty, name))
            }
            None => self.enclosing(name, |ty| self.index.method(ty, name))?,
        };
        found.ok_or_else(|| Unresolved::new(name))
    }

    /// Resolve an expression to the declaration it denotes and its static type.
    fn value(&self, node: Node<'_>) -> std::result::Result<Value, Unresolved> {
        match node.kind() {
            "identifier" => self.resolve_name(self.text(node)),
            "this" => Ok(Value::instance(self.types.last().cloned())),
            "super" => Ok(Value::instance(
                self.types
                    .last()
                    .and_then(|ty| self.index.superclass(ty))
                    .map(str::to_string),
            )),
            "parenthesized_expression" => match node.named_child(0) {
                Some(inner) => self.value(inner),
                None => Err(Unresolved::new(self.text(node))),
            },
            "field_access" => self.member_value(node),
            "method_invocation" => {
                let name = field_text(node, "name", self.src).unwrap_or_default();
                let method = self.method(node.child_by_field_name("object"), name)?;
                Ok(Value::instance(method.return_type))
            }
            "object_creation_expression" | "cast_expression" => Ok(Value::instance(
                field_text(node, "type", self.src).and_then(simple_type_name),
            )),
            "string_literal" => Ok(Value::instance(Some("String".to_string()))),
            _ => Ok(Value::instance(None)),
        }
    }

    fn member_value(&self, node: Node<'_>) -> std::result::Result<Value, Unresolved> {
        let unresolved = || Unresolved::new(self.text(node));
        let object = node.child_by_field_name("object").ok_or_else(unresolved)?;
        let field = field_text(node, "field", self.src).ok_or_else(unresolved)?;
        let owner = self.value(object)?;
        let owner_type = owner.type_name.as_deref().ok_or_else(unresolved)?;

        match self.index.member(owner_type, field).ok_or_else(unresolved)? {
            MemberLookup::Field(info) => Ok(Value::new(
                DeclKind::Field,
                info.is_static,
                info.type_name,
            )),
            MemberLookup::EnumConstant(ty) => Ok(Value::new(DeclKind::EnumConstant, true, Some(ty))),
            MemberLookup::Type(ty) => Ok(Value::new(DeclKind::Type, true, Some(ty))),
        }
    }

    /// First hit of `lookup` over the enclosing types, innermost first. An
    /// enclosing type with an ambiguous name could shadow `name` in a way the
    /// index cannot see, so reaching one leaves `name` unresolved.
    fn enclosing<T>(
        &self,
        name: &str,
        lookup: impl Fn(&str) -> Option<T>,
    ) -> std::result::Result<Option<T>, Unresolved> {
        for ty in self.types.iter().rev() {
            if !self.index.is_resolvable(ty) {
                return Err(Unresolved::new(name));
            }
            if let Some(found) = lookup(ty.as_str()) {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Local, then field of an enclosing type, then enum constant, then type.
    fn resolve_name(&self, name: &str) -> std::result::Result<Value, Unresolved> {
        if let Some(type_name) = self.frames.iter().rev().find_map(|frame| frame.get(name)) {
            return Ok(Value::new(DeclKind::Local, false, type_name.clone()));
        }
        if let Some(field) = self.enclosing(name, |ty| self.index.field(ty, name))? {
            return Ok(Value::new(DeclKind::Field, field.is_static, field.type_name));
        }
        let constant_owner = |ty: &str| {
            self.index
                .enum_constant(ty, name)
                .then(|| ty.to_string())
        };
        if let Some(ty) = self.enclosing(name, constant_owner)? {
            return Ok(Value::new(DeclKind::EnumConstant, true, Some(ty)));
        }
        if self.index.contains_type(name) {
            return Ok(Value::new(DeclKind::Type, true, Some(name.to_string())));
        }
        Err(Unresolved::new(name))
    }
}

#[cfg(test)]
#[path = "java_tests.rs"]
mod tests;
