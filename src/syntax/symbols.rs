use std::collections::{HashMap, HashSet};

use tree_sitter::Node;

use super::TypeKind;

/// Longest superclass chain followed before giving up.
const MAX_SUPER_DEPTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FieldInfo {
    pub is_static: bool,
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct MethodInfo {
    pub is_static: bool,
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub(super) struct TypeInfo {
    pub superclass: Option<String>,
    pub fields: HashMap<String, FieldInfo>,
    pub methods: HashMap<String, Vec<MethodInfo>>,
    pub enum_constants: HashSet<String>,
    pub nested: HashSet<String>,
}

/// What a member name looks up to inside a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum MemberLookup {
    Field(FieldInfo),
    EnumConstant(String),
    Type(String),
}

/// Codebase-wide table of declared types, keyed by simple name.
///
/// A simple name declared more than once (in two files, or nested in two
/// different types) is ambiguous: every lookup through it fails.
#[derive(Debug, Default)]
pub(super) struct SymbolIndex {
    types: HashMap<String, TypeInfo>,
    ambiguous: HashSet<String>,
}

impl SymbolIndex {
    pub fn build<'a>(roots: impl IntoIterator<Item = (Node<'a>, &'a [u8])>) -> Self {
        let mut index = Self::default();
        for (root, src) in roots {
            index.collect(root, src);
        }
        index
    }

    fn get(&self, name: &str) -> Option<&TypeInfo> {
        if self.ambiguous.contains(name) {
            return None;
        }
        self.types.get(name)
    }

    pub fn contains_type(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether members of `type_name` can be looked up at all: neither the type
    /// nor any indexed superclass has an ambiguous name.
    pub fn is_resolvable(&self, type_name: &str) -> bool {
        self.hierarchy(type_name).is_some()
    }

    pub fn superclass(&self, type_name: &str) -> Option<&str> {
        self.get(type_name)?.superclass.as_deref()
    }

    /// `type_name` followed by its indexed superclasses, or `None` when a link
    /// in the chain is ambiguous.
    fn hierarchy(&self, type_name: &str) -> Option<Vec<&TypeInfo>> {
        let mut chain = Vec::new();
        let mut next = Some(type_name);
        while let Some(name) = next
            && chain.len() < MAX_SUPER_DEPTH
        {
            if self.ambiguous.contains(name) {
                return None;
            }
            let Some(info) = self.types.get(name) else {
                break;
            };
            chain.push(info);
            next = info.superclass.as_deref();
        }
        Some(chain)
    }

    pub fn field(&self, type_name: &str, name: &str) -> Option<FieldInfo> {
        self.hierarchy(type_name)?
            .into_iter()
            .find_map(|info| info.fields.get(name).cloned())
    }

    pub fn enum_constant(&self, type_name: &str, name: &str) -> bool {
        self.get(type_name)
            .is_some_and(|info| info.enum_constants.contains(name))
    }

    /// Look `name` up as a member of `type_name`: field, enum constant, then nested type.
    pub fn member(&self, type_name: &str, name: &str) -> Option<MemberLookup> {
        if let Some(field) = self.field(type_name, name) {
            return Some(MemberLookup::Field(field));
        }
        if self.enum_constant(type_name, name) {
            return Some(MemberLookup::EnumConstant(type_name.to_string()));
        }
        self.hierarchy(type_name)?
            .into_iter()
            .any(|info| info.nested.contains(name))
            .then(|| MemberLookup::Type(name.to_string()))
    }

    /// Resolve a method by name; overloads must agree on `static`.
    pub fn method(&self, type_name: &str, name: &str) -> Option<MethodInfo> {
        let overloads: Vec<&MethodInfo> = self
            .hierarchy(type_name)?
            .into_iter()
            .filter_map(|info| info.methods.get(name))
            .flatten()
            .collect();
        let first = overloads.first()?;
        if overloads.iter().any(|m| m.is_static != first.is_static) {
            return None;
        }
        let return_type = if overloads.iter().all(|m| m.return_type == first.return_type) {
            first.return_type.clone()
        } else {
            None
        };
        Some(MethodInfo {
            is_static: first.is_static,
            return_type,
        })
    }

    fn collect(&mut self, node: Node<'_>, src: &[u8]) {
        if let Some(kind) = type_kind(node.kind())
            && let Some(name) = field_text(node, "name", src)
        {
            let info = type_info(node, kind, src);
            if self.types.insert(name.to_string(), info).is_some() {
                self.ambiguous.insert(name.to_string());
            }
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.collect(child, src);
        }
    }
}

pub(super) fn type_kind(kind: &str) -> Option<TypeKind> {
    match kind {
        "class_declaration" => Some(TypeKind::Class),
        "interface_declaration" => Some(TypeKind::Interface),
        "enum_declaration" => Some(TypeKind::Enum),
        "record_declaration" => Some(TypeKind::Record),
        "annotation_type_declaration" => Some(TypeKind::Annotation),
        _ => None,
    }
}

pub(super) fn field_text<'a>(node: Node<'_>, field: &str, src: &'a [u8]) -> Option<&'a str> {
    node.child_by_field_name(field)?.utf8_text(src).ok()
}

/// Reduce a written type to the simple name it declares, dropping generics and
/// qualification. Arrays and primitives have no indexed type.
pub(super) fn simple_type_name(written: &str) -> Option<String> {
    let base = written.split('<').next()?.trim();
    if base.ends_with(']') || base == "var" || base.is_empty() {
        return None;
    }
    let simple = base.rsplit('.').next()?.trim();
    let is_primitive = matches!(
        simple,
        "void" | "boolean" | "byte" | "char" | "short" | "int" | "long" | "float" | "double"
    );
    (!is_primitive).then(|| simple.to_string())
}

/// Whether the node's `modifiers` child carries the given keyword.
pub(super) fn has_modifier(node: Node<'_>, keyword: &str) -> bool {
    let mut cursor = node.walk();
    let Some(modifiers) = node
        .children(&mut cursor)
        .find(|c| c.kind() == "modifiers")
    else {
        return false;
    };
    let mut inner = modifiers.walk();
    let found = modifiers.children(&mut inner).any(|c| c.kind() == keyword);
    found
}

fn type_info(node: Node<'_>, kind: TypeKind, src: &[u8]) -> TypeInfo {
    let mut info = TypeInfo {
        superclass: node
            .child_by_field_name("superclass")
            .and_then(|s| s.named_child(0))
            .and_then(|t| t.utf8_text(src).ok())
            .and_then(simple_type_name),
        ..TypeInfo::default()
    };
    let is_interface = matches!(kind, TypeKind::Interface | TypeKind::Annotation);

    if kind == TypeKind::Record
        && let Some(params) = node.child_by_field_name("parameters")
    {
        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            if let Some(name) = field_text(param, "name", src) {
                info.fields.insert(
                    name.to_string(),
                    FieldInfo {
                        is_static: false,
                        type_name: field_text(param, "type", src).and_then(simple_type_name),
                    },
                );
            }
        }
    }

    let Some(body) = node.child_by_field_name("body") else {
        return info;
    };
    collect_members(&mut info, body, is_interface, src);
    info
}

fn collect_members(info: &mut TypeInfo, body: Node<'_>, is_interface: bool, src: &[u8]) {
    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        match member.kind() {
            "field_declaration" | "constant_declaration" => {
                let is_static = is_interface
                    || member.kind() == "constant_declaration"
                    || has_modifier(member, "static");
                let type_name = field_text(member, "type", src).and_then(simple_type_name);
                let mut declarators = member.walk();
                for declarator in member.children_by_field_name("declarator", &mut declarators) {
                    if let Some(name) = field_text(declarator, "name", src) {
                        info.fields.insert(
                            name.to_string(),
                            FieldInfo {
                                is_static,
                                type_name: type_name.clone(),
                            },
                        );
                    }
                }
            }
            "method_declaration" => {
                if let Some(name) = field_text(member, "name", src) {
                    info.methods
                        .entry(name.to_string())
                        .or_default()
                        .push(MethodInfo {
                            is_static: has_modifier(member, "static"),
                            return_type: field_text(member, "type", src)
                                .and_then(simple_type_name),
                        });
                }
            }
            "enum_constant" => {
                if let Some(name) = field_text(member, "name", src) {
                    info.enum_constants.insert(name.to_string());
                }
            }
            "enum_body_declarations" => collect_members(info, member, is_interface, src),
            kind if type_kind(kind).is_some() => {
                if let Some(name) = field_text(member, "name", src) {
                    info.nested.insert(name.to_string());
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "symbols_tests.rs"]
mod tests;
