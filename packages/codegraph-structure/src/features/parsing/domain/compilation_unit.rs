//! Declaration-level syntax tree
//!
//! What a parser hands to the loader for one source file: the package and
//! every class-like declaration with its members. Bodies are not modeled.

use crate::features::structure::ElementKind;
use crate::shared::models::LineSpan;

/// Parsed source file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompilationUnit {
    /// Package name, `None` for the default package
    pub package: Option<String>,
    /// Top-level class-like declarations in source order
    pub types: Vec<TypeDeclaration>,
}

/// Kind of class-like declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDeclKind {
    Class,
    Interface,
    Enum,
}

impl TypeDeclKind {
    pub fn element_kind(&self) -> ElementKind {
        match self {
            TypeDeclKind::Class => ElementKind::Class,
            TypeDeclKind::Interface => ElementKind::Interface,
            TypeDeclKind::Enum => ElementKind::Enum,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub kind: TypeDeclKind,
    pub span: LineSpan,
    /// Fields, constructors and methods in source order
    pub members: Vec<MemberDeclaration>,
    /// Class-like declarations whose nearest enclosing declaration is this one,
    /// wherever they appear in its body (member, local or inside initializers)
    pub nested: Vec<TypeDeclaration>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, kind: TypeDeclKind, span: LineSpan) -> Self {
        Self {
            name: name.into(),
            kind,
            span,
            members: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: MemberDeclaration) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_nested(mut self, nested: TypeDeclaration) -> Self {
        self.nested.push(nested);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    /// Erased type
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDeclaration {
    /// One declaration, possibly several variables sharing type and lines
    Field {
        type_name: String,
        names: Vec<String>,
        span: LineSpan,
    },
    Constructor {
        name: String,
        params: Vec<Parameter>,
        span: LineSpan,
    },
    Method {
        name: String,
        return_type: String,
        params: Vec<Parameter>,
        span: LineSpan,
    },
}

/// Class-like declaration in flattened pre-order
#[derive(Debug, Clone, Copy)]
pub struct FlatType<'a> {
    pub decl: &'a TypeDeclaration,
    /// Index (into the same flattened list) of the enclosing declaration
    pub enclosing: Option<usize>,
}

impl CompilationUnit {
    pub fn package_name(&self) -> &str {
        self.package.as_deref().unwrap_or("")
    }

    /// Every class-like declaration in pre-order: a declaration comes before
    /// the ones nested in it, siblings keep source order.
    pub fn flatten_types(&self) -> Vec<FlatType<'_>> {
        let mut out = Vec::new();
        for decl in &self.types {
            flatten_into(decl, None, &mut out);
        }
        out
    }
}

/// Positions in `flat` with every class and interface first, then every
/// enum, each group keeping pre-order
pub fn classes_then_enums(flat: &[FlatType<'_>]) -> Vec<usize> {
    let (enums, others): (Vec<usize>, Vec<usize>) =
        (0..flat.len()).partition(|&i| flat[i].decl.kind == TypeDeclKind::Enum);
    others.into_iter().chain(enums).collect()
}

fn flatten_into<'a>(decl: &'a TypeDeclaration, enclosing: Option<usize>, out: &mut Vec<FlatType<'a>>) {
    let index = out.len();
    out.push(FlatType { decl, enclosing });
    for nested in &decl.nested {
        flatten_into(nested, Some(index), out);
    }
}
