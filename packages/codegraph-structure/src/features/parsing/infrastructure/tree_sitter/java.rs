//! Java parser using tree-sitter
//!
//! Extracts the package, class/interface/enum declarations (including nested
//! and local ones), fields, constructors and methods. Record and annotation
//! type declarations are not class-like here; declarations nested inside
//! them are attributed to the nearest enclosing class-like declaration.

use tree_sitter::{Node as TSNode, Parser as TSParser};

use crate::config::LoaderConfig;
use crate::features::parsing::domain::{
    erase_type, CompilationUnit, MemberDeclaration, Parameter, TypeDeclKind, TypeDeclaration,
};
use crate::features::parsing::ports::SourceParser;
use crate::shared::models::{CodegraphError, LineSpan, Result};

/// Tree-sitter Java parser
#[derive(Debug, Clone, Default)]
pub struct JavaSourceParser {
    allow_syntax_errors: bool,
}

impl JavaSourceParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept trees containing ERROR or MISSING nodes instead of failing
    pub fn with_allow_syntax_errors(mut self, allow: bool) -> Self {
        self.allow_syntax_errors = allow;
        self
    }

    fn node_text<'s>(node: &TSNode, source: &'s str) -> &'s str {
        source.get(node.byte_range()).unwrap_or("")
    }

    fn type_kind(ts_kind: &str) -> Option<TypeDeclKind> {
        match ts_kind {
            "class_declaration" => Some(TypeDeclKind::Class),
            "interface_declaration" => Some(TypeDeclKind::Interface),
            "enum_declaration" => Some(TypeDeclKind::Enum),
            _ => None,
        }
    }

    /// First ERROR or MISSING node in document order
    fn first_error<'t>(node: TSNode<'t>) -> Option<TSNode<'t>> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            return None;
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        children.into_iter().find_map(Self::first_error)
    }

    fn extract_package(root: &TSNode, source: &str) -> Option<String> {
        let mut cursor = root.walk();
        let decl = root
            .named_children(&mut cursor)
            .find(|n| n.kind() == "package_declaration")?;

        let mut inner = decl.walk();
        let name = decl
            .named_children(&mut inner)
            .find(|n| matches!(n.kind(), "scoped_identifier" | "identifier"))?;
        Some(erase_type(Self::node_text(&name, source)))
    }

    /// Collect class-like declarations below `node`, stopping at each one found
    fn collect_types(node: &TSNode, source: &str, out: &mut Vec<TypeDeclaration>) {
        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();
        for child in children {
            match Self::type_kind(child.kind()) {
                Some(kind) => {
                    if let Some(decl) = Self::extract_type(&child, kind, source) {
                        out.push(decl);
                    }
                }
                None => Self::collect_types(&child, source, out),
            }
        }
    }

    fn extract_type(node: &TSNode, kind: TypeDeclKind, source: &str) -> Option<TypeDeclaration> {
        let name = node
            .child_by_field_name("name")
            .map(|n| Self::node_text(&n, source).to_string())
            .unwrap_or_default();

        if name.is_empty() {
            return None;
        }

        let mut decl = TypeDeclaration::new(name, kind, LineSpan::of_node(node));

        if let Some(body) = node.child_by_field_name("body") {
            for member in Self::body_members(&body) {
                match member.kind() {
                    "field_declaration" | "constant_declaration" => {
                        decl.members.extend(Self::extract_fields(&member, source))
                    }
                    _ => decl.members.extend(Self::extract_member(&member, source)),
                }
            }
            Self::collect_types(&body, source, &mut decl.nested);
        }

        Some(decl)
    }

    /// Direct member declarations of a class, interface or enum body
    fn body_members<'t>(body: &TSNode<'t>) -> Vec<TSNode<'t>> {
        let mut cursor = body.walk();
        let mut members = Vec::new();
        for child in body.named_children(&mut cursor) {
            if child.kind() == "enum_body_declarations" {
                let mut inner = child.walk();
                members.extend(child.named_children(&mut inner));
            } else {
                members.push(child);
            }
        }
        members
    }

    /// Constructor or method
    fn extract_member(node: &TSNode, source: &str) -> Option<MemberDeclaration> {
        match node.kind() {
            "constructor_declaration" => {
                let name = Self::node_text(&node.child_by_field_name("name")?, source).to_string();
                Some(MemberDeclaration::Constructor {
                    name,
                    params: Self::extract_parameters(node, source),
                    span: LineSpan::of_node(node),
                })
            }
            "method_declaration" => {
                let name = Self::node_text(&node.child_by_field_name("name")?, source).to_string();
                let mut return_type =
                    erase_type(Self::node_text(&node.child_by_field_name("type")?, source));
                // `int values()[]` style
                if let Some(dims) = node.child_by_field_name("dimensions") {
                    return_type.push_str(&erase_type(Self::node_text(&dims, source)));
                }
                Some(MemberDeclaration::Method {
                    name,
                    return_type,
                    params: Self::extract_parameters(node, source),
                    span: LineSpan::of_node(node),
                })
            }
            _ => None,
        }
    }

    /// One field group per run of declarators sharing an effective type:
    /// `int[] a, b[]` gives `int[] a` and `int[][] b`
    fn extract_fields(node: &TSNode, source: &str) -> Vec<MemberDeclaration> {
        let Some(type_node) = node.child_by_field_name("type") else {
            return Vec::new();
        };
        let base_type = erase_type(Self::node_text(&type_node, source));
        let span = LineSpan::of_node(node);

        let mut cursor = node.walk();
        let declarators: Vec<_> = node.children_by_field_name("declarator", &mut cursor).collect();

        let mut fields: Vec<MemberDeclaration> = Vec::new();
        for declarator in declarators {
            let Some(name_node) = declarator.child_by_field_name("name") else {
                continue;
            };
            let name = Self::node_text(&name_node, source).to_string();
            if name.is_empty() {
                continue;
            }

            let mut type_name = base_type.clone();
            if let Some(dims) = declarator.child_by_field_name("dimensions") {
                type_name.push_str(&erase_type(Self::node_text(&dims, source)));
            }

            match fields.last_mut() {
                Some(MemberDeclaration::Field {
                    type_name: last_type,
                    names,
                    ..
                }) if *last_type == type_name => {
                    names.push(name);
                    continue;
                }
                _ => {}
            }
            fields.push(MemberDeclaration::Field {
                type_name,
                names: vec![name],
                span,
            });
        }
        fields
    }

    fn extract_parameters(node: &TSNode, source: &str) -> Vec<Parameter> {
        let Some(params) = node.child_by_field_name("parameters") else {
            return Vec::new();
        };

        let mut cursor = params.walk();
        let children: Vec<_> = params.named_children(&mut cursor).collect();
        children
            .iter()
            .filter_map(|child| match child.kind() {
                "formal_parameter" => Self::extract_formal_parameter(child, source),
                "spread_parameter" => Self::extract_spread_parameter(child, source),
                _ => None,
            })
            .collect()
    }

    fn extract_formal_parameter(node: &TSNode, source: &str) -> Option<Parameter> {
        let name = Self::node_text(&node.child_by_field_name("name")?, source).to_string();
        let mut type_name = erase_type(Self::node_text(&node.child_by_field_name("type")?, source));
        // `String args[]` style
        if let Some(dims) = node.child_by_field_name("dimensions") {
            type_name.push_str(&erase_type(Self::node_text(&dims, source)));
        }
        Some(Parameter::new(name, type_name))
    }

    /// `T... name`: the element type is the first named child that is neither
    /// modifiers nor the declarator
    fn extract_spread_parameter(node: &TSNode, source: &str) -> Option<Parameter> {
        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();

        let declarator = children.iter().find(|c| c.kind() == "variable_declarator")?;
        let name = Self::node_text(&declarator.child_by_field_name("name")?, source).to_string();
        let element_type = children
            .iter()
            .find(|c| !matches!(c.kind(), "modifiers" | "variable_declarator"))?;

        let mut type_name = erase_type(Self::node_text(element_type, source));
        type_name.push_str("[]");
        Some(Parameter::new(name, type_name))
    }
}

impl SourceParser for JavaSourceParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<CompilationUnit> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_java::language())
            .map_err(|e| {
                CodegraphError::parse(format!("Failed to set language: {}", e)).with_file(file_path)
            })?;

        let tree = parser.parse(source, None).ok_or_else(|| {
            CodegraphError::parse("Failed to parse source code").with_file(file_path)
        })?;
        let root = tree.root_node();

        if !self.allow_syntax_errors {
            if let Some(bad) = Self::first_error(root) {
                let what = if bad.is_missing() { "missing" } else { "unexpected" };
                return Err(CodegraphError::parse(format!(
                    "Syntax error: {} {:?}",
                    what,
                    bad.kind()
                ))
                .with_file(file_path)
                .with_line(bad.start_position().row as u32 + 1));
            }
        }

        let mut unit = CompilationUnit {
            package: Self::extract_package(&root, source),
            types: Vec::new(),
        };
        Self::collect_types(&root, source, &mut unit.types);
        Ok(unit)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case("java")
    }

    fn language_name(&self) -> &'static str {
        "java"
    }

    fn configure(&mut self, config: &LoaderConfig) {
        self.allow_syntax_errors = config.allow_syntax_errors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> CompilationUnit {
        JavaSourceParser::new().parse(source, "Test.java").unwrap()
    }

    #[test]
    fn test_package_and_class() {
        let unit = parse("package com.acme.util;\n\npublic class Box {\n}\n");
        assert_eq!(unit.package.as_deref(), Some("com.acme.util"));
        assert_eq!(unit.types.len(), 1);
        assert_eq!(unit.types[0].name, "Box");
        assert_eq!(unit.types[0].kind, TypeDeclKind::Class);
        assert_eq!(unit.types[0].span, LineSpan::new(3, 4));
    }

    #[test]
    fn test_default_package() {
        let unit = parse("class A {}\n");
        assert!(unit.package.is_none());
        assert_eq!(unit.package_name(), "");
    }

    #[test]
    fn test_method_members() {
        let source = "class Calc {\n    int add(int a, int b) {\n        return a + b;\n    }\n    void run() {}\n}\n";
        let unit = parse(source);
        assert_eq!(
            unit.types[0].members,
            vec![
                MemberDeclaration::Method {
                    name: "add".to_string(),
                    return_type: "int".to_string(),
                    params: vec![Parameter::new("a", "int"), Parameter::new("b", "int")],
                    span: LineSpan::new(2, 4),
                },
                MemberDeclaration::Method {
                    name: "run".to_string(),
                    return_type: "void".to_string(),
                    params: Vec::new(),
                    span: LineSpan::new(5, 5),
                },
            ]
        );
    }

    #[test]
    fn test_fields_and_constructor() {
        let source = "class P {\n    private int x, y;\n    final java.util.List<String> names = null;\n    P(int x, int y) {\n        this.x = x;\n    }\n}\n";
        let unit = parse(source);
        assert_eq!(
            unit.types[0].members,
            vec![
                MemberDeclaration::Field {
                    type_name: "int".to_string(),
                    names: vec!["x".to_string(), "y".to_string()],
                    span: LineSpan::new(2, 2),
                },
                MemberDeclaration::Field {
                    type_name: "java.util.List".to_string(),
                    names: vec!["names".to_string()],
                    span: LineSpan::new(3, 3),
                },
                MemberDeclaration::Constructor {
                    name: "P".to_string(),
                    params: vec![Parameter::new("x", "int"), Parameter::new("y", "int")],
                    span: LineSpan::new(4, 6),
                },
            ]
        );
    }

    #[test]
    fn test_field_declarator_dimensions() {
        let source = "class D {\n    int[] a, b[];\n    int c[], d[];\n}\n";
        let unit = parse(source);
        assert_eq!(
            unit.types[0].members,
            vec![
                MemberDeclaration::Field {
                    type_name: "int[]".to_string(),
                    names: vec!["a".to_string()],
                    span: LineSpan::new(2, 2),
                },
                MemberDeclaration::Field {
                    type_name: "int[][]".to_string(),
                    names: vec!["b".to_string()],
                    span: LineSpan::new(2, 2),
                },
                MemberDeclaration::Field {
                    type_name: "int[]".to_string(),
                    names: vec!["c".to_string(), "d".to_string()],
                    span: LineSpan::new(3, 3),
                },
            ]
        );
    }

    #[test]
    fn test_generic_and_varargs_parameters() {
        let source = "class G {\n    <T> java.util.Map<String, T> f(java.util.List<T> xs, String... rest, int arr[]) { return null; }\n}\n";
        let unit = parse(source);
        match &unit.types[0].members[0] {
            MemberDeclaration::Method {
                return_type, params, ..
            } => {
                assert_eq!(return_type, "java.util.Map");
                assert_eq!(
                    params,
                    &vec![
                        Parameter::new("xs", "java.util.List"),
                        Parameter::new("rest", "String[]"),
                        Parameter::new("arr", "int[]"),
                    ]
                );
            }
            other => panic!("expected method, got {:?}", other),
        }
    }

    #[test]
    fn test_interface_constants_and_abstract_methods() {
        let source = "interface Shape {\n    double PI = 3.14;\n    double area();\n}\n";
        let unit = parse(source);
        let shape = &unit.types[0];
        assert_eq!(shape.kind, TypeDeclKind::Interface);
        assert_eq!(shape.members.len(), 2);
        assert!(matches!(&shape.members[0], MemberDeclaration::Field { names, .. } if names == &vec!["PI".to_string()]));
        assert!(matches!(&shape.members[1], MemberDeclaration::Method { name, span, .. } if name == "area" && *span == LineSpan::new(3, 3)));
    }

    #[test]
    fn test_enum_body_declarations() {
        let source = "enum Color {\n    RED, GREEN;\n    private final int code = 0;\n    Color() {}\n    int code() { return code; }\n}\n";
        let unit = parse(source);
        let color = &unit.types[0];
        assert_eq!(color.kind, TypeDeclKind::Enum);
        let kinds: Vec<_> = color
            .members
            .iter()
            .map(|m| match m {
                MemberDeclaration::Field { .. } => "field",
                MemberDeclaration::Constructor { .. } => "constructor",
                MemberDeclaration::Method { .. } => "method",
            })
            .collect();
        assert_eq!(kinds, vec!["field", "constructor", "method"]);
    }

    #[test]
    fn test_nested_and_local_types() {
        let source = "class Outer {\n    static class Inner {\n        void g() {}\n    }\n    void f() {\n        class Local {}\n    }\n}\n";
        let unit = parse(source);
        let outer = &unit.types[0];
        let nested: Vec<_> = outer.nested.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(nested, vec!["Inner", "Local"]);
        // Members of nested types stay with the nested declaration
        assert_eq!(outer.members.len(), 1);
        assert_eq!(outer.nested[0].members.len(), 1);
    }

    #[test]
    fn test_syntax_error_is_a_parse_failure() {
        let err = JavaSourceParser::new()
            .parse("class Broken {\n    void f( {\n}\n", "Broken.java")
            .unwrap_err();
        assert_eq!(err.file_path.as_deref(), Some("Broken.java"));
        assert!(err.line.is_some());
    }

    #[test]
    fn test_syntax_errors_tolerated_when_allowed() {
        let parser = JavaSourceParser::new().with_allow_syntax_errors(true);
        let unit = parser
            .parse("class Ok {}\nclass Broken { void f( }\n", "Mixed.java")
            .unwrap();
        assert!(unit.types.iter().any(|t| t.name == "Ok"));
    }

    #[test]
    fn test_configure_follows_loader_config() {
        let mut parser = JavaSourceParser::new();
        parser.configure(&LoaderConfig::default().allow_syntax_errors(true));
        assert!(parser.parse("class A { void f( }\n", "A.java").is_ok());

        parser.configure(&LoaderConfig::default());
        assert!(parser.parse("class A { void f( }\n", "A.java").is_err());
    }

    #[test]
    fn test_supports_extension() {
        let parser = JavaSourceParser::new();
        assert!(parser.supports_extension("java"));
        assert!(parser.supports_extension("JAVA"));
        assert!(!parser.supports_extension("kt"));
        assert_eq!(parser.language_name(), "java");
    }
}
