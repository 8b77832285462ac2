//! Element kinds and per-variant detail
//!
//! `ElementKind` is the closed tag set; `ElementDetail` carries the data that
//! only some variants have (field type, method signature parts) and owns the
//! signature rule used by unique IDs.

use std::fmt;

/// Kind of structure element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Package,
    Class,
    Interface,
    Enum,
    Method,
    Constructor,
    Field,
    StaticBlock,
    Lambda,
    Block,
    Custom,
}

impl ElementKind {
    /// Name used inside unique IDs
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Package => "PACKAGE",
            ElementKind::Class => "CLASS",
            ElementKind::Interface => "INTERFACE",
            ElementKind::Enum => "ENUM",
            ElementKind::Method => "METHOD",
            ElementKind::Constructor => "CONSTRUCTOR",
            ElementKind::Field => "FIELD",
            ElementKind::StaticBlock => "STATIC_BLOCK",
            ElementKind::Lambda => "LAMBDA",
            ElementKind::Block => "BLOCK",
            ElementKind::Custom => "CUSTOM",
        }
    }

    /// Class, interface or enum
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            ElementKind::Class | ElementKind::Interface | ElementKind::Enum
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific data of a structure element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementDetail {
    Package,
    /// Class, interface or enum
    Type,
    Field {
        field_type: String,
    },
    Method {
        return_type: String,
        param_types: Vec<String>,
    },
    Constructor {
        param_types: Vec<String>,
    },
    /// Static blocks, lambdas, blocks and custom elements
    Other,
}

impl ElementDetail {
    /// Signature part of the unique ID: `ret(a,b)` for methods, `(a,b)` for
    /// constructors, nothing otherwise
    pub fn signature(&self) -> Option<String> {
        match self {
            ElementDetail::Method {
                return_type,
                param_types,
            } => Some(format!("{}({})", return_type, param_types.join(","))),
            ElementDetail::Constructor { param_types } => {
                Some(format!("({})", param_types.join(",")))
            }
            _ => None,
        }
    }

    /// Whether this detail is valid for `kind`
    pub fn accepts(&self, kind: ElementKind) -> bool {
        match self {
            ElementDetail::Package => kind == ElementKind::Package,
            ElementDetail::Type => kind.is_type(),
            ElementDetail::Field { .. } => kind == ElementKind::Field,
            ElementDetail::Method { .. } => kind == ElementKind::Method,
            ElementDetail::Constructor { .. } => kind == ElementKind::Constructor,
            ElementDetail::Other => matches!(
                kind,
                ElementKind::StaticBlock
                    | ElementKind::Lambda
                    | ElementKind::Block
                    | ElementKind::Custom
            ),
        }
    }
}
