//! Element descriptors
//!
//! A descriptor is everything needed to build a structure element except its
//! position in the tree. The [`Program`](super::Program) turns a descriptor
//! into a fully identified element and only then links it to its parent.

use super::element_kind::{ElementDetail, ElementKind};
use crate::shared::constants::PACKAGE_PATH_PREFIX;
use crate::shared::models::{CodegraphError, LineSpan, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDescriptor {
    pub identifier: String,
    pub kind: ElementKind,
    pub file_path: String,
    pub span: LineSpan,
    pub detail: ElementDetail,
}

impl ElementDescriptor {
    /// Package node. `""` names the default package.
    pub fn package(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            file_path: format!("{}{}>", PACKAGE_PATH_PREFIX, name),
            identifier: name,
            kind: ElementKind::Package,
            span: LineSpan::unknown(),
            detail: ElementDetail::Package,
        }
    }

    /// Class, interface or enum
    pub fn type_decl(
        kind: ElementKind,
        name: impl Into<String>,
        file_path: impl Into<String>,
        span: LineSpan,
    ) -> Self {
        Self {
            identifier: name.into(),
            kind,
            file_path: file_path.into(),
            span,
            detail: ElementDetail::Type,
        }
    }

    pub fn class(name: impl Into<String>, file_path: impl Into<String>, span: LineSpan) -> Self {
        Self::type_decl(ElementKind::Class, name, file_path, span)
    }

    pub fn field(
        name: impl Into<String>,
        field_type: impl Into<String>,
        file_path: impl Into<String>,
        span: LineSpan,
    ) -> Self {
        Self {
            identifier: name.into(),
            kind: ElementKind::Field,
            file_path: file_path.into(),
            span,
            detail: ElementDetail::Field {
                field_type: field_type.into(),
            },
        }
    }

    pub fn method(
        name: impl Into<String>,
        return_type: impl Into<String>,
        param_types: Vec<String>,
        file_path: impl Into<String>,
        span: LineSpan,
    ) -> Self {
        Self {
            identifier: name.into(),
            kind: ElementKind::Method,
            file_path: file_path.into(),
            span,
            detail: ElementDetail::Method {
                return_type: return_type.into(),
                param_types,
            },
        }
    }

    pub fn constructor(
        name: impl Into<String>,
        param_types: Vec<String>,
        file_path: impl Into<String>,
        span: LineSpan,
    ) -> Self {
        Self {
            identifier: name.into(),
            kind: ElementKind::Constructor,
            file_path: file_path.into(),
            span,
            detail: ElementDetail::Constructor { param_types },
        }
    }

    /// Static block, lambda, block or custom element
    pub fn other(
        kind: ElementKind,
        identifier: impl Into<String>,
        file_path: impl Into<String>,
        span: LineSpan,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
            file_path: file_path.into(),
            span,
            detail: ElementDetail::Other,
        }
    }

    /// Check that kind and detail agree
    pub fn validate(&self) -> Result<()> {
        if !self.detail.accepts(self.kind) {
            return Err(CodegraphError::structure(format!(
                "element '{}' of kind {} cannot carry {:?} detail",
                self.identifier, self.kind, self.detail
            ))
            .with_file(self.file_path.clone()));
        }
        Ok(())
    }
}
