//! Structure element
//!
//! A node of the declaration tree. Identity is frozen at construction:
//!
//! ```text
//! fqn       = parent.fqn + "." + identifier   (identifier when top-level)
//! unique_id = file_path + "#" + fqn + ":" + KIND [+ ":" + signature]
//! ```
//!
//! Parent and child links are [`ElementId`] handles into the owning
//! [`Program`](super::Program) arena, so no element owns another.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::descriptor::ElementDescriptor;
use super::element_kind::{ElementDetail, ElementKind};
use crate::features::program_points::ProgramPoint;
use crate::shared::models::LineSpan;

/// Handle of a structure element inside a [`Program`](super::Program)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct StructureElement {
    id: ElementId,
    identifier: String,
    kind: ElementKind,
    detail: ElementDetail,
    parent: Option<ElementId>,
    /// Element whose child list holds this one. Equals `parent` unless the
    /// element was created parentless and attached later via `add_child`.
    pub(crate) container: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    pub(crate) program_points: Vec<ProgramPoint>,
    file_path: String,
    span: LineSpan,
    fully_qualified_name: String,
    unique_id: String,
}

impl StructureElement {
    /// Build a fully identified element. Linking into the parent's child list
    /// is the caller's second step.
    pub(crate) fn from_descriptor(
        id: ElementId,
        desc: ElementDescriptor,
        parent: Option<(ElementId, &str)>,
    ) -> Self {
        let fully_qualified_name =
            compute_fully_qualified_name(parent.map(|(_, fqn)| fqn), &desc.identifier);
        let unique_id = compute_unique_id(
            &desc.file_path,
            &fully_qualified_name,
            desc.kind,
            desc.detail.signature().as_deref(),
        );

        Self {
            id,
            identifier: desc.identifier,
            kind: desc.kind,
            detail: desc.detail,
            parent: parent.map(|(pid, _)| pid),
            container: parent.map(|(pid, _)| pid),
            children: Vec::new(),
            program_points: Vec::new(),
            file_path: desc.file_path,
            span: desc.span,
            fully_qualified_name,
            unique_id,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Local name (e.g. `toString`, `MyClass`, `count`)
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn detail(&self) -> &ElementDetail {
        &self.detail
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn program_points(&self) -> &[ProgramPoint] {
        &self.program_points
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn span(&self) -> LineSpan {
        self.span
    }

    pub fn start_line(&self) -> i32 {
        self.span.start_line
    }

    pub fn end_line(&self) -> i32 {
        self.span.end_line
    }

    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn signature(&self) -> Option<String> {
        self.detail.signature()
    }

    /// Field type, for FIELD elements
    pub fn field_type(&self) -> Option<&str> {
        match &self.detail {
            ElementDetail::Field { field_type } => Some(field_type.as_str()),
            _ => None,
        }
    }

    /// Return type, for METHOD elements
    pub fn return_type(&self) -> Option<&str> {
        match &self.detail {
            ElementDetail::Method { return_type, .. } => Some(return_type.as_str()),
            _ => None,
        }
    }

    /// Parameter types, for METHOD and CONSTRUCTOR elements
    pub fn param_types(&self) -> Option<&[String]> {
        match &self.detail {
            ElementDetail::Method { param_types, .. }
            | ElementDetail::Constructor { param_types } => Some(param_types.as_slice()),
            _ => None,
        }
    }
}

pub fn compute_fully_qualified_name(parent_fqn: Option<&str>, identifier: &str) -> String {
    match parent_fqn {
        Some(parent) => format!("{}.{}", parent, identifier),
        None => identifier.to_string(),
    }
}

pub fn compute_unique_id(
    file_path: &str,
    fully_qualified_name: &str,
    kind: ElementKind,
    signature: Option<&str>,
) -> String {
    let mut id = format!("{}#{}:{}", file_path, fully_qualified_name, kind.as_str());
    if let Some(sig) = signature.filter(|s| !s.is_empty()) {
        id.push(':');
        id.push_str(sig);
    }
    id
}

impl PartialEq for StructureElement {
    fn eq(&self, other: &Self) -> bool {
        self.unique_id == other.unique_id
    }
}

impl Eq for StructureElement {}

impl Hash for StructureElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unique_id.hash(state);
    }
}

impl fmt::Display for StructureElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}-{}]",
            self.kind, self.fully_qualified_name, self.span.start_line, self.span.end_line
        )
    }
}
