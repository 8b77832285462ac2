//! Structure domain - declaration tree model

mod descriptor;
mod element;
mod element_kind;
mod program;

pub use descriptor::ElementDescriptor;
pub use element::{compute_fully_qualified_name, compute_unique_id, ElementId, StructureElement};
pub use element_kind::{ElementDetail, ElementKind};
pub use program::Program;
