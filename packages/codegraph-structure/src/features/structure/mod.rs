//! Structure Feature
//!
//! The declaration tree of a loaded program: packages, types, fields,
//! methods and constructors, each with a frozen fully-qualified name and a
//! program-wide unique ID.
//!
//! ## Structure
//! - `domain/` - StructureElement, ElementKind, ElementDescriptor, Program

pub mod domain;

pub use domain::{
    compute_fully_qualified_name, compute_unique_id, ElementDescriptor, ElementDetail, ElementId,
    ElementKind, Program, StructureElement,
};
