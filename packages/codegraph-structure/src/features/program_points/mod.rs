//! Program Points Feature
//!
//! Instrumentable locations (method entry/exit, loop heads, ...) tied to one
//! structure element, each with a snapshot of the variables in scope.

pub mod domain;

pub use domain::{compute_point_id, ProgramPoint, ProgramPointId, ProgramPointKind, VariableInfo};
