/*
 * Codegraph Structure - Program structure model for invariant detection
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (errors, line spans, constants)
 * - features/    : Vertical slices (parsing → structure → program_points → invariants → loading)
 * - config/      : Loader options (versioned YAML)
 *
 * Every structure element and program point carries a unique ID that is a
 * pure function of its file, fully qualified name, kind and signature.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

pub mod config;
pub mod features;
pub mod shared;

// Re-export commonly used types
pub use config::{ConfigError, LoaderConfig};
pub use features::invariants::Invariant;
pub use features::loading::ProgramLoader;
pub use features::parsing::{CompilationUnit, JavaSourceParser, SourceParser};
pub use features::program_points::{ProgramPoint, ProgramPointId, ProgramPointKind, VariableInfo};
pub use features::structure::{
    ElementDescriptor, ElementDetail, ElementId, ElementKind, Program, StructureElement,
};
pub use shared::models::{CodegraphError, ErrorKind, LineSpan, Result};
