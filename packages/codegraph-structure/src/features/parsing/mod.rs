//! Parsing Feature
//!
//! Turns source files into the declaration-level tree the loader consumes.
//!
//! ## Structure
//! - `domain/` - CompilationUnit, TypeDeclaration, type erasure
//! - `ports/` - SourceParser trait
//! - `infrastructure/` - tree-sitter Java adapter

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{
    erase_type, CompilationUnit, MemberDeclaration, Parameter, TypeDeclKind, TypeDeclaration,
};
pub use infrastructure::JavaSourceParser;
pub use ports::SourceParser;
