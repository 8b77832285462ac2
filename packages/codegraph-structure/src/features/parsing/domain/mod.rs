//! Parsing domain models

mod compilation_unit;
mod erasure;

pub use compilation_unit::{
    classes_then_enums, CompilationUnit, FlatType, MemberDeclaration, Parameter, TypeDeclKind,
    TypeDeclaration,
};
pub use erasure::erase_type;
