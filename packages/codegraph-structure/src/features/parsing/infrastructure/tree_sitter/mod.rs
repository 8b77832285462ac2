//! Tree-sitter based parser implementation

mod java;

pub use java::JavaSourceParser;
