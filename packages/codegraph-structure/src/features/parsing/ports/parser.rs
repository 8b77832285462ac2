//! Parser port (interface)
//!
//! Defines the contract for turning source text into a declaration-level
//! syntax tree.

use crate::config::LoaderConfig;
use crate::features::parsing::domain::CompilationUnit;
use crate::shared::models::Result;

/// Parser trait - abstraction over parsing implementation
pub trait SourceParser: Send + Sync {
    /// Parse source code into a CompilationUnit. Errors carry `file_path`.
    fn parse(&self, source: &str, file_path: &str) -> Result<CompilationUnit>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;

    /// Pick up parser-level loader options (e.g. `allow_syntax_errors`)
    fn configure(&mut self, _config: &LoaderConfig) {}
}

impl<P: SourceParser + ?Sized> SourceParser for Box<P> {
    fn parse(&self, source: &str, file_path: &str) -> Result<CompilationUnit> {
        (**self).parse(source, file_path)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        (**self).supports_extension(ext)
    }

    fn language_name(&self) -> &'static str {
        (**self).language_name()
    }

    fn configure(&mut self, config: &LoaderConfig) {
        (**self).configure(config)
    }
}
