//! Loading Feature
//!
//! Turns an ordered list of source files into a [`Program`](crate::Program).
//!
//! ## Structure
//! - `domain/` - PackageIndex (load-scoped package memo)
//! - `application/` - ProgramLoader use case

pub mod application;
pub mod domain;

pub use application::ProgramLoader;
pub use domain::PackageIndex;
