//! Common test utilities for codegraph-structure
//!
//! Java source fixtures, a temp-dir workspace to write them into, and
//! model assertions shared by the integration tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
