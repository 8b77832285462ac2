//! Invariants Feature
//!
//! Storage side of candidate invariants. Inference itself lives outside this
//! crate; consumers attach invariants to program points and flip their
//! falsified flag as evidence arrives.

pub mod domain;

pub use domain::Invariant;
