//! Shared models

mod error;
mod span;

pub use error::{CodegraphError, ErrorKind, Result};
pub use span::LineSpan;
