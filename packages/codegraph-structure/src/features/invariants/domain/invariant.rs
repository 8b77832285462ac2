//! Candidate invariant
//!
//! An invariant is a boolean expression over the variables visible at a
//! program point (e.g. `x > 0`). The inference engine marks it falsified once
//! dynamic evidence contradicts it.
//!
//! Equality and hashing look at the expression only. The falsified flag is
//! status, not identity: toggling it never changes which set bucket or list
//! slot an invariant de-duplicates against.

use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct Invariant {
    expression: String,
    falsified: bool,
}

impl Invariant {
    /// New candidate, not falsified
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            falsified: false,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn is_falsified(&self) -> bool {
        self.falsified
    }

    pub fn mark_falsified(&mut self) {
        self.falsified = true;
    }

    pub fn reset_falsified(&mut self) {
        self.falsified = false;
    }
}

impl PartialEq for Invariant {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression
    }
}

impl Eq for Invariant {}

impl Hash for Invariant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.expression.hash(state);
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)?;
        if self.falsified {
            write!(f, "  [FALSIFIED]")?;
        }
        Ok(())
    }
}
