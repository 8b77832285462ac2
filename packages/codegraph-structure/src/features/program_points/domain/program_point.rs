//! Program point
//!
//! A semantic location inside one structure element where invariants are
//! inferred or checked. Points are created through
//! [`Program::add_program_point`](crate::features::structure::Program::add_program_point),
//! which freezes the unique ID from the owning element's ID.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{ProgramPointKind, VariableInfo};
use crate::features::invariants::Invariant;
use crate::features::structure::ElementId;
use crate::shared::constants::POINT_ID_SEPARATOR;

/// Handle of a program point inside a [`Program`](crate::features::structure::Program)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramPointId {
    pub element: ElementId,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct ProgramPoint {
    parent_element: ElementId,
    kind: ProgramPointKind,
    line_number: i32,
    visible_variables: Vec<VariableInfo>,
    invariants: Vec<Invariant>,
    unique_id: String,
    /// Owning element's FQN, kept for display only
    parent_fqn: String,
}

impl ProgramPoint {
    pub(crate) fn new(
        parent_element: ElementId,
        parent_unique_id: &str,
        parent_fqn: &str,
        kind: ProgramPointKind,
        line_number: i32,
        visible_variables: Vec<VariableInfo>,
    ) -> Self {
        Self {
            parent_element,
            kind,
            line_number,
            visible_variables,
            invariants: Vec::new(),
            unique_id: compute_point_id(parent_unique_id, kind, line_number),
            parent_fqn: parent_fqn.to_string(),
        }
    }

    pub fn parent_element(&self) -> ElementId {
        self.parent_element
    }

    pub fn kind(&self) -> ProgramPointKind {
        self.kind
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn line_number(&self) -> i32 {
        self.line_number
    }

    pub fn visible_variables(&self) -> &[VariableInfo] {
        &self.visible_variables
    }

    /// Look up a visible variable by name
    pub fn variable(&self, name: &str) -> Option<&VariableInfo> {
        self.visible_variables.iter().find(|v| v.name() == name)
    }

    pub fn invariants(&self) -> &[Invariant] {
        &self.invariants
    }

    /// Mutable view for flipping falsified flags; the list itself stays append-only
    pub fn invariants_mut(&mut self) -> &mut [Invariant] {
        &mut self.invariants
    }

    /// Attach an invariant. Returns `false` if an equal one is already attached.
    pub fn add_invariant(&mut self, invariant: Invariant) -> bool {
        if self.invariants.contains(&invariant) {
            return false;
        }
        self.invariants.push(invariant);
        true
    }

    pub fn invariant(&self, expression: &str) -> Option<&Invariant> {
        self.invariants.iter().find(|i| i.expression() == expression)
    }

    pub fn invariant_mut(&mut self, expression: &str) -> Option<&mut Invariant> {
        self.invariants
            .iter_mut()
            .find(|i| i.expression() == expression)
    }

    /// Invariants not yet disproven
    pub fn candidate_invariants(&self) -> impl Iterator<Item = &Invariant> {
        self.invariants.iter().filter(|i| !i.is_falsified())
    }

    /// Clear every falsified flag, e.g. before replaying a new trace
    pub fn reset_invariants(&mut self) {
        for inv in &mut self.invariants {
            inv.reset_falsified();
        }
    }
}

/// `parent_id + ":::" + KIND + "@L" + line`
pub fn compute_point_id(parent_unique_id: &str, kind: ProgramPointKind, line_number: i32) -> String {
    format!(
        "{}{}{}@L{}",
        parent_unique_id,
        POINT_ID_SEPARATOR,
        kind.as_str(),
        line_number
    )
}

impl PartialEq for ProgramPoint {
    fn eq(&self, other: &Self) -> bool {
        self.unique_id == other.unique_id
    }
}

impl Eq for ProgramPoint {}

impl Hash for ProgramPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unique_id.hash(state);
    }
}

impl fmt::Display for ProgramPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} line {}",
            self.kind, self.parent_fqn, self.line_number
        )
    }
}
