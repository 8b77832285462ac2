//! Source location types
//!
//! Structure elements only carry line granularity. Lines are 1-based and
//! inclusive; `UNKNOWN_LINE` (-1) marks a missing position.

use crate::shared::constants::UNKNOWN_LINE;

/// Inclusive line range of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSpan {
    pub start_line: i32,
    pub end_line: i32,
}

impl LineSpan {
    pub fn new(start_line: i32, end_line: i32) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// Span with both ends unknown (-1/-1)
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_LINE, UNKNOWN_LINE)
    }

    /// Span of a tree-sitter node (rows are 0-based there)
    pub fn of_node(node: &tree_sitter::Node) -> Self {
        Self::new(
            node.start_position().row as i32 + 1,
            node.end_position().row as i32 + 1,
        )
    }

    pub fn is_known(&self) -> bool {
        self.start_line != UNKNOWN_LINE && self.end_line != UNKNOWN_LINE
    }

    pub fn contains_line(&self, line: i32) -> bool {
        self.is_known() && self.start_line <= line && line <= self.end_line
    }

    pub fn line_count(&self) -> u32 {
        if self.is_known() && self.end_line >= self.start_line {
            (self.end_line - self.start_line + 1) as u32
        } else {
            0
        }
    }
}

impl Default for LineSpan {
    fn default() -> Self {
        Self::unknown()
    }
}
