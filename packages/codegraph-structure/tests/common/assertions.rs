//! Custom assertions for structure models

use std::collections::HashSet;

use codegraph_structure::{ElementKind, Program};

/// Assert that no two elements and no two program points share a unique ID
pub fn assert_unique_ids(program: &Program) {
    let mut seen = HashSet::new();
    for element in program.all_elements() {
        assert!(
            seen.insert(element.unique_id().to_string()),
            "Duplicate element ID: {}",
            element.unique_id()
        );
    }
    for point in program.all_program_points() {
        assert!(
            seen.insert(point.unique_id().to_string()),
            "Duplicate program point ID: {}",
            point.unique_id()
        );
    }
}

/// Fully qualified names of all elements of `kind`, in pre-order
pub fn fqns_of_kind(program: &Program, kind: ElementKind) -> Vec<String> {
    program
        .all_elements()
        .into_iter()
        .filter(|e| e.kind() == kind)
        .map(|e| e.fully_qualified_name().to_string())
        .collect()
}

/// Program points rendered as `KIND@Lline [name:type, ...]`
pub fn point_summaries(program: &Program) -> Vec<String> {
    program
        .all_program_points()
        .into_iter()
        .map(|p| {
            let vars: Vec<String> = p
                .visible_variables()
                .iter()
                .map(|v| format!("{}:{}", v.name(), v.type_name()))
                .collect();
            format!("{}@L{} [{}]", p.kind(), p.line_number(), vars.join(", "))
        })
        .collect()
}
