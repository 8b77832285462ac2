//! Package memo
//!
//! Exactly one package element per distinct package name within one load.
//! The index lives as long as a single `load` call, so separate loads never
//! share package elements.

use std::collections::HashMap;

use crate::features::structure::{ElementDescriptor, ElementId, Program};
use crate::shared::models::Result;

#[derive(Debug, Default)]
pub struct PackageIndex {
    by_name: HashMap<String, ElementId>,
}

#[allow(clippy::len_without_is_empty)]
impl PackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Package element for `name`, created and registered as top-level the
    /// first time the name is seen
    pub fn get_or_create(&mut self, program: &mut Program, name: &str) -> Result<ElementId> {
        if let Some(&id) = self.by_name.get(name) {
            return Ok(id);
        }

        let id = program.create_root(ElementDescriptor::package(name))?;
        program.add_top_level_element(id)?;
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn get(&self, name: &str) -> Option<ElementId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}
