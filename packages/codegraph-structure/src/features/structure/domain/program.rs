//! Program
//!
//! Arena of structure elements plus the forest of top-level elements
//! (conventionally packages). All elements and program points of one loaded
//! program live here; handles ([`ElementId`], [`ProgramPointId`]) are only
//! meaningful for the program that issued them.

use std::collections::HashMap;

use tracing::warn;

use super::descriptor::ElementDescriptor;
use super::element::{ElementId, StructureElement};
use super::element_kind::ElementKind;
use crate::features::program_points::{ProgramPoint, ProgramPointId, ProgramPointKind, VariableInfo};
use crate::shared::models::{CodegraphError, Result};

#[derive(Debug, Clone)]
pub struct Program {
    name: String,
    elements: Vec<StructureElement>,
    top_level: Vec<ElementId>,
    /// First element created for each unique ID; used to report collisions
    id_index: HashMap<String, ElementId>,
}

impl Program {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            top_level: Vec::new(),
            id_index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of elements in the arena
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ==========================
    //  Construction
    // ==========================

    /// Create an element with no parent (packages, or detached synthetic
    /// elements to be attached later with [`add_child`](Self::add_child)).
    ///
    /// The element is not added to the top-level list; see
    /// [`add_top_level_element`](Self::add_top_level_element).
    pub fn create_root(&mut self, desc: ElementDescriptor) -> Result<ElementId> {
        desc.validate()?;
        let id = ElementId(self.elements.len());
        let element = StructureElement::from_descriptor(id, desc, None);
        Ok(self.register(element))
    }

    /// Create an element under `parent`. The element is fully identified
    /// before it is appended to the parent's child list.
    pub fn create_child(&mut self, parent: ElementId, desc: ElementDescriptor) -> Result<ElementId> {
        desc.validate()?;
        if desc.kind == ElementKind::Package {
            return Err(CodegraphError::structure(format!(
                "package '{}' cannot have a parent",
                desc.identifier
            )));
        }
        let parent_fqn = self.get(parent)?.fully_qualified_name().to_string();

        let id = ElementId(self.elements.len());
        let element = StructureElement::from_descriptor(id, desc, Some((parent, &parent_fqn)));
        let id = self.register(element);
        self.elements[parent.0].children.push(id);
        Ok(id)
    }

    fn register(&mut self, element: StructureElement) -> ElementId {
        let id = element.id();
        if let Some(existing) = self.id_index.get(element.unique_id()) {
            warn!(
                "Unique ID collision: {} (elements {} and {})",
                element.unique_id(),
                existing,
                id
            );
        } else {
            self.id_index.insert(element.unique_id().to_string(), id);
        }
        self.elements.push(element);
        id
    }

    /// Append an element to the top-level list. Ignored when an element with
    /// the same unique ID is already listed.
    pub fn add_top_level_element(&mut self, id: ElementId) -> Result<()> {
        let unique_id = self.get(id)?.unique_id();
        let listed = self
            .top_level
            .iter()
            .any(|&t| self.elements[t.0].unique_id() == unique_id);
        if !listed {
            self.top_level.push(id);
        }
        Ok(())
    }

    /// Attach a detached element as the last child of `parent`.
    ///
    /// The child keeps the identity it was created with. Rejected when the
    /// child already sits in the tree (as a child or top-level element) or
    /// when attaching would create a cycle.
    pub fn add_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.get(parent)?;
        let child_elem = self.get(child)?;

        if child_elem.container.is_some() || self.top_level.contains(&child) {
            return Err(CodegraphError::structure(format!(
                "element {} ({}) is already attached",
                child,
                child_elem.unique_id()
            )));
        }

        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == child {
                return Err(CodegraphError::structure(format!(
                    "attaching {} under {} would create a cycle",
                    child, parent
                )));
            }
            cursor = self.elements[current.0].container;
        }

        self.elements[child.0].container = Some(parent);
        self.elements[parent.0].children.push(child);
        Ok(())
    }

    /// Append a program point to `element`
    pub fn add_program_point(
        &mut self,
        element: ElementId,
        kind: ProgramPointKind,
        line_number: i32,
        visible_variables: Vec<VariableInfo>,
    ) -> Result<ProgramPointId> {
        let owner = self.get(element)?;
        let point = ProgramPoint::new(
            element,
            owner.unique_id(),
            owner.fully_qualified_name(),
            kind,
            line_number,
            visible_variables,
        );

        let points = &mut self.elements[element.0].program_points;
        points.push(point);
        Ok(ProgramPointId {
            element,
            index: points.len() - 1,
        })
    }

    // ==========================
    //  Access
    // ==========================

    pub fn element(&self, id: ElementId) -> Option<&StructureElement> {
        self.elements.get(id.0)
    }

    fn get(&self, id: ElementId) -> Result<&StructureElement> {
        self.element(id)
            .ok_or_else(|| CodegraphError::structure(format!("unknown element handle {}", id)))
    }

    pub fn top_level_ids(&self) -> &[ElementId] {
        &self.top_level
    }

    pub fn top_level_elements(&self) -> impl Iterator<Item = &StructureElement> {
        self.top_level.iter().map(move |id| &self.elements[id.0])
    }

    /// Top-level package elements
    pub fn packages(&self) -> impl Iterator<Item = &StructureElement> {
        self.top_level_elements()
            .filter(|e| e.kind() == ElementKind::Package)
    }

    pub fn parent_of(&self, id: ElementId) -> Option<&StructureElement> {
        self.element(id)
            .and_then(|e| e.parent())
            .and_then(|pid| self.element(pid))
    }

    pub fn children_of(&self, id: ElementId) -> impl Iterator<Item = &StructureElement> {
        self.element(id)
            .map(|e| e.children())
            .unwrap_or(&[])
            .iter()
            .map(move |cid| &self.elements[cid.0])
    }

    pub fn program_point(&self, id: ProgramPointId) -> Option<&ProgramPoint> {
        self.element(id.element)
            .and_then(|e| e.program_points().get(id.index))
    }

    pub fn program_point_mut(&mut self, id: ProgramPointId) -> Option<&mut ProgramPoint> {
        self.elements
            .get_mut(id.element.0)
            .and_then(|e| e.program_points.get_mut(id.index))
    }

    /// File path of the element owning `point`
    pub fn point_file_path(&self, point: &ProgramPoint) -> Option<&str> {
        self.element(point.parent_element()).map(|e| e.file_path())
    }

    // ==========================
    //  Lookup & traversal
    // ==========================

    /// Pre-order handles of every element reachable from the top-level list
    fn preorder(&self) -> Vec<ElementId> {
        let mut order = Vec::with_capacity(self.elements.len());
        for &root in &self.top_level {
            let mut stack = vec![root];
            while let Some(current) = stack.pop() {
                order.push(current);
                // Reverse so children pop in insertion order
                stack.extend(self.elements[current.0].children.iter().rev().copied());
            }
        }
        order
    }

    /// First element (pre-order, top-level subtrees in order) with the given unique ID
    pub fn find_by_unique_id(&self, unique_id: &str) -> Option<&StructureElement> {
        for &root in &self.top_level {
            let mut stack = vec![root];
            while let Some(current) = stack.pop() {
                let element = &self.elements[current.0];
                if element.unique_id() == unique_id {
                    return Some(element);
                }
                stack.extend(element.children.iter().rev().copied());
            }
        }
        None
    }

    /// Pre-order flattening of every top-level subtree
    pub fn all_elements(&self) -> Vec<&StructureElement> {
        self.preorder()
            .into_iter()
            .map(|id| &self.elements[id.0])
            .collect()
    }

    /// Program points of all reachable elements, element pre-order first
    pub fn all_program_points(&self) -> Vec<&ProgramPoint> {
        self.preorder()
            .into_iter()
            .flat_map(|id| self.elements[id.0].program_points().iter())
            .collect()
    }

    pub fn find_program_point(&self, unique_id: &str) -> Option<&ProgramPoint> {
        self.all_program_points()
            .into_iter()
            .find(|pp| pp.unique_id() == unique_id)
    }

    pub fn find_program_point_mut(&mut self, unique_id: &str) -> Option<&mut ProgramPoint> {
        let (element, index) = self.preorder().into_iter().find_map(|id| {
            self.elements[id.0]
                .program_points()
                .iter()
                .position(|pp| pp.unique_id() == unique_id)
                .map(|index| (id, index))
        })?;
        self.program_point_mut(ProgramPointId { element, index })
    }
}
