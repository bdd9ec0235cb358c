//! In-memory novel project
//!
//! Typed element containers keyed by node id, plus the outline that orders
//! them. Creation follows the placement rules of the outline branches;
//! deletion removes a whole subtree and every reference to it.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::{Creation, ElementKind, NodeId};

use super::chapter::Chapter;
use super::element::Element;
use super::outline::Outline;
use super::plot::{PlotLine, PlotPoint};
use super::section::Section;
use super::world::{Character, Item, Location, ProjectNote};
use super::DocumentModel;

/// Where a new node goes
#[derive(Debug, Clone, PartialEq, Eq)]
enum Placement {
    /// Last child of the node
    Append(NodeId),
    /// Next sibling of the node
    After(NodeId),
}

#[derive(Debug, Clone)]
pub struct Novel {
    pub title: String,
    pub chapters: HashMap<NodeId, Chapter>,
    pub sections: HashMap<NodeId, Section>,
    pub plot_lines: HashMap<NodeId, PlotLine>,
    pub plot_points: HashMap<NodeId, PlotPoint>,
    pub characters: HashMap<NodeId, Character>,
    pub locations: HashMap<NodeId, Location>,
    pub items: HashMap<NodeId, Item>,
    pub project_notes: HashMap<NodeId, ProjectNote>,
    outline: Outline,
    open: bool,
}

impl Novel {
    /// Creates an empty, open project
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            chapters: HashMap::new(),
            sections: HashMap::new(),
            plot_lines: HashMap::new(),
            plot_points: HashMap::new(),
            characters: HashMap::new(),
            locations: HashMap::new(),
            items: HashMap::new(),
            project_notes: HashMap::new(),
            outline: Outline::new(),
            open: true,
        }
    }

    /// Closes the project; element lookups keep working but copy refuses
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn reopen(&mut self) {
        self.open = true;
    }

    /// Number of elements of a kind
    pub fn count(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Chapter => self.chapters.len(),
            ElementKind::Section => self.sections.len(),
            ElementKind::PlotLine => self.plot_lines.len(),
            ElementKind::PlotPoint => self.plot_points.len(),
            ElementKind::Character => self.characters.len(),
            ElementKind::Location => self.locations.len(),
            ElementKind::Item => self.items.len(),
            ElementKind::ProjectNote => self.project_notes.len(),
        }
    }

    /// Total number of elements across all containers
    pub fn element_count(&self) -> usize {
        ElementKind::all().iter().map(|k| self.count(*k)).sum()
    }

    /// Smallest unused id for a kind, starting at 1
    fn next_id(&self, kind: ElementKind) -> NodeId {
        (1u32..)
            .map(|n| NodeId::element(kind, n))
            .find(|id| !self.outline.contains(id))
            .unwrap_or_else(|| NodeId::element(kind, u32::MAX))
    }

    fn placement(&self, creation: Creation, target: &NodeId) -> Option<Placement> {
        if !self.outline.contains(target) {
            return None;
        }

        let kind = creation.kind();
        let target_kind = target.kind();

        match creation {
            Creation::Section | Creation::Stage => match target_kind {
                Some(ElementKind::Section) => Some(Placement::After(target.clone())),
                Some(ElementKind::Chapter) => Some(Placement::Append(target.clone())),
                _ => None,
            },
            Creation::PlotPoint => match target_kind {
                Some(ElementKind::PlotPoint) => Some(Placement::After(target.clone())),
                Some(ElementKind::PlotLine) => Some(Placement::Append(target.clone())),
                _ => None,
            },
            _ => {
                if *target == NodeId::root(kind) {
                    return Some(Placement::Append(target.clone()));
                }
                if target_kind == Some(kind) {
                    return Some(Placement::After(target.clone()));
                }
                match (kind.child_kind(), target_kind) {
                    (Some(child), Some(found)) if child == found => self
                        .outline
                        .parent(target)
                        .map(|parent| Placement::After(parent.clone())),
                    _ => None,
                }
            }
        }
    }

    /// Creates an empty element next to or under `target`
    ///
    /// Returns `None` when the target does not accept the element.
    pub fn add(&mut self, creation: Creation, target: &NodeId) -> Option<NodeId> {
        let Some(placement) = self.placement(creation, target) else {
            debug!(?creation, target = %target, "target does not accept new element");
            return None;
        };

        let id = self.next_id(creation.kind());
        let inserted = match &placement {
            Placement::Append(parent) => self.outline.append(parent, id.clone()),
            Placement::After(sibling) => self.outline.insert_after(sibling, id.clone()),
        };
        if !inserted {
            return None;
        }

        match creation {
            Creation::Chapter => {
                self.chapters.insert(id.clone(), Chapter::default());
            }
            Creation::Section => {
                self.sections.insert(id.clone(), Section::default());
            }
            Creation::Stage => {
                self.sections.insert(id.clone(), Section::stage());
            }
            Creation::PlotLine => {
                self.plot_lines.insert(id.clone(), PlotLine::default());
            }
            Creation::PlotPoint => {
                self.plot_points.insert(id.clone(), PlotPoint::default());
            }
            Creation::Character => {
                self.characters.insert(id.clone(), Character::default());
            }
            Creation::Location => {
                self.locations.insert(id.clone(), Location::default());
            }
            Creation::Item => {
                self.items.insert(id.clone(), Item::default());
            }
            Creation::ProjectNote => {
                self.project_notes.insert(id.clone(), ProjectNote::default());
            }
        }

        trace!(id = %id, ?placement, "element created");
        Some(id)
    }

    /// Deletes an element with its subtree and drops references to it
    pub fn delete_element(&mut self, id: &NodeId) {
        let removed = self.outline.remove(id);
        for node in &removed {
            match node.kind() {
                Some(ElementKind::Chapter) => {
                    self.chapters.remove(node);
                }
                Some(ElementKind::Section) => {
                    self.sections.remove(node);
                }
                Some(ElementKind::PlotLine) => {
                    self.plot_lines.remove(node);
                }
                Some(ElementKind::PlotPoint) => {
                    self.plot_points.remove(node);
                }
                Some(ElementKind::Character) => {
                    self.characters.remove(node);
                }
                Some(ElementKind::Location) => {
                    self.locations.remove(node);
                }
                Some(ElementKind::Item) => {
                    self.items.remove(node);
                }
                Some(ElementKind::ProjectNote) => {
                    self.project_notes.remove(node);
                }
                None => {}
            }
        }

        for node in &removed {
            self.forget(node);
        }
        debug!(id = %id, removed = removed.len(), "element deleted");
    }

    fn forget(&mut self, id: &NodeId) {
        for section in self.sections.values_mut() {
            section.forget(id);
        }
        for plot_line in self.plot_lines.values_mut() {
            plot_line.sections.retain(|s| s != id);
        }
        for plot_point in self.plot_points.values_mut() {
            if plot_point.section.as_ref() == Some(id) {
                plot_point.section = None;
            }
        }
    }
}

impl DocumentModel for Novel {
    fn is_open(&self) -> bool {
        self.open
    }

    fn element(&self, kind: ElementKind, id: &NodeId) -> Option<&dyn Element> {
        match kind {
            ElementKind::Chapter => self.chapters.get(id).map(|e| e as &dyn Element),
            ElementKind::Section => self.sections.get(id).map(|e| e as &dyn Element),
            ElementKind::PlotLine => self.plot_lines.get(id).map(|e| e as &dyn Element),
            ElementKind::PlotPoint => self.plot_points.get(id).map(|e| e as &dyn Element),
            ElementKind::Character => self.characters.get(id).map(|e| e as &dyn Element),
            ElementKind::Location => self.locations.get(id).map(|e| e as &dyn Element),
            ElementKind::Item => self.items.get(id).map(|e| e as &dyn Element),
            ElementKind::ProjectNote => self.project_notes.get(id).map(|e| e as &dyn Element),
        }
    }

    fn element_mut(&mut self, kind: ElementKind, id: &NodeId) -> Option<&mut dyn Element> {
        match kind {
            ElementKind::Chapter => self.chapters.get_mut(id).map(|e| e as &mut dyn Element),
            ElementKind::Section => self.sections.get_mut(id).map(|e| e as &mut dyn Element),
            ElementKind::PlotLine => self.plot_lines.get_mut(id).map(|e| e as &mut dyn Element),
            ElementKind::PlotPoint => self.plot_points.get_mut(id).map(|e| e as &mut dyn Element),
            ElementKind::Character => self.characters.get_mut(id).map(|e| e as &mut dyn Element),
            ElementKind::Location => self.locations.get_mut(id).map(|e| e as &mut dyn Element),
            ElementKind::Item => self.items.get_mut(id).map(|e| e as &mut dyn Element),
            ElementKind::ProjectNote => {
                self.project_notes.get_mut(id).map(|e| e as &mut dyn Element)
            }
        }
    }

    fn create(&mut self, creation: Creation, target: &NodeId) -> Option<NodeId> {
        self.add(creation, target)
    }

    fn delete(&mut self, id: &NodeId) {
        self.delete_element(id);
    }

    fn outline(&self) -> &Outline {
        &self.outline
    }
}
