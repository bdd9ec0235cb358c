//! Ordered outline tree of node ids
//!
//! The outline holds structure only; element data lives in the typed
//! containers of the model. Branch roots are fixed and come first, in
//! book order.

use std::collections::HashMap;

use crate::domain::{ElementKind, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    roots: Vec<NodeId>,
    children: HashMap<NodeId, Vec<NodeId>>,
    parents: HashMap<NodeId, NodeId>,
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

impl Outline {
    /// Creates an outline with every branch root and no elements
    pub fn new() -> Self {
        let mut roots: Vec<NodeId> = Vec::new();
        for kind in ElementKind::all() {
            let root = NodeId::root(*kind);
            if !roots.contains(&root) {
                roots.push(root);
            }
        }

        let children = roots.iter().map(|r| (r.clone(), Vec::new())).collect();
        Self {
            roots,
            children,
            parents: HashMap::new(),
        }
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns true for branch roots and inserted nodes
    pub fn contains(&self, id: &NodeId) -> bool {
        self.children.contains_key(id)
    }

    /// Parent of a node; branch roots have none
    pub fn parent(&self, id: &NodeId) -> Option<&NodeId> {
        self.parents.get(id)
    }

    /// Children in order, empty for unknown nodes
    pub fn children(&self, id: &NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Position among the siblings
    pub fn index(&self, id: &NodeId) -> Option<usize> {
        match self.parent(id) {
            Some(parent) => self.children(parent).iter().position(|c| c == id),
            None => self.roots.iter().position(|r| r == id),
        }
    }

    fn siblings(&self, id: &NodeId) -> &[NodeId] {
        match self.parent(id) {
            Some(parent) => self.children(parent),
            None => &self.roots,
        }
    }

    /// Previous sibling in tree order
    pub fn prev(&self, id: &NodeId) -> Option<&NodeId> {
        let index = self.index(id)?;
        index.checked_sub(1).map(|i| &self.siblings(id)[i])
    }

    /// Next sibling in tree order
    pub fn next(&self, id: &NodeId) -> Option<&NodeId> {
        let index = self.index(id)?;
        self.siblings(id).get(index + 1)
    }

    /// Inserts a new node under `parent` at `index`, or at the end
    ///
    /// Returns false if the parent is unknown or the id is already used.
    pub fn insert(&mut self, parent: &NodeId, index: Option<usize>, id: NodeId) -> bool {
        if self.contains(&id) || !self.contains(parent) {
            return false;
        }

        let Some(siblings) = self.children.get_mut(parent) else {
            return false;
        };
        let at = index.unwrap_or(siblings.len()).min(siblings.len());
        siblings.insert(at, id.clone());

        self.parents.insert(id.clone(), parent.clone());
        self.children.insert(id, Vec::new());
        true
    }

    /// Appends a new node as the last child of `parent`
    pub fn append(&mut self, parent: &NodeId, id: NodeId) -> bool {
        self.insert(parent, None, id)
    }

    /// Inserts a new node right after `sibling`
    pub fn insert_after(&mut self, sibling: &NodeId, id: NodeId) -> bool {
        let (Some(parent), Some(index)) = (self.parent(sibling).cloned(), self.index(sibling)) else {
            return false;
        };
        self.insert(&parent, Some(index + 1), id)
    }

    /// Node and all descendants in pre-order
    pub fn subtree(&self, id: &NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.contains(id) {
            self.collect(id, &mut out);
        }
        out
    }

    fn collect(&self, id: &NodeId, out: &mut Vec<NodeId>) {
        out.push(id.clone());
        for child in self.children(id) {
            self.collect(child, out);
        }
    }

    /// Removes a node with its subtree, returning the removed ids
    ///
    /// Branch roots cannot be removed.
    pub fn remove(&mut self, id: &NodeId) -> Vec<NodeId> {
        let Some(parent) = self.parents.get(id).cloned() else {
            return Vec::new();
        };

        let removed = self.subtree(id);
        if let Some(siblings) = self.children.get_mut(&parent) {
            siblings.retain(|c| c != id);
        }
        for node in &removed {
            self.children.remove(node);
            self.parents.remove(node);
        }
        removed
    }

    /// Number of element nodes
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
