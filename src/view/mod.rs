//! Tree view selection source
//!
//! [`TreeView`] is what the clipboard manager needs from the host's tree
//! widget. [`OutlineView`] is a headless implementation that mirrors the
//! model's outline on every refresh.

use crate::domain::NodeId;
use crate::model::Outline;

/// Selection and navigation over the displayed outline
pub trait TreeView {
    /// Currently selected node
    fn selection(&self) -> Option<NodeId>;

    /// Previous sibling in tree order
    fn prev(&self, id: &NodeId) -> Option<NodeId>;

    fn parent(&self, id: &NodeId) -> Option<NodeId>;

    /// Children in tree order
    fn children(&self, id: &NodeId) -> Vec<NodeId>;

    /// Selects a node and brings it into view
    fn go_to_node(&mut self, id: &NodeId);

    /// Rebuilds the displayed tree from the model
    fn refresh(&mut self, outline: &Outline);
}

/// Headless tree view over a copy of the outline
#[derive(Debug, Clone, Default)]
pub struct OutlineView {
    outline: Outline,
    selection: Option<NodeId>,
    refreshes: usize,
}

impl OutlineView {
    /// Creates a view showing the given outline with nothing selected
    pub fn new(outline: &Outline) -> Self {
        Self {
            outline: outline.clone(),
            selection: None,
            refreshes: 0,
        }
    }

    /// Selects a node by id; unknown ids are ignored
    pub fn select(&mut self, id: &NodeId) {
        self.go_to_node(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Displayed outline
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Number of refreshes since creation
    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }
}

impl TreeView for OutlineView {
    fn selection(&self) -> Option<NodeId> {
        self.selection.clone()
    }

    fn prev(&self, id: &NodeId) -> Option<NodeId> {
        self.outline.prev(id).cloned()
    }

    fn parent(&self, id: &NodeId) -> Option<NodeId> {
        self.outline.parent(id).cloned()
    }

    fn children(&self, id: &NodeId) -> Vec<NodeId> {
        self.outline.children(id).to_vec()
    }

    fn go_to_node(&mut self, id: &NodeId) {
        if self.outline.contains(id) {
            self.selection = Some(id.clone());
        }
    }

    fn refresh(&mut self, outline: &Outline) {
        self.outline = outline.clone();
        self.refreshes += 1;
        if let Some(selected) = &self.selection {
            if !self.outline.contains(selected) {
                self.selection = None;
            }
        }
    }
}
