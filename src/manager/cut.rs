//! Cut operation (Ctrl+X)

use tracing::{debug, info};

use crate::clipboard::ClipboardBackend;
use crate::domain::{ElementKind, NodeId};
use crate::lock::EditLock;
use crate::model::DocumentModel;
use crate::view::TreeView;

use super::{Break, ClipboardManager, Skip};

impl<M, V, C, L> ClipboardManager<M, V, C, L>
where
    M: DocumentModel,
    V: TreeView,
    C: ClipboardBackend,
    L: EditLock,
{
    /// Cuts the selected element to the clipboard
    pub fn cut_element(&mut self, filter: Option<ElementKind>) -> Option<Break> {
        match self.try_cut(filter) {
            Ok(_) => Some(Break),
            Err(skip) => {
                debug!(reason = %skip, "cut skipped");
                None
            }
        }
    }

    /// Copies the selected element, then deletes it from the model
    ///
    /// The selection moves to the previous sibling, or to the parent, before
    /// the node is deleted. Returns the deleted node.
    pub fn try_cut(&mut self, filter: Option<ElementKind>) -> Result<NodeId, Skip> {
        if self.lock.is_locked() {
            return Err(Skip::Locked);
        }

        let node = self.view.selection().ok_or(Skip::NoSelection)?;
        self.try_copy(filter)?;

        if let Some(target) = self.view.prev(&node).or_else(|| self.view.parent(&node)) {
            self.view.go_to_node(&target);
        }
        self.model.delete(&node);
        self.refresh_views();

        info!(node = %node, "cut element");
        Ok(node)
    }
}
