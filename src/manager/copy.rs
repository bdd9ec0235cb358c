//! Copy operation (Ctrl+C)

use tracing::{debug, info, trace};

use crate::clipboard::ClipboardBackend;
use crate::domain::{ElementKind, NodeId};
use crate::fragment::{self, strip_references, XmlElement};
use crate::lock::EditLock;
use crate::model::DocumentModel;
use crate::view::TreeView;

use super::{check_filter, Break, ClipboardManager, Skip};

impl<M, V, C, L> ClipboardManager<M, V, C, L>
where
    M: DocumentModel,
    V: TreeView,
    C: ClipboardBackend,
    L: EditLock,
{
    /// Copies the selected element to the clipboard
    ///
    /// Works while locked; copy never changes the model.
    pub fn copy_element(&mut self, filter: Option<ElementKind>) -> Option<Break> {
        match self.try_copy(filter) {
            Ok(_) => Some(Break),
            Err(skip) => {
                debug!(reason = %skip, "copy skipped");
                None
            }
        }
    }

    /// Copies the selected element, returning the copied node
    pub fn try_copy(&mut self, filter: Option<ElementKind>) -> Result<NodeId, Skip> {
        let node = self.view.selection().ok_or(Skip::NoSelection)?;
        let fragment = self.fragment_for(&node, filter)?;
        let text = fragment::to_string(&fragment).map_err(Skip::Serialize)?;

        self.clipboard.clear()?;
        self.clipboard.append(&text)?;

        trace!(bytes = text.len(), "fragment written to clipboard");
        info!(node = %node, tag = fragment.name(), "copied element");
        Ok(node)
    }

    /// Builds the clipboard fragment for a node
    ///
    /// Chapters carry their sections and plot lines their plot points, each
    /// stripped of references like the root.
    pub fn fragment_for(
        &self,
        node: &NodeId,
        filter: Option<ElementKind>,
    ) -> Result<XmlElement, Skip> {
        if !self.model.is_open() {
            return Err(Skip::NoProject);
        }

        let kind = node
            .kind()
            .ok_or_else(|| Skip::UnknownNodeType(node.clone()))?;
        check_filter(kind, filter)?;

        let mut fragment = self.element_fragment(kind, node)?;

        if let Some(child_kind) = kind.child_kind() {
            for child in self.view.children(node) {
                if child.kind() != Some(child_kind) {
                    continue;
                }
                fragment.push(self.element_fragment(child_kind, &child)?);
            }
        }

        Ok(fragment)
    }

    fn element_fragment(&self, kind: ElementKind, id: &NodeId) -> Result<XmlElement, Skip> {
        let element = self
            .model
            .element(kind, id)
            .ok_or_else(|| Skip::ElementNotFound(id.clone()))?;

        let mut fragment = XmlElement::new(kind.tag());
        element.to_xml(&mut fragment);
        strip_references(&mut fragment);
        Ok(fragment)
    }
}
