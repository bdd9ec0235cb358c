//! Paste operation (Ctrl+V)

use std::num::IntErrorKind;

use tracing::{debug, info, warn};

use crate::clipboard::ClipboardBackend;
use crate::domain::{Creation, ElementKind, NodeId, SECTION_TYPE_ATTR};
use crate::fragment::{self, XmlElement};
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
    /// Pastes the clipboard fragment next to or under the selection
    pub fn paste_element(&mut self, filter: Option<ElementKind>) -> Option<Break> {
        match self.try_paste(filter) {
            Ok(_) => Some(Break),
            Err(skip) => {
                debug!(reason = %skip, "paste skipped");
                None
            }
        }
    }

    /// Rebuilds the clipboard fragment in the model, returning the new node
    ///
    /// Nested fragments become children of the new node. If the model
    /// refuses one of them, the new node is deleted again.
    pub fn try_paste(&mut self, filter: Option<ElementKind>) -> Result<NodeId, Skip> {
        if self.lock.is_locked() {
            return Err(Skip::Locked);
        }
        if !self.model.is_open() {
            return Err(Skip::NoProject);
        }

        let target = self.view.selection().ok_or(Skip::NoSelection)?;
        let text = self.clipboard.read_text()?;
        let fragment = fragment::parse(&text).map_err(Skip::MalformedFragment)?;

        let kind = ElementKind::from_tag(fragment.name())
            .ok_or_else(|| Skip::UnknownTag(fragment.name().to_string()))?;
        check_filter(kind, filter)?;

        let creation = creation_for(kind, &fragment)?;
        let children = child_plan(kind, &fragment)?;

        let node = self
            .model
            .create(creation, &target)
            .ok_or(Skip::ModelRefused(creation))?;

        if let Err(skip) = self.populate_tree(kind, &node, &fragment, &children) {
            warn!(node = %node, reason = %skip, "paste rolled back");
            self.model.delete(&node);
            return Err(skip);
        }

        self.refresh_views();
        self.view.go_to_node(&node);

        info!(node = %node, children = children.len(), "pasted element");
        Ok(node)
    }

    fn populate_tree(
        &mut self,
        kind: ElementKind,
        node: &NodeId,
        fragment: &XmlElement,
        children: &[(Creation, &XmlElement)],
    ) -> Result<(), Skip> {
        self.populate(kind, node, fragment)?;

        for (creation, child_fragment) in children {
            let child = self
                .model
                .create(*creation, node)
                .ok_or(Skip::ModelRefused(*creation))?;
            self.populate(creation.kind(), &child, child_fragment)?;
        }
        Ok(())
    }

    fn populate(&mut self, kind: ElementKind, id: &NodeId, fragment: &XmlElement) -> Result<(), Skip> {
        let element = self
            .model
            .element_mut(kind, id)
            .ok_or_else(|| Skip::ElementNotFound(id.clone()))?;
        element.from_xml(fragment);
        Ok(())
    }
}

/// Picks the creation operation, telling sections and stages apart
fn creation_for(kind: ElementKind, fragment: &XmlElement) -> Result<Creation, Skip> {
    if kind != ElementKind::Section {
        return Ok(kind.creation());
    }

    let section_type = match fragment.attr(SECTION_TYPE_ATTR) {
        Some(value) => match value.trim().parse::<i64>() {
            Ok(n) => n,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(Skip::InvalidSectionType(value.to_string())),
            },
        },
        None => 0,
    };
    Ok(Creation::for_section_type(section_type))
}

/// Creation operations for the nested fragments, in document order
///
/// Checked before anything is created, so a bad child never leaves a
/// half-built parent behind.
fn child_plan(kind: ElementKind, fragment: &XmlElement) -> Result<Vec<(Creation, &XmlElement)>, Skip> {
    let Some(child_kind) = kind.child_kind() else {
        return Ok(Vec::new());
    };

    fragment
        .find_all(child_kind.tag())
        .map(|child| Ok((creation_for(child_kind, child)?, child)))
        .collect()
}
