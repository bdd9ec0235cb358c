//! # Clipboard Transfer Manager
//!
//! Moves single elements of the project outline through the clipboard.
//!
//! ## Module Structure
//!
//! - [`copy`] - Serializes the selected element (and its children) to the clipboard
//! - [`cut`] - Copy, move the selection away, delete
//! - [`paste`] - Rebuilds elements from the clipboard next to the selection
//! - [`skip`] - Named reasons for operations that did nothing
//!
//! ## Operations
//!
//! Every operation comes in two forms. `try_copy`, `try_cut` and `try_paste`
//! return the affected node or the [`Skip`] reason. `copy_element`,
//! `cut_element` and `paste_element` never fail visibly: they return
//! `Some(Break)` when the key event was handled and `None` otherwise.
//!
//! The manager keeps no state between calls. It reads the selection and the
//! clipboard each time and leaves element ownership to the model.

mod copy;
mod cut;
mod paste;
mod skip;

use crate::clipboard::ClipboardBackend;
use crate::domain::ElementKind;
use crate::keys::Action;
use crate::lock::EditLock;
use crate::model::DocumentModel;
use crate::view::TreeView;

pub use skip::Skip;

/// Marker telling the caller to stop default key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Break;

/// Cut, copy and paste between the outline and the clipboard
#[derive(Debug)]
pub struct ClipboardManager<M, V, C, L> {
    model: M,
    view: V,
    clipboard: C,
    lock: L,
}

impl<M, V, C, L> ClipboardManager<M, V, C, L>
where
    M: DocumentModel,
    V: TreeView,
    C: ClipboardBackend,
    L: EditLock,
{
    pub fn new(model: M, view: V, clipboard: C, lock: L) -> Self {
        Self {
            model,
            view,
            clipboard,
            lock,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    pub fn lock(&self) -> &L {
        &self.lock
    }

    pub fn lock_mut(&mut self) -> &mut L {
        &mut self.lock
    }

    /// Gives the collaborators back
    pub fn into_parts(self) -> (M, V, C, L) {
        (self.model, self.view, self.clipboard, self.lock)
    }

    /// Rebuilds the view from the model's outline
    pub fn refresh_views(&mut self) {
        self.view.refresh(self.model.outline());
    }

    /// Runs the operation bound to a key or button
    pub fn dispatch(&mut self, action: Action, filter: Option<ElementKind>) -> Option<Break> {
        match action {
            Action::Cut => self.cut_element(filter),
            Action::Copy => self.copy_element(filter),
            Action::Paste => self.paste_element(filter),
        }
    }
}

/// Rejects kinds other than the one a binding is scoped to
fn check_filter(kind: ElementKind, filter: Option<ElementKind>) -> Result<(), Skip> {
    match filter {
        Some(expected) if expected != kind => Err(Skip::FilterMismatch {
            expected,
            found: kind,
        }),
        _ => Ok(()),
    }
}
