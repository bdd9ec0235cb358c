//! novx-clipboard - Cut, copy and paste for novel project outlines
//!
//! Elements of a novel project (chapters, sections, plot lines, characters
//! and so on) travel through the clipboard as self-describing XML
//! fragments. Copying strips cross-references to other elements; pasting
//! rebuilds the element, and its sections or plot points, next to the
//! current selection.
//!
//! The host supplies four collaborators: a [`model::DocumentModel`], a
//! [`view::TreeView`], a [`clipboard::ClipboardBackend`] and a
//! [`lock::EditLock`]. [`manager::ClipboardManager`] ties them together.

pub mod clipboard;
pub mod config;
pub mod domain;
pub mod fragment;
pub mod keys;
pub mod lock;
pub mod logging;
pub mod manager;
pub mod model;
pub mod view;

pub use clipboard::{ClipboardBackend, ClipboardError, MemoryClipboard};
pub use config::Config;
pub use domain::{Creation, ElementKind, NodeId};
pub use keys::{Action, ActionState, KeyMap, KeySet, Platform};
pub use lock::{EditLock, EditLockFlag};
pub use manager::{Break, ClipboardManager, Skip};
pub use model::{DocumentModel, Novel};
pub use view::{OutlineView, TreeView};
