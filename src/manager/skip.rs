//! Reasons a clipboard operation did nothing

use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::domain::{Creation, ElementKind, NodeId};
use crate::fragment::FragmentError;

/// Why a cut, copy or paste was skipped
///
/// None of these reach the user. The public operations log them and
/// return without a [`Break`](super::Break).
#[derive(Debug, Error, PartialEq)]
pub enum Skip {
    #[error("Nothing is selected")]
    NoSelection,

    #[error("No project is open")]
    NoProject,

    #[error("The project is locked")]
    Locked,

    #[error("Node '{0}' is not a transferable element")]
    UnknownNodeType(NodeId),

    #[error("Expected a {expected}, found a {found}")]
    FilterMismatch {
        expected: ElementKind,
        found: ElementKind,
    },

    #[error("Element '{0}' is missing from the model")]
    ElementNotFound(NodeId),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(#[from] ClipboardError),

    #[error("Clipboard content is not a fragment: {0}")]
    MalformedFragment(FragmentError),

    #[error("Unknown fragment tag <{0}>")]
    UnknownTag(String),

    #[error("Invalid section type '{0}'")]
    InvalidSectionType(String),

    #[error("The model refused to create a {0:?} here")]
    ModelRefused(Creation),

    #[error("Failed to serialize fragment: {0}")]
    Serialize(FragmentError),
}
