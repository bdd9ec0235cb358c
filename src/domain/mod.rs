//! Domain types for novel project elements
//!
//! Contains the type dispatch tables without any model or I/O concerns.

mod id;
mod kind;

pub use id::{IdError, NodeId};
pub use kind::{Creation, ElementKind, MAX_PLAIN_SECTION_TYPE, SECTION_TYPE_ATTR};
