//! # Clipboard Fragments
//!
//! A fragment is the XML form of one element, and optionally its children,
//! as it travels through the clipboard:
//!
//! ```text
//! <CHAPTER type="0" level="2">
//!   <Title>Arrival</Title>
//!   <SECTION type="0"><Title>Station</Title></SECTION>
//!   <SECTION type="2"><Title>Act I</Title></SECTION>
//! </CHAPTER>
//! ```
//!
//! The root tag names the element kind. Attributes and child tags belong to
//! the element's own serializer; nested `SECTION` / `POINT` elements are child
//! fragments. Reference tags ([`REFERENCE_TAGS`]) never leave the model.
//!
//! ## Key Types
//!
//! - [`XmlElement`] - Element tree with ordered attributes and mixed content
//! - [`parse`] / [`to_string`] - Text conversion via `quick-xml`
//! - [`strip_references`] - Removes tags that would dangle after transport

mod node;
mod reader;
mod references;
mod writer;

use thiserror::Error;

pub use node::{XmlElement, XmlNode};
pub use reader::parse;
pub use references::{strip_references, REFERENCE_TAGS};
pub use writer::to_string;

#[derive(Debug, Error, PartialEq)]
pub enum FragmentError {
    #[error("Malformed XML: {0}")]
    Malformed(String),

    #[error("No root element found")]
    NoRoot,

    #[error("Content after the root element")]
    TrailingContent,

    #[error("Element <{0}> is not closed")]
    Unclosed(String),

    #[error("Failed to write XML: {0}")]
    Write(String),
}
