//! Node ids for the project outline
//!
//! ID Format:
//! - Element nodes: `{prefix}{number}` (e.g., `ch1`, `sc12`, `ap3`)
//! - Branch roots: two upper-case letters (`CH`, `AC`, `CR`, `LC`, `IT`, `PN`)
//!
//! Ids are opaque to everything except the prefix: the first two characters
//! classify a node without asking the model. Branch roots never classify.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::kind::ElementKind;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Node id must not be empty")]
    Empty,

    #[error("Invalid element id format: expected '{{prefix}}{{number}}', got '{0}'")]
    InvalidElementId(String),

    #[error("Invalid sequence number: {0}")]
    InvalidSequence(String),

    #[error("Unknown element kind: {0}")]
    UnknownKind(String),
}

/// Id of a node in the project outline
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Creates an element node id from its kind and sequence number
    pub fn element(kind: ElementKind, number: u32) -> Self {
        Self(format!("{}{}", kind.prefix(), number))
    }

    /// Returns the id of the branch root holding elements of `kind`
    pub fn root(kind: ElementKind) -> Self {
        Self(kind.branch_root().to_string())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the two-character type prefix, if the id has one
    pub fn prefix(&self) -> Option<&str> {
        self.0.get(..2)
    }

    /// Classifies the node by its prefix
    pub fn kind(&self) -> Option<ElementKind> {
        self.prefix().and_then(ElementKind::from_prefix)
    }

    /// Returns true if this is the root of an outline branch
    pub fn is_branch_root(&self) -> bool {
        ElementKind::all()
            .iter()
            .any(|k| k.branch_root() == self.0)
    }

    /// Returns the numeric part of an element id
    pub fn number(&self) -> Option<u32> {
        self.kind()?;
        self.0.get(2..)?.parse().ok()
    }

    /// Parses a strict element id, rejecting roots and unknown prefixes
    pub fn parse_element(s: &str) -> Result<Self, IdError> {
        let id: NodeId = s.parse()?;
        if id.kind().is_none() {
            return Err(IdError::InvalidElementId(id.0));
        }

        let digits = &id.0[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdError::InvalidSequence(digits.to_string()));
        }

        Ok(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for NodeId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
