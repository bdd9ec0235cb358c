//! Element kinds and the dispatch tables keyed by them
//!
//! Every table lookup in the crate goes through [`ElementKind`]: node-id
//! prefix, fragment root tag, branch root and creation operation are all
//! exhaustive matches, so a new kind fails to compile until every table
//! knows about it.

use std::fmt;
use std::str::FromStr;

use super::id::IdError;

/// Attribute on `SECTION` fragments that separates sections from stages
pub const SECTION_TYPE_ATTR: &str = "type";

/// Section `type` values above this one are stages
pub const MAX_PLAIN_SECTION_TYPE: i64 = 1;

/// Kind of a novel project element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Chapter,
    Section,
    PlotLine,
    PlotPoint,
    Character,
    Location,
    Item,
    ProjectNote,
}

impl ElementKind {
    /// Returns all element kinds in outline order
    pub fn all() -> &'static [ElementKind] {
        &[
            ElementKind::Chapter,
            ElementKind::Section,
            ElementKind::PlotLine,
            ElementKind::PlotPoint,
            ElementKind::Character,
            ElementKind::Location,
            ElementKind::Item,
            ElementKind::ProjectNote,
        ]
    }

    /// Two-character node id prefix
    pub fn prefix(&self) -> &'static str {
        match self {
            ElementKind::Chapter => "ch",
            ElementKind::Section => "sc",
            ElementKind::PlotLine => "ac",
            ElementKind::PlotPoint => "ap",
            ElementKind::Character => "cr",
            ElementKind::Location => "lc",
            ElementKind::Item => "it",
            ElementKind::ProjectNote => "pn",
        }
    }

    /// Root tag of a clipboard fragment carrying this kind
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Chapter => "CHAPTER",
            ElementKind::Section => "SECTION",
            ElementKind::PlotLine => "ARC",
            ElementKind::PlotPoint => "POINT",
            ElementKind::Character => "CHARACTER",
            ElementKind::Location => "LOCATION",
            ElementKind::Item => "ITEM",
            ElementKind::ProjectNote => "PROJECTNOTE",
        }
    }

    /// Id of the outline branch holding elements of this kind
    pub fn branch_root(&self) -> &'static str {
        match self {
            ElementKind::Chapter | ElementKind::Section => "CH",
            ElementKind::PlotLine | ElementKind::PlotPoint => "AC",
            ElementKind::Character => "CR",
            ElementKind::Location => "LC",
            ElementKind::Item => "IT",
            ElementKind::ProjectNote => "PN",
        }
    }

    /// Kind of the elements nested under this one in a fragment
    ///
    /// Chapters carry their sections, plot lines their plot points.
    pub fn child_kind(&self) -> Option<ElementKind> {
        match self {
            ElementKind::Chapter => Some(ElementKind::Section),
            ElementKind::PlotLine => Some(ElementKind::PlotPoint),
            _ => None,
        }
    }

    /// Default creation operation for this kind
    ///
    /// Sections map to [`Creation::Section`]; use [`Creation::for_section_type`]
    /// when the section type is known.
    pub fn creation(&self) -> Creation {
        match self {
            ElementKind::Chapter => Creation::Chapter,
            ElementKind::Section => Creation::Section,
            ElementKind::PlotLine => Creation::PlotLine,
            ElementKind::PlotPoint => Creation::PlotPoint,
            ElementKind::Character => Creation::Character,
            ElementKind::Location => Creation::Location,
            ElementKind::Item => Creation::Item,
            ElementKind::ProjectNote => Creation::ProjectNote,
        }
    }

    /// Looks up the kind for a node id prefix
    pub fn from_prefix(prefix: &str) -> Option<ElementKind> {
        Self::all().iter().copied().find(|k| k.prefix() == prefix)
    }

    /// Looks up the kind for a fragment root tag
    pub fn from_tag(tag: &str) -> Option<ElementKind> {
        Self::all().iter().copied().find(|k| k.tag() == tag)
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Chapter => "chapter",
            ElementKind::Section => "section",
            ElementKind::PlotLine => "plot line",
            ElementKind::PlotPoint => "plot point",
            ElementKind::Character => "character",
            ElementKind::Location => "location",
            ElementKind::Item => "item",
            ElementKind::ProjectNote => "project note",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ElementKind {
    type Err = IdError;

    /// Accepts a node prefix (`sc`), a fragment tag (`SECTION`) or a label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_prefix(s)
            .or_else(|| Self::from_tag(s))
            .or_else(|| {
                let lower = s.to_lowercase().replace(['_', '-'], " ");
                Self::all().iter().copied().find(|k| k.label() == lower)
            })
            .ok_or_else(|| IdError::UnknownKind(s.to_string()))
    }
}

/// Creation operation offered by the document model
///
/// One per element kind, plus [`Creation::Stage`], which produces a section
/// shell of the stage sub-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Creation {
    Chapter,
    Section,
    Stage,
    PlotLine,
    PlotPoint,
    Character,
    Location,
    Item,
    ProjectNote,
}

impl Creation {
    /// Kind of the element the operation creates
    pub fn kind(&self) -> ElementKind {
        match self {
            Creation::Chapter => ElementKind::Chapter,
            Creation::Section | Creation::Stage => ElementKind::Section,
            Creation::PlotLine => ElementKind::PlotLine,
            Creation::PlotPoint => ElementKind::PlotPoint,
            Creation::Character => ElementKind::Character,
            Creation::Location => ElementKind::Location,
            Creation::Item => ElementKind::Item,
            Creation::ProjectNote => ElementKind::ProjectNote,
        }
    }

    /// Picks section or stage creation from a section `type` value
    pub fn for_section_type(section_type: i64) -> Creation {
        if section_type > MAX_PLAIN_SECTION_TYPE {
            Creation::Stage
        } else {
            Creation::Section
        }
    }
}
