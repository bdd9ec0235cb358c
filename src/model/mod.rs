//! # Document Model
//!
//! The clipboard manager talks to the host's project model through
//! [`DocumentModel`]. The model owns every element; the manager only borrows
//! them long enough to serialize or populate one.
//!
//! [`Novel`] is a complete in-memory implementation with the typed
//! containers and outline of a novel project.
//!
//! ## Element Fragments
//!
//! | Kind | Tag | Reference tags |
//! |------|-----|----------------|
//! | Chapter | `CHAPTER` | - |
//! | Section / stage | `SECTION` | `Characters`, `Locations`, `Items`, `PlotlineNotes` |
//! | Plot line | `ARC` | `Sections` |
//! | Plot point | `POINT` | `Section` |
//! | Character | `CHARACTER` | - |
//! | Location | `LOCATION` | - |
//! | Item | `ITEM` | - |
//! | Project note | `PROJECTNOTE` | - |

mod chapter;
mod element;
mod novel;
mod outline;
mod plot;
mod section;
mod world;

use crate::domain::{Creation, ElementKind, NodeId};

pub use chapter::{Chapter, DEFAULT_CHAPTER_LEVEL};
pub use element::Element;
pub use novel::Novel;
pub use outline::Outline;
pub use plot::{PlotLine, PlotPoint};
pub use section::{Section, STAGE_TYPE};
pub use world::{Character, Item, Location, ProjectNote, WorldElement};

/// Host project model as seen by the clipboard manager
pub trait DocumentModel {
    /// Returns true while a project is loaded
    fn is_open(&self) -> bool;

    /// Looks up an element in the container for `kind`
    fn element(&self, kind: ElementKind, id: &NodeId) -> Option<&dyn Element>;

    fn element_mut(&mut self, kind: ElementKind, id: &NodeId) -> Option<&mut dyn Element>;

    /// Creates an empty element relative to `target`
    ///
    /// Returns the new node id, or `None` if the model refuses the placement.
    fn create(&mut self, creation: Creation, target: &NodeId) -> Option<NodeId>;

    /// Deletes a node and, by the model's own rules, its subtree
    fn delete(&mut self, id: &NodeId);

    /// Current structure, used to refresh views
    fn outline(&self) -> &Outline;
}
