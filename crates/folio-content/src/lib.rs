//! Static content for the Folio desktop
//!
//! Everything in this crate is authored data: the ordered project table
//! shown in desktop windows and the two special panels (Notes and Photos)
//! reachable from the dock. Nothing here is computed or mutated at runtime;
//! the desktop only reads it through [`Catalog`].
//!
//! Asset fields are plain path strings. Loading and decoding them is the
//! rendering layer's job.

mod catalog;
mod panels;
mod projects;

pub use catalog::Catalog;
pub use panels::{PanelContent, PanelKind, PANELS};
pub use projects::{MediaItem, MediaKind, ProjectDescriptor, ProjectLink, PROJECTS};
