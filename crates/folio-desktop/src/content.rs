//! Window content lookup
//!
//! The desktop only knows project indices and panel kinds. What a window
//! actually shows comes from a [`ContentSource`], normally the built-in
//! [`Catalog`].

use folio_content::{Catalog, PanelContent, PanelKind, ProjectDescriptor};
use serde::Serialize;

use crate::window::WindowContent;

/// Title shown when a window's content cannot be resolved
pub const UNAVAILABLE_TITLE: &str = "Project details not available";

/// Resolves window content
pub trait ContentSource {
    /// Project descriptor at `index`, if the table has one
    fn project(&self, index: usize) -> Option<&ProjectDescriptor>;

    /// Static content for a Notes or Photos panel
    fn panel(&self, kind: PanelKind) -> Option<&PanelContent>;

    /// Resolve what a window should render
    ///
    /// Never fails: an unknown project index yields
    /// [`RenderableContent::Unavailable`].
    fn resolve(&self, content: WindowContent) -> RenderableContent<'_> {
        let resolved = match content {
            WindowContent::Project { index } => self
                .project(index)
                .map(|project| RenderableContent::Project { project }),
            WindowContent::Panel { kind } => self
                .panel(kind)
                .map(|panel| RenderableContent::Panel { panel }),
        };
        resolved.unwrap_or_else(|| {
            tracing::warn!(?content, "window content not available");
            RenderableContent::Unavailable {
                title: UNAVAILABLE_TITLE,
            }
        })
    }
}

impl ContentSource for Catalog {
    fn project(&self, index: usize) -> Option<&ProjectDescriptor> {
        Catalog::project(self, index)
    }

    fn panel(&self, kind: PanelKind) -> Option<&PanelContent> {
        Catalog::panel(self, kind)
    }
}

/// Content ready to be rendered inside a window
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderableContent<'a> {
    Project { project: &'a ProjectDescriptor },
    Panel { panel: &'a PanelContent },
    /// Placeholder for an index the table does not contain
    Unavailable { title: &'static str },
}

impl RenderableContent<'_> {
    /// Check if this is the "not available" placeholder
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RenderableContent::Unavailable { .. })
    }
}
