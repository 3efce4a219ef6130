//! Lookup over the static tables

use crate::panels::{PanelContent, PanelKind, PANELS};
use crate::projects::{ProjectDescriptor, PROJECTS};

/// Read-only view over a project table and a set of panels
///
/// The built-in catalog points at [`PROJECTS`] and [`PANELS`]; tests and
/// alternative sites can build one over their own static tables.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    projects: &'static [ProjectDescriptor],
    panels: &'static [PanelContent],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Create a catalog over custom tables
    pub const fn new(
        projects: &'static [ProjectDescriptor],
        panels: &'static [PanelContent],
    ) -> Self {
        Self { projects, panels }
    }

    /// The site's own content
    pub fn builtin() -> Self {
        Self::new(PROJECTS, PANELS)
    }

    /// Project at `index`, if the table has one
    pub fn project(&self, index: usize) -> Option<&'static ProjectDescriptor> {
        self.projects.get(index)
    }

    /// All projects in display order
    pub fn projects(&self) -> &'static [ProjectDescriptor] {
        self.projects
    }

    /// Content for a special panel
    pub fn panel(&self, kind: PanelKind) -> Option<&'static PanelContent> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    /// Number of projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if the project table is empty
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
