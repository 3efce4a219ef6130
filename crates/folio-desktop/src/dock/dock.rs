//! Dock state, click handling and reveal timing

use folio_content::PanelKind;
use serde::Serialize;
use tracing::{debug, trace};

use super::{DockAction, DockItem, DEFAULT_DOCK};
use crate::config::DockSettings;
use crate::error::{DesktopError, DesktopResult};

/// Where a followed link opens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkTarget {
    /// Replace the current page (`mailto:` links)
    SameTab,
    NewTab,
}

/// What the host should do after a dock click
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DockOutcome {
    /// Placeholder link, hidden item or disabled trash
    Nothing,
    Navigate {
        href: &'static str,
        target: LinkTarget,
    },
    OpenPanel { kind: PanelKind },
    /// Trash clicked while enabled
    Trash,
}

/// A dock item as it should be drawn right now
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockSlot {
    pub item: DockItem,
    /// Hidden items are transparent and ignore the pointer
    pub visible: bool,
    /// Delay before the show/hide animation starts, in seconds
    pub transition_delay: f32,
    pub tooltip: bool,
}

/// Animation delay for the `index`-th non-trash item, in seconds
///
/// Items pop in left to right when the desktop comes back and fade out
/// left to right, a little slower, when it goes away.
pub fn stagger_delay(index: usize, showing: bool) -> f32 {
    let i = index as f32;
    if showing {
        0.3 + i * 0.05
    } else {
        0.48 + i * 0.08
    }
}

/// Distance of the dock from the bottom edge, in pixels
pub fn bottom_offset(settings: &DockSettings, quick_questions_shown: bool) -> f32 {
    if quick_questions_shown {
        settings.bottom_with_prompt
    } else {
        settings.bottom_without_prompt
    }
}

/// The dock
#[derive(Clone, Debug)]
pub struct Dock {
    items: &'static [DockItem],
    hovered: Option<&'static str>,
}

impl Default for Dock {
    fn default() -> Self {
        Self::new(DEFAULT_DOCK)
    }
}

impl Dock {
    /// Create a dock over a fixed item table
    pub fn new(items: &'static [DockItem]) -> Self {
        Self {
            items,
            hovered: None,
        }
    }

    /// Items in display order
    pub fn items(&self) -> &'static [DockItem] {
        self.items
    }

    /// Get an item by ID
    pub fn get(&self, id: &str) -> Option<&'static DockItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Pointer entered an item
    pub fn hover(&mut self, id: &str) -> DesktopResult<()> {
        let item = self
            .get(id)
            .ok_or_else(|| DesktopError::DockItemNotFound(id.to_string()))?;
        trace!(item = item.id, "dock hover");
        self.hovered = Some(item.id);
        Ok(())
    }

    /// Pointer left the dock
    pub fn unhover(&mut self) {
        self.hovered = None;
    }

    /// Label of the hovered item
    pub fn tooltip(&self) -> Option<&'static str> {
        self.hovered
            .and_then(|id| self.get(id))
            .map(|item| item.label)
    }

    /// Resolve a click on a dock item
    ///
    /// Non-trash items are hidden while the desktop is hidden and cannot be
    /// clicked. The trash ignores clicks while it is disabled.
    pub fn activate(
        &self,
        id: &str,
        desktop_visible: bool,
        trash_disabled: bool,
    ) -> DesktopResult<DockOutcome> {
        let item = self
            .get(id)
            .ok_or_else(|| DesktopError::DockItemNotFound(id.to_string()))?;

        let outcome = match item.action {
            DockAction::Trash if trash_disabled => DockOutcome::Nothing,
            DockAction::Trash => DockOutcome::Trash,
            _ if !desktop_visible => DockOutcome::Nothing,
            DockAction::Panel { kind } => DockOutcome::OpenPanel { kind },
            DockAction::Link { href } => link_outcome(href),
        };

        debug!(item = item.id, ?outcome, "dock click");
        Ok(outcome)
    }

    /// Every item with its current visibility, delay and tooltip
    pub fn slots(&self, desktop_visible: bool) -> Vec<DockSlot> {
        let mut stagger_index = 0;
        self.items
            .iter()
            .map(|item| {
                let (visible, transition_delay) = if item.is_trash() {
                    (true, 0.0)
                } else {
                    let delay = stagger_delay(stagger_index, desktop_visible);
                    stagger_index += 1;
                    (desktop_visible, delay)
                };
                DockSlot {
                    item: *item,
                    visible,
                    transition_delay,
                    tooltip: self.hovered == Some(item.id),
                }
            })
            .collect()
    }
}

fn link_outcome(href: &'static str) -> DockOutcome {
    if href.is_empty() || href == "#" {
        DockOutcome::Nothing
    } else if href.starts_with("mailto:") {
        DockOutcome::Navigate {
            href,
            target: LinkTarget::SameTab,
        }
    } else {
        DockOutcome::Navigate {
            href,
            target: LinkTarget::NewTab,
        }
    }
}
