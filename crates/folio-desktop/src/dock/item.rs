//! Dock item table

use folio_content::PanelKind;
use serde::Serialize;

/// What clicking a dock item does
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DockAction {
    /// Follow a link; `"#"` is a placeholder that goes nowhere
    Link { href: &'static str },
    /// Open a Notes or Photos window
    Panel { kind: PanelKind },
    /// Start the trash interaction
    Trash,
}

/// One entry in the dock
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockItem {
    pub id: &'static str,
    /// Tooltip text
    pub label: &'static str,
    /// Image asset path, empty for items drawn from an inline glyph
    pub icon: &'static str,
    pub action: DockAction,
    /// Draw a divider before this item
    pub separator_before: bool,
}

impl DockItem {
    /// Check if this is the trash can
    pub fn is_trash(&self) -> bool {
        matches!(self.action, DockAction::Trash)
    }
}

/// Default dock: social links, panels and mail, then the trash
pub static DEFAULT_DOCK: &[DockItem] = &[
    DockItem {
        id: "github",
        label: "GitHub",
        icon: "",
        action: DockAction::Link { href: "#" },
        separator_before: false,
    },
    DockItem {
        id: "tiktok",
        label: "TikTok",
        icon: "",
        action: DockAction::Link { href: "#" },
        separator_before: false,
    },
    DockItem {
        id: "instagram",
        label: "Instagram",
        icon: "/instagramPortfolio.webp",
        action: DockAction::Link { href: "#" },
        separator_before: false,
    },
    DockItem {
        id: "notes",
        label: "Notes",
        icon: "/notesPortfolio.avif",
        action: DockAction::Panel {
            kind: PanelKind::Notes,
        },
        separator_before: true,
    },
    DockItem {
        id: "photos",
        label: "Photos",
        icon: "/photoPortfolio.avif",
        action: DockAction::Panel {
            kind: PanelKind::Photos,
        },
        separator_before: false,
    },
    DockItem {
        id: "email",
        label: "Mail",
        icon: "/emailPortfolio.avif",
        action: DockAction::Link { href: "#" },
        separator_before: false,
    },
    DockItem {
        id: "trash",
        label: "Trash",
        icon: "/Projects/Dock/trashcan.webp",
        action: DockAction::Trash,
        separator_before: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dock_order() {
        let labels: Vec<_> = DEFAULT_DOCK.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            vec!["GitHub", "TikTok", "Instagram", "Notes", "Photos", "Mail", "Trash"]
        );
    }

    #[test]
    fn test_separators() {
        let separated: Vec<_> = DEFAULT_DOCK
            .iter()
            .filter(|i| i.separator_before)
            .map(|i| i.id)
            .collect();
        assert_eq!(separated, vec!["notes", "trash"]);
    }

    #[test]
    fn test_single_trash_at_end() {
        assert_eq!(DEFAULT_DOCK.iter().filter(|i| i.is_trash()).count(), 1);
        assert!(DEFAULT_DOCK.last().is_some_and(|i| i.is_trash()));
    }
}
