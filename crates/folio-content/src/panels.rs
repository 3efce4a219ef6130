//! Static content for the non-project panels opened from the dock

use serde::Serialize;

use crate::projects::MediaItem;

/// Special panels that open in a desktop window but are not projects
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Notes,
    Photos,
}

impl PanelKind {
    /// Get all panel kinds
    pub fn all() -> &'static [PanelKind] {
        &[PanelKind::Notes, PanelKind::Photos]
    }

    /// Stable string id, also used as the window id
    pub fn id(&self) -> &'static str {
        match self {
            PanelKind::Notes => "notes",
            PanelKind::Photos => "photos",
        }
    }

    /// Window title / dock label
    pub fn label(&self) -> &'static str {
        match self {
            PanelKind::Notes => "Notes",
            PanelKind::Photos => "Photos",
        }
    }

    /// Parse from string ID (case-insensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "notes" => Some(PanelKind::Notes),
            "photos" => Some(PanelKind::Photos),
            _ => None,
        }
    }
}

/// Content shown inside a Notes or Photos window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PanelContent {
    pub kind: PanelKind,
    pub title: &'static str,
    /// Paragraphs of text, rendered in order
    pub body: &'static [&'static str],
    pub media: &'static [MediaItem],
}

/// Built-in panel content
pub static PANELS: &[PanelContent] = &[
    PanelContent {
        kind: PanelKind::Notes,
        title: "Notes",
        body: &[
            "A collection of projects spanning websites, mobile apps, networking and cybersecurity.",
            "Double-click is not needed: a single click on a desktop icon opens its window.",
            "Icons can be dragged around. The trash works too, try it.",
        ],
        media: &[],
    },
    PanelContent {
        kind: PanelKind::Photos,
        title: "Photos",
        body: &[],
        media: &[
            MediaItem::image("/projects/BGCLCV/serverRoom.jpeg", "Server Room"),
            MediaItem::image("/projects/BGCLCV/esportsRoom.webp", "Esports Room"),
            MediaItem::image("/projects/BGCLCV/gymHoop.webp", "Gym Basketball Hoop"),
            MediaItem::image("/Projects/Snake/menu.webp", "Retro Snake menu"),
        ],
    },
];
