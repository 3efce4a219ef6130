//! Open window records

use folio_content::PanelKind;
use serde::Serialize;

use super::ZIndex;
use crate::math::Vec2;

/// What a window displays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WindowContent {
    /// Entry of the project table
    Project { index: usize },
    /// Notes or Photos panel from the dock
    Panel { kind: PanelKind },
}

impl WindowContent {
    /// Project table index, `None` for special panels
    pub fn project_index(&self) -> Option<usize> {
        match self {
            WindowContent::Project { index } => Some(*index),
            WindowContent::Panel { .. } => None,
        }
    }
}

/// A floating window on the desktop
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenWindow {
    /// Same as the icon or dock item that opened it
    pub id: String,
    pub title: String,
    pub content: WindowContent,
    /// Stacking order; higher is in front
    pub z_index: ZIndex,
    /// Top-left corner in viewport pixels
    pub position: Vec2,
}

/// Traffic-light buttons in the title bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleBarButton {
    Close,
    Minimize,
    Maximize,
}

impl TitleBarButton {
    /// Buttons in title-bar order, left to right
    pub fn all() -> &'static [TitleBarButton] {
        &[
            TitleBarButton::Close,
            TitleBarButton::Minimize,
            TitleBarButton::Maximize,
        ]
    }

    /// Only close does anything; the other two are decoration
    pub fn is_functional(&self) -> bool {
        matches!(self, TitleBarButton::Close)
    }

    /// Parse from string ID (case-insensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "close" => Some(TitleBarButton::Close),
            "minimize" => Some(TitleBarButton::Minimize),
            "maximize" => Some(TitleBarButton::Maximize),
            _ => None,
        }
    }
}
