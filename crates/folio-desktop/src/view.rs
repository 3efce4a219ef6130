//! Render snapshot
//!
//! [`DesktopView`] is everything a renderer needs for one frame, already
//! filtered by what the trash sequence allows to be seen. It serializes to
//! camelCase JSON for the browser side.

use serde::Serialize;

use crate::content::RenderableContent;
use crate::dock::DockSlot;
use crate::engine::DesktopEngine;
use crate::error::DesktopResult;
use crate::layout::{DesktopIcon, PagePresentation};
use crate::math::{Rect, Size};
use crate::timer::Millis;
use crate::trash::{TrashModal, TrashState};
use crate::window::{self, TitleBarButton, ZIndex};

/// Full-screen mock 404 shown while the page is "deleted"
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorScreen {
    pub code: &'static str,
    pub title: &'static str,
    pub footnote: &'static str,
}

/// The one error screen the desktop ever shows
pub const ERROR_SCREEN: ErrorScreen = ErrorScreen {
    code: "404",
    title: "Page Not Found",
    footnote: "Temporarily removed. Restoring shortly…",
};

/// An open trash dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalView {
    pub kind: TrashModal,
    pub title: &'static str,
    pub description: &'static str,
    pub cancel_label: &'static str,
    pub confirm_label: &'static str,
    pub destructive: bool,
}

impl From<TrashModal> for ModalView {
    fn from(kind: TrashModal) -> Self {
        Self {
            kind,
            title: kind.title(),
            description: kind.description(),
            cancel_label: kind.cancel_label(),
            confirm_label: kind.confirm_label(),
            destructive: kind.is_destructive(),
        }
    }
}

/// An open window with resolved content
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub z_index: ZIndex,
    /// On-screen frame, kept inside the viewport
    pub frame: Rect,
    pub title_bar_height: f32,
    pub buttons: &'static [TitleBarButton],
    pub content: RenderableContent<'a>,
}

/// The dock as it should be drawn
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockView {
    /// Distance from the bottom edge in pixels
    pub bottom_offset: f32,
    pub slots: Vec<DockSlot>,
    pub tooltip: Option<&'static str>,
}

/// Snapshot of the desktop for rendering
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopView<'a> {
    pub presentation: PagePresentation,
    pub viewport: Size,
    pub trash_state: TrashState,
    pub desktop_visible: bool,
    pub trash_disabled: bool,
    /// Empty while the desktop is hidden
    pub icons: Vec<DesktopIcon>,
    /// Bottom to top; empty while the desktop is hidden
    pub windows: Vec<WindowView<'a>>,
    pub modal: Option<ModalView>,
    pub error_screen: Option<ErrorScreen>,
    pub dock: DockView,
    pub quick_questions_shown: bool,
    /// When the host should call `tick` next
    pub next_deadline: Option<Millis>,
}

impl DesktopView<'_> {
    /// Serialize to JSON
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl DesktopEngine {
    /// Fire due timers, then snapshot the desktop
    pub fn view(&mut self, now: Millis) -> DesktopView<'_> {
        self.tick(now);
        self.snapshot()
    }

    /// Snapshot the desktop as of the last event, without firing timers
    pub fn snapshot(&self) -> DesktopView<'_> {
        let visible = self.desktop_visible();
        let state = self.trash_state();
        let viewport = self.viewport();

        let icons = if visible {
            self.icons().to_vec()
        } else {
            Vec::new()
        };

        let windows = if visible {
            self.windows
                .windows_by_z()
                .into_iter()
                .map(|w| WindowView {
                    id: &w.id,
                    title: &w.title,
                    z_index: w.z_index,
                    frame: window::frame_rect(w.position, viewport, &self.config.window),
                    title_bar_height: self.config.window.title_bar_height,
                    buttons: TitleBarButton::all(),
                    content: self.content.resolve(w.content),
                })
                .collect()
        } else {
            Vec::new()
        };

        DesktopView {
            presentation: self.presentation(),
            viewport,
            trash_state: state,
            desktop_visible: visible,
            trash_disabled: self.trash_disabled(),
            icons,
            windows,
            modal: state.modal().map(ModalView::from),
            error_screen: state.shows_error_screen().then_some(ERROR_SCREEN),
            dock: DockView {
                bottom_offset: self.dock_bottom_offset(),
                slots: self.dock.slots(visible),
                tooltip: self.dock.tooltip(),
            },
            quick_questions_shown: self.quick_questions_shown(),
            next_deadline: self.next_deadline(),
        }
    }
}
