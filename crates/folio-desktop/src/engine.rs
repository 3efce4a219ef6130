//! The desktop engine
//!
//! One owner for every piece of mutable desktop state. The host forwards
//! viewport sizes, pointer events, dock clicks and trash dialog buttons,
//! always together with the current time for anything timer-related, and
//! reads back a [`DesktopView`](crate::view::DesktopView) to render.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    DesktopEngine                     │
//! │  ┌────────────┐ ┌───────────────┐ ┌──────────────┐   │
//! │  │   icons    │ │ WindowManager │ │ TrashMachine │   │
//! │  │ (layout)   │ │  (z-order)    │ │  (timers)    │   │
//! │  └────────────┘ └───────────────┘ └──────────────┘   │
//! │  ┌─────────────┐ ┌──────┐ ┌──────────────────────┐   │
//! │  │ InputRouter │ │ Dock │ │ ContentSource        │   │
//! │  │ (drag)      │ │      │ │ (projects, panels)   │   │
//! │  └─────────────┘ └──────┘ └──────────────────────┘   │
//! └──────────────────────────────────────────────────────┘
//! ```

use folio_content::{Catalog, PanelKind};
use tracing::{debug, info, warn};

use crate::config::DesktopConfig;
use crate::content::{ContentSource, RenderableContent};
use crate::dock::{bottom_offset, Dock, DockItem, DockOutcome, DEFAULT_DOCK};
use crate::error::{DesktopError, DesktopResult};
use crate::input::{DragEnd, DragMove, InputResult, InputRouter};
use crate::layout::{self, DesktopIcon, IconConfig, PagePresentation, DESKTOP_ICONS};
use crate::math::{Size, Vec2};
use crate::timer::Millis;
use crate::trash::{TrashMachine, TrashState, TrashTrigger};
use crate::window::{self, OpenOutcome, OpenWindow, TitleBarButton, WindowContent, WindowManager};

/// Desktop engine coordinating icons, windows, the dock and the trash
pub struct DesktopEngine {
    pub(crate) config: DesktopConfig,
    /// Last size reported by the host; may be unmeasured
    viewport: Size,
    icon_table: &'static [IconConfig],
    icons: Vec<DesktopIcon>,
    pub(crate) windows: WindowManager,
    pub(crate) trash: TrashMachine,
    pub(crate) dock: Dock,
    input: InputRouter,
    pub(crate) content: Box<dyn ContentSource>,
    show_quick_questions: bool,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create an engine with the default configuration and built-in content
    ///
    /// Icons are laid out against the reference viewport until the host
    /// calls [`resize`](Self::resize).
    pub fn new() -> Self {
        Self::build(DesktopConfig::default())
    }

    /// Create an engine with a custom configuration
    pub fn with_config(config: DesktopConfig) -> DesktopResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: DesktopConfig) -> Self {
        let mut engine = Self {
            windows: WindowManager::new(&config.window),
            trash: TrashMachine::new(config.trash.clone()),
            input: InputRouter::new(config.gesture.clone()),
            dock: Dock::new(DEFAULT_DOCK),
            content: Box::new(Catalog::builtin()),
            viewport: Size::default(),
            icon_table: DESKTOP_ICONS,
            icons: Vec::new(),
            show_quick_questions: true,
            config,
        };
        engine.relayout();
        engine
    }

    /// Replace the content source
    pub fn with_content(mut self, content: Box<dyn ContentSource>) -> Self {
        self.content = content;
        self
    }

    /// Replace the icon table
    pub fn with_icons(mut self, icons: &'static [IconConfig]) -> Self {
        self.icon_table = icons;
        self.relayout();
        self
    }

    /// Replace the dock items
    pub fn with_dock(mut self, items: &'static [DockItem]) -> Self {
        self.dock = Dock::new(items);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    // =========================================================================
    // Viewport and icons
    // =========================================================================

    /// Viewport changed size
    ///
    /// Every icon goes back to its configured position for the new size;
    /// icons the visitor dragged are reset. Windows stay where they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
        self.input.cancel();
        self.relayout();
        debug!(width, height, "desktop resized");
    }

    /// Viewport the layout was computed for
    pub fn viewport(&self) -> Size {
        layout::effective_viewport(self.viewport, &self.config)
    }

    /// Desktop on wide screens, card carousel on phones
    pub fn presentation(&self) -> PagePresentation {
        PagePresentation::for_width(self.viewport.width, self.config.mobile_breakpoint)
    }

    /// Icons at their current positions
    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    /// Get an icon by ID
    pub fn icon(&self, id: &str) -> Option<&DesktopIcon> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    /// Move an icon's resting position
    pub fn change_icon_position(&mut self, id: &str, x: f32, y: f32) -> DesktopResult<()> {
        let icon = self
            .icons
            .iter_mut()
            .find(|icon| icon.id == id)
            .ok_or_else(|| icon_not_found(id))?;
        icon.position = Vec2::new(x, y);
        debug!(icon_id = id, x, y, "icon moved");
        Ok(())
    }

    fn relayout(&mut self) {
        self.icons = layout::layout_icons(self.icon_table, self.viewport, &self.config);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open the window for an icon clicked at `at`
    ///
    /// Returns `Ok(None)` while the desktop is hidden by the trash sequence.
    pub fn open_icon(&mut self, id: &str, at: Vec2) -> DesktopResult<Option<OpenOutcome>> {
        let icon = *self
            .icon(id)
            .ok_or_else(|| icon_not_found(id))?;
        if self.hidden("icon open") {
            return Ok(None);
        }
        let content = WindowContent::Project {
            index: icon.project_index,
        };
        Ok(Some(self.windows.open(icon.id, icon.title, content, at)))
    }

    /// Open the Notes or Photos window, centred in the viewport
    ///
    /// Returns `None` while the desktop is hidden by the trash sequence.
    pub fn open_panel(&mut self, kind: PanelKind) -> Option<OpenOutcome> {
        if self.hidden("panel open") {
            return None;
        }
        let viewport = self.viewport();
        let frame = window::frame_size(viewport, &self.config.window);
        let position = Vec2::new(
            (viewport.width - frame.width) / 2.0,
            (viewport.height - frame.height) / 2.0,
        );
        Some(self.windows.open_at(
            kind.id(),
            kind.label(),
            WindowContent::Panel { kind },
            position.round(),
        ))
    }

    /// Bring a window to the front
    ///
    /// A no-op while the desktop is hidden.
    pub fn focus_window(&mut self, id: &str) -> DesktopResult<()> {
        if !self.windows.is_open(id) {
            return Err(window_not_found(id));
        }
        if !self.hidden("window focus") {
            self.windows.focus(id);
        }
        Ok(())
    }

    /// Close a window
    pub fn close_window(&mut self, id: &str) -> DesktopResult<()> {
        if self.windows.close(id) {
            Ok(())
        } else {
            Err(window_not_found(id))
        }
    }

    /// Move a window, keeping its frame inside the viewport
    ///
    /// A no-op while the desktop is hidden.
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) -> DesktopResult<()> {
        if !self.windows.is_open(id) {
            return Err(window_not_found(id));
        }
        if !self.hidden("window move") {
            let rect = window::frame_rect(Vec2::new(x, y), self.viewport(), &self.config.window);
            self.windows.move_window(id, rect.position());
        }
        Ok(())
    }

    /// A title bar button was pressed. Returns true if the window closed.
    pub fn press_title_button(&mut self, id: &str, button: TitleBarButton) -> DesktopResult<bool> {
        if !self.windows.is_open(id) {
            return Err(window_not_found(id));
        }
        if !button.is_functional() {
            return Ok(false);
        }
        self.close_window(id)?;
        Ok(true)
    }

    /// Get an open window
    pub fn window(&self, id: &str) -> Option<&OpenWindow> {
        self.windows.get(id)
    }

    /// Open windows from bottom to top
    pub fn windows(&self) -> Vec<&OpenWindow> {
        self.windows.windows_by_z()
    }

    /// What an open window should render
    pub fn window_content(&self, id: &str) -> DesktopResult<RenderableContent<'_>> {
        let window = self
            .windows
            .get(id)
            .ok_or_else(|| window_not_found(id))?;
        Ok(self.content.resolve(window.content))
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Pointer down on a desktop icon
    pub fn handle_icon_pointer_down(&mut self, id: &str, x: f32, y: f32, now: Millis) -> InputResult {
        if !self.desktop_visible() {
            return InputResult::Unhandled;
        }
        match self.icon(id) {
            Some(icon) => {
                let position = icon.position;
                self.input
                    .start_icon_drag(id, position, Vec2::new(x, y), now);
                InputResult::Handled
            }
            None => {
                warn!(icon_id = id, "pointer down on unknown icon");
                InputResult::Unhandled
            }
        }
    }

    /// Pointer down anywhere on a window: focus it, and start a move when
    /// the press is on the title bar
    pub fn handle_window_pointer_down(&mut self, id: &str, x: f32, y: f32) -> InputResult {
        if !self.desktop_visible() {
            return InputResult::Unhandled;
        }
        let Some(open) = self.windows.get(id) else {
            return InputResult::Unhandled;
        };
        let rect = window::frame_rect(open.position, self.viewport(), &self.config.window);
        let on_title_bar = y >= rect.y && y < rect.y + self.config.window.title_bar_height;

        self.windows.focus(id);
        if on_title_bar {
            self.input
                .start_window_drag(id, rect.position(), Vec2::new(x, y));
        }
        InputResult::Handled
    }

    /// Pointer moved
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let viewport = self.viewport();
        let window_lost = match self.input.drag_to(Vec2::new(x, y)) {
            Some(DragMove::Icon { icon_id, position }) => {
                if let Some(icon) = self.icons.iter_mut().find(|icon| icon.id == icon_id) {
                    icon.position = position;
                }
                false
            }
            Some(DragMove::Window {
                window_id,
                position,
            }) => {
                let rect = window::frame_rect(position, viewport, &self.config.window);
                !self.windows.move_window(window_id, rect.position())
            }
            None => return InputResult::Unhandled,
        };

        // A window closed mid-drag just ends the drag
        if window_lost {
            self.input.cancel();
        }
        InputResult::Handled
    }

    /// Pointer released
    pub fn handle_pointer_up(&mut self, x: f32, y: f32, now: Millis) -> InputResult {
        let Some(end) = self.input.end_drag(Vec2::new(x, y), now) else {
            return InputResult::Unhandled;
        };

        let result = match end {
            DragEnd::Click { icon_id, at } => self.open_icon(&icon_id, at).map(|_| ()),
            DragEnd::IconMoved { icon_id, position } => {
                self.change_icon_position(&icon_id, position.x, position.y)
            }
            DragEnd::WindowMoved { .. } => Ok(()),
        };
        if let Err(err) = result {
            warn!(%err, "drag ended on a missing target");
        }
        InputResult::Handled
    }

    // =========================================================================
    // Dock
    // =========================================================================

    /// A dock item was clicked
    ///
    /// Panels and the trash are handled here; the returned outcome tells the
    /// host whether it has to navigate somewhere.
    pub fn dock_click(&mut self, id: &str, now: Millis) -> DesktopResult<DockOutcome> {
        self.trash.advance(now);
        let outcome = self
            .dock
            .activate(id, self.desktop_visible(), self.trash_disabled())
            .inspect_err(|_| warn!(item = id, "click on unknown dock item"))?;

        match outcome {
            DockOutcome::OpenPanel { kind } => {
                self.open_panel(kind);
            }
            // The trash only reacts from idle; any open dialog keeps it busy
            DockOutcome::Trash if !self.trash.click(now) => {
                return Ok(DockOutcome::Nothing);
            }
            DockOutcome::Trash | DockOutcome::Nothing | DockOutcome::Navigate { .. } => {}
        }
        Ok(outcome)
    }

    /// Pointer entered a dock item
    pub fn dock_hover(&mut self, id: &str) -> DesktopResult<()> {
        self.dock.hover(id)
    }

    /// Pointer left the dock
    pub fn dock_unhover(&mut self) {
        self.dock.unhover();
    }

    /// Show or hide the quick-questions prompt under the dock
    pub fn toggle_quick_questions(&mut self) -> bool {
        self.show_quick_questions = !self.show_quick_questions;
        debug!(shown = self.show_quick_questions, "quick questions toggled");
        self.show_quick_questions
    }

    /// Check if the quick-questions prompt is shown
    pub fn quick_questions_shown(&self) -> bool {
        self.show_quick_questions
    }

    /// Dock distance from the bottom edge, in pixels
    pub fn dock_bottom_offset(&self) -> f32 {
        bottom_offset(&self.config.dock, self.show_quick_questions)
    }

    // =========================================================================
    // Trash
    // =========================================================================

    /// Forward a trash dialog action. Returns true if the state changed.
    pub fn trash_trigger(&mut self, trigger: TrashTrigger, now: Millis) -> bool {
        let changed = self.trash.handle(trigger, now);
        if changed && !self.desktop_visible() {
            self.input.cancel();
        }
        changed
    }

    /// Escape key: dismisses whichever trash dialog is open
    pub fn handle_escape(&mut self, now: Millis) -> bool {
        self.trash_trigger(TrashTrigger::Dismiss, now)
    }

    /// Click on the dialog backdrop
    pub fn handle_backdrop_click(&mut self, now: Millis) -> bool {
        self.trash_trigger(TrashTrigger::Dismiss, now)
    }

    /// Current trash state
    pub fn trash_state(&self) -> TrashState {
        self.trash.state()
    }

    /// Icons, windows and non-trash dock items are shown
    pub fn desktop_visible(&self) -> bool {
        self.trash.desktop_visible()
    }

    /// The trash ignores clicks during its animations
    pub fn trash_disabled(&self) -> bool {
        self.trash.trash_disabled()
    }

    fn hidden(&self, action: &str) -> bool {
        let hidden = !self.desktop_visible();
        if hidden {
            debug!(action, state = self.trash.state().id(), "desktop hidden, ignoring");
        }
        hidden
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Fire timers due by `now`. Returns true if anything changed.
    pub fn tick(&mut self, now: Millis) -> bool {
        let changed = self.trash.advance(now);
        if changed {
            debug!(state = self.trash.state().id(), "trash advanced");
            if !self.desktop_visible() {
                self.input.cancel();
            }
        }
        changed
    }

    /// When the host should call [`tick`](Self::tick) next, if at all
    pub fn next_deadline(&self) -> Option<Millis> {
        self.trash.next_deadline()
    }

    /// The desktop is being torn down: drop every pending timer
    pub fn unmount(&mut self) {
        self.trash.unmount();
        self.input.cancel();
        info!(windows = self.windows.len(), "desktop unmounted");
    }
}

fn window_not_found(id: &str) -> DesktopError {
    warn!(window_id = id, "unknown window");
    DesktopError::WindowNotFound(id.to_string())
}

fn icon_not_found(id: &str) -> DesktopError {
    warn!(icon_id = id, "unknown icon");
    DesktopError::IconNotFound(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dock::DockAction;

    fn assert_near(actual: Vec2, expected: Vec2) {
        assert!(
            actual.distance(expected) < 0.01,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new();
        engine.resize(1920.0, 1080.0);
        engine
    }

    #[test]
    fn test_initial_layout_uses_reference_viewport() {
        let engine = DesktopEngine::new();
        assert_eq!(engine.viewport(), Size::new(1200.0, 800.0));
        assert_eq!(engine.icons().len(), DESKTOP_ICONS.len());
        assert_eq!(engine.presentation(), PagePresentation::Desktop);
    }

    #[test]
    fn test_synto_position_at_1080p() {
        let engine = engine();
        let synto = engine.icon("synto").unwrap();
        assert!((synto.position.x - 172.8).abs() < 0.01);
        assert!((synto.position.y - 183.6).abs() < 0.01);
    }

    #[test]
    fn test_open_icon_offsets_from_click() {
        let mut engine = engine();
        let outcome = engine.open_icon("synto", Vec2::new(200.0, 300.0)).unwrap();
        assert_eq!(outcome, Some(OpenOutcome::Opened));

        let window = engine.window("synto").unwrap();
        assert_eq!(window.title, "Synto");
        assert_eq!(window.position, Vec2::new(250.0, 250.0));
        assert_eq!(window.content, WindowContent::Project { index: 0 });
    }

    #[test]
    fn test_open_unknown_icon() {
        let mut engine = engine();
        assert_eq!(
            engine.open_icon("ghost", Vec2::ZERO),
            Err(DesktopError::IconNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_focus_unknown_window() {
        let mut engine = engine();
        assert!(engine.focus_window("ghost").is_err());
        assert!(engine.close_window("ghost").is_err());
        assert!(engine.move_window("ghost", 0.0, 0.0).is_err());
    }

    #[test]
    fn test_move_window_is_clamped() {
        let mut engine = engine();
        engine.open_icon("synto", Vec2::ZERO).unwrap();
        engine.move_window("synto", 5000.0, -300.0).unwrap();
        assert_eq!(engine.window("synto").unwrap().position, Vec2::new(1020.0, 0.0));
    }

    #[test]
    fn test_title_buttons() {
        let mut engine = engine();
        engine.open_icon("synto", Vec2::ZERO).unwrap();
        assert_eq!(engine.press_title_button("synto", TitleBarButton::Minimize), Ok(false));
        assert_eq!(engine.press_title_button("synto", TitleBarButton::Maximize), Ok(false));
        assert!(engine.window("synto").is_some());

        assert_eq!(engine.press_title_button("synto", TitleBarButton::Close), Ok(true));
        assert!(engine.window("synto").is_none());
    }

    #[test]
    fn test_click_gesture_opens_window() {
        let mut engine = engine();
        let icon = *engine.icon("minishell").unwrap();
        let press = icon.position + Vec2::new(10.0, 10.0);

        engine.handle_icon_pointer_down("minishell", press.x, press.y, 1000.0);
        engine.handle_pointer_up(press.x + 1.0, press.y, 1100.0);

        let window = engine.window("minishell").unwrap();
        assert_near(window.position, press + Vec2::new(51.0, -50.0));
        // A click does not move the icon
        assert_eq!(engine.icon("minishell").unwrap().position, icon.position);
    }

    #[test]
    fn test_drag_gesture_moves_icon() {
        let mut engine = engine();
        let icon = *engine.icon("minishell").unwrap();
        let press = icon.position + Vec2::new(10.0, 10.0);

        engine.handle_icon_pointer_down("minishell", press.x, press.y, 1000.0);
        engine.handle_pointer_move(press.x + 100.0, press.y + 40.0);
        assert_near(
            engine.icon("minishell").unwrap().position,
            icon.position + Vec2::new(100.0, 40.0),
        );
        engine.handle_pointer_up(press.x + 200.0, press.y + 50.0, 1500.0);

        assert!(engine.window("minishell").is_none());
        assert_near(
            engine.icon("minishell").unwrap().position,
            icon.position + Vec2::new(200.0, 50.0),
        );
    }

    #[test]
    fn test_title_bar_drag_moves_window() {
        let mut engine = engine();
        engine.open_icon("synto", Vec2::new(150.0, 250.0)).unwrap();
        engine.open_icon("fitgear", Vec2::new(600.0, 600.0)).unwrap();

        // Press on synto's title bar focuses it and starts a move
        assert_eq!(
            engine.handle_window_pointer_down("synto", 210.0, 210.0),
            InputResult::Handled
        );
        assert_eq!(engine.windows.topmost().unwrap().id, "synto");

        engine.handle_pointer_move(260.0, 240.0);
        assert_eq!(engine.window("synto").unwrap().position, Vec2::new(250.0, 230.0));
        engine.handle_pointer_up(260.0, 240.0, 0.0);
        assert!(engine.handle_pointer_move(0.0, 0.0) == InputResult::Unhandled);
    }

    #[test]
    fn test_body_press_focuses_without_drag() {
        let mut engine = engine();
        engine.open_icon("synto", Vec2::new(150.0, 250.0)).unwrap();
        engine.open_icon("fitgear", Vec2::new(600.0, 600.0)).unwrap();

        engine.handle_window_pointer_down("synto", 300.0, 500.0);
        assert_eq!(engine.windows.topmost().unwrap().id, "synto");
        assert_eq!(engine.handle_pointer_move(400.0, 600.0), InputResult::Unhandled);
    }

    #[test]
    fn test_dock_opens_panels() {
        let mut engine = engine();
        let outcome = engine.dock_click("notes", 0.0).unwrap();
        assert_eq!(
            outcome,
            DockOutcome::OpenPanel {
                kind: PanelKind::Notes
            }
        );

        let window = engine.window("notes").unwrap();
        assert_eq!(window.position, Vec2::new(510.0, 190.0));
        assert!(matches!(
            engine.window_content("notes"),
            Ok(RenderableContent::Panel { .. })
        ));
    }

    #[test]
    fn test_dock_trash_starts_sequence() {
        let mut engine = engine();
        assert_eq!(engine.dock_click("trash", 0.0), Ok(DockOutcome::Trash));
        assert_eq!(engine.trash_state(), TrashState::ConfirmEmpty);

        assert!(engine.handle_escape(10.0));
        assert_eq!(engine.trash_state(), TrashState::Idle);
    }

    #[test]
    fn test_hidden_desktop_ignores_icons() {
        let mut engine = engine();
        engine.dock_click("trash", 0.0).unwrap();
        engine.trash_trigger(TrashTrigger::Confirm, 0.0);
        assert!(!engine.desktop_visible());

        assert_eq!(engine.open_icon("synto", Vec2::ZERO), Ok(None));
        assert_eq!(
            engine.handle_icon_pointer_down("synto", 0.0, 0.0, 0.0),
            InputResult::Unhandled
        );
        assert_eq!(engine.dock_click("notes", 10.0), Ok(DockOutcome::Nothing));
        // Trash is disabled while emptying
        assert_eq!(engine.dock_click("trash", 10.0), Ok(DockOutcome::Nothing));
    }

    #[test]
    fn test_hidden_desktop_freezes_windows() {
        let mut engine = engine();
        engine.open_icon("synto", Vec2::new(150.0, 250.0)).unwrap();
        engine.open_icon("fitgear", Vec2::new(600.0, 600.0)).unwrap();
        engine.dock_click("trash", 0.0).unwrap();
        engine.trash_trigger(TrashTrigger::Confirm, 0.0);

        // Press on synto's title bar while emptying
        assert_eq!(
            engine.handle_window_pointer_down("synto", 210.0, 210.0),
            InputResult::Unhandled
        );
        assert_eq!(engine.handle_pointer_move(900.0, 400.0), InputResult::Unhandled);
        assert_eq!(engine.window("synto").unwrap().z_index, 100);
        assert_eq!(engine.window("synto").unwrap().position, Vec2::new(200.0, 200.0));

        engine.focus_window("synto").unwrap();
        engine.move_window("synto", 0.0, 0.0).unwrap();
        assert_eq!(engine.windows.topmost().unwrap().id, "fitgear");
        assert_eq!(engine.window("synto").unwrap().position, Vec2::new(200.0, 200.0));

        assert_eq!(engine.open_panel(PanelKind::Photos), None);
        assert!(engine.window("photos").is_none());
        assert!(engine.focus_window("ghost").is_err());
    }

    #[test]
    fn test_dock_trash_ignored_while_dialog_open() {
        let mut engine = engine();
        engine.dock_click("trash", 0.0).unwrap();
        assert_eq!(engine.dock_click("trash", 10.0), Ok(DockOutcome::Nothing));
        assert_eq!(engine.trash_state(), TrashState::ConfirmEmpty);

        engine.trash_trigger(TrashTrigger::Confirm, 20.0);
        engine.tick(1_470.0);
        assert_eq!(engine.trash_state(), TrashState::ConfirmDelete);
        assert_eq!(engine.dock_click("trash", 1_500.0), Ok(DockOutcome::Nothing));
        assert_eq!(engine.trash_state(), TrashState::ConfirmDelete);
    }

    #[test]
    fn test_windows_survive_trash_sequence() {
        let mut engine = engine();
        engine.open_icon("synto", Vec2::ZERO).unwrap();
        engine.dock_click("trash", 0.0).unwrap();
        engine.trash_trigger(TrashTrigger::Confirm, 0.0);
        engine.tick(1450.0);
        engine.trash_trigger(TrashTrigger::ConfirmDelete, 1500.0);
        engine.tick(1500.0 + 6200.0);

        assert_eq!(engine.trash_state(), TrashState::Idle);
        assert!(engine.window("synto").is_some());
    }

    #[test]
    fn test_resize_resets_dragged_icons() {
        let mut engine = engine();
        engine.change_icon_position("synto", 1.0, 2.0).unwrap();
        engine.resize(1920.0, 1080.0);
        let synto = engine.icon("synto").unwrap();
        assert!((synto.position.x - 172.8).abs() < 0.01);
    }

    #[test]
    fn test_presentation_follows_width() {
        let mut engine = engine();
        engine.resize(500.0, 900.0);
        assert_eq!(engine.presentation(), PagePresentation::Carousel);
        engine.resize(768.0, 900.0);
        assert_eq!(engine.presentation(), PagePresentation::Desktop);
    }

    #[test]
    fn test_quick_questions_toggle() {
        let mut engine = engine();
        assert!((engine.dock_bottom_offset() - 260.0).abs() < 0.001);
        assert!(!engine.toggle_quick_questions());
        assert!((engine.dock_bottom_offset() - 140.0).abs() < 0.001);
    }

    #[test]
    fn test_unmount_cancels_timers() {
        let mut engine = engine();
        engine.dock_click("trash", 0.0).unwrap();
        engine.trash_trigger(TrashTrigger::Confirm, 0.0);
        assert!(engine.next_deadline().is_some());

        engine.unmount();
        assert_eq!(engine.next_deadline(), None);
        assert!(!engine.tick(100_000.0));
    }

    #[test]
    fn test_custom_dock() {
        static DOCK: &[DockItem] = &[DockItem {
            id: "mail",
            label: "Mail",
            icon: "",
            action: DockAction::Link {
                href: "mailto:hi@example.com",
            },
            separator_before: false,
        }];
        let mut engine = engine().with_dock(DOCK);
        assert!(matches!(
            engine.dock_click("mail", 0.0),
            Ok(DockOutcome::Navigate { .. })
        ));
        assert_eq!(
            engine.dock_click("trash", 0.0),
            Err(DesktopError::DockItemNotFound("trash".to_string()))
        );
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = DesktopConfig {
            edge_margin: -1.0,
            ..DesktopConfig::default()
        };
        assert!(DesktopEngine::with_config(config).is_err());
    }
}
