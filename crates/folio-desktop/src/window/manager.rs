//! Window manager: open, focus, close and z-order

use tracing::{debug, trace};

use super::{OpenWindow, WindowContent, ZIndex};
use crate::config::WindowSettings;
use crate::math::Vec2;

/// Result of [`WindowManager::open`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new window was created
    Opened,
    /// The window was already open and was brought to the front
    Focused,
}

/// Tracks open windows and hands out z-indices
///
/// z-indices only ever grow during a session, so whichever window was
/// opened or focused last is strictly on top. Closing a window leaves the
/// others' z-indices untouched.
#[derive(Clone, Debug)]
pub struct WindowManager {
    /// Windows in the order they were opened
    windows: Vec<OpenWindow>,
    next_z_index: ZIndex,
    open_offset: Vec2,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(&WindowSettings::default())
    }
}

impl WindowManager {
    /// Create an empty window manager
    pub fn new(settings: &WindowSettings) -> Self {
        Self {
            windows: Vec::new(),
            next_z_index: settings.z_index_start,
            open_offset: settings.open_offset,
        }
    }

    /// Open a window, or bring it to the front if `id` is already open
    ///
    /// New windows are placed at `origin` (the click point) shifted by the
    /// configured offset so they don't sit exactly on top of the icon.
    pub fn open(
        &mut self,
        id: &str,
        title: &str,
        content: WindowContent,
        origin: Vec2,
    ) -> OpenOutcome {
        let position = origin + self.open_offset;
        self.open_at(id, title, content, position)
    }

    /// Open a window with its top-left corner exactly at `position`, or
    /// bring it to the front if `id` is already open
    pub fn open_at(
        &mut self,
        id: &str,
        title: &str,
        content: WindowContent,
        position: Vec2,
    ) -> OpenOutcome {
        if self.focus(id) {
            return OpenOutcome::Focused;
        }

        let z_index = self.take_z_index();
        debug!(window_id = %id, z_index, x = position.x, y = position.y, "opening window");

        self.windows.push(OpenWindow {
            id: id.to_string(),
            title: title.to_string(),
            content,
            z_index,
            position,
        });
        OpenOutcome::Opened
    }

    /// Bring a window to the front. Returns false if it is not open.
    pub fn focus(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let z_index = self.take_z_index();
        self.windows[index].z_index = z_index;
        trace!(window_id = %id, z_index, "focused window");
        true
    }

    /// Close a window. Returns false if it is not open.
    pub fn close(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.windows.remove(index);
        debug!(window_id = %id, remaining = self.windows.len(), "closed window");
        true
    }

    /// Set a window's top-left corner. Returns false if it is not open.
    pub fn move_window(&mut self, id: &str, position: Vec2) -> bool {
        match self.windows.iter_mut().find(|w| w.id == id) {
            Some(window) => {
                window.position = position;
                true
            }
            None => false,
        }
    }

    /// Get an open window
    pub fn get(&self, id: &str) -> Option<&OpenWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Check if a window is open
    pub fn is_open(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Windows in the order they were opened
    pub fn windows(&self) -> &[OpenWindow] {
        &self.windows
    }

    /// Windows from bottom to top
    pub fn windows_by_z(&self) -> Vec<&OpenWindow> {
        let mut sorted: Vec<_> = self.windows.iter().collect();
        sorted.sort_by_key(|w| w.z_index);
        sorted
    }

    /// The frontmost window
    pub fn topmost(&self) -> Option<&OpenWindow> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    /// z-index the next open or focus will receive
    pub fn next_z_index(&self) -> ZIndex {
        self.next_z_index
    }

    /// Number of open windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Check if no window is open
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn take_z_index(&mut self) -> ZIndex {
        let z = self.next_z_index;
        self.next_z_index = self.next_z_index.saturating_add(1);
        z
    }
}
