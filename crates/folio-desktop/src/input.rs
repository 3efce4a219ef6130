//! Pointer input routing for icons and windows
//!
//! Icons are both clickable and draggable, so a pointer gesture on an icon
//! is only classified on release: short and still is a click, anything
//! else is a drag.

use tracing::trace;

use crate::config::GestureSettings;
use crate::math::Vec2;
use crate::timer::Millis;

/// Result of routing a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Event was consumed by the desktop
    Handled,
    /// Event was not for the desktop
    Unhandled,
}

/// Active drag operation
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Pointer went down on a desktop icon
    Icon {
        icon_id: String,
        /// Pointer position relative to the icon's top-left corner
        offset: Vec2,
        /// Pointer position at pointer-down
        start: Vec2,
        started_at: Millis,
    },
    /// Title bar drag
    Window { window_id: String, offset: Vec2 },
}

/// How a drag ended
#[derive(Clone, Debug, PartialEq)]
pub enum DragEnd {
    /// Quick and still: open the icon at the release point
    Click { icon_id: String, at: Vec2 },
    /// Icon was dragged to a new top-left position
    IconMoved { icon_id: String, position: Vec2 },
    /// Window drag finished; its position was updated while moving
    WindowMoved { window_id: String },
}

/// A drag target and where it should be drawn now
#[derive(Clone, Debug, PartialEq)]
pub enum DragMove<'a> {
    Icon { icon_id: &'a str, position: Vec2 },
    Window { window_id: &'a str, position: Vec2 },
}

/// Tracks the single in-progress pointer drag
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    drag: Option<DragState>,
    gesture: GestureSettings,
}

impl InputRouter {
    /// Create a router with the given click thresholds
    pub fn new(gesture: GestureSettings) -> Self {
        Self {
            drag: None,
            gesture,
        }
    }

    /// Current drag, if any
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer down on an icon whose top-left is `icon_position`
    pub fn start_icon_drag(&mut self, icon_id: &str, icon_position: Vec2, pointer: Vec2, now: Millis) {
        trace!(icon_id, x = pointer.x, y = pointer.y, "icon pointer down");
        self.drag = Some(DragState::Icon {
            icon_id: icon_id.to_string(),
            offset: pointer - icon_position,
            start: pointer,
            started_at: now,
        });
    }

    /// Pointer down on a window title bar
    pub fn start_window_drag(&mut self, window_id: &str, window_position: Vec2, pointer: Vec2) {
        trace!(window_id, "window drag start");
        self.drag = Some(DragState::Window {
            window_id: window_id.to_string(),
            offset: pointer - window_position,
        });
    }

    /// Where the dragged item should be for a pointer position
    pub fn drag_to(&self, pointer: Vec2) -> Option<DragMove<'_>> {
        match self.drag.as_ref()? {
            DragState::Icon {
                icon_id, offset, ..
            } => Some(DragMove::Icon {
                icon_id,
                position: pointer - *offset,
            }),
            DragState::Window { window_id, offset } => Some(DragMove::Window {
                window_id,
                position: pointer - *offset,
            }),
        }
    }

    /// Pointer released; classify and clear the drag
    pub fn end_drag(&mut self, pointer: Vec2, now: Millis) -> Option<DragEnd> {
        let end = match self.drag.take()? {
            DragState::Icon {
                icon_id,
                offset,
                start,
                started_at,
            } => {
                let duration = now - started_at;
                let distance = start.distance(pointer);
                if self.is_click(duration, distance) {
                    DragEnd::Click {
                        icon_id,
                        at: pointer,
                    }
                } else {
                    DragEnd::IconMoved {
                        icon_id,
                        position: pointer - offset,
                    }
                }
            }
            DragState::Window { window_id, .. } => DragEnd::WindowMoved { window_id },
        };
        trace!(?end, "drag end");
        Some(end)
    }

    /// Abandon the current drag without an outcome
    pub fn cancel(&mut self) {
        self.drag = None;
    }

    fn is_click(&self, duration: Millis, distance: f32) -> bool {
        duration < self.gesture.click_max_duration_ms && distance < self.gesture.click_max_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> InputRouter {
        InputRouter::new(GestureSettings::default())
    }

    #[test]
    fn test_quick_still_release_is_click() {
        let mut input = router();
        input.start_icon_drag("synto", Vec2::new(100.0, 100.0), Vec2::new(120.0, 130.0), 0.0);
        assert!(input.is_dragging());

        let end = input.end_drag(Vec2::new(122.0, 131.0), 150.0);
        assert_eq!(
            end,
            Some(DragEnd::Click {
                icon_id: "synto".to_string(),
                at: Vec2::new(122.0, 131.0),
            })
        );
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_slow_release_is_drag() {
        let mut input = router();
        input.start_icon_drag("synto", Vec2::new(100.0, 100.0), Vec2::new(120.0, 130.0), 0.0);
        let end = input.end_drag(Vec2::new(121.0, 130.0), 200.0);
        assert_eq!(
            end,
            Some(DragEnd::IconMoved {
                icon_id: "synto".to_string(),
                position: Vec2::new(101.0, 100.0),
            })
        );
    }

    #[test]
    fn test_far_release_is_drag() {
        let mut input = router();
        input.start_icon_drag("synto", Vec2::new(100.0, 100.0), Vec2::new(120.0, 130.0), 0.0);
        let moved = input.drag_to(Vec2::new(320.0, 430.0));
        assert_eq!(
            moved,
            Some(DragMove::Icon {
                icon_id: "synto",
                position: Vec2::new(300.0, 400.0),
            })
        );

        // Exactly at the distance threshold counts as a drag
        let mut input = router();
        input.start_icon_drag("synto", Vec2::ZERO, Vec2::ZERO, 0.0);
        let end = input.end_drag(Vec2::new(3.0, 4.0), 10.0);
        assert!(matches!(end, Some(DragEnd::IconMoved { .. })));
    }

    #[test]
    fn test_window_drag() {
        let mut input = router();
        input.start_window_drag("synto", Vec2::new(50.0, 60.0), Vec2::new(70.0, 70.0));
        assert_eq!(
            input.drag_to(Vec2::new(170.0, 170.0)),
            Some(DragMove::Window {
                window_id: "synto",
                position: Vec2::new(150.0, 160.0),
            })
        );
        assert_eq!(
            input.end_drag(Vec2::new(170.0, 170.0), 0.0),
            Some(DragEnd::WindowMoved {
                window_id: "synto".to_string()
            })
        );
    }

    #[test]
    fn test_no_drag() {
        let mut input = router();
        assert_eq!(input.drag_to(Vec2::ZERO), None);
        assert_eq!(input.end_drag(Vec2::ZERO, 0.0), None);

        input.start_window_drag("a", Vec2::ZERO, Vec2::ZERO);
        input.cancel();
        assert!(input.drag_state().is_none());
    }
}
