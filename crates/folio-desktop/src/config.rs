//! Tunable constants for the desktop
//!
//! Every number the desktop behaviour depends on lives here so a site can
//! override it from JSON without touching code. Missing fields fall back to
//! the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};

/// Viewport assumed before the real one has been measured
pub const REFERENCE_VIEWPORT: Size = Size::new(1200.0, 800.0);

/// Highest z-index a session may start from; focus increments from here
pub const MAX_Z_INDEX_START: u32 = 1_000_000;

/// Top-level desktop configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Layout size used until the viewport is known
    pub reference_viewport: Size,
    /// Share of the viewport height (percent) kept free for dock and navigation
    pub reserved_bottom_percent: f32,
    /// Minimum distance between an icon and any viewport edge
    pub edge_margin: f32,
    /// Below this width the page shows the card carousel instead of a desktop
    pub mobile_breakpoint: f32,
    pub window: WindowSettings,
    pub trash: TrashTimings,
    pub gesture: GestureSettings,
    pub dock: DockSettings,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            reference_viewport: REFERENCE_VIEWPORT,
            reserved_bottom_percent: 15.0,
            edge_margin: 10.0,
            mobile_breakpoint: 768.0,
            window: WindowSettings::default(),
            trash: TrashTimings::default(),
            gesture: GestureSettings::default(),
            dock: DockSettings::default(),
        }
    }
}

/// Window placement and frame geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Offset from the click point to a new window's top-left corner
    pub open_offset: Vec2,
    /// z-index given to the first window opened in a session
    pub z_index_start: u32,
    /// Preferred frame size
    pub frame_size: Size,
    /// Frame size cap as a fraction of the viewport
    pub max_frame_fraction: Size,
    pub title_bar_height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            open_offset: Vec2::new(50.0, -50.0),
            z_index_start: 100,
            frame_size: Size::new(900.0, 700.0),
            max_frame_fraction: Size::new(0.9, 0.85),
            title_bar_height: 48.0,
        }
    }
}

/// Durations of the timed trash transitions, in milliseconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrashTimings {
    /// emptying -> confirmDelete (empty animation plus a short buffer)
    pub empty_ms: f64,
    /// restoring -> idle
    pub restore_ms: f64,
    /// deletedTemp -> restoring
    pub deleted_hold_ms: f64,
}

impl Default for TrashTimings {
    fn default() -> Self {
        Self {
            empty_ms: 1450.0,
            restore_ms: 1200.0,
            deleted_hold_ms: 5000.0,
        }
    }
}

/// Thresholds separating a click from a drag on desktop icons
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    pub click_max_duration_ms: f64,
    pub click_max_distance: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            click_max_duration_ms: 200.0,
            click_max_distance: 5.0,
        }
    }
}

/// Dock placement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockSettings {
    /// Distance from the bottom edge while the quick-questions prompt is shown
    pub bottom_with_prompt: f32,
    /// Distance from the bottom edge otherwise
    pub bottom_without_prompt: f32,
}

impl Default for DockSettings {
    fn default() -> Self {
        Self {
            bottom_with_prompt: 260.0,
            bottom_without_prompt: 140.0,
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a configuration from JSON
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values the layout and timers cannot work with
    pub fn validate(&self) -> DesktopResult<()> {
        if !self.reference_viewport.is_measured() {
            return Err(invalid("reference_viewport", "must be positive"));
        }
        if !(0.0..100.0).contains(&self.reserved_bottom_percent) {
            return Err(invalid("reserved_bottom_percent", "must be in [0, 100)"));
        }
        if !(self.edge_margin >= 0.0) {
            return Err(invalid("edge_margin", "must be non-negative"));
        }
        if !(self.mobile_breakpoint >= 0.0) {
            return Err(invalid("mobile_breakpoint", "must be non-negative"));
        }
        if !self.window.frame_size.is_measured() {
            return Err(invalid("window.frame_size", "must be positive"));
        }
        let fraction = self.window.max_frame_fraction;
        if !(fraction.width > 0.0 && fraction.width <= 1.0)
            || !(fraction.height > 0.0 && fraction.height <= 1.0)
        {
            return Err(invalid("window.max_frame_fraction", "must be in (0, 1]"));
        }
        if !(self.window.title_bar_height >= 0.0) {
            return Err(invalid("window.title_bar_height", "must be non-negative"));
        }
        let offset = self.window.open_offset;
        if !(offset.x.is_finite() && offset.y.is_finite()) {
            return Err(invalid("window.open_offset", "must be finite"));
        }
        if !(1..=MAX_Z_INDEX_START).contains(&self.window.z_index_start) {
            return Err(invalid("window.z_index_start", "must be in [1, 1000000]"));
        }
        let trash = &self.trash;
        if !(trash.empty_ms >= 0.0 && trash.restore_ms >= 0.0 && trash.deleted_hold_ms >= 0.0) {
            return Err(invalid("trash", "durations must be non-negative"));
        }
        if !(self.gesture.click_max_duration_ms >= 0.0 && self.gesture.click_max_distance >= 0.0) {
            return Err(invalid("gesture", "thresholds must be non-negative"));
        }
        let dock = &self.dock;
        let offsets = [dock.bottom_with_prompt, dock.bottom_without_prompt];
        if !offsets.iter().all(|o| o.is_finite() && *o >= 0.0) {
            return Err(invalid("dock", "bottom offsets must be non-negative"));
        }
        Ok(())
    }

    /// Pixels kept free at the bottom of a viewport of the given height
    pub fn reserved_bottom_pixels(&self, viewport_height: f32) -> f32 {
        viewport_height * self.reserved_bottom_percent / 100.0
    }
}

fn invalid(field: &'static str, reason: &'static str) -> DesktopError {
    DesktopError::InvalidConfig { field, reason }
}
