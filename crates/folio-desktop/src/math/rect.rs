//! Axis-aligned rectangle

use serde::{Deserialize, Serialize};

use super::{clamp_or_min, Size, Vec2};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from position and size
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get position (top-left)
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink rectangle by amount on all sides
    pub fn shrink(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2.0,
            self.height - amount * 2.0,
        )
    }

    /// Top-left position that keeps a box of `size` inside this rectangle
    ///
    /// When the box is larger than the rectangle it is pinned to the
    /// top-left corner.
    pub fn clamp_box(&self, pos: Vec2, size: Size) -> Vec2 {
        Vec2::new(
            clamp_or_min(pos.x, self.x, self.right() - size.width),
            clamp_or_min(pos.y, self.y, self.bottom() - size.height),
        )
    }
}
