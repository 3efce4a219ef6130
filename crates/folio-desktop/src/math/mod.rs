//! Core geometry types for the desktop
//!
//! Screen-space pixels throughout, origin at the top-left of the viewport.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;

/// Clamp `value` into `[min, max]`, pinning to `min` when the range is empty
///
/// `f32::clamp` panics when `min > max`, which happens whenever the viewport
/// is smaller than the box being placed.
#[inline]
pub fn clamp_or_min(value: f32, min: f32, max: f32) -> f32 {
    if max < min {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_or_min() {
        assert!((clamp_or_min(5.0, 0.0, 10.0) - 5.0).abs() < 0.001);
        assert!((clamp_or_min(-5.0, 0.0, 10.0) - 0.0).abs() < 0.001);
        assert!((clamp_or_min(15.0, 0.0, 10.0) - 10.0).abs() < 0.001);
        // Empty range pins to the minimum instead of panicking
        assert!((clamp_or_min(15.0, 10.0, 0.0) - 10.0).abs() < 0.001);
    }
}
