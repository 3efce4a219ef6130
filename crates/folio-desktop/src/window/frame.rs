//! Window frame geometry

use crate::config::WindowSettings;
use crate::math::{Rect, Size, Vec2};

/// Frame size for a viewport: the preferred size, capped to a fraction of
/// the viewport on small screens
pub fn frame_size(viewport: Size, settings: &WindowSettings) -> Size {
    Size::new(
        settings
            .frame_size
            .width
            .min(viewport.width * settings.max_frame_fraction.width),
        settings
            .frame_size
            .height
            .min(viewport.height * settings.max_frame_fraction.height),
    )
}

/// On-screen frame of a window whose top-left is `position`
///
/// Windows may only be dragged within the viewport, so the frame is pushed
/// back inside it when `position` would leave part of it off-screen.
pub fn frame_rect(position: Vec2, viewport: Size, settings: &WindowSettings) -> Rect {
    let size = frame_size(viewport, settings);
    let bounds = Rect::new(0.0, 0.0, viewport.width, viewport.height);
    Rect::from_pos_size(bounds.clamp_box(position, size), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_large_viewport() {
        let size = frame_size(Size::new(1920.0, 1080.0), &WindowSettings::default());
        assert_eq!(size, Size::new(900.0, 700.0));
    }

    #[test]
    fn test_frame_size_small_viewport() {
        let size = frame_size(Size::new(800.0, 600.0), &WindowSettings::default());
        assert!((size.width - 720.0).abs() < 0.001);
        assert!((size.height - 510.0).abs() < 0.001);
    }

    #[test]
    fn test_frame_rect_stays_on_screen() {
        let settings = WindowSettings::default();
        let viewport = Size::new(1920.0, 1080.0);

        let rect = frame_rect(Vec2::new(100.0, -50.0), viewport, &settings);
        assert_eq!(rect, Rect::new(100.0, 0.0, 900.0, 700.0));

        let rect = frame_rect(Vec2::new(1800.0, 900.0), viewport, &settings);
        assert_eq!(rect, Rect::new(1020.0, 380.0, 900.0, 700.0));
    }
}
