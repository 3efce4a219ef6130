//! Icon layout engine
//!
//! Desktop icons are authored as percentage positions per breakpoint tier.
//! [`layout_icons`] turns those into pixel positions for a concrete
//! viewport. It is a pure function: same inputs, same output, nothing
//! retained, so it can run on every resize event.

mod breakpoint;
mod icons;
mod presentation;

pub use breakpoint::Breakpoint;
pub use icons::{DesktopIcon, IconConfig, Percent, TierPositions, DESKTOP_ICONS};
pub use presentation::PagePresentation;

use crate::config::DesktopConfig;
use crate::math::{Rect, Size, Vec2};

/// Viewport the layout should be computed against
///
/// An unmeasured viewport (zero, negative or non-finite) falls back to the
/// configured reference size so the first paint is deterministic.
pub fn effective_viewport(viewport: Size, config: &DesktopConfig) -> Size {
    if viewport.is_measured() {
        viewport
    } else {
        config.reference_viewport
    }
}

/// Compute pixel positions for every configured icon
pub fn layout_icons(configs: &[IconConfig], viewport: Size, config: &DesktopConfig) -> Vec<DesktopIcon> {
    let viewport = effective_viewport(viewport, config);
    let tier = Breakpoint::for_width(viewport.width);

    tracing::trace!(
        width = viewport.width,
        height = viewport.height,
        tier = tier.id(),
        "laying out desktop icons"
    );

    configs
        .iter()
        .map(|icon| DesktopIcon {
            id: icon.id,
            title: icon.title,
            icon: icon.icon,
            size: icon.size,
            project_index: icon.project_index,
            position: place_icon(icon, tier, viewport, config),
        })
        .collect()
}

/// Unclamped pixel position of an icon for a tier and viewport
pub fn raw_position(icon: &IconConfig, tier: Breakpoint, viewport: Size, config: &DesktopConfig) -> Vec2 {
    let percent = icon.positions.get(tier);
    let usable_height = viewport.height - config.reserved_bottom_pixels(viewport.height);
    Vec2::new(
        viewport.width * percent.x / 100.0,
        usable_height * percent.y / 100.0,
    )
}

/// Pixel position of an icon, clamped so its box stays `edge_margin` away
/// from every viewport edge
pub fn place_icon(icon: &IconConfig, tier: Breakpoint, viewport: Size, config: &DesktopConfig) -> Vec2 {
    let raw = raw_position(icon, tier, viewport, config);
    let bounds = Rect::new(0.0, 0.0, viewport.width, viewport.height).shrink(config.edge_margin);
    bounds.clamp_box(raw, icon.size)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// No icon ever renders partially off-screen
        #[test]
        fn icons_stay_inside_viewport(width in 200.0f32..4000.0, height in 200.0f32..3000.0) {
            let config = DesktopConfig::default();
            let margin = config.edge_margin;
            for icon in layout_icons(DESKTOP_ICONS, Size::new(width, height), &config) {
                let max_x = width - icon.size.width - margin;
                let max_y = height - icon.size.height - margin;
                prop_assert!(icon.position.x >= margin - 0.001, "{} x={} < margin", icon.id, icon.position.x);
                prop_assert!(icon.position.x <= max_x + 0.001, "{} x={} > {}", icon.id, icon.position.x, max_x);
                prop_assert!(icon.position.y >= margin - 0.001, "{} y={} < margin", icon.id, icon.position.y);
                prop_assert!(icon.position.y <= max_y + 0.001, "{} y={} > {}", icon.id, icon.position.y, max_y);
            }
        }

        /// The selected tier always contains the width it was selected for
        #[test]
        fn tier_matches_width(width in 0.0f32..5000.0) {
            let tier = Breakpoint::for_width(width);
            prop_assert!(tier.contains(width));
        }
    }
}
