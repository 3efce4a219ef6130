//! Viewport-width breakpoint tiers

use serde::{Deserialize, Serialize};

/// Named viewport-width range used to pick a layout variant
///
/// | Tier      | Width (px)        |
/// |-----------|-------------------|
/// | Mobile    | `< 768`           |
/// | Tablet    | `768 ..< 1024`    |
/// | Laptop    | `1024 ..< 1440`   |
/// | Desktop   | `1440 ..= 1920`   |
/// | Ultrawide | `> 1920`          |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Laptop,
    Desktop,
    Ultrawide,
}

impl Breakpoint {
    /// Get all tiers, narrowest first
    pub fn all() -> &'static [Breakpoint] {
        &[
            Breakpoint::Mobile,
            Breakpoint::Tablet,
            Breakpoint::Laptop,
            Breakpoint::Desktop,
            Breakpoint::Ultrawide,
        ]
    }

    /// Select the tier whose range contains `width`
    pub fn for_width(width: f32) -> Self {
        if width < 768.0 {
            Breakpoint::Mobile
        } else if width < 1024.0 {
            Breakpoint::Tablet
        } else if width < 1440.0 {
            Breakpoint::Laptop
        } else if width <= 1920.0 {
            Breakpoint::Desktop
        } else {
            Breakpoint::Ultrawide
        }
    }

    /// Check if `width` falls in this tier
    pub fn contains(&self, width: f32) -> bool {
        Self::for_width(width) == *self
    }

    /// Get the string ID for this tier
    pub fn id(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Laptop => "laptop",
            Breakpoint::Desktop => "desktop",
            Breakpoint::Ultrawide => "ultrawide",
        }
    }
}
