//! 2D size type

use serde::{Deserialize, Serialize};

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if both dimensions are positive and finite
    ///
    /// A viewport that fails this check has not been measured yet.
    pub fn is_measured(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_measured() {
        assert!(Size::new(1200.0, 800.0).is_measured());
        assert!(!Size::new(0.0, 800.0).is_measured());
        assert!(!Size::new(1200.0, -1.0).is_measured());
        assert!(!Size::new(f32::NAN, 800.0).is_measured());
    }
}
