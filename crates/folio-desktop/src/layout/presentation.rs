//! Which rendition of the projects page to show

use serde::Serialize;

/// The projects page is a desktop on wide screens and a card carousel on
/// phones
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PagePresentation {
    Desktop,
    Carousel,
}

impl PagePresentation {
    /// Pick the presentation for a viewport width
    ///
    /// A width of zero means "not measured yet"; the page renders the
    /// desktop so server and client agree on the first paint.
    pub fn for_width(width: f32, mobile_breakpoint: f32) -> Self {
        if width > 0.0 && width < mobile_breakpoint {
            PagePresentation::Carousel
        } else {
            PagePresentation::Desktop
        }
    }

    /// Check if the simulated desktop should be mounted
    pub fn is_desktop(&self) -> bool {
        matches!(self, PagePresentation::Desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_for_width() {
        assert_eq!(PagePresentation::for_width(375.0, 768.0), PagePresentation::Carousel);
        assert_eq!(PagePresentation::for_width(767.0, 768.0), PagePresentation::Carousel);
        assert_eq!(PagePresentation::for_width(768.0, 768.0), PagePresentation::Desktop);
        assert_eq!(PagePresentation::for_width(0.0, 768.0), PagePresentation::Desktop);
        assert!(PagePresentation::for_width(1920.0, 768.0).is_desktop());
    }
}
