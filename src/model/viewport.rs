//! Viewport classification
//!
//! Maps the window width onto one of three breakpoint classes. There is no
//! hysteresis: every width observation re-derives the class.

use serde::{Deserialize, Serialize};

/// First width classified as `Tablet`
pub const TABLET_MIN_WIDTH: u32 = 768;
/// First width classified as `Desktop`
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

/// Width bucket driving the layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointClass {
    Mobile,
    Tablet,
    Desktop,
}

impl BreakpointClass {
    /// All classes, narrowest first
    pub const ALL: [BreakpointClass; 3] = [
        BreakpointClass::Mobile,
        BreakpointClass::Tablet,
        BreakpointClass::Desktop,
    ];

    /// Classify a viewport width
    pub fn from_width(width: u32) -> Self {
        if width < TABLET_MIN_WIDTH {
            BreakpointClass::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            BreakpointClass::Tablet
        } else {
            BreakpointClass::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        *self == BreakpointClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        *self == BreakpointClass::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        *self == BreakpointClass::Desktop
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            BreakpointClass::Mobile => "Mobile",
            BreakpointClass::Tablet => "Tablet",
            BreakpointClass::Desktop => "Desktop",
        }
    }
}

/// Classify a viewport width
#[inline]
pub fn classify(width: u32) -> BreakpointClass {
    BreakpointClass::from_width(width)
}

/// A class transition reported by [`ViewportClassifier::observe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointChange {
    pub from: BreakpointClass,
    pub to: BreakpointClass,
}

/// Tracks the last observed window size and its breakpoint class
#[derive(Debug, Clone)]
pub struct ViewportClassifier {
    width: u32,
    height: u32,
    class: BreakpointClass,
}

impl ViewportClassifier {
    /// Create a classifier from the initial window size.
    ///
    /// `None` means there is no observable window (headless render); the width
    /// then defaults to 0, which classifies as `Mobile`.
    pub fn new(size: Option<(u32, u32)>) -> Self {
        let (width, height) = size.unwrap_or((0, 0));
        Self {
            width,
            height,
            class: classify(width),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn class(&self) -> BreakpointClass {
        self.class
    }

    /// Record a new window size.
    ///
    /// Returns the transition when the breakpoint class changed.
    pub fn observe(&mut self, width: u32, height: u32) -> Option<BreakpointChange> {
        self.width = width;
        self.height = height;

        let class = classify(width);
        if class == self.class {
            return None;
        }

        let change = BreakpointChange {
            from: self.class,
            to: class,
        };
        self.class = class;
        Some(change)
    }
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0), BreakpointClass::Mobile);
        assert_eq!(classify(767), BreakpointClass::Mobile);
        assert_eq!(classify(768), BreakpointClass::Tablet);
        assert_eq!(classify(1023), BreakpointClass::Tablet);
        assert_eq!(classify(1024), BreakpointClass::Desktop);
        assert_eq!(classify(u32::MAX), BreakpointClass::Desktop);
    }

    #[test]
    fn test_exactly_one_class_holds() {
        for width in (0..2000).step_by(7) {
            let class = classify(width);
            let flags = [class.is_mobile(), class.is_tablet(), class.is_desktop()];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "width {}", width);
        }
    }

    #[test]
    fn test_headless_defaults_to_mobile() {
        let classifier = ViewportClassifier::new(None);
        assert_eq!(classifier.width(), 0);
        assert_eq!(classifier.class(), BreakpointClass::Mobile);
    }

    #[test]
    fn test_observe_reports_only_class_changes() {
        let mut classifier = ViewportClassifier::new(Some((1280, 800)));

        assert_eq!(classifier.observe(1100, 800), None);
        assert_eq!(classifier.width(), 1100);

        let change = classifier.observe(900, 800);
        assert_eq!(
            change,
            Some(BreakpointChange {
                from: BreakpointClass::Desktop,
                to: BreakpointClass::Tablet,
            })
        );
        assert_eq!(classifier.class(), BreakpointClass::Tablet);

        // Same width again: no drift
        assert_eq!(classifier.observe(900, 800), None);
        assert_eq!(classifier.class(), BreakpointClass::Tablet);
    }
}
