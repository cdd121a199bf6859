//! Material 3 window size classes, derived from the measured viewport.
//! Pure: recomputed from the current bounds on every resize, never stored.

use serde::{Deserialize, Serialize};

pub const WIDTH_MEDIUM_MIN: f64 = 600.0;
pub const WIDTH_EXPANDED_MIN: f64 = 840.0;
pub const HEIGHT_MEDIUM_MIN: f64 = 480.0;
pub const HEIGHT_EXPANDED_MIN: f64 = 900.0;

/// Discrete bucket for one axis of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Compact,
    Medium,
    Expanded,
}

impl SizeClass {
    pub fn for_width(width: f64) -> Self {
        bucket(width, WIDTH_MEDIUM_MIN, WIDTH_EXPANDED_MIN)
    }

    pub fn for_height(height: f64) -> Self {
        bucket(height, HEIGHT_MEDIUM_MIN, HEIGHT_EXPANDED_MIN)
    }
}

fn bucket(value: f64, medium_min: f64, expanded_min: f64) -> SizeClass {
    // NaN fails every comparison and lands in Compact, same as an unmeasured viewport.
    if !(value >= medium_min) {
        SizeClass::Compact
    } else if value < expanded_min {
        SizeClass::Medium
    } else {
        SizeClass::Expanded
    }
}

/// Width and height classes, computed independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowSizeClasses {
    pub width: SizeClass,
    pub height: SizeClass,
}

impl WindowSizeClasses {
    pub fn is_compact(&self) -> bool {
        self.width == SizeClass::Compact
    }

    pub fn is_medium(&self) -> bool {
        self.width == SizeClass::Medium
    }

    pub fn is_expanded(&self) -> bool {
        self.width == SizeClass::Expanded
    }
}

pub fn classify(width: f64, height: f64) -> WindowSizeClasses {
    WindowSizeClasses {
        width: SizeClass::for_width(width),
        height: SizeClass::for_height(height),
    }
}

/// A compact width OR a touch-capable device. Either signal alone is enough.
pub fn is_mobile(classes: WindowSizeClasses, touch_capable: bool) -> bool {
    classes.is_compact() || touch_capable
}

/// Measured viewport in device-independent pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn classes(&self) -> WindowSizeClasses {
        classify(self.width, self.height)
    }

    /// True once a real measurement has arrived.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Layout numbers picked from the width class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Columns in the action-button flow row.
    pub action_columns: usize,
    /// Cap on the main content column; `None` means unbounded.
    pub max_content_width: Option<f64>,
    /// Timeline steps stack vertically instead of sitting in a row.
    pub steps_vertical: bool,
}

impl LayoutMetrics {
    pub fn for_width(class: SizeClass) -> Self {
        match class {
            SizeClass::Compact => Self {
                action_columns: 1,
                max_content_width: None,
                steps_vertical: true,
            },
            SizeClass::Medium => Self {
                action_columns: 2,
                max_content_width: Some(720.0),
                steps_vertical: false,
            },
            SizeClass::Expanded => Self {
                action_columns: 4,
                max_content_width: Some(800.0),
                steps_vertical: false,
            },
        }
    }
}
