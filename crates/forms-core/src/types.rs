//! Geometry and axis types.

use std::fmt;

/// The axis a spec, size, or measurement applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Columns, widths, x coordinates
    Horizontal,
    /// Rows, heights, y coordinates
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("column"),
            Orientation::Vertical => f.write_str("row"),
        }
    }
}

/// A width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

impl Dimension {
    pub const ZERO: Self = Self { width: 0, height: 0 };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The extent along the given axis.
    pub fn along(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

/// Space reserved around a rectangle, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    pub const EMPTY: Self = Self { top: 0, left: 0, bottom: 0, right: 0 };

    pub fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self { top, left, bottom, right }
    }

    /// Create insets with the same value on every side.
    pub fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of both sides along the given axis.
    pub fn along(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.left.saturating_add(self.right),
            Orientation::Vertical => self.top.saturating_add(self.bottom),
        }
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Shrink the bounds by the given insets.
    pub fn inset(&self, insets: &Insets) -> Bounds {
        Bounds::new(
            self.x.saturating_add(insets.left),
            self.y.saturating_add(insets.top),
            self.width.saturating_sub(insets.along(Orientation::Horizontal)),
            self.height.saturating_sub(insets.along(Orientation::Vertical)),
        )
    }
}
