//! Empty borders around the layout grid.

use std::fmt;

use crate::size::ConstantSize;
use crate::types::Insets;
use crate::units::UnitContext;

/// An empty border expressed in constant sizes.
///
/// Resolved to pixel [`Insets`] at layout time, so dialog unit borders follow
/// the container's font.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    pub top: ConstantSize,
    pub left: ConstantSize,
    pub bottom: ConstantSize,
    pub right: ConstantSize,
}

impl Border {
    pub const EMPTY: Self = Self {
        top: ConstantSize::ZERO,
        left: ConstantSize::ZERO,
        bottom: ConstantSize::ZERO,
        right: ConstantSize::ZERO,
    };

    pub fn new(top: ConstantSize, left: ConstantSize, bottom: ConstantSize, right: ConstantSize) -> Self {
        Self { top, left, bottom, right }
    }

    /// A border with pixel insets.
    pub fn pixels(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self::new(
            ConstantSize::pixel(top),
            ConstantSize::pixel(left),
            ConstantSize::pixel(bottom),
            ConstantSize::pixel(right),
        )
    }

    /// Resolve to pixel insets.
    pub fn insets(&self, units: &UnitContext<'_>) -> Insets {
        Insets::new(
            self.top.pixel_size(units),
            self.left.pixel_size(units),
            self.bottom.pixel_size(units),
            self.right.pixel_size(units),
        )
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.top, self.left, self.bottom, self.right)
    }
}
