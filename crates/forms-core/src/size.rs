//! Size descriptors for columns and rows.
//!
//! A [`Size`] is resolved to pixels once per layout pass, given the measured
//! extents of the components that live in the column or row.

use std::fmt;

use crate::types::Orientation;
use crate::units::{Unit, UnitContext};

/// Minimum and preferred extent of one component along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extent {
    pub minimum: i32,
    pub preferred: i32,
}

impl Extent {
    pub fn new(minimum: i32, preferred: i32) -> Self {
        Self { minimum, preferred }
    }

    /// The extent picked by the given measure.
    pub fn measured(&self, measure: Measure) -> i32 {
        match measure {
            Measure::Minimum => self.minimum,
            Measure::Preferred => self.preferred,
        }
    }
}

/// Which component size a measurement reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Minimum,
    Preferred,
}

/// A size with a value and a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantSize {
    pub value: f64,
    pub unit: Unit,
}

impl ConstantSize {
    pub const ZERO: Self = Self::new(0.0, Unit::Pixel);

    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn pixel(value: i32) -> Self {
        Self::new(value as f64, Unit::Pixel)
    }

    pub fn dlu_x(value: i32) -> Self {
        Self::new(value as f64, Unit::DialogUnitsX)
    }

    pub fn dlu_y(value: i32) -> Self {
        Self::new(value as f64, Unit::DialogUnitsY)
    }

    /// Resolve to pixels.
    pub fn pixel_size(&self, units: &UnitContext<'_>) -> i32 {
        units.to_pixels(self.value, self.unit)
    }
}

impl fmt::Display for ConstantSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.fract() == 0.0 {
            write!(f, "{}{}", self.value as i64, self.unit)
        } else {
            write!(f, "{}{}", self.value, self.unit)
        }
    }
}

pub const DLUX1: ConstantSize = ConstantSize::new(1.0, Unit::DialogUnitsX);
pub const DLUX2: ConstantSize = ConstantSize::new(2.0, Unit::DialogUnitsX);
pub const DLUX3: ConstantSize = ConstantSize::new(3.0, Unit::DialogUnitsX);
pub const DLUX4: ConstantSize = ConstantSize::new(4.0, Unit::DialogUnitsX);
pub const DLUX5: ConstantSize = ConstantSize::new(5.0, Unit::DialogUnitsX);
pub const DLUX6: ConstantSize = ConstantSize::new(6.0, Unit::DialogUnitsX);
pub const DLUX7: ConstantSize = ConstantSize::new(7.0, Unit::DialogUnitsX);
pub const DLUX8: ConstantSize = ConstantSize::new(8.0, Unit::DialogUnitsX);
pub const DLUX9: ConstantSize = ConstantSize::new(9.0, Unit::DialogUnitsX);
pub const DLUX11: ConstantSize = ConstantSize::new(11.0, Unit::DialogUnitsX);
pub const DLUX14: ConstantSize = ConstantSize::new(14.0, Unit::DialogUnitsX);

pub const DLUY1: ConstantSize = ConstantSize::new(1.0, Unit::DialogUnitsY);
pub const DLUY2: ConstantSize = ConstantSize::new(2.0, Unit::DialogUnitsY);
pub const DLUY3: ConstantSize = ConstantSize::new(3.0, Unit::DialogUnitsY);
pub const DLUY4: ConstantSize = ConstantSize::new(4.0, Unit::DialogUnitsY);
pub const DLUY5: ConstantSize = ConstantSize::new(5.0, Unit::DialogUnitsY);
pub const DLUY6: ConstantSize = ConstantSize::new(6.0, Unit::DialogUnitsY);
pub const DLUY7: ConstantSize = ConstantSize::new(7.0, Unit::DialogUnitsY);
pub const DLUY8: ConstantSize = ConstantSize::new(8.0, Unit::DialogUnitsY);
pub const DLUY9: ConstantSize = ConstantSize::new(9.0, Unit::DialogUnitsY);
pub const DLUY11: ConstantSize = ConstantSize::new(11.0, Unit::DialogUnitsY);
pub const DLUY14: ConstantSize = ConstantSize::new(14.0, Unit::DialogUnitsY);

/// Sizes measured from the components in a column or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentSize {
    /// Maximum of the component minimum sizes
    Minimum,
    /// Maximum of the component preferred sizes
    Preferred,
    /// Preferred sizes when there is room, minimum sizes otherwise
    Default,
}

impl ComponentSize {
    fn measure(self, default_measure: Measure) -> Measure {
        match self {
            ComponentSize::Minimum => Measure::Minimum,
            ComponentSize::Preferred => Measure::Preferred,
            ComponentSize::Default => default_measure,
        }
    }

    /// The largest extent of the given components.
    pub fn maximum_size(self, extents: &[Extent], default_measure: Measure) -> i32 {
        let measure = self.measure(default_measure);
        extents
            .iter()
            .map(|e| e.measured(measure))
            .max()
            .unwrap_or(0)
            .max(0)
    }
}

impl fmt::Display for ComponentSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentSize::Minimum => f.write_str("min"),
            ComponentSize::Preferred => f.write_str("pref"),
            ComponentSize::Default => f.write_str("default"),
        }
    }
}

/// A basis size clamped by optional lower and upper bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedSize {
    pub basis: Size,
    pub lower: Option<Size>,
    pub upper: Option<Size>,
}

/// A column or row size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Size {
    Constant(ConstantSize),
    Component(ComponentSize),
    Bounded(Box<BoundedSize>),
    /// Sum of its parts
    Sum(Vec<Size>),
}

impl Size {
    pub const ZERO: Self = Size::Constant(ConstantSize::ZERO);
    pub const MINIMUM: Self = Size::Component(ComponentSize::Minimum);
    pub const PREFERRED: Self = Size::Component(ComponentSize::Preferred);
    pub const DEFAULT: Self = Size::Component(ComponentSize::Default);

    pub fn pixel(value: i32) -> Self {
        Size::Constant(ConstantSize::pixel(value))
    }

    pub fn dlu_x(value: i32) -> Self {
        Size::Constant(ConstantSize::dlu_x(value))
    }

    pub fn dlu_y(value: i32) -> Self {
        Size::Constant(ConstantSize::dlu_y(value))
    }

    /// Clamp `basis` by the given bounds.
    pub fn bounded(basis: Size, lower: Option<Size>, upper: Option<Size>) -> Self {
        Size::Bounded(Box::new(BoundedSize { basis, lower, upper }))
    }

    pub fn sum(parts: Vec<Size>) -> Self {
        Size::Sum(parts)
    }

    /// Resolve this size for a column or row containing components with the
    /// given extents.
    pub fn maximum_size(
        &self,
        units: &UnitContext<'_>,
        extents: &[Extent],
        default_measure: Measure,
    ) -> i32 {
        match self {
            Size::Constant(c) => c.pixel_size(units),
            Size::Component(c) => c.maximum_size(extents, default_measure),
            Size::Bounded(b) => {
                let mut size = b.basis.maximum_size(units, extents, default_measure);
                if let Some(lower) = &b.lower {
                    size = size.max(lower.maximum_size(units, extents, default_measure));
                }
                if let Some(upper) = &b.upper {
                    size = size.min(upper.maximum_size(units, extents, default_measure));
                }
                size
            }
            Size::Sum(parts) => parts
                .iter()
                .map(|p| p.maximum_size(units, extents, default_measure))
                .fold(0, i32::saturating_add),
        }
    }

    /// Whether this size may shrink from preferred towards minimum when the
    /// container is too small.
    pub fn is_compressible(&self) -> bool {
        match self {
            Size::Component(c) => *c == ComponentSize::Default,
            Size::Bounded(b) => b.basis.is_compressible(),
            Size::Sum(parts) => parts.iter().any(Size::is_compressible),
            Size::Constant(_) => false,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Size::Constant(_))
    }

    /// Re-express horizontal dialog units as vertical ones, or vice versa.
    pub fn oriented(self, orientation: Orientation) -> Self {
        match self {
            Size::Constant(ConstantSize { value, unit: Unit::DialogUnitsX | Unit::DialogUnitsY }) => {
                Size::Constant(ConstantSize::new(value, Unit::dialog_units(orientation)))
            }
            Size::Bounded(b) => {
                let b = *b;
                Size::bounded(
                    b.basis.oriented(orientation),
                    b.lower.map(|s| s.oriented(orientation)),
                    b.upper.map(|s| s.oriented(orientation)),
                )
            }
            Size::Sum(parts) => Size::Sum(parts.into_iter().map(|p| p.oriented(orientation)).collect()),
            other => other,
        }
    }
}

impl From<ConstantSize> for Size {
    fn from(size: ConstantSize) -> Self {
        Size::Constant(size)
    }
}

impl From<ComponentSize> for Size {
    fn from(size: ComponentSize) -> Self {
        Size::Component(size)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Constant(c) => c.fmt(f),
            Size::Component(c) => c.fmt(f),
            Size::Bounded(b) => {
                f.write_str("[")?;
                if let Some(lower) = &b.lower {
                    write!(f, "{},", lower)?;
                }
                write!(f, "{}", b.basis)?;
                if let Some(upper) = &b.upper {
                    write!(f, ",{}", upper)?;
                }
                f.write_str("]")
            }
            Size::Sum(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str("+")?;
                    }
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
        }
    }
}
