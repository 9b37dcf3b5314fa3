//! Units and their conversion to pixels.
//!
//! Constant sizes are expressed in device independent units. Converting them
//! needs the screen resolution and the dialog font metrics, which the host
//! toolkit supplies through [`DeviceMetrics`].

use std::fmt;

use crate::types::Orientation;

/// Test string used to compute the average character width of a font.
pub const AVERAGE_CHARACTER_TEST_STRING: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length units understood by constant sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Screen pixels
    Pixel,
    /// DTP points (1/72 inch)
    Point,
    /// Horizontal dialog units (1/4 average character width)
    DialogUnitsX,
    /// Vertical dialog units (1/8 font height)
    DialogUnitsY,
    /// Millimeters
    Millimeter,
    /// Centimeters
    Centimeter,
    /// Inches
    Inch,
}

impl Unit {
    /// Dialog units for the given axis.
    pub fn dialog_units(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Unit::DialogUnitsX,
            Orientation::Vertical => Unit::DialogUnitsY,
        }
    }

    /// Whether values in this unit must be whole numbers.
    pub fn requires_integer(self) -> bool {
        matches!(
            self,
            Unit::Pixel | Unit::Point | Unit::DialogUnitsX | Unit::DialogUnitsY
        )
    }

    /// The abbreviation used in encoded sizes.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Unit::Pixel => "px",
            Unit::Point => "pt",
            Unit::DialogUnitsX | Unit::DialogUnitsY => "dlu",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Inch => "in",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Resolution and dialog font metrics of the output device.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceMetrics {
    /// Screen resolution in dots per inch
    pub resolution: f64,
    /// Average character width of the dialog font (horizontal dialog base unit)
    pub average_char_width: f64,
    /// Height of the dialog font (vertical dialog base unit)
    pub font_height: f64,
}

impl Default for DeviceMetrics {
    fn default() -> Self {
        Self {
            resolution: 96.0,
            average_char_width: 6.0,
            font_height: 13.0,
        }
    }
}

impl DeviceMetrics {
    pub fn new(resolution: f64, average_char_width: f64, font_height: f64) -> Self {
        Self {
            resolution,
            average_char_width,
            font_height,
        }
    }

    /// Derive metrics from a measured font: `test_string_width` is the pixel
    /// width of [`AVERAGE_CHARACTER_TEST_STRING`].
    pub fn from_font_measurement(resolution: f64, test_string_width: f64, font_height: f64) -> Self {
        let count = AVERAGE_CHARACTER_TEST_STRING.chars().count() as f64;
        Self::new(resolution, test_string_width / count, font_height)
    }
}

/// Round to the nearest integer, with halves rounded up.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Converts device independent units to pixels.
///
/// Every method has a default implementation based on the given metrics;
/// implementors override the ones their platform measures differently.
pub trait UnitConverter: fmt::Debug + Send + Sync {
    fn inch_as_pixel(&self, inches: f64, metrics: &DeviceMetrics) -> i32 {
        round_half_up(inches * metrics.resolution)
    }

    fn millimeter_as_pixel(&self, millimeters: f64, metrics: &DeviceMetrics) -> i32 {
        round_half_up(millimeters / 25.4 * metrics.resolution)
    }

    fn centimeter_as_pixel(&self, centimeters: f64, metrics: &DeviceMetrics) -> i32 {
        round_half_up(centimeters / 2.54 * metrics.resolution)
    }

    fn point_as_pixel(&self, points: f64, metrics: &DeviceMetrics) -> i32 {
        round_half_up(points * metrics.resolution / 72.0)
    }

    fn dialog_unit_x_as_pixel(&self, dlu: f64, metrics: &DeviceMetrics) -> i32 {
        round_half_up(dlu * metrics.average_char_width / 4.0)
    }

    fn dialog_unit_y_as_pixel(&self, dlu: f64, metrics: &DeviceMetrics) -> i32 {
        round_half_up(dlu * metrics.font_height / 8.0)
    }
}

/// Converter that uses the metric formulas unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUnitConverter;

impl UnitConverter for DefaultUnitConverter {}

/// Everything needed to resolve constant sizes to pixels.
#[derive(Debug, Clone, Copy)]
pub struct UnitContext<'a> {
    pub converter: &'a dyn UnitConverter,
    pub metrics: DeviceMetrics,
}

impl<'a> UnitContext<'a> {
    pub fn new(converter: &'a dyn UnitConverter, metrics: DeviceMetrics) -> Self {
        Self { converter, metrics }
    }

    /// Convert a value in the given unit to pixels. Zero is always zero.
    pub fn to_pixels(&self, value: f64, unit: Unit) -> i32 {
        if value == 0.0 {
            return 0;
        }
        let m = &self.metrics;
        match unit {
            Unit::Pixel => round_half_up(value),
            Unit::Point => self.converter.point_as_pixel(value, m),
            Unit::DialogUnitsX => self.converter.dialog_unit_x_as_pixel(value, m),
            Unit::DialogUnitsY => self.converter.dialog_unit_y_as_pixel(value, m),
            Unit::Millimeter => self.converter.millimeter_as_pixel(value, m),
            Unit::Centimeter => self.converter.centimeter_as_pixel(value, m),
            Unit::Inch => self.converter.inch_as_pixel(value, m),
        }
    }
}

impl Default for UnitContext<'static> {
    fn default() -> Self {
        Self::new(&DefaultUnitConverter, DeviceMetrics::default())
    }
}
