//! Column and row specifications.
//!
//! A spec combines a default alignment for the components in the column or
//! row, a [`Size`], and a resize weight that controls how much of the leftover
//! space the column or row receives.

use std::fmt;

use crate::errors::LayoutError;
use crate::size::Size;
use crate::types::Orientation;

/// Weight of a spec that does not grow.
pub const NO_GROW: f64 = 0.0;

/// Weight of a spec encoded as plain `grow`.
pub const DEFAULT_GROW: f64 = 1.0;

/// Default alignment of components within a column or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecAlignment {
    /// Left for columns, top for rows
    Start,
    Center,
    /// Right for columns, bottom for rows
    End,
    Fill,
}

impl SpecAlignment {
    /// The encoded name of this alignment on the given axis.
    pub fn name(self, orientation: Orientation) -> &'static str {
        match (self, orientation) {
            (SpecAlignment::Start, Orientation::Horizontal) => "left",
            (SpecAlignment::Start, Orientation::Vertical) => "top",
            (SpecAlignment::End, Orientation::Horizontal) => "right",
            (SpecAlignment::End, Orientation::Vertical) => "bottom",
            (SpecAlignment::Center, _) => "center",
            (SpecAlignment::Fill, _) => "fill",
        }
    }

    /// The alignment a spec uses when none is given.
    pub fn default_for(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => SpecAlignment::Fill,
            Orientation::Vertical => SpecAlignment::Center,
        }
    }
}

/// Orientation independent part of a column or row spec.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormSpec {
    orientation: Orientation,
    default_alignment: SpecAlignment,
    size: Size,
    resize_weight: f64,
}

impl FormSpec {
    /// Create a spec; fails for negative resize weights.
    pub fn new(
        orientation: Orientation,
        default_alignment: SpecAlignment,
        size: Size,
        resize_weight: f64,
    ) -> Result<Self, LayoutError> {
        if resize_weight < 0.0 || resize_weight.is_nan() {
            return Err(LayoutError::NegativeResizeWeight {
                weight: resize_weight,
            });
        }
        Ok(Self {
            orientation,
            default_alignment,
            size: size.oriented(orientation),
            resize_weight,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn default_alignment(&self) -> SpecAlignment {
        self.default_alignment
    }

    pub fn size(&self) -> &Size {
        &self.size
    }

    pub fn resize_weight(&self) -> f64 {
        self.resize_weight
    }

    pub fn can_grow(&self) -> bool {
        self.resize_weight != NO_GROW
    }
}

impl AsRef<FormSpec> for FormSpec {
    fn as_ref(&self) -> &FormSpec {
        self
    }
}

impl fmt::Display for FormSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.default_alignment != SpecAlignment::default_for(self.orientation) {
            write!(f, "{}:", self.default_alignment.name(self.orientation))?;
        }
        write!(f, "{}", self.size)?;
        if self.resize_weight == DEFAULT_GROW {
            f.write_str(":grow")?;
        } else if self.can_grow() {
            write!(f, ":grow({})", self.resize_weight)?;
        }
        Ok(())
    }
}

macro_rules! oriented_spec {
    ($(#[$meta:meta])* $name:ident, $orientation:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(FormSpec);

        impl $name {
            pub const ORIENTATION: Orientation = $orientation;

            /// Create a spec with an explicit alignment and weight.
            pub fn new(
                default_alignment: SpecAlignment,
                size: Size,
                resize_weight: f64,
            ) -> Result<Self, LayoutError> {
                FormSpec::new($orientation, default_alignment, size, resize_weight).map(Self)
            }

            /// Create a non-growing spec with the default alignment.
            pub fn sized(size: Size) -> Self {
                Self(FormSpec {
                    orientation: $orientation,
                    default_alignment: SpecAlignment::default_for($orientation),
                    size: size.oriented($orientation),
                    resize_weight: NO_GROW,
                })
            }

            /// Same spec with another default alignment.
            pub fn aligned(mut self, alignment: SpecAlignment) -> Self {
                self.0.default_alignment = alignment;
                self
            }

            /// Same spec with another resize weight.
            pub fn with_weight(mut self, weight: f64) -> Result<Self, LayoutError> {
                if weight < 0.0 || weight.is_nan() {
                    return Err(LayoutError::NegativeResizeWeight { weight });
                }
                self.0.resize_weight = weight;
                Ok(self)
            }

            /// Same spec growing with [`DEFAULT_GROW`].
            pub fn growing(mut self) -> Self {
                self.0.resize_weight = DEFAULT_GROW;
                self
            }

            pub fn spec(&self) -> &FormSpec {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = FormSpec;

            fn deref(&self) -> &FormSpec {
                &self.0
            }
        }

        impl AsRef<FormSpec> for $name {
            fn as_ref(&self) -> &FormSpec {
                &self.0
            }
        }

        impl From<$name> for FormSpec {
            fn from(spec: $name) -> FormSpec {
                spec.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

oriented_spec!(
    /// Specification of one column: alignment, width, and grow weight.
    ColumnSpec,
    Orientation::Horizontal
);

oriented_spec!(
    /// Specification of one row: alignment, height, and grow weight.
    RowSpec,
    Orientation::Vertical
);
