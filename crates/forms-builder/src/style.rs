//! Layout style: the margins, gaps, and pads of a platform style guide.
//!
//! Styles can be loaded from JSON with encoded sizes:
//!
//! ```json
//! { "dialog_margin_x": "9dlu", "paragraph_pad": "12px" }
//! ```
//!
//! Missing fields keep the Windows defaults; unknown fields are rejected.

use forms_core::{ConstantSize, Orientation, ParseError, DLUX3, DLUX4, DLUX7, DLUY2, DLUY3, DLUY4, DLUY5, DLUY7, DLUY9};
use forms_parser::parse_constant_size;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors while loading a layout style.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Invalid style document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid size in style: {0}")]
    Parse(#[from] ParseError),
}

macro_rules! layout_style {
    ($( $(#[$doc:meta])* $field:ident: $orientation:ident = $default:expr, )*) => {
        /// Constant sizes recommended by a platform style guide.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct LayoutStyle {
            $( $(#[$doc])* pub $field: ConstantSize, )*
        }

        impl Default for LayoutStyle {
            fn default() -> Self {
                Self { $( $field: $default, )* }
            }
        }

        /// On-disk form of a [`LayoutStyle`], every size encoded as text.
        #[derive(Debug, Default, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        struct StyleDocument {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                $field: Option<String>,
            )*
        }

        impl LayoutStyle {
            fn merge(mut self, document: &StyleDocument) -> Result<Self, ParseError> {
                $(
                    if let Some(encoded) = &document.$field {
                        self.$field = parse_constant_size(encoded, Orientation::$orientation)?;
                    }
                )*
                Ok(self)
            }

            fn to_document(&self) -> StyleDocument {
                StyleDocument { $( $field: Some(self.$field.to_string()), )* }
            }
        }
    };
}

layout_style! {
    /// Left and right margin of a dialog
    dialog_margin_x: Horizontal = DLUX7,
    /// Top and bottom margin of a dialog
    dialog_margin_y: Vertical = DLUY7,
    tabbed_dialog_margin_x: Horizontal = DLUX4,
    tabbed_dialog_margin_y: Vertical = DLUY4,
    /// Gap between a label and the component it labels
    label_component_pad_x: Horizontal = DLUX3,
    related_components_pad_x: Horizontal = DLUX4,
    related_components_pad_y: Vertical = DLUY4,
    unrelated_components_pad_x: Horizontal = DLUX7,
    unrelated_components_pad_y: Vertical = DLUY7,
    narrow_line_pad: Vertical = DLUY2,
    line_pad: Vertical = DLUY3,
    paragraph_pad: Vertical = DLUY9,
    /// Gap above a button bar
    button_bar_pad: Vertical = DLUY5,
    default_button_width: Horizontal = ConstantSize::new(50.0, forms_core::Unit::DialogUnitsX),
    default_button_height: Vertical = ConstantSize::new(14.0, forms_core::Unit::DialogUnitsY),
}

impl LayoutStyle {
    /// The Microsoft Windows style guide.
    pub fn windows() -> Self {
        Self::default()
    }

    /// Load a style from JSON, starting from the Windows defaults.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let document: StyleDocument = serde_json::from_str(json)?;
        let style = Self::windows().merge(&document)?;
        debug!(?style, "loaded layout style");
        Ok(style)
    }

    /// Encode every size of this style as JSON.
    pub fn to_json(&self) -> Result<String, StyleError> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forms_core::UnitContext;

    #[test]
    fn test_windows_defaults() {
        let style = LayoutStyle::windows();
        let units = UnitContext::default();
        assert_eq!(style.dialog_margin_x.pixel_size(&units), 11);
        assert_eq!(style.dialog_margin_y.pixel_size(&units), 11);
        assert_eq!(style.label_component_pad_x.pixel_size(&units), 5);
        assert_eq!(style.default_button_width.to_string(), "50dlu");
    }

    #[test]
    fn test_partial_json() {
        let style = LayoutStyle::from_json(r#"{ "dialog_margin_x": "9dlu", "paragraph_pad": "12px" }"#).unwrap();
        assert_eq!(style.dialog_margin_x, ConstantSize::dlu_x(9));
        assert_eq!(style.paragraph_pad, ConstantSize::pixel(12));
        assert_eq!(style.line_pad, DLUY3);
    }

    #[test]
    fn test_dialog_units_follow_field_axis() {
        let style = LayoutStyle::from_json(r#"{ "line_pad": "5dlu" }"#).unwrap();
        assert_eq!(style.line_pad, ConstantSize::dlu_y(5));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = LayoutStyle::from_json(r#"{ "dialog_margin": "9dlu" }"#).unwrap_err();
        assert!(matches!(err, StyleError::Json(_)));
    }

    #[test]
    fn test_bad_size_rejected() {
        let err = LayoutStyle::from_json(r#"{ "line_pad": "pref" }"#).unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let mut style = LayoutStyle::windows();
        style.button_bar_pad = ConstantSize::pixel(3);
        let json = style.to_json().unwrap();
        assert!(json.contains(r#""button_bar_pad": "3px""#));
        assert_eq!(LayoutStyle::from_json(&json).unwrap(), style);
    }
}
