//! Empty borders for panels and dialogs.

use forms_core::{
    Border, ConstantSize, ParseError, DLUX14, DLUX2, DLUX4, DLUX7, DLUY14, DLUY2, DLUY4, DLUY7,
};
use forms_parser::parse_border;

use crate::style::LayoutStyle;

pub const EMPTY: Border = Border::EMPTY;

/// 2 dialog units on every side.
pub const DLU2: Border = uniform(DLUY2, DLUX2);

pub const DLU4: Border = uniform(DLUY4, DLUX4);

pub const DLU7: Border = uniform(DLUY7, DLUX7);

pub const DLU14: Border = uniform(DLUY14, DLUX14);

const fn uniform(vertical: ConstantSize, horizontal: ConstantSize) -> Border {
    Border {
        top: vertical,
        left: horizontal,
        bottom: vertical,
        right: horizontal,
    }
}

/// Gap above a button bar.
pub fn button_bar_gap(style: &LayoutStyle) -> Border {
    Border::new(
        style.button_bar_pad,
        ConstantSize::ZERO,
        ConstantSize::ZERO,
        ConstantSize::ZERO,
    )
}

/// Margins of a plain dialog.
pub fn dialog(style: &LayoutStyle) -> Border {
    uniform(style.dialog_margin_y, style.dialog_margin_x)
}

/// Margins of a dialog page inside a tabbed pane.
pub fn tabbed_dialog(style: &LayoutStyle) -> Border {
    uniform(style.tabbed_dialog_margin_y, style.tabbed_dialog_margin_x)
}

pub fn create_empty_border(
    top: ConstantSize,
    left: ConstantSize,
    bottom: ConstantSize,
    right: ConstantSize,
) -> Border {
    Border::new(top, left, bottom, right)
}

/// Parse four sizes separated by commas or spaces: `"4dlu, 4dlu, 4dlu, 4dlu"`.
pub fn parse(encoded: &str) -> Result<Border, ParseError> {
    parse_border(encoded)
}
