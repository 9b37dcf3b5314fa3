//! Error types for the forms engine.

use crate::types::Orientation;
use thiserror::Error;

/// Top-level error type for the forms engine.
#[derive(Debug, Error)]
pub enum FormsError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors while decoding the textual grammar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("The encoded {what} must not be empty")]
    Empty { what: &'static str },

    #[error("Unexpected token {found:?}: expected {expected}")]
    UnexpectedToken { found: String, expected: String },

    #[error("Invalid {orientation} alignment: {token:?}")]
    InvalidAlignment {
        token: String,
        orientation: Orientation,
    },

    #[error("Invalid size: {token:?}")]
    InvalidSize { token: String },

    #[error("Invalid unit {unit:?} in {token:?}")]
    InvalidUnit { unit: String, token: String },

    #[error("Invalid number format: {value}")]
    InvalidNumber { value: String },

    #[error("The {unit} value {value:?} must be an integer")]
    NonIntegerValue { value: String, unit: String },

    #[error("Invalid resize behavior: {token:?}")]
    InvalidResize { token: String },

    #[error("Invalid bounded size {token:?}: {reason}")]
    InvalidBoundedSize { token: String, reason: String },

    #[error("Invalid cell constraints {encoded:?}: {reason}")]
    InvalidCellConstraints { encoded: String, reason: String },

    #[error("The {what} requires {expected} sizes, but {encoded:?} has {found}")]
    WrongTokenCount {
        what: &'static str,
        encoded: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid group {encoded:?}: {reason}")]
    InvalidGroup { encoded: String, reason: String },
}

/// Errors while configuring a layout or computing geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("The {orientation} index {index} must be within [1, {count}]")]
    IndexOutOfRange {
        orientation: Orientation,
        index: usize,
        count: usize,
    },

    #[error("The {orientation} span {span} at index {index} exceeds the {orientation} count ({count})")]
    SpanExceedsGrid {
        orientation: Orientation,
        index: usize,
        span: usize,
        count: usize,
    },

    #[error("Cell constraints need positive indices and spans, got x={x}, y={y}, w={width}, h={height}")]
    InvalidCellBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("The {orientation} index {index} is used in more than one group")]
    DuplicateGroupIndex {
        orientation: Orientation,
        index: usize,
    },

    #[error("The removed {orientation} {index} must not be grouped")]
    GroupedIndexRemoved {
        orientation: Orientation,
        index: usize,
    },

    #[error("The removed {orientation} {index} must not contain component origins")]
    ComponentOriginRemoved {
        orientation: Orientation,
        index: usize,
    },

    #[error("Resize weight must be non-negative, got {weight}")]
    NegativeResizeWeight { weight: f64 },

    #[error("Unknown component")]
    UnknownComponent,
}
