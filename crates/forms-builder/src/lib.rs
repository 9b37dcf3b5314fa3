//! Convenience layer over the forms layout engine.
//!
//! - [`FormBuilder`]: a cursor that walks the grid while components are added
//! - [`PanelBuilder`]: creates labels, titles, separators, and buttons through
//!   a [`ComponentFactory`] and places them
//! - [`borders`]: empty borders for panels and dialogs
//! - [`LayoutStyle`]: platform dependent gaps and margins

pub mod borders;
mod builder;
mod factory;
mod panel;
mod style;

pub use builder::FormBuilder;
pub use factory::{ComponentFactory, MnemonicText, SeparatorAlignment};
pub use panel::PanelBuilder;
pub use style::{LayoutStyle, StyleError};
