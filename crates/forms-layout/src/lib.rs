//! Grid layout for forms.
//!
//! [`FormLayout`] arranges the widgets of a [`Container`] in columns and rows
//! described by [`ColumnSpec`](forms_core::ColumnSpec)s and
//! [`RowSpec`](forms_core::RowSpec)s. Column widths and row heights are
//! derived from the specs and from the measured sizes of the widgets in them.
//!
//! # Architecture
//!
//! 1. **Measurement**: the container reports minimum and preferred sizes
//! 2. **Sizing**: each axis is solved independently, see [`compute`]
//! 3. **Placement**: widgets are aligned inside their cells

pub mod compute;
mod container;
mod form_layout;
mod info;

pub use container::Container;
pub use form_layout::FormLayout;
pub use info::LayoutInfo;
