//! Core types for the forms layout engine.
//!
//! This crate provides the value types shared by the parser, the layout
//! solver, and the builder layer:
//! - Geometry (`Bounds`, `Dimension`, `Insets`) and axis orientation
//! - Units and the unit converter that maps them to pixels
//! - Size descriptors (constant, component measured, bounded, sum)
//! - Column and row specifications
//! - Cell constraints
//! - Error types

pub mod border;
pub mod constraints;
pub mod errors;
pub mod size;
pub mod spec;
pub mod types;
pub mod units;

pub use border::*;
pub use constraints::*;
pub use errors::*;
pub use size::*;
pub use spec::*;
pub use types::*;
pub use units::*;
