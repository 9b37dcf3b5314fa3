//! The contract between the layout manager and the host widget toolkit.

use forms_core::{Bounds, DeviceMetrics, Dimension};

/// A widget container laid out by a [`FormLayout`](crate::FormLayout).
///
/// The layout never owns widgets. It addresses them through `Key` handles
/// and asks the container to measure and move them.
pub trait Container {
    type Key;

    /// Area available to the layout, in container coordinates.
    fn client_area(&self) -> Bounds;

    fn minimum_size(&self, key: &Self::Key) -> Dimension;

    fn preferred_size(&self, key: &Self::Key) -> Dimension;

    /// Invisible widgets take no space while the layout honors visibility.
    fn is_visible(&self, _key: &Self::Key) -> bool {
        true
    }

    /// Font and screen metrics used to resolve dialog units and physical
    /// lengths.
    fn device_metrics(&self) -> DeviceMetrics {
        DeviceMetrics::default()
    }

    fn set_bounds(&mut self, key: &Self::Key, bounds: Bounds);
}
