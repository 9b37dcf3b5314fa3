//! Cell constraints: where a component lives in the grid and how it is
//! aligned inside its cell.

use std::fmt;

use crate::errors::LayoutError;
use crate::size::{ComponentSize, Extent, Size};
use crate::spec::{FormSpec, SpecAlignment};
use crate::types::{Bounds, Insets, Orientation};

/// Alignment of a component within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellAlignment {
    /// Use the column or row default
    #[default]
    Default,
    /// Left or top
    Start,
    Center,
    /// Right or bottom
    End,
    Fill,
}

impl CellAlignment {
    /// The encoded name of this alignment on the given axis.
    pub fn name(self, orientation: Orientation) -> &'static str {
        match self {
            CellAlignment::Default => "default",
            CellAlignment::Start => SpecAlignment::Start.name(orientation),
            CellAlignment::Center => "center",
            CellAlignment::End => SpecAlignment::End.name(orientation),
            CellAlignment::Fill => "fill",
        }
    }
}

impl From<SpecAlignment> for CellAlignment {
    fn from(alignment: SpecAlignment) -> Self {
        match alignment {
            SpecAlignment::Start => CellAlignment::Start,
            SpecAlignment::Center => CellAlignment::Center,
            SpecAlignment::End => CellAlignment::End,
            SpecAlignment::Fill => CellAlignment::Fill,
        }
    }
}

/// Grid position, span, alignment, and insets of one component.
///
/// Indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellConstraints {
    pub grid_x: usize,
    pub grid_y: usize,
    pub grid_width: usize,
    pub grid_height: usize,
    pub h_align: CellAlignment,
    pub v_align: CellAlignment,
    pub insets: Insets,
}

impl Default for CellConstraints {
    fn default() -> Self {
        Self::xy(1, 1)
    }
}

impl CellConstraints {
    /// A single cell.
    pub fn xy(x: usize, y: usize) -> Self {
        Self::xywh(x, y, 1, 1)
    }

    /// A cell spanning `w` columns.
    pub fn xyw(x: usize, y: usize, w: usize) -> Self {
        Self::xywh(x, y, w, 1)
    }

    /// A cell spanning `w` columns and `h` rows.
    pub fn xywh(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self {
            grid_x: x,
            grid_y: y,
            grid_width: w,
            grid_height: h,
            h_align: CellAlignment::Default,
            v_align: CellAlignment::Default,
            insets: Insets::EMPTY,
        }
    }

    pub fn with_alignment(mut self, h_align: CellAlignment, v_align: CellAlignment) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Origin index along the given axis.
    pub fn origin(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.grid_x,
            Orientation::Vertical => self.grid_y,
        }
    }

    /// Span along the given axis.
    pub fn span(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.grid_width,
            Orientation::Vertical => self.grid_height,
        }
    }

    /// Cell alignment along the given axis.
    pub fn alignment(&self, orientation: Orientation) -> CellAlignment {
        match orientation {
            Orientation::Horizontal => self.h_align,
            Orientation::Vertical => self.v_align,
        }
    }

    pub(crate) fn origin_mut(&mut self, orientation: Orientation) -> &mut usize {
        match orientation {
            Orientation::Horizontal => &mut self.grid_x,
            Orientation::Vertical => &mut self.grid_y,
        }
    }

    pub(crate) fn span_mut(&mut self, orientation: Orientation) -> &mut usize {
        match orientation {
            Orientation::Horizontal => &mut self.grid_width,
            Orientation::Vertical => &mut self.grid_height,
        }
    }

    /// Reject zero indices and spans.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.grid_x == 0 || self.grid_y == 0 || self.grid_width == 0 || self.grid_height == 0 {
            return Err(LayoutError::InvalidCellBounds {
                x: self.grid_x,
                y: self.grid_y,
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        Ok(())
    }

    /// Check that the cell lies within a grid of the given size.
    pub fn ensure_valid_grid_bounds(
        &self,
        column_count: usize,
        row_count: usize,
    ) -> Result<(), LayoutError> {
        self.validate()?;
        for (orientation, count) in [
            (Orientation::Horizontal, column_count),
            (Orientation::Vertical, row_count),
        ] {
            let index = self.origin(orientation);
            let span = self.span(orientation);
            if index > count {
                return Err(LayoutError::IndexOutOfRange {
                    orientation,
                    index,
                    count,
                });
            }
            if index + span - 1 > count {
                return Err(LayoutError::SpanExceedsGrid {
                    orientation,
                    index,
                    span,
                    count,
                });
            }
        }
        Ok(())
    }

    /// Shift or widen these constraints after a column or row was inserted
    /// at `index`.
    pub fn shift_for_insert(&mut self, orientation: Orientation, index: usize) {
        let first = self.origin(orientation);
        let last = first + self.span(orientation) - 1;
        if first >= index {
            *self.origin_mut(orientation) += 1;
        } else if last >= index {
            *self.span_mut(orientation) += 1;
        }
    }

    /// Shift or narrow these constraints after the column or row at `index`
    /// was removed. Fails if the component starts in the removed index.
    pub fn shift_for_remove(
        &mut self,
        orientation: Orientation,
        index: usize,
    ) -> Result<(), LayoutError> {
        let first = self.origin(orientation);
        let last = first + self.span(orientation) - 1;
        if first == index {
            return Err(LayoutError::ComponentOriginRemoved { orientation, index });
        }
        if first > index {
            *self.origin_mut(orientation) -= 1;
        } else if last >= index {
            *self.span_mut(orientation) -= 1;
        }
        Ok(())
    }

    /// Compute the component bounds inside the given cell.
    ///
    /// `column_spec` and `row_spec` are the specs of the cell if the component
    /// spans exactly one column or row; `None` otherwise.
    pub fn place(
        &self,
        cell: Bounds,
        width: Extent,
        height: Extent,
        column_spec: Option<&FormSpec>,
        row_spec: Option<&FormSpec>,
    ) -> Bounds {
        let cell = cell.inset(&self.insets);
        let h_align = concrete_alignment(self.h_align, column_spec);
        let v_align = concrete_alignment(self.v_align, row_spec);
        let comp_w = component_size(width, column_spec, cell.width);
        let comp_h = component_size(height, row_spec, cell.height);
        Bounds::new(
            origin(h_align, cell.x, cell.width, comp_w),
            origin(v_align, cell.y, cell.height, comp_h),
            extent(h_align, cell.width, comp_w),
            extent(v_align, cell.height, comp_h),
        )
    }
}

impl fmt::Display for CellConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}",
            self.grid_x,
            self.grid_y,
            self.grid_width,
            self.grid_height,
            self.h_align.name(Orientation::Horizontal),
            self.v_align.name(Orientation::Vertical)
        )
    }
}

fn concrete_alignment(alignment: CellAlignment, spec: Option<&FormSpec>) -> CellAlignment {
    match (alignment, spec) {
        (CellAlignment::Default, None) => CellAlignment::Fill,
        (CellAlignment::Default, Some(spec)) => spec.default_alignment().into(),
        (explicit, _) => explicit,
    }
}

fn component_size(extent: Extent, spec: Option<&FormSpec>, cell_size: i32) -> i32 {
    match spec.map(FormSpec::size) {
        None => extent.preferred,
        Some(Size::Component(ComponentSize::Minimum)) => extent.minimum,
        Some(Size::Component(ComponentSize::Preferred)) => extent.preferred,
        Some(_) if cell_size >= extent.preferred => extent.preferred,
        Some(_) => extent.minimum,
    }
}

fn origin(alignment: CellAlignment, cell_origin: i32, cell_size: i32, component_size: i32) -> i32 {
    match alignment {
        CellAlignment::End => cell_origin + cell_size - component_size,
        CellAlignment::Center => cell_origin + (cell_size - component_size) / 2,
        _ => cell_origin,
    }
}

fn extent(alignment: CellAlignment, cell_size: i32, component_size: i32) -> i32 {
    match alignment {
        CellAlignment::Fill => cell_size,
        _ => component_size,
    }
}
