//! A cursor over a [`FormLayout`] that fills the grid line by line.

use std::hash::Hash;

use forms_core::{CellConstraints, ColumnSpec, ConstantSize, LayoutError, RowSpec, Size};
use forms_layout::FormLayout;
use tracing::trace;

use crate::style::LayoutStyle;

/// Tracks the current cell while components are added to a layout.
///
/// The cursor starts at column 1, row 1. In right to left mode columns are
/// traversed from the last one to the first one.
#[derive(Debug, Clone)]
pub struct FormBuilder<K> {
    layout: FormLayout<K>,
    style: LayoutStyle,
    column: usize,
    row: usize,
    column_span: usize,
    row_span: usize,
    left_to_right: bool,
}

impl<K: Clone + Eq + Hash> FormBuilder<K> {
    pub fn new(layout: FormLayout<K>) -> Self {
        Self {
            layout,
            style: LayoutStyle::default(),
            column: 1,
            row: 1,
            column_span: 1,
            row_span: 1,
            left_to_right: true,
        }
    }

    pub fn with_style(mut self, style: LayoutStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &LayoutStyle {
        &self.style
    }

    pub fn layout(&self) -> &FormLayout<K> {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut FormLayout<K> {
        &mut self.layout
    }

    pub fn into_layout(self) -> FormLayout<K> {
        self.layout
    }

    // ------------------------------------------------------------------
    // Cursor

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn set_column(&mut self, column: usize) {
        self.column = column;
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn set_row(&mut self, row: usize) {
        self.row = row;
    }

    pub fn set_column_span(&mut self, span: usize) {
        self.column_span = span;
    }

    pub fn set_row_span(&mut self, span: usize) {
        self.row_span = span;
    }

    pub fn set_origin(&mut self, column: usize, row: usize) {
        self.column = column;
        self.row = row;
    }

    pub fn set_extent(&mut self, column_span: usize, row_span: usize) {
        self.column_span = column_span;
        self.row_span = row_span;
    }

    pub fn is_left_to_right(&self) -> bool {
        self.left_to_right
    }

    pub fn set_left_to_right(&mut self, left_to_right: bool) {
        self.left_to_right = left_to_right;
    }

    /// First column in reading direction.
    pub fn leading_column(&self) -> usize {
        if self.left_to_right {
            1
        } else {
            self.layout.column_count()
        }
    }

    /// Move `columns` columns in reading direction.
    pub fn next_column(&mut self, columns: usize) {
        if self.left_to_right {
            self.column += columns;
        } else {
            self.column = self.column.saturating_sub(columns);
        }
    }

    pub fn next_row(&mut self, rows: usize) {
        self.row += rows;
    }

    /// Move `lines` rows down and back to the leading column.
    pub fn next_line(&mut self, lines: usize) {
        self.next_row(lines);
        self.column = self.leading_column();
    }

    /// Constraints for the current cell and span.
    pub fn cell_constraints(&self) -> CellConstraints {
        CellConstraints::xywh(self.column, self.row, self.column_span, self.row_span)
    }

    /// Constraints spanning `column_span` columns from the current cell in
    /// reading direction. In right to left mode the span ends at the cursor.
    pub fn left_adjusted_constraints(&self, column_span: usize) -> CellConstraints {
        let first_column = if self.left_to_right {
            self.column
        } else {
            (self.column + 1).saturating_sub(column_span)
        };
        CellConstraints::xywh(first_column, self.row, column_span, self.row_span)
    }

    pub fn add(&mut self, key: K, constraints: CellConstraints) -> Result<(), LayoutError> {
        trace!(%constraints, "adding component");
        self.layout.add_component(key, constraints)
    }

    // ------------------------------------------------------------------
    // Columns and rows

    pub fn append_column(&mut self, spec: ColumnSpec) {
        self.layout.append_column(spec);
    }

    pub fn append_row(&mut self, spec: RowSpec) {
        self.layout.append_row(spec);
    }

    /// A column that starts empty and takes all extra space.
    pub fn append_glue_column(&mut self) {
        self.append_column(ColumnSpec::sized(Size::ZERO).growing());
    }

    pub fn append_glue_row(&mut self) {
        self.append_row(RowSpec::sized(Size::ZERO).growing());
    }

    pub fn append_label_component_gap_column(&mut self) {
        self.append_gap_column(self.style.label_component_pad_x);
    }

    pub fn append_related_gap_column(&mut self) {
        self.append_gap_column(self.style.related_components_pad_x);
    }

    pub fn append_unrelated_gap_column(&mut self) {
        self.append_gap_column(self.style.unrelated_components_pad_x);
    }

    pub fn append_related_gap_row(&mut self) {
        self.append_gap_row(self.style.related_components_pad_y);
    }

    pub fn append_unrelated_gap_row(&mut self) {
        self.append_gap_row(self.style.unrelated_components_pad_y);
    }

    pub fn append_paragraph_gap_row(&mut self) {
        self.append_gap_row(self.style.paragraph_pad);
    }

    fn append_gap_column(&mut self, gap: ConstantSize) {
        self.append_column(ColumnSpec::sized(gap.into()));
    }

    fn append_gap_row(&mut self, gap: ConstantSize) {
        self.append_row(RowSpec::sized(gap.into()));
    }
}
