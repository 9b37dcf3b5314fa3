//! The form layout manager.

use std::hash::Hash;
use std::sync::Arc;

use forms_core::{
    Border, Bounds, CellConstraints, ColumnSpec, DefaultUnitConverter, Dimension, Extent,
    FormsError, Insets, LayoutError, Measure, Orientation, ParseError, RowSpec, UnitContext,
    UnitConverter,
};
use forms_parser::{parse_cell_constraints, parse_groups, parse_specs};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::compute::Axis;
use crate::container::Container;
use crate::info::LayoutInfo;

/// Lays out the widgets of a [`Container`] in a grid of columns and rows.
///
/// Columns and rows are described by [`ColumnSpec`]s and [`RowSpec`]s; every
/// widget is registered under its key `K` with [`CellConstraints`] that
/// address the grid with 1-based indices.
///
/// ```ignore
/// let mut layout = FormLayout::from_encoded("right:pref, 4dlu, 50dlu", "pref")?;
/// layout.add_component(name_label, CellConstraints::xy(1, 1))?;
/// layout.add_component(name_field, CellConstraints::xy(3, 1))?;
/// layout.layout_container(&mut panel)?;
/// ```
#[derive(Debug, Clone)]
pub struct FormLayout<K> {
    column_specs: Vec<ColumnSpec>,
    row_specs: Vec<RowSpec>,
    column_groups: Vec<Vec<usize>>,
    row_groups: Vec<Vec<usize>>,
    components: IndexMap<K, CellConstraints>,
    border: Option<Border>,
    honors_visibility: bool,
    unit_converter: Arc<dyn UnitConverter>,
}

/// A component with its measured extents for one layout pass.
struct Measured<'a, K> {
    key: &'a K,
    constraints: CellConstraints,
    width: Extent,
    height: Extent,
    visible: bool,
}

impl<K: Clone + Eq + Hash> FormLayout<K> {
    pub fn new(column_specs: Vec<ColumnSpec>, row_specs: Vec<RowSpec>) -> Self {
        Self {
            column_specs,
            row_specs,
            column_groups: Vec::new(),
            row_groups: Vec::new(),
            components: IndexMap::new(),
            border: None,
            honors_visibility: true,
            unit_converter: Arc::new(DefaultUnitConverter),
        }
    }

    /// Create a layout from encoded column and row specs, e.g.
    /// `"right:pref, 4dlu, 50dlu"` and `"pref, 3dlu, pref"`.
    pub fn from_encoded(columns: &str, rows: &str) -> Result<Self, ParseError> {
        let (column_specs, row_specs) = parse_specs(columns, rows)?;
        Ok(Self::new(column_specs, row_specs))
    }

    // ------------------------------------------------------------------
    // Columns

    pub fn column_count(&self) -> usize {
        self.column_specs.len()
    }

    pub fn column_specs(&self) -> &[ColumnSpec] {
        &self.column_specs
    }

    /// The spec of the 1-based column `index`.
    pub fn column_spec(&self, index: usize) -> Result<&ColumnSpec, LayoutError> {
        check_index(Orientation::Horizontal, index, self.column_count())?;
        Ok(&self.column_specs[index - 1])
    }

    pub fn set_column_spec(&mut self, index: usize, spec: ColumnSpec) -> Result<(), LayoutError> {
        check_index(Orientation::Horizontal, index, self.column_count())?;
        self.column_specs[index - 1] = spec;
        Ok(())
    }

    pub fn append_column(&mut self, spec: ColumnSpec) {
        self.column_specs.push(spec);
    }

    /// Insert a column before the 1-based `index`.
    ///
    /// Components at or right of `index` move one column right; components
    /// spanning across it get wider.
    pub fn insert_column(&mut self, index: usize, spec: ColumnSpec) -> Result<(), LayoutError> {
        check_index(Orientation::Horizontal, index, self.column_count())?;
        self.column_specs.insert(index - 1, spec);
        self.shift_for_insert(Orientation::Horizontal, index);
        Ok(())
    }

    /// Remove the 1-based column `index`.
    ///
    /// Fails without changing anything if a component starts in this column
    /// or the column belongs to a group.
    pub fn remove_column(&mut self, index: usize) -> Result<(), LayoutError> {
        check_index(Orientation::Horizontal, index, self.column_count())?;
        self.shift_for_remove(Orientation::Horizontal, index)?;
        self.column_specs.remove(index - 1);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Rows

    pub fn row_count(&self) -> usize {
        self.row_specs.len()
    }

    pub fn row_specs(&self) -> &[RowSpec] {
        &self.row_specs
    }

    /// The spec of the 1-based row `index`.
    pub fn row_spec(&self, index: usize) -> Result<&RowSpec, LayoutError> {
        check_index(Orientation::Vertical, index, self.row_count())?;
        Ok(&self.row_specs[index - 1])
    }

    pub fn set_row_spec(&mut self, index: usize, spec: RowSpec) -> Result<(), LayoutError> {
        check_index(Orientation::Vertical, index, self.row_count())?;
        self.row_specs[index - 1] = spec;
        Ok(())
    }

    pub fn append_row(&mut self, spec: RowSpec) {
        self.row_specs.push(spec);
    }

    /// Insert a row above the 1-based `index`.
    pub fn insert_row(&mut self, index: usize, spec: RowSpec) -> Result<(), LayoutError> {
        check_index(Orientation::Vertical, index, self.row_count())?;
        self.row_specs.insert(index - 1, spec);
        self.shift_for_insert(Orientation::Vertical, index);
        Ok(())
    }

    /// Remove the 1-based row `index`. Same rules as [`Self::remove_column`].
    pub fn remove_row(&mut self, index: usize) -> Result<(), LayoutError> {
        check_index(Orientation::Vertical, index, self.row_count())?;
        self.shift_for_remove(Orientation::Vertical, index)?;
        self.row_specs.remove(index - 1);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Groups

    pub fn column_groups(&self) -> &[Vec<usize>] {
        &self.column_groups
    }

    /// Columns in the same group always get the same width.
    pub fn set_column_groups(&mut self, groups: Vec<Vec<usize>>) -> Result<(), LayoutError> {
        validate_groups(Orientation::Horizontal, &groups, self.column_count())?;
        self.column_groups = groups;
        Ok(())
    }

    /// Set column groups from an encoded string such as `"1,5;3,7"`.
    pub fn set_column_groups_encoded(&mut self, encoded: &str) -> Result<(), FormsError> {
        let groups = parse_groups(encoded)?;
        self.set_column_groups(groups)?;
        Ok(())
    }

    pub fn row_groups(&self) -> &[Vec<usize>] {
        &self.row_groups
    }

    /// Rows in the same group always get the same height.
    pub fn set_row_groups(&mut self, groups: Vec<Vec<usize>>) -> Result<(), LayoutError> {
        validate_groups(Orientation::Vertical, &groups, self.row_count())?;
        self.row_groups = groups;
        Ok(())
    }

    pub fn set_row_groups_encoded(&mut self, encoded: &str) -> Result<(), FormsError> {
        let groups = parse_groups(encoded)?;
        self.set_row_groups(groups)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Components

    /// Register `key` at the given cell. Re-adding a key replaces its
    /// constraints but keeps its position in the layout order.
    ///
    /// Grid bounds are checked at layout time, so components may be added
    /// before their columns and rows.
    pub fn add_component(&mut self, key: K, constraints: CellConstraints) -> Result<(), LayoutError> {
        constraints.validate()?;
        self.components.insert(key, constraints);
        Ok(())
    }

    /// Register `key` with encoded constraints such as `"1, 3, 2, 1, l, t"`.
    pub fn add_component_encoded(&mut self, key: K, encoded: &str) -> Result<(), FormsError> {
        let constraints = parse_cell_constraints(encoded)?;
        self.add_component(key, constraints)?;
        Ok(())
    }

    pub fn set_constraints(&mut self, key: &K, constraints: CellConstraints) -> Result<(), LayoutError> {
        constraints.validate()?;
        let slot = self
            .components
            .get_mut(key)
            .ok_or(LayoutError::UnknownComponent)?;
        *slot = constraints;
        Ok(())
    }

    pub fn constraints(&self, key: &K) -> Option<CellConstraints> {
        self.components.get(key).copied()
    }

    pub fn remove_component(&mut self, key: &K) -> Option<CellConstraints> {
        self.components.shift_remove(key)
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Components and their constraints in insertion order.
    pub fn components(&self) -> impl Iterator<Item = (&K, &CellConstraints)> {
        self.components.iter()
    }

    // ------------------------------------------------------------------
    // Settings

    pub fn border(&self) -> Option<&Border> {
        self.border.as_ref()
    }

    pub fn set_border(&mut self, border: Option<Border>) {
        self.border = border;
    }

    pub fn honors_visibility(&self) -> bool {
        self.honors_visibility
    }

    /// When set, invisible components take no space in the grid.
    pub fn set_honors_visibility(&mut self, honors_visibility: bool) {
        self.honors_visibility = honors_visibility;
    }

    pub fn unit_converter(&self) -> &dyn UnitConverter {
        &*self.unit_converter
    }

    pub fn set_unit_converter(&mut self, converter: Arc<dyn UnitConverter>) {
        self.unit_converter = converter;
    }

    // ------------------------------------------------------------------
    // Layout

    /// Size needed to show every component at its minimum size.
    pub fn minimum_layout_size<C>(&self, container: &C) -> Result<Dimension, LayoutError>
    where
        C: Container<Key = K>,
    {
        self.layout_size(container, Measure::Minimum)
    }

    /// Size needed to show every component at its preferred size.
    pub fn preferred_layout_size<C>(&self, container: &C) -> Result<Dimension, LayoutError>
    where
        C: Container<Key = K>,
    {
        self.layout_size(container, Measure::Preferred)
    }

    /// Column and row origins for the container's current client area.
    pub fn layout_info<C>(&self, container: &C) -> Result<LayoutInfo, LayoutError>
    where
        C: Container<Key = K>,
    {
        let units = UnitContext::new(&*self.unit_converter, container.device_metrics());
        let measured = self.measure(container)?;
        Ok(self.grid_info(&units, &measured, container.client_area()))
    }

    /// Bounds of every component, in insertion order.
    pub fn compute_bounds<C>(&self, container: &C) -> Result<Vec<(K, Bounds)>, LayoutError>
    where
        C: Container<Key = K>,
    {
        let units = UnitContext::new(&*self.unit_converter, container.device_metrics());
        let measured = self.measure(container)?;
        let info = self.grid_info(&units, &measured, container.client_area());

        let bounds = measured
            .iter()
            .map(|m| {
                let cc = &m.constraints;
                let (x, y) = (cc.grid_x - 1, cc.grid_y - 1);
                let (x_end, y_end) = (x + cc.grid_width, y + cc.grid_height);
                let cell = Bounds::new(
                    info.column_origins[x],
                    info.row_origins[y],
                    info.column_origins[x_end] - info.column_origins[x],
                    info.row_origins[y_end] - info.row_origins[y],
                );
                let column_spec = (cc.grid_width == 1).then(|| self.column_specs[x].spec());
                let row_spec = (cc.grid_height == 1).then(|| self.row_specs[y].spec());
                let placed = cc.place(cell, m.width, m.height, column_spec, row_spec);
                (m.key.clone(), placed)
            })
            .collect();
        Ok(bounds)
    }

    /// Compute every component's bounds and apply them to the container.
    pub fn layout_container<C>(&self, container: &mut C) -> Result<(), LayoutError>
    where
        C: Container<Key = K>,
    {
        let bounds = self.compute_bounds(container)?;
        debug!(
            columns = self.column_count(),
            rows = self.row_count(),
            components = bounds.len(),
            "laying out container"
        );
        for (key, b) in &bounds {
            container.set_bounds(key, *b);
        }
        Ok(())
    }

    fn layout_size<C>(&self, container: &C, measure: Measure) -> Result<Dimension, LayoutError>
    where
        C: Container<Key = K>,
    {
        let units = UnitContext::new(&*self.unit_converter, container.device_metrics());
        let measured = self.measure(container)?;
        let (columns, rows) = self.axes(&measured);
        let insets = self.insets(&units);

        let size = Dimension::new(
            columns
                .layout_size(&units, measure)
                .saturating_add(insets.along(Orientation::Horizontal)),
            rows.layout_size(&units, measure)
                .saturating_add(insets.along(Orientation::Vertical)),
        );
        trace!(?measure, width = size.width, height = size.height, "layout size");
        Ok(size)
    }

    /// Check every component against the grid and measure it.
    fn measure<'a, C>(&'a self, container: &C) -> Result<Vec<Measured<'a, K>>, LayoutError>
    where
        C: Container<Key = K>,
    {
        let (column_count, row_count) = (self.column_count(), self.row_count());
        self.components
            .iter()
            .map(|(key, cc)| {
                cc.ensure_valid_grid_bounds(column_count, row_count)?;
                let min = container.minimum_size(key);
                let pref = container.preferred_size(key);
                Ok(Measured {
                    key,
                    constraints: *cc,
                    width: Extent::new(min.width, pref.width),
                    height: Extent::new(min.height, pref.height),
                    visible: !self.honors_visibility || container.is_visible(key),
                })
            })
            .collect()
    }

    fn axes<'a>(&'a self, measured: &[Measured<'_, K>]) -> (Axis<'a>, Axis<'a>) {
        let mut columns = Axis::new(
            self.column_specs.iter().map(ColumnSpec::spec).collect(),
            &self.column_groups,
        );
        let mut rows = Axis::new(
            self.row_specs.iter().map(RowSpec::spec).collect(),
            &self.row_groups,
        );
        for m in measured.iter().filter(|m| m.visible) {
            let cc = &m.constraints;
            columns.add(cc.grid_x - 1, cc.grid_width, m.width);
            rows.add(cc.grid_y - 1, cc.grid_height, m.height);
        }
        (columns, rows)
    }

    fn grid_info(&self, units: &UnitContext<'_>, measured: &[Measured<'_, K>], area: Bounds) -> LayoutInfo {
        let area = area.inset(&self.insets(units));
        let (columns, rows) = self.axes(measured);
        LayoutInfo::new(
            columns.grid_origins(units, area.width, area.x),
            rows.grid_origins(units, area.height, area.y),
        )
    }

    fn insets(&self, units: &UnitContext<'_>) -> Insets {
        self.border
            .map(|border| border.insets(units))
            .unwrap_or(Insets::EMPTY)
    }

    fn groups_mut(&mut self, orientation: Orientation) -> &mut Vec<Vec<usize>> {
        match orientation {
            Orientation::Horizontal => &mut self.column_groups,
            Orientation::Vertical => &mut self.row_groups,
        }
    }

    fn shift_for_insert(&mut self, orientation: Orientation, index: usize) {
        trace!(%orientation, index, "inserting");
        for constraints in self.components.values_mut() {
            constraints.shift_for_insert(orientation, index);
        }
        for group in self.groups_mut(orientation) {
            for member in group.iter_mut().filter(|m| **m >= index) {
                *member += 1;
            }
        }
    }

    /// Validates every component before touching any of them.
    fn shift_for_remove(&mut self, orientation: Orientation, index: usize) -> Result<(), LayoutError> {
        let groups = match orientation {
            Orientation::Horizontal => &self.column_groups,
            Orientation::Vertical => &self.row_groups,
        };
        if groups.iter().flatten().any(|&m| m == index) {
            return Err(LayoutError::GroupedIndexRemoved { orientation, index });
        }

        let shifted = self
            .components
            .values()
            .map(|cc| {
                let mut cc = *cc;
                cc.shift_for_remove(orientation, index)?;
                Ok(cc)
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        trace!(%orientation, index, "removing");
        for (slot, cc) in self.components.values_mut().zip(shifted) {
            *slot = cc;
        }
        for group in self.groups_mut(orientation) {
            for member in group.iter_mut().filter(|m| **m > index) {
                *member -= 1;
            }
        }
        Ok(())
    }
}

impl<K: Clone + Eq + Hash> Default for FormLayout<K> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

fn check_index(orientation: Orientation, index: usize, count: usize) -> Result<(), LayoutError> {
    if index == 0 || index > count {
        return Err(LayoutError::IndexOutOfRange {
            orientation,
            index,
            count,
        });
    }
    Ok(())
}

fn validate_groups(orientation: Orientation, groups: &[Vec<usize>], count: usize) -> Result<(), LayoutError> {
    let mut seen = IndexSet::new();
    for &index in groups.iter().flatten() {
        check_index(orientation, index, count)?;
        if !seen.insert(index) {
            return Err(LayoutError::DuplicateGroupIndex { orientation, index });
        }
    }
    Ok(())
}
