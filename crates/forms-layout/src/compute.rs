//! The column and row sizing algorithm.
//!
//! Each axis is solved independently:
//!
//! 1. **Maximum sizes**: every spec resolves its [`Size`](forms_core::Size)
//!    against the components that sit in exactly that column or row.
//! 2. **Groups**: members of a group all take the largest member size.
//! 3. **Compression**: if the container is smaller than the preferred size,
//!    `default` sized specs shrink towards their minimum.
//! 4. **Distribution**: leftover space goes to growing specs by weight.
//! 5. **Origins**: prefix sums of the final sizes.
//!
//! Components that span several columns or rows never widen individual
//! tracks. They only enlarge the minimum and preferred layout size when their
//! span reaches a growing spec.

use forms_core::{round_half_up, Extent, FormSpec, Measure, UnitContext, NO_GROW};
use smallvec::SmallVec;
use tracing::trace;

/// Extents of the single span components of one column or row.
pub type ExtentBucket = SmallVec<[Extent; 4]>;

/// A component spanning more than one column or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanningExtent {
    /// 0-based index of the first column or row
    pub index: usize,
    pub span: usize,
    pub extent: Extent,
}

/// Everything needed to size one axis of the grid.
#[derive(Debug, Clone)]
pub struct Axis<'a> {
    specs: Vec<&'a FormSpec>,
    groups: &'a [Vec<usize>],
    buckets: Vec<ExtentBucket>,
    spanning: Vec<SpanningExtent>,
}

impl<'a> Axis<'a> {
    pub fn new(specs: Vec<&'a FormSpec>, groups: &'a [Vec<usize>]) -> Self {
        let buckets = vec![ExtentBucket::new(); specs.len()];
        Self {
            specs,
            groups,
            buckets,
            spanning: Vec::new(),
        }
    }

    /// Register a component starting at the 0-based `index`.
    ///
    /// The caller has already checked that the span fits the grid.
    pub fn add(&mut self, index: usize, span: usize, extent: Extent) {
        if span == 1 {
            self.buckets[index].push(extent);
        } else {
            self.spanning.push(SpanningExtent { index, span, extent });
        }
    }

    /// The extent this axis needs when every component gets the size picked by
    /// `default_measure`.
    pub fn layout_size(&self, units: &UnitContext<'_>, default_measure: Measure) -> i32 {
        let sizes = maximum_sizes(&self.specs, &self.buckets, units, default_measure);
        let grouped = grouped_sizes(self.groups, &sizes);
        let origins = compute_origins(&grouped, 0);
        let total = sum_sizes(&grouped);

        let fixed_spans = maximum_fixed_span_table(&self.specs);
        let spanning_demand = self
            .spanning
            .iter()
            .filter(|s| s.span > fixed_spans[s.index])
            .map(|s| {
                let lead = origins[s.index];
                let trail = total - origins[s.index + s.span];
                lead.saturating_add(s.extent.measured(default_measure))
                    .saturating_add(trail)
            })
            .max()
            .unwrap_or(0);

        total.max(spanning_demand)
    }

    /// Origins of every column or row boundary when the axis is laid out in
    /// `total_size` pixels starting at `offset`. Returns `count + 1` entries.
    pub fn grid_origins(&self, units: &UnitContext<'_>, total_size: i32, offset: i32) -> Vec<i32> {
        let min_sizes = maximum_sizes(&self.specs, &self.buckets, units, Measure::Minimum);
        let pref_sizes = maximum_sizes(&self.specs, &self.buckets, units, Measure::Preferred);

        let grouped_min = grouped_sizes(self.groups, &min_sizes);
        let grouped_pref = grouped_sizes(self.groups, &pref_sizes);
        let total_min = sum_sizes(&grouped_min);
        let total_pref = sum_sizes(&grouped_pref);

        let compressed = compressed_sizes(
            &self.specs,
            total_size,
            total_min,
            total_pref,
            &grouped_min,
            &pref_sizes,
        );
        let grouped = grouped_sizes(self.groups, &compressed);
        let total_grouped = sum_sizes(&grouped);
        let sizes = distributed_sizes(&self.specs, total_size, total_grouped, &grouped);

        trace!(
            total_size,
            total_min,
            total_pref,
            ?sizes,
            "resolved track sizes"
        );
        compute_origins(&sizes, offset)
    }
}

/// Resolve every spec's size against its bucket of component extents.
pub fn maximum_sizes<S: AsRef<FormSpec>>(
    specs: &[S],
    buckets: &[ExtentBucket],
    units: &UnitContext<'_>,
    default_measure: Measure,
) -> Vec<i32> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let extents = buckets.get(i).map(|b| b.as_slice()).unwrap_or(&[]);
            spec.as_ref().size().maximum_size(units, extents, default_measure)
        })
        .collect()
}

/// Give every member of a group the size of its largest member.
///
/// Group indices are 1-based; unknown indices are ignored.
pub fn grouped_sizes(groups: &[Vec<usize>], sizes: &[i32]) -> Vec<i32> {
    let mut grouped = sizes.to_vec();
    for group in groups {
        let max = group
            .iter()
            .filter_map(|&index| sizes.get(index.wrapping_sub(1)))
            .copied()
            .max()
            .unwrap_or(0);
        for &index in group {
            if let Some(size) = grouped.get_mut(index.wrapping_sub(1)) {
                *size = max;
            }
        }
    }
    grouped
}

/// Shrink compressible specs when `total_size` lies between the minimum and
/// the preferred total.
pub fn compressed_sizes<S: AsRef<FormSpec>>(
    specs: &[S],
    total_size: i32,
    total_min_size: i32,
    total_pref_size: i32,
    min_sizes: &[i32],
    pref_sizes: &[i32],
) -> Vec<i32> {
    if total_size <= total_min_size {
        return min_sizes.to_vec();
    }
    if total_size >= total_pref_size {
        return pref_sizes.to_vec();
    }

    let compression = (total_pref_size - total_size) as f64;
    let max_compression = (total_pref_size - total_min_size) as f64;
    let factor = compression / max_compression;

    specs
        .iter()
        .zip(min_sizes.iter().zip(pref_sizes))
        .map(|(spec, (&min, &pref))| {
            if spec.as_ref().size().is_compressible() {
                pref - round_half_up((pref - min) as f64 * factor)
            } else {
                pref
            }
        })
        .collect()
}

/// Hand out the free space `total_size - total_pref_size` to growing specs by
/// weight. The integer results always add up to the free space.
pub fn distributed_sizes<S: AsRef<FormSpec>>(
    specs: &[S],
    total_size: i32,
    total_pref_size: i32,
    input_sizes: &[i32],
) -> Vec<i32> {
    let total_free_space = total_size as f64 - total_pref_size as f64;
    if total_free_space < 0.0 {
        return input_sizes.to_vec();
    }

    let total_weight: f64 = specs.iter().map(|s| s.as_ref().resize_weight()).sum();
    if total_weight == 0.0 {
        return input_sizes.to_vec();
    }

    let mut rest_space = total_free_space;
    let mut rounded_rest_space = total_free_space as i32;
    specs
        .iter()
        .zip(input_sizes)
        .map(|(spec, &size)| {
            let weight = spec.as_ref().resize_weight();
            if weight == NO_GROW {
                return size;
            }
            let rounding_correction = rest_space - rounded_rest_space as f64;
            let extra_space = total_free_space * weight / total_weight;
            let rounded_extra_space = round_half_up(extra_space - rounding_correction);
            rest_space -= extra_space;
            rounded_rest_space -= rounded_extra_space;
            size + rounded_extra_space
        })
        .collect()
}

/// Sum of `sizes`, saturating at `i32::MAX`.
pub fn sum_sizes(sizes: &[i32]) -> i32 {
    sizes.iter().fold(0, |total, size| total.saturating_add(*size))
}

/// Prefix sums of `sizes` starting at `offset`; `sizes.len() + 1` entries.
/// Saturates instead of overflowing.
pub fn compute_origins(sizes: &[i32], offset: i32) -> Vec<i32> {
    let mut origins = Vec::with_capacity(sizes.len() + 1);
    let mut current = offset;
    origins.push(current);
    for size in sizes {
        current = current.saturating_add(*size);
        origins.push(current);
    }
    origins
}

/// For each index, how many consecutive specs starting there do not grow.
///
/// A component starting at `i` with span `s` reaches a growing spec iff
/// `s > table[i]`. Indices with no growing spec after them hold `usize::MAX`.
pub fn maximum_fixed_span_table<S: AsRef<FormSpec>>(specs: &[S]) -> Vec<usize> {
    let mut table = vec![0; specs.len()];
    let mut fixed_span = usize::MAX;
    for (i, spec) in specs.iter().enumerate().rev() {
        if spec.as_ref().can_grow() {
            fixed_span = 0;
        }
        table[i] = fixed_span;
        if fixed_span < usize::MAX {
            fixed_span += 1;
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use forms_core::{ColumnSpec, ConstantSize, Size, Unit};
    use proptest::prelude::*;
    use smallvec::smallvec;

    fn specs(sizes: &[(Size, f64)]) -> Vec<ColumnSpec> {
        sizes
            .iter()
            .map(|(size, weight)| ColumnSpec::sized(size.clone()).with_weight(*weight).unwrap())
            .collect()
    }

    #[test]
    fn test_compute_origins() {
        assert_eq!(compute_origins(&[10, 20, 5], 3), vec![3, 13, 33, 38]);
        assert_eq!(compute_origins(&[], 7), vec![7]);
    }

    #[test]
    fn test_grouped_sizes() {
        let groups = vec![vec![1, 3], vec![2, 4]];
        assert_eq!(grouped_sizes(&groups, &[10, 5, 30, 7, 1]), vec![30, 7, 30, 7, 1]);
        assert_eq!(grouped_sizes(&[], &[1, 2]), vec![1, 2]);
    }

    #[test]
    fn test_maximum_sizes() {
        let specs = specs(&[(Size::PREFERRED, 0.0), (Size::pixel(12), 0.0), (Size::MINIMUM, 0.0)]);
        let buckets: Vec<ExtentBucket> = vec![
            smallvec![Extent::new(5, 40), Extent::new(8, 20)],
            smallvec![Extent::new(100, 100)],
            ExtentBucket::new(),
        ];
        let sizes = maximum_sizes(&specs, &buckets, &UnitContext::default(), Measure::Preferred);
        assert_eq!(sizes, vec![40, 12, 0]);
    }

    #[test]
    fn test_compressed_sizes() {
        let specs = specs(&[(Size::DEFAULT, 0.0), (Size::PREFERRED, 0.0)]);
        let min = [10, 20];
        let pref = [50, 20];

        // Fully compressed and fully expanded.
        assert_eq!(compressed_sizes(&specs, 30, 30, 70, &min, &pref), vec![10, 20]);
        assert_eq!(compressed_sizes(&specs, 80, 30, 70, &min, &pref), vec![50, 20]);

        // Halfway: the default column gives up half of its 40 px range.
        assert_eq!(compressed_sizes(&specs, 50, 30, 70, &min, &pref), vec![30, 20]);
    }

    #[test]
    fn test_distributed_sizes_by_weight() {
        let specs = specs(&[(Size::PREFERRED, 0.0), (Size::PREFERRED, 1.0), (Size::PREFERRED, 3.0)]);
        let sizes = distributed_sizes(&specs, 140, 60, &[20, 20, 20]);
        assert_eq!(sizes, vec![20, 40, 80]);
    }

    #[test]
    fn test_distributed_sizes_rounding() {
        let specs = specs(&[(Size::PREFERRED, 1.0), (Size::PREFERRED, 1.0), (Size::PREFERRED, 1.0)]);
        let sizes = distributed_sizes(&specs, 10, 0, &[0, 0, 0]);
        assert_eq!(sizes.iter().sum::<i32>(), 10);
        assert_eq!(sizes, vec![3, 4, 3]);
    }

    #[test]
    fn test_distributed_sizes_without_room_or_weight() {
        let growing = specs(&[(Size::PREFERRED, 1.0)]);
        assert_eq!(distributed_sizes(&growing, 5, 10, &[10]), vec![10]);

        let fixed = specs(&[(Size::PREFERRED, 0.0)]);
        assert_eq!(distributed_sizes(&fixed, 50, 10, &[10]), vec![10]);
    }

    #[test]
    fn test_maximum_fixed_span_table() {
        let specs = specs(&[
            (Size::PREFERRED, 0.0),
            (Size::PREFERRED, 0.0),
            (Size::PREFERRED, 1.0),
            (Size::PREFERRED, 0.0),
        ]);
        let table = maximum_fixed_span_table(&specs);
        assert_eq!(table, vec![2, 1, 0, usize::MAX]);
    }

    #[test]
    fn test_axis_layout_size_with_spanning_component() {
        let specs = specs(&[(Size::PREFERRED, 0.0), (Size::pixel(10), 1.0)]);
        let refs: Vec<&FormSpec> = specs.iter().map(|s| s.spec()).collect();
        let mut axis = Axis::new(refs, &[]);
        axis.add(0, 1, Extent::new(20, 30));
        axis.add(0, 2, Extent::new(50, 100));

        let units = UnitContext::default();
        assert_eq!(axis.layout_size(&units, Measure::Preferred), 100);
        assert_eq!(axis.layout_size(&units, Measure::Minimum), 50);
    }

    #[test]
    fn test_axis_spanning_fixed_columns_is_ignored() {
        let specs = specs(&[(Size::PREFERRED, 0.0), (Size::pixel(10), 0.0)]);
        let refs: Vec<&FormSpec> = specs.iter().map(|s| s.spec()).collect();
        let mut axis = Axis::new(refs, &[]);
        axis.add(0, 1, Extent::new(20, 30));
        axis.add(0, 2, Extent::new(50, 100));

        assert_eq!(axis.layout_size(&UnitContext::default(), Measure::Preferred), 40);
    }

    #[test]
    fn test_axis_grid_origins() {
        let specs = specs(&[(Size::PREFERRED, 0.0), (Size::pixel(4), 0.0), (Size::DEFAULT, 1.0)]);
        let refs: Vec<&FormSpec> = specs.iter().map(|s| s.spec()).collect();
        let mut axis = Axis::new(refs, &[]);
        axis.add(0, 1, Extent::new(10, 30));
        axis.add(2, 1, Extent::new(20, 60));

        let units = UnitContext::default();
        // Plenty of room: pref sizes plus growth.
        assert_eq!(axis.grid_origins(&units, 200, 5), vec![5, 35, 39, 205]);
        // Below the minimum total of 54: every column at its minimum.
        assert_eq!(axis.grid_origins(&units, 40, 0), vec![0, 30, 34, 54]);
        // Halfway between 54 and 94: the default column gives up half of
        // its 40 px range, the preferred column keeps its size.
        assert_eq!(axis.grid_origins(&units, 74, 0), vec![0, 30, 34, 74]);
    }

    #[test]
    fn test_huge_sizes_saturate() {
        assert_eq!(compute_origins(&[i32::MAX, 10], 5), vec![5, i32::MAX, i32::MAX]);
        assert_eq!(sum_sizes(&[i32::MAX, i32::MAX]), i32::MAX);

        let specs = specs(&[
            (Size::Constant(ConstantSize::new(3.0e9, Unit::Pixel)), 0.0),
            (Size::DEFAULT, 1.0),
        ]);
        let refs: Vec<&FormSpec> = specs.iter().map(|s| s.spec()).collect();
        let mut axis = Axis::new(refs, &[]);
        axis.add(1, 1, Extent::new(10, i32::MAX));
        axis.add(0, 2, Extent::new(20, 30));

        let units = UnitContext::default();
        assert_eq!(axis.layout_size(&units, Measure::Preferred), i32::MAX);
        assert_eq!(axis.grid_origins(&units, 100, 0), vec![0, i32::MAX, i32::MAX]);
    }

    proptest! {
        #[test]
        fn prop_distribution_fills_free_space(
            weights in proptest::collection::vec(0.0f64..5.0, 1..8),
            base in 0i32..50,
            free in 0i32..2_000,
        ) {
            let specs: Vec<ColumnSpec> = weights
                .iter()
                .map(|w| ColumnSpec::sized(Size::PREFERRED).with_weight(*w).unwrap())
                .collect();
            let input = vec![base; specs.len()];
            let total_pref = base * specs.len() as i32;
            let sizes = distributed_sizes(&specs, total_pref + free, total_pref, &input);

            let total_weight: f64 = weights.iter().sum();
            let expected = if total_weight == 0.0 { total_pref } else { total_pref + free };
            prop_assert_eq!(sizes.iter().sum::<i32>(), expected);
            for (size, weight) in sizes.iter().zip(&weights) {
                if *weight == 0.0 {
                    prop_assert_eq!(*size, base);
                } else {
                    prop_assert!(*size >= base);
                }
            }
        }

        #[test]
        fn prop_compression_stays_between_min_and_pref(
            pairs in proptest::collection::vec((0i32..100, 0i32..100), 1..8),
            slack in 0.0f64..1.0,
        ) {
            let min: Vec<i32> = pairs.iter().map(|(a, b)| *a.min(b)).collect();
            let pref: Vec<i32> = pairs.iter().map(|(a, b)| *a.max(b)).collect();
            let specs: Vec<ColumnSpec> = min.iter().map(|_| ColumnSpec::sized(Size::DEFAULT)).collect();
            let total_min: i32 = min.iter().sum();
            let total_pref: i32 = pref.iter().sum();
            let total = total_min + ((total_pref - total_min) as f64 * slack) as i32;

            let sizes = compressed_sizes(&specs, total, total_min, total_pref, &min, &pref);
            for ((size, lo), hi) in sizes.iter().zip(&min).zip(&pref) {
                prop_assert!(size >= lo && size <= hi);
            }
        }
    }
}
