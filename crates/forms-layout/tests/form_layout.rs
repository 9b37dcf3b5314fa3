//! End to end layout of a mock container.

use std::collections::HashMap;
use std::sync::Arc;

use forms_core::{
    Border, Bounds, CellAlignment, CellConstraints, DeviceMetrics, Dimension, LayoutError,
    Orientation, UnitConverter,
};
use forms_layout::{Container, FormLayout, LayoutInfo};

#[derive(Debug, Clone, Copy)]
struct Widget {
    min: Dimension,
    pref: Dimension,
    visible: bool,
    bounds: Option<Bounds>,
}

#[derive(Debug, Default)]
struct Panel {
    area: Bounds,
    metrics: DeviceMetrics,
    widgets: HashMap<&'static str, Widget>,
}

impl Panel {
    fn new(width: i32, height: i32) -> Self {
        Self {
            area: Bounds::new(0, 0, width, height),
            ..Default::default()
        }
    }

    fn with(mut self, key: &'static str, min: (i32, i32), pref: (i32, i32)) -> Self {
        self.widgets.insert(
            key,
            Widget {
                min: Dimension::new(min.0, min.1),
                pref: Dimension::new(pref.0, pref.1),
                visible: true,
                bounds: None,
            },
        );
        self
    }

    fn hide(&mut self, key: &str) {
        if let Some(widget) = self.widgets.get_mut(key) {
            widget.visible = false;
        }
    }

    fn bounds_of(&self, key: &str) -> Option<Bounds> {
        self.widgets.get(key).and_then(|w| w.bounds)
    }
}

impl Container for Panel {
    type Key = &'static str;

    fn client_area(&self) -> Bounds {
        self.area
    }

    fn minimum_size(&self, key: &Self::Key) -> Dimension {
        self.widgets.get(key).map(|w| w.min).unwrap_or_default()
    }

    fn preferred_size(&self, key: &Self::Key) -> Dimension {
        self.widgets.get(key).map(|w| w.pref).unwrap_or_default()
    }

    fn is_visible(&self, key: &Self::Key) -> bool {
        self.widgets.get(key).map_or(false, |w| w.visible)
    }

    fn device_metrics(&self) -> DeviceMetrics {
        self.metrics
    }

    fn set_bounds(&mut self, key: &Self::Key, bounds: Bounds) {
        if let Some(widget) = self.widgets.get_mut(key) {
            widget.bounds = Some(bounds);
        }
    }
}

/// Two label/field lines.
fn label_field_form() -> (FormLayout<&'static str>, Panel) {
    let mut layout = FormLayout::from_encoded("right:pref, 4px, pref:grow", "pref, 3px, pref").unwrap();
    layout.add_component("name_label", CellConstraints::xy(1, 1)).unwrap();
    layout.add_component("name_field", CellConstraints::xy(3, 1)).unwrap();
    layout.add_component("mail_label", CellConstraints::xy(1, 3)).unwrap();
    layout.add_component("mail_field", CellConstraints::xy(3, 3)).unwrap();

    let panel = Panel::new(200, 50)
        .with("name_label", (20, 10), (40, 12))
        .with("name_field", (30, 15), (100, 20))
        .with("mail_label", (10, 10), (30, 12))
        .with("mail_field", (30, 15), (80, 20));
    (layout, panel)
}

#[test]
fn test_preferred_layout_size() {
    let (layout, panel) = label_field_form();
    assert_eq!(layout.preferred_layout_size(&panel).unwrap(), Dimension::new(144, 43));
    assert_eq!(layout.minimum_layout_size(&panel).unwrap(), Dimension::new(144, 43));
}

#[test]
fn test_layout_container_places_components() {
    let (layout, mut panel) = label_field_form();
    layout.layout_container(&mut panel).unwrap();

    // Labels are right aligned and vertically centered.
    assert_eq!(panel.bounds_of("name_label"), Some(Bounds::new(0, 4, 40, 12)));
    assert_eq!(panel.bounds_of("mail_label"), Some(Bounds::new(10, 27, 30, 12)));
    // Fields fill the growing column.
    assert_eq!(panel.bounds_of("name_field"), Some(Bounds::new(44, 0, 156, 20)));
    assert_eq!(panel.bounds_of("mail_field"), Some(Bounds::new(44, 23, 156, 20)));
}

#[test]
fn test_compute_bounds_keeps_insertion_order() {
    let (layout, panel) = label_field_form();
    let keys: Vec<_> = layout
        .compute_bounds(&panel)
        .unwrap()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(keys, vec!["name_label", "name_field", "mail_label", "mail_field"]);
}

#[test]
fn test_explicit_cell_alignment() {
    let (mut layout, mut panel) = label_field_form();
    layout
        .set_constraints(
            &"name_label",
            CellConstraints::xy(1, 1).with_alignment(CellAlignment::Start, CellAlignment::End),
        )
        .unwrap();
    layout.layout_container(&mut panel).unwrap();
    assert_eq!(panel.bounds_of("name_label"), Some(Bounds::new(0, 8, 40, 12)));
}

#[test]
fn test_border_insets() {
    let (mut layout, panel) = label_field_form();
    layout.set_border(Some(Border::pixels(5, 6, 7, 8)));

    assert_eq!(layout.preferred_layout_size(&panel).unwrap(), Dimension::new(158, 55));

    let info = layout.layout_info(&panel).unwrap();
    assert_eq!(info, LayoutInfo::new(vec![6, 46, 50, 192], vec![5, 25, 28, 48]));
    assert_eq!((info.x(), info.y(), info.width(), info.height()), (6, 5, 186, 43));
}

#[test]
fn test_invisible_components_take_no_space() {
    let (mut layout, mut panel) = label_field_form();
    panel.hide("mail_label");
    panel.hide("mail_field");
    assert_eq!(layout.preferred_layout_size(&panel).unwrap().height, 23);

    layout.set_honors_visibility(false);
    assert_eq!(layout.preferred_layout_size(&panel).unwrap().height, 43);
}

#[test]
fn test_spanning_component_reaching_growing_column() {
    let mut layout = FormLayout::from_encoded("pref, 4px, pref:grow", "pref").unwrap();
    layout.add_component("label", CellConstraints::xy(1, 1)).unwrap();
    layout.add_component("title", CellConstraints::xyw(1, 1, 3)).unwrap();
    let panel = Panel::new(400, 20)
        .with("label", (40, 10), (40, 10))
        .with("title", (300, 10), (300, 10));

    assert_eq!(layout.preferred_layout_size(&panel).unwrap().width, 300);

    // Without a growing column the span does not widen the layout.
    layout
        .set_column_spec(3, forms_parser::parse_column_spec("pref").unwrap())
        .unwrap();
    assert_eq!(layout.preferred_layout_size(&panel).unwrap().width, 44);
}

#[test]
fn test_column_groups_share_width() {
    let mut layout = FormLayout::from_encoded("pref, pref", "pref").unwrap();
    layout.add_component("ok", CellConstraints::xy(1, 1)).unwrap();
    layout.add_component("cancel", CellConstraints::xy(2, 1)).unwrap();
    let panel = Panel::new(100, 20)
        .with("ok", (30, 10), (30, 10))
        .with("cancel", (50, 10), (50, 10));

    assert_eq!(layout.preferred_layout_size(&panel).unwrap().width, 80);
    layout.set_column_groups(vec![vec![1, 2]]).unwrap();
    assert_eq!(layout.preferred_layout_size(&panel).unwrap().width, 100);
}

#[test]
fn test_default_columns_compress() {
    let mut layout = FormLayout::from_encoded("default, 4px, default", "pref").unwrap();
    layout.add_component("a", CellConstraints::xy(1, 1)).unwrap();
    layout.add_component("b", CellConstraints::xy(3, 1)).unwrap();
    let mut panel = Panel::new(74, 10)
        .with("a", (20, 10), (60, 10))
        .with("b", (10, 10), (50, 10));

    assert_eq!(layout.minimum_layout_size(&panel).unwrap().width, 34);
    assert_eq!(layout.preferred_layout_size(&panel).unwrap().width, 114);

    layout.layout_container(&mut panel).unwrap();
    assert_eq!(panel.bounds_of("a"), Some(Bounds::new(0, 0, 40, 10)));
    assert_eq!(panel.bounds_of("b"), Some(Bounds::new(44, 0, 30, 10)));
}

#[test]
fn test_constraints_outside_grid() {
    let mut layout = FormLayout::from_encoded("pref, pref", "pref").unwrap();
    let panel = Panel::new(100, 20).with("a", (1, 1), (1, 1));

    layout.add_component("a", CellConstraints::xy(3, 1)).unwrap();
    assert_eq!(
        layout.layout_info(&panel).unwrap_err(),
        LayoutError::IndexOutOfRange {
            orientation: Orientation::Horizontal,
            index: 3,
            count: 2,
        }
    );

    layout.set_constraints(&"a", CellConstraints::xyw(2, 1, 2)).unwrap();
    assert!(matches!(
        layout.preferred_layout_size(&panel),
        Err(LayoutError::SpanExceedsGrid { span: 2, .. })
    ));
}

#[test]
fn test_huge_constant_sizes_saturate() {
    let mut layout = FormLayout::from_encoded("3000000000px, 3000000000px", "pref").unwrap();
    layout.set_border(Some(Border::pixels(5, 5, 5, 5)));
    layout.add_component("a", CellConstraints::xy(2, 1)).unwrap();
    let panel = Panel::new(100, 20).with("a", (1, 1), (5, 10));

    assert_eq!(layout.preferred_layout_size(&panel).unwrap(), Dimension::new(i32::MAX, 20));
    assert_eq!(layout.minimum_layout_size(&panel).unwrap().width, i32::MAX);

    let info = layout.layout_info(&panel).unwrap();
    assert_eq!(info.column_origins, vec![5, i32::MAX, i32::MAX]);
    assert_eq!(layout.compute_bounds(&panel).unwrap().len(), 1);
}

#[test]
fn test_dialog_units_follow_device_metrics() {
    let layout = FormLayout::<&'static str>::from_encoded("4dlu", "4dlu").unwrap();
    let mut panel = Panel::new(100, 100);
    assert_eq!(layout.preferred_layout_size(&panel).unwrap(), Dimension::new(6, 7));

    panel.metrics = DeviceMetrics::new(96.0, 8.0, 16.0);
    assert_eq!(layout.preferred_layout_size(&panel).unwrap(), Dimension::new(8, 8));
}

#[derive(Debug)]
struct CoarseConverter;

impl UnitConverter for CoarseConverter {
    fn dialog_unit_x_as_pixel(&self, dlu: f64, _metrics: &DeviceMetrics) -> i32 {
        (dlu * 10.0) as i32
    }
}

#[test]
fn test_custom_unit_converter() {
    let mut layout = FormLayout::<&'static str>::from_encoded("4dlu", "4dlu").unwrap();
    layout.set_unit_converter(Arc::new(CoarseConverter));
    let panel = Panel::new(100, 100);
    assert_eq!(layout.preferred_layout_size(&panel).unwrap(), Dimension::new(40, 7));
}
