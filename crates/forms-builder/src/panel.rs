//! Populates a form with labels, titles, separators, and buttons.

use forms_core::{Border, CellConstraints, FormsError, LayoutError};
use forms_layout::FormLayout;
use forms_parser::parse_cell_constraints;
use tracing::debug;

use crate::borders;
use crate::builder::FormBuilder;
use crate::factory::{ComponentFactory, MnemonicText, SeparatorAlignment};
use crate::style::LayoutStyle;

/// Builds a panel: widgets come from a [`ComponentFactory`] and are placed
/// with a [`FormBuilder`] cursor.
///
/// Every `add_*` method has three flavors: at the cursor, at explicit
/// [`CellConstraints`], and at encoded constraints such as `"1, 3"`.
pub struct PanelBuilder<F: ComponentFactory> {
    builder: FormBuilder<F::Widget>,
    factory: F,
}

impl<F: ComponentFactory> PanelBuilder<F> {
    pub fn new(layout: FormLayout<F::Widget>, factory: F) -> Self {
        Self {
            builder: FormBuilder::new(layout),
            factory,
        }
    }

    pub fn with_style(mut self, style: LayoutStyle) -> Self {
        self.builder = self.builder.with_style(style);
        self
    }

    pub fn cursor(&self) -> &FormBuilder<F::Widget> {
        &self.builder
    }

    pub fn cursor_mut(&mut self) -> &mut FormBuilder<F::Widget> {
        &mut self.builder
    }

    pub fn layout(&self) -> &FormLayout<F::Widget> {
        self.builder.layout()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn into_layout(self) -> FormLayout<F::Widget> {
        self.builder.into_layout()
    }

    pub fn into_parts(self) -> (FormLayout<F::Widget>, F) {
        (self.builder.into_layout(), self.factory)
    }

    // ------------------------------------------------------------------
    // Borders

    pub fn set_border(&mut self, border: Border) {
        self.builder.layout_mut().set_border(Some(border));
    }

    /// Use the dialog margins of the current style.
    pub fn set_default_dialog_border(&mut self) {
        let border = borders::dialog(self.builder.style());
        self.set_border(border);
    }

    // ------------------------------------------------------------------
    // Widgets

    pub fn add(&mut self, widget: F::Widget, constraints: CellConstraints) -> Result<(), LayoutError> {
        self.builder.add(widget, constraints)
    }

    pub fn add_label(&mut self, text: &str) -> Result<F::Widget, LayoutError> {
        let constraints = self.builder.cell_constraints();
        self.add_label_at(text, constraints)
    }

    pub fn add_label_at(&mut self, text: &str, constraints: CellConstraints) -> Result<F::Widget, LayoutError> {
        constraints.validate()?;
        let label = self.factory.create_label(&MnemonicText::parse(text));
        self.place(label, constraints)
    }

    pub fn add_label_encoded(&mut self, text: &str, encoded: &str) -> Result<F::Widget, FormsError> {
        let constraints = parse_cell_constraints(encoded)?;
        Ok(self.add_label_at(text, constraints)?)
    }

    /// Add a label and the widget it labels. Returns the label.
    pub fn add_labeled(
        &mut self,
        label_text: &str,
        label_constraints: CellConstraints,
        widget: F::Widget,
        widget_constraints: CellConstraints,
    ) -> Result<F::Widget, LayoutError> {
        widget_constraints.validate()?;
        let label = self.add_label_at(label_text, label_constraints)?;
        self.add(widget, widget_constraints)?;
        Ok(label)
    }

    /// Add an existing label next to the widget it labels. Nothing is added
    /// unless both constraints are valid.
    pub fn add_with_label(
        &mut self,
        label: F::Widget,
        label_constraints: CellConstraints,
        widget: F::Widget,
        widget_constraints: CellConstraints,
    ) -> Result<(), LayoutError> {
        label_constraints.validate()?;
        widget_constraints.validate()?;
        self.add(label, label_constraints)?;
        self.add(widget, widget_constraints)
    }

    pub fn add_title(&mut self, text: &str) -> Result<F::Widget, LayoutError> {
        let constraints = self.builder.cell_constraints();
        self.add_title_at(text, constraints)
    }

    pub fn add_title_at(&mut self, text: &str, constraints: CellConstraints) -> Result<F::Widget, LayoutError> {
        constraints.validate()?;
        let title = self.factory.create_title(&MnemonicText::parse(text));
        self.place(title, constraints)
    }

    pub fn add_title_encoded(&mut self, text: &str, encoded: &str) -> Result<F::Widget, FormsError> {
        let constraints = parse_cell_constraints(encoded)?;
        Ok(self.add_title_at(text, constraints)?)
    }

    /// Add a titled separator spanning all columns of the layout.
    pub fn add_separator(&mut self, text: &str) -> Result<F::Widget, LayoutError> {
        let span = self.builder.layout().column_count();
        self.add_separator_span(text, span)
    }

    /// Add a titled separator spanning `column_span` columns from the cursor.
    pub fn add_separator_span(&mut self, text: &str, column_span: usize) -> Result<F::Widget, LayoutError> {
        let constraints = self.builder.left_adjusted_constraints(column_span);
        self.add_separator_at(text, constraints)
    }

    /// The title sits on the leading side: left in left to right mode,
    /// right otherwise.
    pub fn add_separator_at(&mut self, text: &str, constraints: CellConstraints) -> Result<F::Widget, LayoutError> {
        constraints.validate()?;
        let alignment = if self.builder.is_left_to_right() {
            SeparatorAlignment::Left
        } else {
            SeparatorAlignment::Right
        };
        let separator = self
            .factory
            .create_separator(&MnemonicText::parse(text), alignment);
        self.place(separator, constraints)
    }

    pub fn add_separator_encoded(&mut self, text: &str, encoded: &str) -> Result<F::Widget, FormsError> {
        let constraints = parse_cell_constraints(encoded)?;
        Ok(self.add_separator_at(text, constraints)?)
    }

    pub fn add_button(&mut self, text: &str) -> Result<F::Widget, LayoutError> {
        let constraints = self.builder.cell_constraints();
        self.add_button_at(text, constraints)
    }

    pub fn add_button_at(&mut self, text: &str, constraints: CellConstraints) -> Result<F::Widget, LayoutError> {
        constraints.validate()?;
        let button = self.factory.create_button(&MnemonicText::parse(text));
        self.place(button, constraints)
    }

    pub fn add_button_encoded(&mut self, text: &str, encoded: &str) -> Result<F::Widget, FormsError> {
        let constraints = parse_cell_constraints(encoded)?;
        Ok(self.add_button_at(text, constraints)?)
    }

    fn place(&mut self, widget: F::Widget, constraints: CellConstraints) -> Result<F::Widget, LayoutError> {
        debug!(%constraints, "placing created widget");
        self.builder.add(widget.clone(), constraints)?;
        Ok(widget)
    }
}
