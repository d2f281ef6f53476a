use std::fmt;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::ensure_positive;
use crate::core::{DataPoint, MarkerShape, ValueFormatter};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontSpec, LineDash};

/// Which y-axis (and therefore which transformer) a data set is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// Crosshair styling for highlighted entries of one data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightStyle {
    pub enabled: bool,
    pub color: Color,
    pub line_width: f64,
    /// `None` draws a solid line.
    pub dash: Option<LineDash>,
    pub draw_horizontal: bool,
    pub draw_vertical: bool,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Color::rgb(1.0, 187.0 / 255.0, 115.0 / 255.0),
            line_width: 0.5,
            dash: None,
            draw_horizontal: true,
            draw_vertical: true,
        }
    }
}

impl HighlightStyle {
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Option<LineDash>) -> Self {
        self.dash = dash;
        self
    }

    #[must_use]
    pub fn with_indicators(mut self, horizontal: bool, vertical: bool) -> Self {
        self.draw_horizontal = horizontal;
        self.draw_vertical = vertical;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.color.validate()?;
        ensure_positive(self.line_width, "highlight line_width")?;
        if let Some(dash) = &self.dash {
            dash.validate()?;
        }
        Ok(())
    }
}

/// Scatter series: x-ordered entries plus marker, label and highlight styling.
#[derive(Clone)]
pub struct ScatterDataSet {
    label: String,
    entries: Vec<DataPoint>,
    pub visible: bool,
    pub axis_dependency: AxisDependency,
    pub shape: MarkerShape,
    pub shape_size: f64,
    colors: Vec<Color>,
    pub draw_circle_hole: bool,
    pub circle_hole_color: Color,
    pub draw_values: bool,
    pub value_font: FontSpec,
    pub value_text_color: Color,
    value_formatter: Option<Arc<dyn ValueFormatter>>,
    pub highlight: HighlightStyle,
}

impl fmt::Debug for ScatterDataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScatterDataSet")
            .field("label", &self.label)
            .field("entries", &self.entries.len())
            .field("visible", &self.visible)
            .field("axis_dependency", &self.axis_dependency)
            .field("shape", &self.shape)
            .field("shape_size", &self.shape_size)
            .field("draw_values", &self.draw_values)
            .field("value_formatter", &self.value_formatter)
            .finish_non_exhaustive()
    }
}

impl ScatterDataSet {
    /// Builds a data set, stably sorting entries by `x_index`.
    #[must_use]
    pub fn new(label: impl Into<String>, entries: Vec<DataPoint>) -> Self {
        let label = label.into();
        let input_count = entries.len();
        let entries = canonicalize_entries(entries);
        debug!(%label, input_count, "create scatter data set");

        Self {
            label,
            entries,
            visible: true,
            axis_dependency: AxisDependency::Left,
            shape: MarkerShape::Square,
            shape_size: 15.0,
            colors: vec![Color::rgb(140.0 / 255.0, 234.0 / 255.0, 1.0)],
            draw_circle_hole: false,
            circle_hole_color: Color::WHITE,
            draw_values: true,
            value_font: FontSpec::default(),
            value_text_color: Color::BLACK,
            value_formatter: None,
            highlight: HighlightStyle::default(),
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: MarkerShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_shape_size(mut self, shape_size: f64) -> Self {
        self.shape_size = shape_size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.colors = vec![color];
        self
    }

    /// Per-entry colors, cycled when shorter than the entry list.
    /// An empty list keeps the current colors.
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        if !colors.is_empty() {
            self.colors = colors;
        }
        self
    }

    #[must_use]
    pub fn with_circle_hole(mut self, color: Color) -> Self {
        self.draw_circle_hole = true;
        self.circle_hole_color = color;
        self
    }

    #[must_use]
    pub fn with_axis_dependency(mut self, axis_dependency: AxisDependency) -> Self {
        self.axis_dependency = axis_dependency;
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_draw_values(mut self, draw_values: bool) -> Self {
        self.draw_values = draw_values;
        self
    }

    #[must_use]
    pub fn with_value_font(mut self, font: FontSpec) -> Self {
        self.value_font = font;
        self
    }

    #[must_use]
    pub fn with_value_text_color(mut self, color: Color) -> Self {
        self.value_text_color = color;
        self
    }

    #[must_use]
    pub fn with_value_formatter(mut self, formatter: Arc<dyn ValueFormatter>) -> Self {
        self.value_formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, highlight: HighlightStyle) -> Self {
        self.highlight = highlight;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn entries(&self) -> &[DataPoint] {
        &self.entries
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color for entry `index`, cycling through the configured colors.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        match self.colors.len() {
            0 => Color::BLACK,
            len => self.colors[index % len],
        }
    }

    #[must_use]
    pub fn value_formatter(&self) -> Option<&Arc<dyn ValueFormatter>> {
        self.value_formatter.as_ref()
    }

    /// Position of the first entry with `x_index`, if any.
    #[must_use]
    pub fn entry_index_for_x_index(&self, x_index: usize) -> Option<usize> {
        let start = self.entries.partition_point(|entry| entry.x_index < x_index);
        self.entries
            .get(start)
            .filter(|entry| entry.x_index == x_index)
            .map(|_| start)
    }

    /// Value at `x_index`; `None` when absent or not finite.
    #[must_use]
    pub fn y_value_for_x_index(&self, x_index: usize) -> Option<f64> {
        self.entry_index_for_x_index(x_index)
            .map(|index| self.entries[index].value)
            .filter(|value| value.is_finite())
    }

    #[must_use]
    pub fn y_min(&self) -> Option<f64> {
        self.finite_values().min_by_key(|value| OrderedFloat(*value))
    }

    #[must_use]
    pub fn y_max(&self) -> Option<f64> {
        self.finite_values().max_by_key(|value| OrderedFloat(*value))
    }

    #[must_use]
    pub fn x_min(&self) -> Option<usize> {
        self.entries.first().map(|entry| entry.x_index)
    }

    #[must_use]
    pub fn x_max(&self) -> Option<usize> {
        self.entries.last().map(|entry| entry.x_index)
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_positive(self.shape_size, "shape_size")?;
        if self.colors.is_empty() {
            return Err(ChartError::InvalidData(
                "data set needs at least one color".to_owned(),
            ));
        }
        for color in &self.colors {
            color.validate()?;
        }
        self.circle_hole_color.validate()?;
        self.value_text_color.validate()?;
        self.value_font.validate()?;
        self.highlight.validate()?;
        if self.shape.is_misconfigured() {
            return Err(ChartError::InvalidData(format!(
                "data set `{}` uses a custom shape without a path",
                self.label
            )));
        }
        if let Some(path) = self.shape.custom_path() {
            if !path.is_finite() {
                return Err(ChartError::InvalidData(
                    "custom shape path must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }

    fn finite_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries
            .iter()
            .map(|entry| entry.value)
            .filter(|value| value.is_finite())
    }
}

fn canonicalize_entries(mut entries: Vec<DataPoint>) -> Vec<DataPoint> {
    if entries.is_sorted_by_key(|entry| entry.x_index) {
        return entries;
    }
    entries.sort_by_key(|entry| entry.x_index);
    entries
}
