//! Collaborator contracts consumed by the scatter renderers.
//!
//! Renderers never reach into a chart object; hosts pass these providers in
//! explicitly for every draw call.

use serde::{Deserialize, Serialize};

use crate::core::{AxisDependency, ScatterDataSet, Transformer, ViewPortHandler};

/// Read-only access to the data sets of one chart.
pub trait DataProvider {
    fn data_set_count(&self) -> usize;
    fn data_set(&self, index: usize) -> Option<&ScatterDataSet>;
    fn total_point_count(&self) -> usize;
}

/// Resolves the value-to-pixel transformer for an axis.
pub trait TransformProvider {
    fn transformer(&self, axis: AxisDependency) -> Option<&Transformer>;
}

/// Visible drawing rectangle and horizontal zoom.
pub trait ViewportBounds {
    fn is_in_bounds_left(&self, x: f64) -> bool;
    fn is_in_bounds_right(&self, x: f64) -> bool;
    fn is_in_bounds_y(&self, y: f64) -> bool;
    fn scale_x(&self) -> f64;
}

/// Current axis extents of the chart, in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartExtents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartExtents {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

/// Per-axis transformers; a missing axis means that axis is not set up yet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisTransformers {
    pub left: Option<Transformer>,
    pub right: Option<Transformer>,
}

impl AxisTransformers {
    #[must_use]
    pub fn new(left: Transformer, right: Transformer) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }

    /// Same transformer for both axes.
    #[must_use]
    pub fn shared(transformer: Transformer) -> Self {
        Self::new(transformer, transformer)
    }
}

impl TransformProvider for AxisTransformers {
    fn transformer(&self, axis: AxisDependency) -> Option<&Transformer> {
        match axis {
            AxisDependency::Left => self.left.as_ref(),
            AxisDependency::Right => self.right.as_ref(),
        }
    }
}

impl TransformProvider for Transformer {
    fn transformer(&self, _axis: AxisDependency) -> Option<&Transformer> {
        Some(self)
    }
}

impl ViewportBounds for ViewPortHandler {
    fn is_in_bounds_left(&self, x: f64) -> bool {
        ViewPortHandler::is_in_bounds_left(self, x)
    }

    fn is_in_bounds_right(&self, x: f64) -> bool {
        ViewPortHandler::is_in_bounds_right(self, x)
    }

    fn is_in_bounds_y(&self, y: f64) -> bool {
        ViewPortHandler::is_in_bounds_y(self, y)
    }

    fn scale_x(&self) -> f64 {
        ViewPortHandler::scale_x(self)
    }
}
