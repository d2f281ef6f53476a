pub mod animation;
pub mod chart_data;
pub mod data_set;
pub mod formatter;
pub mod primitives;
pub mod providers;
pub mod shape;
pub mod transformer;
pub mod types;
pub mod viewport_handler;

pub use animation::AnimationPhase;
pub use chart_data::ScatterChartData;
pub use data_set::{AxisDependency, HighlightStyle, ScatterDataSet};
pub use formatter::{FnValueFormatter, NumberFormatter, ValueFormatter};
pub use providers::{
    AxisTransformers, ChartExtents, DataProvider, TransformProvider, ViewportBounds,
};
pub use shape::{MarkerShape, PathCommand, ShapePath};
pub use transformer::{AffineTransform, Transformer};
pub use types::{DataPoint, Point, Rect, Viewport};
pub use viewport_handler::ViewPortHandler;
