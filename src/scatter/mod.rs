//! Scatter-plot rendering: markers, value labels and highlight crosshairs.
//!
//! A draw cycle is `draw_data`, then `draw_values`, then `draw_highlighted`
//! ([`ScatterRenderer::draw_frame`] runs all three). Rendering is best-effort:
//! malformed points, sets or selections are left out of the frame and
//! reported through the returned outcome values instead of errors.

mod highlight;
mod series;
mod shape_painter;
mod values;

use serde::{Deserialize, Serialize};

use crate::core::{
    AnimationPhase, ChartExtents, DataProvider, Point, TransformProvider, ValueFormatter,
    ViewportBounds,
};
use crate::render::DrawingSurface;

pub use highlight::{Highlight, HighlightOutcome, HighlightSkip, draw_highlight_lines};
pub use shape_painter::{ShapePainter, ShapeStyle};

/// Why a single entry was not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    OutOfBoundsLeft,
    OutOfBoundsY,
    NonFiniteValue,
    MissingCustomShape,
    EmptyLabel,
}

/// Result of painting one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointOutcome {
    Drawn,
    Skipped(SkipReason),
}

/// Why a whole data set was left out of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesSkip {
    Missing,
    Hidden,
    LabelsDisabled,
    Empty,
    MissingTransform,
    MissingCustomShape,
}

/// Marker pass summary for one data set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesReport {
    pub drawn: usize,
    /// `(entry index, reason)` for entries that were culled or failed to paint.
    pub skipped: Vec<(usize, SkipReason)>,
    /// Entry index at which iteration stopped on the right viewport edge.
    pub stopped_at: Option<usize>,
    pub aborted: Option<SeriesSkip>,
}

impl SeriesReport {
    #[must_use]
    pub fn aborted(reason: SeriesSkip) -> Self {
        Self {
            aborted: Some(reason),
            ..Self::default()
        }
    }
}

/// Value-label pass summary across all data sets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelReport {
    /// Set when the total point count hit the visible-value threshold.
    pub suppressed: bool,
    pub drawn: usize,
    /// `(data set index, entry index, reason)`.
    pub skipped: Vec<(usize, usize, SkipReason)>,
    pub skipped_sets: Vec<(usize, SeriesSkip)>,
}

/// Everything one full draw cycle produced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameReport {
    pub series: Vec<SeriesReport>,
    pub labels: LabelReport,
    pub highlights: Vec<HighlightOutcome>,
}

/// Renderer-wide knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterRenderConfig {
    /// Labels are drawn only while the chart holds fewer points than
    /// `ceil(max_visible_value_count * scale_x)`.
    pub max_visible_value_count: usize,
}

impl Default for ScatterRenderConfig {
    fn default() -> Self {
        Self {
            max_visible_value_count: 100,
        }
    }
}

impl ScatterRenderConfig {
    #[must_use]
    pub fn with_max_visible_value_count(mut self, max_visible_value_count: usize) -> Self {
        self.max_visible_value_count = max_visible_value_count;
        self
    }
}

/// Collaborators consulted during one draw cycle.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub transforms: &'a dyn TransformProvider,
    pub bounds: &'a dyn ViewportBounds,
    pub default_formatter: &'a dyn ValueFormatter,
    pub extents: ChartExtents,
    pub phase: AnimationPhase,
}

/// Scatter renderer. Holds only configuration and scratch buffers, so the
/// output of a draw call depends on its inputs alone.
#[derive(Debug, Clone, Default)]
pub struct ScatterRenderer {
    config: ScatterRenderConfig,
    painter: ShapePainter,
    highlight_points: [Point; 4],
}

impl ScatterRenderer {
    #[must_use]
    pub fn new(config: ScatterRenderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> ScatterRenderConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ScatterRenderConfig) {
        self.config = config;
    }

    /// Runs markers, value labels and highlights in that order.
    pub fn draw_frame<S, D>(
        &mut self,
        surface: &mut S,
        data: &D,
        ctx: &RenderContext<'_>,
        highlights: &[Highlight],
    ) -> FrameReport
    where
        S: DrawingSurface + ?Sized,
        D: DataProvider + ?Sized,
    {
        let series = self.draw_data(surface, data, ctx);
        let labels = self.draw_values(surface, data, ctx);
        let highlights = self.draw_highlighted(surface, data, ctx, highlights);
        FrameReport {
            series,
            labels,
            highlights,
        }
    }
}
