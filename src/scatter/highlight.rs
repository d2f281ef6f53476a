use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{DataProvider, Point};
use crate::render::{DrawingSurface, SurfaceStateGuard};
use crate::scatter::{RenderContext, ScatterRenderer};

/// A selected entry: data set index plus x index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Highlight {
    pub data_set_index: usize,
    pub x_index: usize,
}

impl Highlight {
    #[must_use]
    pub const fn new(data_set_index: usize, x_index: usize) -> Self {
        Self {
            data_set_index,
            x_index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightSkip {
    MissingDataSet,
    HighlightDisabled,
    /// `x_index` lies past `x_max * phase_x`.
    NotRevealed,
    /// No entry at `x_index`, or its value is NaN.
    MissingValue,
    MissingTransform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightOutcome {
    Drawn,
    Skipped(HighlightSkip),
}

impl ScatterRenderer {
    /// Draws crosshair lines through every selected entry.
    ///
    /// The vertical line spans `y_min..y_max` and the horizontal one
    /// `x_min..x_max` of `ctx.extents`, both in data space. Stroke style
    /// comes from the selected data set and is restored when the pass ends.
    pub fn draw_highlighted<S, D>(
        &mut self,
        surface: &mut S,
        data: &D,
        ctx: &RenderContext<'_>,
        highlights: &[Highlight],
    ) -> Vec<HighlightOutcome>
    where
        S: DrawingSurface + ?Sized,
        D: DataProvider + ?Sized,
    {
        let extents = ctx.extents;
        let mut surface = SurfaceStateGuard::new(surface);
        let mut outcomes = Vec::with_capacity(highlights.len());

        for highlight in highlights {
            let Some(data_set) = data.data_set(highlight.data_set_index) else {
                trace!(?highlight, "highlight references a missing data set");
                outcomes.push(HighlightOutcome::Skipped(HighlightSkip::MissingDataSet));
                continue;
            };
            let style = &data_set.highlight;
            if !style.enabled {
                outcomes.push(HighlightOutcome::Skipped(HighlightSkip::HighlightDisabled));
                continue;
            }

            surface.set_stroke_color(style.color);
            surface.set_line_width(style.line_width);
            surface.set_line_dash(style.dash.as_ref());

            let x = highlight.x_index as f64;
            if x > extents.x_max * ctx.phase.phase_x {
                outcomes.push(HighlightOutcome::Skipped(HighlightSkip::NotRevealed));
                continue;
            }
            let Some(value) = data_set.y_value_for_x_index(highlight.x_index) else {
                trace!(?highlight, "no value at highlighted x index");
                outcomes.push(HighlightOutcome::Skipped(HighlightSkip::MissingValue));
                continue;
            };
            let Some(transformer) = ctx.transforms.transformer(data_set.axis_dependency) else {
                warn!(
                    data_set = data_set.label(),
                    axis = ?data_set.axis_dependency,
                    "no transformer for axis, highlight not drawn"
                );
                outcomes.push(HighlightOutcome::Skipped(HighlightSkip::MissingTransform));
                continue;
            };

            let y = value * ctx.phase.phase_y;
            self.highlight_points = [
                Point::new(x, extents.y_max),
                Point::new(x, extents.y_min),
                Point::new(extents.x_min, y),
                Point::new(extents.x_max, y),
            ];
            transformer.points_to_pixels(&mut self.highlight_points);
            draw_highlight_lines(
                &mut *surface,
                &self.highlight_points,
                style.draw_horizontal,
                style.draw_vertical,
            );
            outcomes.push(HighlightOutcome::Drawn);
        }

        debug!(
            requested = highlights.len(),
            drawn = outcomes
                .iter()
                .filter(|outcome| matches!(outcome, HighlightOutcome::Drawn))
                .count(),
            "draw scatter highlights"
        );
        outcomes
    }
}

/// Strokes the crosshair held in `points`: `points[0]-points[1]` is the
/// vertical line and `points[2]-points[3]` the horizontal one. Uses the
/// surface's current stroke style.
pub fn draw_highlight_lines<S>(
    surface: &mut S,
    points: &[Point; 4],
    horizontal: bool,
    vertical: bool,
) where
    S: DrawingSurface + ?Sized,
{
    if vertical {
        surface.stroke_line_segments(&points[..2]);
    }
    if horizontal {
        surface.stroke_line_segments(&points[2..]);
    }
}

#[cfg(test)]
mod tests {
    use super::draw_highlight_lines;
    use crate::core::Point;
    use crate::render::RecordingSurface;

    fn crosshair() -> [Point; 4] {
        [
            Point::new(5.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(0.0, 3.0),
            Point::new(10.0, 3.0),
        ]
    }

    #[test]
    fn vertical_only_uses_first_pair() {
        let mut surface = RecordingSurface::new();
        draw_highlight_lines(&mut surface, &crosshair(), false, true);
        assert_eq!(
            surface.frame().segments(),
            vec![(Point::new(5.0, 0.0), Point::new(5.0, 10.0))]
        );
    }

    #[test]
    fn both_flags_off_draws_nothing() {
        let mut surface = RecordingSurface::new();
        draw_highlight_lines(&mut surface, &crosshair(), false, false);
        assert!(surface.frame().is_empty());
    }
}
