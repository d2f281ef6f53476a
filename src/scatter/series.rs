use tracing::{debug, trace, warn};

use crate::core::{AnimationPhase, DataProvider, ScatterDataSet, Transformer, ViewportBounds};
use crate::render::{DrawingSurface, SurfaceStateGuard};
use crate::scatter::{
    PointOutcome, RenderContext, ScatterRenderer, SeriesReport, SeriesSkip, ShapeStyle,
    SkipReason,
};

impl ScatterRenderer {
    /// Draws markers for every data set in order. Returns one report per
    /// data set index, including the ones that were skipped.
    pub fn draw_data<S, D>(
        &mut self,
        surface: &mut S,
        data: &D,
        ctx: &RenderContext<'_>,
    ) -> Vec<SeriesReport>
    where
        S: DrawingSurface + ?Sized,
        D: DataProvider + ?Sized,
    {
        let mut reports = Vec::with_capacity(data.data_set_count());
        for index in 0..data.data_set_count() {
            let report = match data.data_set(index) {
                None => SeriesReport::aborted(SeriesSkip::Missing),
                Some(data_set) if !data_set.visible => {
                    trace!(data_set = data_set.label(), "hidden data set");
                    SeriesReport::aborted(SeriesSkip::Hidden)
                }
                Some(data_set) => match ctx.transforms.transformer(data_set.axis_dependency) {
                    Some(transformer) => self.draw_data_set(
                        &mut *surface,
                        data_set,
                        transformer,
                        ctx.bounds,
                        ctx.phase,
                    ),
                    None => {
                        warn!(
                            data_set = data_set.label(),
                            axis = ?data_set.axis_dependency,
                            "no transformer for axis, data set not drawn"
                        );
                        SeriesReport::aborted(SeriesSkip::MissingTransform)
                    }
                },
            };
            reports.push(report);
        }
        reports
    }

    /// Draws the markers of one data set.
    ///
    /// Only the first `ceil(n * phase_x)` entries are considered. Iteration
    /// stops at the first point past the right content edge, since entries
    /// are sorted by `x_index`. Non-finite values are skipped, not culled.
    pub fn draw_data_set<S>(
        &mut self,
        surface: &mut S,
        data_set: &ScatterDataSet,
        transformer: &Transformer,
        bounds: &dyn ViewportBounds,
        phase: AnimationPhase,
    ) -> SeriesReport
    where
        S: DrawingSurface + ?Sized,
    {
        if data_set.entry_count() == 0 {
            return SeriesReport::aborted(SeriesSkip::Empty);
        }
        if data_set.shape.is_misconfigured() {
            warn!(
                data_set = data_set.label(),
                "custom marker shape has no path, data set not drawn"
            );
            return SeriesReport::aborted(SeriesSkip::MissingCustomShape);
        }

        let visible = phase.visible_count(data_set.entry_count());
        let mut report = SeriesReport::default();
        let mut surface = SurfaceStateGuard::new(surface);

        for (index, entry) in data_set.entries()[..visible].iter().enumerate() {
            if !entry.value.is_finite() {
                trace!(index, "non-finite value skipped");
                report.skipped.push((index, SkipReason::NonFiniteValue));
                continue;
            }
            let point =
                transformer.value_to_pixel(entry.x_index as f64, entry.value * phase.phase_y);

            if !bounds.is_in_bounds_right(point.x) {
                report.stopped_at = Some(index);
                break;
            }
            let culled = if !bounds.is_in_bounds_left(point.x) {
                Some(SkipReason::OutOfBoundsLeft)
            } else if !bounds.is_in_bounds_y(point.y) {
                Some(SkipReason::OutOfBoundsY)
            } else {
                None
            };
            if let Some(reason) = culled {
                trace!(index, ?reason, "scatter point culled");
                report.skipped.push((index, reason));
                continue;
            }

            let mut style = ShapeStyle::new(data_set.shape_size, data_set.color_at(index));
            if data_set.draw_circle_hole {
                style = style.with_circle_hole(data_set.circle_hole_color);
            }
            match self
                .painter
                .paint(&mut *surface, &data_set.shape, point, &style)
            {
                PointOutcome::Drawn => report.drawn += 1,
                PointOutcome::Skipped(reason) => report.skipped.push((index, reason)),
            }
        }

        debug!(
            data_set = data_set.label(),
            visible,
            drawn = report.drawn,
            skipped = report.skipped.len(),
            stopped_at = ?report.stopped_at,
            "draw scatter data set"
        );
        report
    }
}
