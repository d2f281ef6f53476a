use tracing::{debug, trace, warn};

use crate::core::{DataProvider, Point};
use crate::render::{DrawingSurface, TextHAlign};
use crate::scatter::{LabelReport, RenderContext, ScatterRenderer, SeriesSkip, SkipReason};

impl ScatterRenderer {
    /// Draws value labels above each visible marker.
    ///
    /// Suppressed entirely while the chart holds at least
    /// `ceil(max_visible_value_count * scale_x)` points. Label text formats the
    /// stored value; `phase_y` only moves the label.
    pub fn draw_values<S, D>(
        &self,
        surface: &mut S,
        data: &D,
        ctx: &RenderContext<'_>,
    ) -> LabelReport
    where
        S: DrawingSurface + ?Sized,
        D: DataProvider + ?Sized,
    {
        let mut report = LabelReport::default();

        let total = data.total_point_count();
        let threshold =
            (self.config.max_visible_value_count as f64 * ctx.bounds.scale_x()).ceil();
        if total as f64 >= threshold {
            debug!(total, threshold, "too many points, value labels suppressed");
            report.suppressed = true;
            return report;
        }

        for set_index in 0..data.data_set_count() {
            let Some(data_set) = data.data_set(set_index) else {
                report.skipped_sets.push((set_index, SeriesSkip::Missing));
                continue;
            };
            if !data_set.visible {
                report.skipped_sets.push((set_index, SeriesSkip::Hidden));
                continue;
            }
            if !data_set.draw_values {
                report.skipped_sets.push((set_index, SeriesSkip::LabelsDisabled));
                continue;
            }
            if data_set.entry_count() == 0 {
                report.skipped_sets.push((set_index, SeriesSkip::Empty));
                continue;
            }
            let Some(transformer) = ctx.transforms.transformer(data_set.axis_dependency) else {
                warn!(
                    data_set = data_set.label(),
                    axis = ?data_set.axis_dependency,
                    "no transformer for axis, value labels not drawn"
                );
                report
                    .skipped_sets
                    .push((set_index, SeriesSkip::MissingTransform));
                continue;
            };

            let formatter = match data_set.value_formatter() {
                Some(formatter) => formatter.as_ref(),
                None => ctx.default_formatter,
            };
            let positions = transformer
                .generate_transformed_values_scatter(data_set.entries(), ctx.phase.phase_y);
            let visible = ctx.phase.visible_count(positions.len());
            let lift = data_set.shape_size + data_set.value_font.line_height_px;
            let drawn_before = report.drawn;

            for (index, (entry, position)) in data_set.entries()[..visible]
                .iter()
                .zip(&positions)
                .enumerate()
            {
                if !entry.value.is_finite() {
                    report
                        .skipped
                        .push((set_index, index, SkipReason::NonFiniteValue));
                    continue;
                }
                if !ctx.bounds.is_in_bounds_right(position.x) {
                    break;
                }
                let culled = if !ctx.bounds.is_in_bounds_left(position.x) {
                    Some(SkipReason::OutOfBoundsLeft)
                } else if !ctx.bounds.is_in_bounds_y(position.y) {
                    Some(SkipReason::OutOfBoundsY)
                } else {
                    None
                };
                if let Some(reason) = culled {
                    report.skipped.push((set_index, index, reason));
                    continue;
                }

                let text = formatter.format(entry.value);
                if text.is_empty() {
                    trace!(index, "formatter produced an empty label");
                    report
                        .skipped
                        .push((set_index, index, SkipReason::EmptyLabel));
                    continue;
                }
                surface.draw_text(
                    &text,
                    Point::new(position.x, position.y - lift),
                    TextHAlign::Center,
                    &data_set.value_font,
                    data_set.value_text_color,
                );
                report.drawn += 1;
            }

            debug!(
                data_set = data_set.label(),
                labels = report.drawn - drawn_before,
                "draw scatter value labels"
            );
        }

        report
    }
}
