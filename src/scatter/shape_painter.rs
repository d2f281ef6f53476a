use tracing::trace;

use crate::core::{MarkerShape, Point, Rect, ShapePath};
use crate::render::{Color, DrawingSurface, SurfaceStateGuard};
use crate::scatter::{PointOutcome, SkipReason};

/// Per-point paint parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Full marker extent in pixels.
    pub size: f64,
    pub color: Color,
    /// Fill of the inner disc drawn on circles, when set.
    pub circle_hole: Option<Color>,
}

impl ShapeStyle {
    #[must_use]
    pub fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            color,
            circle_hole: None,
        }
    }

    #[must_use]
    pub fn with_circle_hole(mut self, color: Color) -> Self {
        self.circle_hole = Some(color);
        self
    }
}

/// Paints one marker centered on a pixel position.
///
/// Fill and stroke colors are set on the surface before every draw, so shapes
/// never inherit color from the previous point. The caller scopes the color
/// changes themselves (the series pass wraps its loop in a state guard).
#[derive(Debug, Clone, Default)]
pub struct ShapePainter {
    segments: [Point; 2],
}

impl ShapePainter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paint<S>(
        &mut self,
        surface: &mut S,
        shape: &MarkerShape,
        center: Point,
        style: &ShapeStyle,
    ) -> PointOutcome
    where
        S: DrawingSurface + ?Sized,
    {
        let size = style.size;
        let half = size / 2.0;

        match shape {
            MarkerShape::Square => {
                surface.set_fill_color(style.color);
                surface.fill_rect(Rect::from_center(center, size, size));
            }
            MarkerShape::Circle => {
                surface.set_fill_color(style.color);
                surface.fill_ellipse(Rect::from_center(center, size, size));
                if let Some(hole) = style.circle_hole {
                    surface.set_fill_color(hole);
                    surface.fill_ellipse(Rect::from_center(center, half, half));
                }
            }
            MarkerShape::Cross => {
                surface.set_stroke_color(style.color);
                self.segments = [
                    Point::new(center.x - half, center.y),
                    Point::new(center.x + half, center.y),
                ];
                surface.stroke_line_segments(&self.segments);
                self.segments = [
                    Point::new(center.x, center.y - half),
                    Point::new(center.x, center.y + half),
                ];
                surface.stroke_line_segments(&self.segments);
            }
            MarkerShape::Triangle => {
                surface.set_fill_color(style.color);
                let path = ShapePath::polygon(&[
                    Point::new(center.x, center.y - half),
                    Point::new(center.x + half, center.y + half),
                    Point::new(center.x - half, center.y + half),
                ]);
                surface.fill_path(&path);
            }
            MarkerShape::Custom(_) => {
                let Some(path) = shape.custom_path() else {
                    trace!(x = center.x, y = center.y, "custom marker without a path");
                    return PointOutcome::Skipped(SkipReason::MissingCustomShape);
                };
                surface.set_fill_color(style.color);
                let mut scoped = SurfaceStateGuard::new(surface);
                scoped.translate(center.x, center.y);
                scoped.fill_path(path);
            }
        }

        PointOutcome::Drawn
    }
}

#[cfg(test)]
mod tests {
    use super::{ShapePainter, ShapeStyle};
    use crate::core::{MarkerShape, Point, Rect, ShapePath};
    use crate::render::{Color, RecordingSurface};
    use crate::scatter::{PointOutcome, SkipReason};

    #[test]
    fn circle_hole_is_half_the_marker() {
        let mut surface = RecordingSurface::new();
        let style = ShapeStyle::new(10.0, Color::BLACK).with_circle_hole(Color::WHITE);
        let outcome = ShapePainter::new().paint(
            &mut surface,
            &MarkerShape::Circle,
            Point::new(20.0, 20.0),
            &style,
        );

        assert_eq!(outcome, PointOutcome::Drawn);
        let ellipses = surface.frame().ellipses();
        assert_eq!(ellipses.len(), 2);
        assert_eq!(ellipses[0], (Rect::new(15.0, 15.0, 10.0, 10.0), Color::BLACK));
        assert_eq!(ellipses[1], (Rect::new(17.5, 17.5, 5.0, 5.0), Color::WHITE));
    }

    #[test]
    fn empty_custom_path_is_reported() {
        let mut surface = RecordingSurface::new();
        let outcome = ShapePainter::new().paint(
            &mut surface,
            &MarkerShape::Custom(ShapePath::new()),
            Point::new(0.0, 0.0),
            &ShapeStyle::new(4.0, Color::BLACK),
        );
        assert_eq!(
            outcome,
            PointOutcome::Skipped(SkipReason::MissingCustomShape)
        );
        assert!(surface.frame().is_empty());
    }
}
