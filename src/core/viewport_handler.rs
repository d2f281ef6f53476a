use serde::{Deserialize, Serialize};

use crate::core::{AffineTransform, Point, Rect, Viewport};
use crate::error::{ChartError, ChartResult};

/// Minimum zoom factor; the content is never shown smaller than its rect.
const MIN_SCALE: f64 = 1.0;

/// Drawing-area geometry and zoom state for one chart view.
///
/// Bounds checks are inclusive. The right-edge check truncates to hundredths
/// of a pixel so accumulated float error on the last visible sample does not
/// cull it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPortHandler {
    viewport: Viewport,
    content: Rect,
    touch_matrix: AffineTransform,
}

impl ViewPortHandler {
    pub fn new(viewport: Viewport, content: Rect) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !content.is_finite() || content.width < 0.0 || content.height < 0.0 {
            return Err(ChartError::InvalidData(
                "content rect must be finite with non-negative size".to_owned(),
            ));
        }

        Ok(Self {
            viewport,
            content,
            touch_matrix: AffineTransform::IDENTITY,
        })
    }

    /// Content rect inset from the viewport edges by the given offsets.
    pub fn with_offsets(
        viewport: Viewport,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> ChartResult<Self> {
        let width = f64::from(viewport.width) - left - right;
        let height = f64::from(viewport.height) - top - bottom;
        Self::new(viewport, Rect::new(left, top, width, height))
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.content
    }

    #[must_use]
    pub fn touch_matrix(&self) -> AffineTransform {
        self.touch_matrix
    }

    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.touch_matrix.a
    }

    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.touch_matrix.d
    }

    /// Zooms around `focus` (pixel space). Scales below 1 are clamped.
    pub fn set_zoom(&mut self, scale_x: f64, scale_y: f64, focus: Point) -> ChartResult<()> {
        if !scale_x.is_finite() || !scale_y.is_finite() || !focus.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom scale and focus must be finite".to_owned(),
            ));
        }
        let scale_x = scale_x.max(MIN_SCALE);
        let scale_y = scale_y.max(MIN_SCALE);
        self.touch_matrix = AffineTransform::translation(-focus.x, -focus.y)
            .then(AffineTransform::scale(scale_x, scale_y))
            .then(AffineTransform::translation(focus.x, focus.y));
        Ok(())
    }

    pub fn reset_zoom(&mut self) {
        self.touch_matrix = AffineTransform::IDENTITY;
    }

    #[must_use]
    pub fn is_in_bounds_left(&self, x: f64) -> bool {
        self.content.left() <= x
    }

    #[must_use]
    pub fn is_in_bounds_right(&self, x: f64) -> bool {
        let x = (x * 100.0).floor() / 100.0;
        self.content.right() >= x
    }

    #[must_use]
    pub fn is_in_bounds_y(&self, y: f64) -> bool {
        self.content.top() <= y && self.content.bottom() >= y
    }
}

#[cfg(test)]
mod tests {
    use super::ViewPortHandler;
    use crate::core::{Point, Rect, Viewport};

    fn handler() -> ViewPortHandler {
        ViewPortHandler::new(Viewport::new(200, 100), Rect::new(10.0, 5.0, 100.0, 50.0))
            .expect("valid handler")
    }

    #[test]
    fn bounds_are_inclusive() {
        let h = handler();
        assert!(h.is_in_bounds_left(10.0));
        assert!(!h.is_in_bounds_left(9.99));
        assert!(h.is_in_bounds_right(110.0));
        assert!(h.is_in_bounds_right(110.004));
        assert!(!h.is_in_bounds_right(110.02));
        assert!(h.is_in_bounds_y(5.0));
        assert!(h.is_in_bounds_y(55.0));
        assert!(!h.is_in_bounds_y(55.5));
    }

    #[test]
    fn zoom_is_clamped_to_unit_scale() {
        let mut h = handler();
        h.set_zoom(0.25, 3.0, Point::new(10.0, 5.0)).expect("zoom");
        assert_eq!(h.scale_x(), 1.0);
        assert_eq!(h.scale_y(), 3.0);
        h.reset_zoom();
        assert_eq!(h.scale_y(), 1.0);
    }

    #[test]
    fn zero_viewport_is_rejected() {
        let result = ViewPortHandler::new(Viewport::new(0, 10), Rect::default());
        assert!(result.is_err());
    }
}
