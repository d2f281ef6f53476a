use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{DataPoint, Point, Rect};
use crate::error::{ChartError, ChartResult};

/// Batches at or above this size are projected in parallel when the
/// `parallel-projection` feature is enabled.
#[cfg(feature = "parallel-projection")]
const PARALLEL_PROJECTION_MIN_LEN: usize = 4_096;

/// 2D affine matrix using the CoreGraphics column layout:
/// `x' = a*x + c*y + tx`, `y' = b*x + d*y + ty`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl AffineTransform {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    #[must_use]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Returns the transform that applies `self` first and `next` second.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            a: self.a * next.a + self.b * next.c,
            b: self.a * next.b + self.b * next.d,
            c: self.c * next.a + self.d * next.c,
            d: self.c * next.b + self.d * next.d,
            tx: self.tx * next.a + self.ty * next.c + next.tx,
            ty: self.tx * next.b + self.ty * next.d + next.ty,
        }
    }

    /// Zero matrix terms are dropped, so a non-finite coordinate on one axis
    /// does not leak into the other under axis-aligned transforms.
    #[inline]
    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            term(self.a, point.x) + term(self.c, point.y) + self.tx,
            term(self.b, point.x) + term(self.d, point.y) + self.ty,
        )
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
            .iter()
            .all(|value| value.is_finite())
    }
}

#[inline]
fn term(coefficient: f64, value: f64) -> f64 {
    if coefficient == 0.0 {
        0.0
    } else {
        coefficient * value
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Maps data-space values (x-index, value) into device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transformer {
    value_to_pixel: AffineTransform,
}

impl Transformer {
    #[must_use]
    pub const fn new(value_to_pixel: AffineTransform) -> Self {
        Self { value_to_pixel }
    }

    #[must_use]
    pub const fn identity() -> Self {
        Self::new(AffineTransform::IDENTITY)
    }

    /// Builds the value-to-pixel mapping for a chart content rectangle.
    ///
    /// `x_min..x_min + x_range` spans the content width and
    /// `y_min..y_min + y_range` spans the content height. Y grows upwards
    /// unless `inverted` is set. `view_matrix` (zoom/pan) is applied last.
    pub fn for_content(
        content: Rect,
        x_min: f64,
        x_range: f64,
        y_min: f64,
        y_range: f64,
        inverted: bool,
        view_matrix: AffineTransform,
    ) -> ChartResult<Self> {
        if !content.is_finite() || content.width <= 0.0 || content.height <= 0.0 {
            return Err(ChartError::InvalidData(
                "content rect must be finite with positive size".to_owned(),
            ));
        }
        for (value, name) in [
            (x_min, "x_min"),
            (x_range, "x_range"),
            (y_min, "y_min"),
            (y_range, "y_range"),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "transform `{name}` must be finite"
                )));
            }
        }
        if x_range == 0.0 || y_range == 0.0 {
            return Err(ChartError::InvalidData(
                "transform ranges must be non-zero".to_owned(),
            ));
        }
        if !view_matrix.is_finite() {
            return Err(ChartError::InvalidData(
                "view matrix must be finite".to_owned(),
            ));
        }

        let scale_x = content.width / x_range;
        let scale_y = content.height / y_range;
        let value_to_content = if inverted {
            AffineTransform::new(
                scale_x,
                0.0,
                0.0,
                scale_y,
                content.left() - x_min * scale_x,
                content.top() - y_min * scale_y,
            )
        } else {
            AffineTransform::new(
                scale_x,
                0.0,
                0.0,
                -scale_y,
                content.left() - x_min * scale_x,
                content.bottom() + y_min * scale_y,
            )
        };

        Ok(Self::new(value_to_content.then(view_matrix)))
    }

    #[must_use]
    pub fn matrix(&self) -> AffineTransform {
        self.value_to_pixel
    }

    #[inline]
    #[must_use]
    pub fn value_to_pixel(&self, x: f64, y: f64) -> Point {
        self.value_to_pixel.apply(Point::new(x, y))
    }

    #[inline]
    #[must_use]
    pub fn point_to_pixel(&self, point: DataPoint) -> Point {
        self.value_to_pixel(point.x_index as f64, point.value)
    }

    /// Transforms data-space points into pixels in place.
    pub fn points_to_pixels(&self, points: &mut [Point]) {
        for point in points {
            *point = self.value_to_pixel.apply(*point);
        }
    }

    /// Projects every entry with `phase_y` applied to its value.
    ///
    /// Used for label placement, where the whole set is projected once and the
    /// reveal fraction is applied afterwards.
    #[must_use]
    pub fn generate_transformed_values_scatter(
        &self,
        entries: &[DataPoint],
        phase_y: f64,
    ) -> Vec<Point> {
        let matrix = self.value_to_pixel;
        let project = move |entry: &DataPoint| {
            matrix.apply(Point::new(entry.x_index as f64, entry.value * phase_y))
        };

        #[cfg(feature = "parallel-projection")]
        {
            if entries.len() >= PARALLEL_PROJECTION_MIN_LEN {
                return entries.par_iter().map(project).collect();
            }
        }

        entries.iter().map(project).collect()
    }
}
