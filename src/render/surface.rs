use std::ops::{Deref, DerefMut};

use crate::core::{Point, Rect, ShapePath};
use crate::render::{Color, FontSpec, LineDash, TextHAlign};

/// Immediate-mode 2D drawing capability the scatter renderers paint into.
///
/// Implementations keep a graphics state (fill/stroke color, line width,
/// dash, translation) that `save_state`/`restore_state` push and pop.
/// Drawing calls use the current state.
pub trait DrawingSurface {
    fn save_state(&mut self);
    fn restore_state(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    /// `None` resets to a solid line.
    fn set_line_dash(&mut self, dash: Option<&LineDash>);

    fn fill_rect(&mut self, rect: Rect);
    /// Fills the ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: Rect);
    /// Strokes independent segments between consecutive point pairs
    /// (`points[0]-points[1]`, `points[2]-points[3]`, ...). A trailing
    /// unpaired point is ignored.
    fn stroke_line_segments(&mut self, points: &[Point]);
    fn fill_path(&mut self, path: &ShapePath);
    /// Draws one line of text whose line box top sits at `anchor.y`.
    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        align: TextHAlign,
        font: &FontSpec,
        color: Color,
    );
}

/// Saves the surface state on creation and restores it on drop.
///
/// Dereferences to the wrapped surface so drawing goes through the guard.
pub struct SurfaceStateGuard<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawingSurface + ?Sized> SurfaceStateGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save_state();
        Self { surface }
    }
}

impl<S: DrawingSurface + ?Sized> Deref for SurfaceStateGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for SurfaceStateGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for SurfaceStateGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore_state();
    }
}
