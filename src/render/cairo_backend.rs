use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::PI;
use tracing::warn;

use crate::core::{PathCommand, Point, Rect, ShapePath};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, FontSpec, LineDash, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub ellipses_drawn: usize,
    pub segments_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
    /// Backend calls that returned a Cairo error; drawing continues past them.
    pub failures: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PaintState {
    fill: Color,
    stroke: Color,
}

/// One `save_state` frame. `cairo_saved` is false when Cairo refused the
/// save, so the matching restore must not pop Cairo's stack.
#[derive(Debug, Clone, Copy)]
struct SavedState {
    paint: PaintState,
    cairo_saved: bool,
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Cairo has a single source color, so fill/stroke colors are tracked here
/// and pushed/popped alongside Cairo's own `save`/`restore`.
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    paint: PaintState,
    saved: Vec<SavedState>,
    stats: CairoRenderStats,
}

impl CairoSurface {
    /// Draws into an existing Cairo context (for example a GTK draw callback).
    #[must_use]
    pub fn new(context: Context) -> Self {
        Self {
            context,
            image: None,
            paint: PaintState {
                fill: Color::BLACK,
                stroke: Color::BLACK,
            },
            saved: Vec::new(),
            stats: CairoRenderStats::default(),
        }
    }

    /// Offscreen ARGB32 image surface cleared to `clear_color`.
    pub fn offscreen(width: i32, height: i32, clear_color: Color) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        clear_color.validate()?;

        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut surface = Self::new(context);
        surface.image = Some(image);
        Ok(surface)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Backing image for offscreen surfaces.
    #[must_use]
    pub fn image(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.stats
    }

    /// Number of open `save_state` scopes.
    #[must_use]
    pub fn state_depth(&self) -> usize {
        self.saved.len()
    }

    fn check(&mut self, what: &str, result: Result<(), cairo::Error>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                self.stats.failures += 1;
                warn!(error = %err, operation = what, "cairo call failed");
                false
            }
        }
    }

    fn append_path(&mut self, path: &ShapePath) {
        let mut current = Point::default();
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo(p) => {
                    self.context.move_to(p.x, p.y);
                    current = p;
                }
                PathCommand::LineTo(p) => {
                    self.context.line_to(p.x, p.y);
                    current = p;
                }
                PathCommand::QuadTo { control, to } => {
                    let c1 = Point::new(
                        current.x + 2.0 / 3.0 * (control.x - current.x),
                        current.y + 2.0 / 3.0 * (control.y - current.y),
                    );
                    let c2 = Point::new(
                        to.x + 2.0 / 3.0 * (control.x - to.x),
                        to.y + 2.0 / 3.0 * (control.y - to.y),
                    );
                    self.context.curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
                    current = to;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    self.context.curve_to(
                        control1.x, control1.y, control2.x, control2.y, to.x, to.y,
                    );
                    current = to;
                }
                PathCommand::Close => self.context.close_path(),
            }
        }
    }
}

impl DrawingSurface for CairoSurface {
    fn save_state(&mut self) {
        let result = self.context.save();
        let cairo_saved = self.check("save", result);
        self.saved.push(SavedState {
            paint: self.paint,
            cairo_saved,
        });
    }

    fn restore_state(&mut self) {
        let Some(saved) = self.saved.pop() else {
            warn!("restore_state without matching save_state");
            return;
        };
        self.paint = saved.paint;
        if saved.cairo_saved {
            let result = self.context.restore();
            self.check("restore", result);
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.context.translate(dx, dy);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.paint.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.paint.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_line_dash(&mut self, dash: Option<&LineDash>) {
        match dash {
            Some(dash) => self.context.set_dash(&dash.lengths, dash.phase),
            None => self.context.set_dash(&[], 0.0),
        }
    }

    fn fill_rect(&mut self, rect: Rect) {
        apply_color(&self.context, self.paint.fill);
        self.context
            .rectangle(rect.x, rect.y, rect.width, rect.height);
        let result = self.context.fill();
        if self.check("fill rect", result) {
            self.stats.rects_drawn += 1;
        }
    }

    fn fill_ellipse(&mut self, rect: Rect) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let center = rect.center();
        apply_color(&self.context, self.paint.fill);
        self.context.new_path();
        let matrix = self.context.matrix();
        self.context.translate(center.x, center.y);
        self.context.scale(rect.width / 2.0, rect.height / 2.0);
        self.context.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
        self.context.set_matrix(matrix);
        let result = self.context.fill();
        if self.check("fill ellipse", result) {
            self.stats.ellipses_drawn += 1;
        }
    }

    fn stroke_line_segments(&mut self, points: &[Point]) {
        let pairs = points.len() / 2;
        if pairs == 0 {
            return;
        }
        apply_color(&self.context, self.paint.stroke);
        self.context.new_path();
        for pair in points.chunks_exact(2) {
            self.context.move_to(pair[0].x, pair[0].y);
            self.context.line_to(pair[1].x, pair[1].y);
        }
        let result = self.context.stroke();
        if self.check("stroke segments", result) {
            self.stats.segments_drawn += pairs;
        }
    }

    fn fill_path(&mut self, path: &ShapePath) {
        apply_color(&self.context, self.paint.fill);
        self.context.new_path();
        self.append_path(path);
        let result = self.context.fill();
        if self.check("fill path", result) {
            self.stats.paths_drawn += 1;
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        align: TextHAlign,
        font: &FontSpec,
        color: Color,
    ) {
        let layout = pangocairo::functions::create_layout(&self.context);
        let mut font_description = FontDescription::from_string(&font.family);
        font_description.set_absolute_size(font.size_px * f64::from(pango::SCALE));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match align {
            TextHAlign::Left => anchor.x,
            TextHAlign::Center => anchor.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => anchor.x - f64::from(text_width),
        };

        apply_color(&self.context, color);
        self.context.move_to(x, anchor.y);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts_drawn += 1;
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
