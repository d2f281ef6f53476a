use tracing::warn;

use crate::core::{Point, Rect, ShapePath};
use crate::error::ChartResult;
use crate::render::frame::translate_path;
use crate::render::{Color, DrawCommand, DrawingSurface, FontSpec, LineDash, RecordedFrame, TextHAlign};

/// Graphics state tracked by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsState {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub line_width: f64,
    pub dash: Option<LineDash>,
    pub translation: Point,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            line_width: 1.0,
            dash: None,
            translation: Point::default(),
        }
    }
}

/// Headless surface that records every draw call.
///
/// Used by tests, benchmarks and snapshot diagnostics. Unbalanced
/// `restore_state` calls are ignored and counted.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    state: GraphicsState,
    stack: Vec<GraphicsState>,
    frame: RecordedFrame,
    unbalanced_restores: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &GraphicsState {
        &self.state
    }

    /// Number of saved states not yet restored.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    #[must_use]
    pub fn frame(&self) -> &RecordedFrame {
        &self.frame
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.frame.commands
    }

    #[must_use]
    pub fn into_frame(self) -> RecordedFrame {
        self.frame
    }

    /// Drops recorded commands; graphics state is kept.
    pub fn clear(&mut self) {
        self.frame.commands.clear();
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(&self.frame)?)
    }

    fn offset(&self, point: Point) -> Point {
        Point::new(
            point.x + self.state.translation.x,
            point.y + self.state.translation.y,
        )
    }

    fn offset_rect(&self, rect: Rect) -> Rect {
        let origin = self.offset(Point::new(rect.x, rect.y));
        Rect::new(origin.x, origin.y, rect.width, rect.height)
    }
}

impl DrawingSurface for RecordingSurface {
    fn save_state(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore_state(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => {
                self.unbalanced_restores += 1;
                warn!("restore_state without matching save_state");
            }
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.translation.x += dx;
        self.state.translation.y += dy;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_line_dash(&mut self, dash: Option<&LineDash>) {
        self.state.dash = dash.cloned();
    }

    fn fill_rect(&mut self, rect: Rect) {
        let rect = self.offset_rect(rect);
        self.frame.commands.push(DrawCommand::FillRect {
            rect,
            color: self.state.fill_color,
        });
    }

    fn fill_ellipse(&mut self, rect: Rect) {
        let rect = self.offset_rect(rect);
        self.frame.commands.push(DrawCommand::FillEllipse {
            rect,
            color: self.state.fill_color,
        });
    }

    fn stroke_line_segments(&mut self, points: &[Point]) {
        for pair in points.chunks_exact(2) {
            let from = self.offset(pair[0]);
            let to = self.offset(pair[1]);
            self.frame.commands.push(DrawCommand::StrokeSegment {
                from,
                to,
                color: self.state.stroke_color,
                width: self.state.line_width,
                dash: self.state.dash.clone(),
            });
        }
    }

    fn fill_path(&mut self, path: &ShapePath) {
        let path = translate_path(path, self.state.translation);
        self.frame.commands.push(DrawCommand::FillPath {
            path,
            color: self.state.fill_color,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        align: TextHAlign,
        font: &FontSpec,
        color: Color,
    ) {
        let anchor = self.offset(anchor);
        self.frame.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            anchor,
            align,
            font_size_px: font.size_px,
            color,
        });
    }
}
