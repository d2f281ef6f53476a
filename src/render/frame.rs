use serde::{Deserialize, Serialize};

use crate::core::{PathCommand, Point, Rect, ShapePath};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineDash, TextHAlign};

/// One draw call captured with the graphics state it was issued under.
/// Coordinates are in device space with the active translation applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillEllipse {
        rect: Rect,
        color: Color,
    },
    StrokeSegment {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
        dash: Option<LineDash>,
    },
    FillPath {
        path: ShapePath,
        color: Color,
    },
    Text {
        text: String,
        anchor: Point,
        align: TextHAlign,
        font_size_px: f64,
        color: Color,
    },
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::FillRect { rect, color } | Self::FillEllipse { rect, color } => {
                if !rect.is_finite() || rect.width < 0.0 || rect.height < 0.0 {
                    return Err(ChartError::InvalidData(
                        "filled rect must be finite with non-negative size".to_owned(),
                    ));
                }
                color.validate()
            }
            Self::StrokeSegment {
                from,
                to,
                color,
                width,
                dash,
            } => {
                if !from.is_finite() || !to.is_finite() {
                    return Err(ChartError::InvalidData(
                        "line coordinates must be finite".to_owned(),
                    ));
                }
                if !width.is_finite() || *width <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "line stroke width must be finite and > 0".to_owned(),
                    ));
                }
                if let Some(dash) = dash {
                    dash.validate()?;
                }
                color.validate()
            }
            Self::FillPath { path, color } => {
                if !path.is_finite() {
                    return Err(ChartError::InvalidData(
                        "path coordinates must be finite".to_owned(),
                    ));
                }
                color.validate()
            }
            Self::Text {
                text,
                anchor,
                font_size_px,
                color,
                ..
            } => {
                if text.is_empty() {
                    return Err(ChartError::InvalidData(
                        "text command must not be empty".to_owned(),
                    ));
                }
                if !anchor.is_finite() {
                    return Err(ChartError::InvalidData(
                        "text coordinates must be finite".to_owned(),
                    ));
                }
                if !font_size_px.is_finite() || *font_size_px <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "font size must be finite and > 0".to_owned(),
                    ));
                }
                color.validate()
            }
        }
    }
}

/// Ordered draw calls of one or more render passes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordedFrame {
    pub commands: Vec<DrawCommand>,
}

impl RecordedFrame {
    pub fn validate(&self) -> ChartResult<()> {
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn ellipses(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillEllipse { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn rects(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::StrokeSegment { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, anchor, .. } => Some((text.as_str(), *anchor)),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn paths(&self) -> Vec<&ShapePath> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillPath { path, .. } => Some(path),
                _ => None,
            })
            .collect()
    }
}

/// Offsets every point of `path` by `offset`.
pub(crate) fn translate_path(path: &ShapePath, offset: Point) -> ShapePath {
    let shift = |p: Point| Point::new(p.x + offset.x, p.y + offset.y);
    let commands = path
        .commands()
        .iter()
        .map(|command| match *command {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(shift(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(shift(p)),
            PathCommand::QuadTo { control, to } => PathCommand::QuadTo {
                control: shift(control),
                to: shift(to),
            },
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => PathCommand::CubicTo {
                control1: shift(control1),
                control2: shift(control2),
                to: shift(to),
            },
            PathCommand::Close => PathCommand::Close,
        })
        .collect();
    ShapePath::from_commands(commands)
}
