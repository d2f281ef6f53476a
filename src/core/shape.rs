use serde::{Deserialize, Serialize};

use crate::core::Point;

/// One drawing instruction of a [`ShapePath`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    CubicTo { control1: Point, control2: Point, to: Point },
    Close,
}

/// Vector path in marker-local coordinates, origin at the data point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapePath {
    commands: Vec<PathCommand>,
}

impl ShapePath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Closed polygon through `points`; empty input yields an empty path.
    #[must_use]
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::new();
        let Some((first, rest)) = points.split_first() else {
            return path;
        };
        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }
        path.close();
        path
    }

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    pub fn line_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    pub fn quad_to(&mut self, control: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, to });
        self
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.is_finite(),
            PathCommand::QuadTo { control, to } => control.is_finite() && to.is_finite(),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => control1.is_finite() && control2.is_finite() && to.is_finite(),
            PathCommand::Close => true,
        })
    }
}

/// Marker drawn for every scatter entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum MarkerShape {
    #[default]
    Square,
    Circle,
    Cross,
    Triangle,
    /// Caller-supplied geometry; an empty path counts as unconfigured.
    Custom(ShapePath),
}

impl MarkerShape {
    /// Custom geometry when this is a configured custom shape.
    #[must_use]
    pub fn custom_path(&self) -> Option<&ShapePath> {
        match self {
            Self::Custom(path) if !path.is_empty() => Some(path),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_misconfigured(&self) -> bool {
        matches!(self, Self::Custom(path) if path.is_empty())
    }
}
