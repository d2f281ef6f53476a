use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::ensure_positive;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash pattern for stroked lines: alternating on/off lengths in pixels,
/// starting `phase` pixels into the pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDash {
    pub phase: f64,
    pub lengths: SmallVec<[f64; 4]>,
}

impl LineDash {
    #[must_use]
    pub fn new(phase: f64, lengths: &[f64]) -> Self {
        Self {
            phase,
            lengths: SmallVec::from_slice(lengths),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.phase.is_finite() {
            return Err(ChartError::InvalidData(
                "dash phase must be finite".to_owned(),
            ));
        }
        if self.lengths.is_empty() {
            return Err(ChartError::InvalidData(
                "dash pattern must not be empty".to_owned(),
            ));
        }
        if self
            .lengths
            .iter()
            .any(|length| !length.is_finite() || *length < 0.0)
        {
            return Err(ChartError::InvalidData(
                "dash lengths must be finite and >= 0".to_owned(),
            ));
        }
        if self.lengths.iter().all(|length| *length == 0.0) {
            return Err(ChartError::InvalidData(
                "dash pattern must contain a non-zero length".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to the anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Font used for value labels. The anchor y of a label is the top of its
/// line box, so `line_height_px` is what callers offset by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
    pub line_height_px: f64,
}

impl FontSpec {
    /// Font of `size_px` with the conventional 1.2 line-height ratio.
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
            line_height_px: (size_px * 1.2).ceil(),
        }
    }

    #[must_use]
    pub fn with_line_height(mut self, line_height_px: f64) -> Self {
        self.line_height_px = line_height_px;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_positive(self.size_px, "font size_px")?;
        ensure_positive(self.line_height_px, "font line_height_px")?;
        Ok(())
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Sans", 7.0)
    }
}
