use serde::{Deserialize, Serialize};

/// Reveal fractions produced by the host animator for the current frame.
///
/// `phase_x` controls how many entries (left to right) are drawn and
/// `phase_y` scales values towards the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationPhase {
    pub phase_x: f64,
    pub phase_y: f64,
}

impl AnimationPhase {
    pub const FULL: Self = Self {
        phase_x: 1.0,
        phase_y: 1.0,
    };

    /// Builds a phase with both fractions clamped into `[0, 1]`.
    /// Non-finite input is treated as fully hidden.
    #[must_use]
    pub fn new(phase_x: f64, phase_y: f64) -> Self {
        Self {
            phase_x: clamp_unit(phase_x),
            phase_y: clamp_unit(phase_y),
        }
    }

    /// Number of the first `count` entries revealed by `phase_x`:
    /// `min(ceil(count * phase_x), count)`.
    #[must_use]
    pub fn visible_count(self, count: usize) -> usize {
        let revealed = (count as f64 * self.phase_x).ceil();
        if revealed <= 0.0 {
            0
        } else {
            (revealed as usize).min(count)
        }
    }
}

impl Default for AnimationPhase {
    fn default() -> Self {
        Self::FULL
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
