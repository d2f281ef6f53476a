use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound on fraction digits produced by [`NumberFormatter`].
const MAX_PRECISION: u8 = 12;

/// Turns a raw data value into label text.
pub trait ValueFormatter: fmt::Debug + Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Fixed-precision decimal formatter with optional prefix/suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormatter {
    precision: u8,
    prefix: String,
    suffix: String,
}

impl NumberFormatter {
    #[must_use]
    pub fn new(precision: u8) -> Self {
        Self {
            precision: precision.min(MAX_PRECISION),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Picks a precision that keeps two significant fraction digits for
    /// values of roughly `reference` magnitude (typically `max(|y_min|, |y_max|)`
    /// or the value span).
    #[must_use]
    pub fn for_magnitude(reference: f64) -> Self {
        Self::new(decimals_for(reference))
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn precision(&self) -> u8 {
        self.precision
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ValueFormatter for NumberFormatter {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return "nan".to_owned();
        }
        let precision = usize::from(self.precision);
        let body = format!("{value:.precision$}");
        if self.prefix.is_empty() && self.suffix.is_empty() {
            return body;
        }
        let mut text = String::with_capacity(self.prefix.len() + body.len() + self.suffix.len());
        text.push_str(&self.prefix);
        text.push_str(&body);
        text.push_str(&self.suffix);
        text
    }
}

/// Adapts a plain closure into a [`ValueFormatter`].
pub struct FnValueFormatter<F>(pub F);

impl<F> fmt::Debug for FnValueFormatter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnValueFormatter")
    }
}

impl<F> ValueFormatter for FnValueFormatter<F>
where
    F: Fn(f64) -> String + Send + Sync,
{
    fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

/// Rounds `number` to its first significant digit.
fn round_to_next_significant(number: f64) -> f64 {
    if !number.is_finite() || number == 0.0 {
        return number;
    }
    let digits = number.abs().log10().ceil();
    let magnitude = 10f64.powf(1.0 - digits);
    (number * magnitude).round() / magnitude
}

fn decimals_for(reference: f64) -> u8 {
    let rounded = round_to_next_significant(reference.abs());
    if !rounded.is_finite() || rounded <= 0.0 {
        return 0;
    }
    let digits = (-rounded.log10()).ceil() + 2.0;
    if digits <= 0.0 {
        0
    } else {
        (digits as u8).min(MAX_PRECISION)
    }
}
