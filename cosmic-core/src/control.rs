//! Slider scales and free-text parsing.
//!
//! A slider holds a bounded integer position. The scale converts between that
//! position and the real-valued parameter it stands for. Conversions toward
//! the slider truncate and clamp, the same way an integer widget would accept
//! a value.

use crate::error::{CosmicError, Result};

/// Tolerance used to absorb float noise before truncating to a position.
const SNAP_EPSILON: f64 = 1e-9;

/// How a position maps onto a real value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderMapping {
    /// `value = position / max * span`
    Fraction { span: f64 },
    /// `value = position / divisor`
    Divisor { divisor: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderScale {
    max_position: u32,
    mapping: SliderMapping,
}

impl SliderScale {
    pub fn new(max_position: u32, mapping: SliderMapping) -> Result<Self> {
        if max_position == 0 {
            return Err(CosmicError::InvalidSlider("slider range is empty".into()));
        }
        let factor = match mapping {
            SliderMapping::Fraction { span } => span,
            SliderMapping::Divisor { divisor } => divisor,
        };
        if !factor.is_finite() || factor <= 0.0 {
            return Err(CosmicError::InvalidSlider(format!(
                "scale factor must be positive, got {factor}"
            )));
        }
        Ok(Self {
            max_position,
            mapping,
        })
    }

    /// Slider over `[0, span]` with `max_position` steps.
    pub fn fraction(max_position: u32, span: f64) -> Result<Self> {
        Self::new(max_position, SliderMapping::Fraction { span })
    }

    /// Slider where each step is worth `1 / divisor`.
    pub fn divisor(max_position: u32, divisor: f64) -> Result<Self> {
        Self::new(max_position, SliderMapping::Divisor { divisor })
    }

    pub fn max_position(&self) -> u32 {
        self.max_position
    }

    /// Real value represented by `position` (clamped to the slider range).
    pub fn value_at(&self, position: u32) -> f64 {
        let position = f64::from(position.min(self.max_position));
        match self.mapping {
            SliderMapping::Fraction { span } => (position / f64::from(self.max_position)) * span,
            SliderMapping::Divisor { divisor } => position / divisor,
        }
    }

    /// Largest value the slider can represent.
    pub fn max_value(&self) -> f64 {
        self.value_at(self.max_position)
    }

    /// Slider position for `value`: truncated toward zero, then clamped.
    ///
    /// Non-finite values are rejected as input errors.
    pub fn position_for(&self, value: f64) -> Result<u32> {
        if !value.is_finite() {
            return Err(CosmicError::InvalidNumericInput {
                input: value.to_string(),
            });
        }
        let raw = match self.mapping {
            SliderMapping::Fraction { span } => (value / span) * f64::from(self.max_position),
            SliderMapping::Divisor { divisor } => value * divisor,
        };
        let nearest = raw.round();
        let snapped = if (raw - nearest).abs() < SNAP_EPSILON {
            nearest
        } else {
            raw.trunc()
        };
        Ok(snapped.clamp(0.0, f64::from(self.max_position)) as u32)
    }

    /// Fraction of the slider that is filled, in `[0, 1]`.
    pub fn ratio(&self, position: u32) -> f64 {
        f64::from(position.min(self.max_position)) / f64::from(self.max_position)
    }
}

/// Parse free text as a finite floating-point number.
pub fn parse_numeric_input(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CosmicError::InvalidNumericInput {
            input: text.to_string(),
        }),
    }
}
