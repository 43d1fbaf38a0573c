//! Intelligent-life emergence curve.
//!
//! A triangular profile over cosmic time: the probability rises linearly from
//! the Big Bang to the present age of the universe, then falls linearly back
//! to zero by the time the last stars die.

use serde::Serialize;

use crate::error::{CosmicError, Result};

/// Current age of the universe in years.
pub const CURRENT_AGE_YEARS: f64 = 13.8e9;

/// Time at which stars stop forming and start dying out, in years.
pub const DECAY_AGE_YEARS: f64 = 1e12;

/// Probability of intelligent life `t` years after the Big Bang.
///
/// Assumes `0 < current_age < decay_age`. Use
/// [`LifeModelParameters::probability_at`] when the ages come from outside.
pub fn probability_of_intelligent_life(t: f64, current_age: f64, decay_age: f64) -> f64 {
    if t < 0.0 {
        0.0
    } else if t <= current_age {
        t / current_age
    } else if t <= decay_age {
        1.0 - (t - current_age) / (decay_age - current_age)
    } else {
        0.0
    }
}

/// Validated pair of ages that shape the life curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifeModelParameters {
    current_age: f64,
    decay_age: f64,
}

impl LifeModelParameters {
    pub fn new(current_age: f64, decay_age: f64) -> Result<Self> {
        let valid = current_age.is_finite()
            && decay_age.is_finite()
            && current_age > 0.0
            && current_age < decay_age;
        if !valid {
            return Err(CosmicError::InvalidLifeParameters {
                current_age,
                decay_age,
            });
        }
        Ok(Self {
            current_age,
            decay_age,
        })
    }

    pub fn current_age(&self) -> f64 {
        self.current_age
    }

    pub fn decay_age(&self) -> f64 {
        self.decay_age
    }

    pub fn probability_at(&self, t: f64) -> f64 {
        probability_of_intelligent_life(t, self.current_age, self.decay_age)
    }
}

impl Default for LifeModelParameters {
    fn default() -> Self {
        Self {
            current_age: CURRENT_AGE_YEARS,
            decay_age: DECAY_AGE_YEARS,
        }
    }
}
