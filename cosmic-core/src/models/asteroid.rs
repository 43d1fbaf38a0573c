//! Cumulative asteroid-collision probability.
//!
//! Each year is an independent trial with the same collision probability, so
//! the chance of at least one hit within `n` years is the complement of
//! surviving all of them.

use serde::Serialize;

use crate::error::{CosmicError, Result};

/// Default per-year collision probability.
pub const DEFAULT_ANNUAL_PROBABILITY: f64 = 1e-8;

/// Probability of at least one collision within `years` years.
pub fn cumulative_collision_probability(years: u64, annual_probability: f64) -> f64 {
    1.0 - (1.0 - annual_probability).powf(years as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AsteroidModelParameters {
    annual_probability: f64,
}

impl AsteroidModelParameters {
    pub fn new(annual_probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&annual_probability) {
            return Err(CosmicError::ProbabilityOutOfRange(annual_probability));
        }
        Ok(Self { annual_probability })
    }

    /// Like [`new`](Self::new) but pins the value into `[0, 1]`; NaN becomes 0.
    pub fn clamped(annual_probability: f64) -> Self {
        let annual_probability = if annual_probability.is_nan() {
            0.0
        } else {
            annual_probability.clamp(0.0, 1.0)
        };
        Self { annual_probability }
    }

    pub fn annual_probability(&self) -> f64 {
        self.annual_probability
    }

    pub fn probability_within(&self, years: u64) -> f64 {
        cumulative_collision_probability(years, self.annual_probability)
    }
}

impl Default for AsteroidModelParameters {
    fn default() -> Self {
        Self {
            annual_probability: DEFAULT_ANNUAL_PROBABILITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_years_is_zero() {
        assert_eq!(cumulative_collision_probability(0, 1e-8), 0.0);
        assert_eq!(cumulative_collision_probability(0, 0.5), 0.0);
    }

    #[test]
    fn one_year_equals_annual_probability() {
        let p = cumulative_collision_probability(1, 0.25);
        assert!((p - 0.25).abs() < 1e-15);
    }

    #[test]
    fn hundred_thousand_years_at_default_rate() {
        let p = cumulative_collision_probability(100_000, 1e-8);
        assert!((p - 9.995e-4).abs() < 1e-6, "got {p}");
    }

    #[test]
    fn zero_rate_never_collides() {
        assert_eq!(cumulative_collision_probability(1_000_000, 0.0), 0.0);
    }

    #[test]
    fn certain_rate_collides_after_one_year() {
        assert_eq!(cumulative_collision_probability(1, 1.0), 1.0);
        assert_eq!(cumulative_collision_probability(500, 1.0), 1.0);
    }

    #[test]
    fn approaches_one_over_long_horizons() {
        let p = cumulative_collision_probability(10_000_000_000, 1e-6);
        assert!(p > 0.999_9);
        assert!(p <= 1.0);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            AsteroidModelParameters::new(-0.1),
            Err(CosmicError::ProbabilityOutOfRange(_))
        ));
        assert!(AsteroidModelParameters::new(1.5).is_err());
        assert!(AsteroidModelParameters::new(f64::NAN).is_err());
    }

    #[test]
    fn accepts_bounds() {
        assert!(AsteroidModelParameters::new(0.0).is_ok());
        assert!(AsteroidModelParameters::new(1.0).is_ok());
    }

    #[test]
    fn clamped_pins_into_unit_interval() {
        assert_eq!(AsteroidModelParameters::clamped(2.0).annual_probability(), 1.0);
        assert_eq!(AsteroidModelParameters::clamped(-1.0).annual_probability(), 0.0);
        assert_eq!(AsteroidModelParameters::clamped(f64::NAN).annual_probability(), 0.0);
        assert_eq!(AsteroidModelParameters::clamped(1e-7).annual_probability(), 1e-7);
    }

    #[test]
    fn default_rate() {
        let params = AsteroidModelParameters::default();
        assert_eq!(params.annual_probability(), 1e-8);
        assert_eq!(params.probability_within(0), 0.0);
    }
}
