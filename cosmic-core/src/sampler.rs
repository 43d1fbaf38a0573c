//! Series generation: evaluate a probability curve over an evenly spaced domain.
//!
//! Sampling is a pure function of the current parameters: every call returns a
//! freshly allocated series and nothing is cached between calls.

use serde::Serialize;
use tracing::debug;

use crate::error::{CosmicError, Result};
use crate::models::{AsteroidModelParameters, LifeModelParameters};

/// Upper bound on the points in one series.
pub const MAX_SAMPLES: u64 = 100_000;

/// Half-open integer range `[start, end)` walked in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleDomain {
    start: u64,
    end: u64,
    step: u64,
}

impl SampleDomain {
    pub fn new(start: u64, end: u64, step: u64) -> Result<Self> {
        if step == 0 || end < start {
            return Err(CosmicError::InvalidSampleDomain { start, end, step });
        }
        let samples = (end - start).div_ceil(step);
        if samples > MAX_SAMPLES {
            return Err(CosmicError::TooManySamples {
                samples,
                max: MAX_SAMPLES,
            });
        }
        Ok(Self { start, end, step })
    }

    /// Domain from zero up to `span * factor`, truncated to whole units.
    ///
    /// Bounds that do not fit in a `u64` are rejected rather than saturated.
    pub fn scaled(span: f64, factor: f64, step: f64) -> Result<Self> {
        let end = span * factor;
        let limit = u64::MAX as f64;
        if !end.is_finite()
            || end < 0.0
            || end >= limit
            || !step.is_finite()
            || step < 1.0
            || step >= limit
        {
            return Err(CosmicError::InvalidSampleDomain {
                start: 0,
                end: end.max(0.0) as u64,
                step: step.max(0.0) as u64,
            });
        }
        Self::new(0, end as u64, step as u64)
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    /// Number of sample points in the domain.
    pub fn len(&self) -> usize {
        let span = self.end - self.start;
        span.div_ceil(self.step) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    pub fn points(&self) -> impl Iterator<Item = u64> {
        (self.start..self.end).step_by(self.step as usize)
    }
}

/// Ordered `(x, y)` pairs with strictly increasing `x`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SampleSeries {
    points: Vec<(f64, f64)>,
}

impl SampleSeries {
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.points.iter()
    }

    /// `(min, max)` of the x values, or `None` for an empty series.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.0, last.0))
    }

    /// `(min, max)` of the y values, or `None` for an empty series.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let (lo, hi) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        Some((lo, hi))
    }
}

impl FromIterator<(f64, f64)> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Evaluate `f` at every point of `domain`.
pub fn sample<F>(domain: &SampleDomain, f: F) -> SampleSeries
where
    F: Fn(u64) -> f64,
{
    let series: SampleSeries = domain.points().map(|x| (x as f64, f(x))).collect();
    debug!(points = series.len(), end = domain.end(), "resampled");
    series
}

pub fn sample_life(params: &LifeModelParameters, domain: &SampleDomain) -> SampleSeries {
    sample(domain, |t| params.probability_at(t as f64))
}

pub fn sample_asteroid(params: &AsteroidModelParameters, domain: &SampleDomain) -> SampleSeries {
    sample(domain, |years| params.probability_within(years))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_step() {
        assert!(matches!(
            SampleDomain::new(0, 10, 0),
            Err(CosmicError::InvalidSampleDomain { .. })
        ));
    }

    #[test]
    fn rejects_reversed_range() {
        assert!(SampleDomain::new(10, 0, 1).is_err());
    }

    #[test]
    fn end_is_exclusive() {
        let domain = SampleDomain::new(0, 1_000_000, 100_000).unwrap();
        let points: Vec<u64> = domain.points().collect();
        assert_eq!(points.len(), 10);
        assert_eq!(points.first(), Some(&0));
        assert_eq!(points.last(), Some(&900_000));
        assert_eq!(domain.len(), 10);
    }

    #[test]
    fn partial_last_step_is_counted() {
        let domain = SampleDomain::new(0, 10, 3).unwrap();
        assert_eq!(domain.points().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!(domain.len(), 4);
    }

    #[test]
    fn empty_domain() {
        let domain = SampleDomain::new(5, 5, 1).unwrap();
        assert!(domain.is_empty());
        assert_eq!(domain.len(), 0);
        assert!(sample(&domain, |_| 1.0).is_empty());
    }

    #[test]
    fn scaled_life_domain_has_1200_points() {
        let domain = SampleDomain::scaled(1e12, 1.2, 1e9).unwrap();
        assert_eq!(domain.len(), 1200);
        assert_eq!(domain.points().last(), Some(1_199_000_000_000));
    }

    #[test]
    fn scaled_rejects_fractional_step() {
        assert!(SampleDomain::scaled(1e12, 1.2, 0.5).is_err());
        assert!(SampleDomain::scaled(f64::INFINITY, 1.2, 1e9).is_err());
    }

    #[test]
    fn caps_the_number_of_points() {
        assert!(SampleDomain::new(0, MAX_SAMPLES, 1).is_ok());
        assert_eq!(
            SampleDomain::new(0, MAX_SAMPLES + 1, 1),
            Err(CosmicError::TooManySamples {
                samples: MAX_SAMPLES + 1,
                max: MAX_SAMPLES
            })
        );
        assert!(matches!(
            SampleDomain::scaled(1e12, 1.2, 1.0),
            Err(CosmicError::TooManySamples { .. })
        ));
    }

    #[test]
    fn scaled_rejects_end_past_u64() {
        assert!(matches!(
            SampleDomain::scaled(1e12, 1e10, 1e15),
            Err(CosmicError::InvalidSampleDomain { .. })
        ));
        assert!(SampleDomain::scaled(1e12, 1.2, 1e20).is_err());
    }

    #[test]
    fn life_series_peaks_at_current_age() {
        let params = LifeModelParameters::new(10.0, 100.0).unwrap();
        let domain = SampleDomain::new(0, 120, 10).unwrap();
        let series = sample_life(&params, &domain);
        assert_eq!(series.len(), 12);
        assert_eq!(series.as_slice()[1], (10.0, 1.0));
        assert_eq!(series.as_slice()[10], (100.0, 0.0));
        assert_eq!(series.as_slice()[11], (110.0, 0.0));
        assert_eq!(series.y_bounds(), Some((0.0, 1.0)));
    }

    #[test]
    fn asteroid_series_starts_at_zero() {
        let params = AsteroidModelParameters::default();
        let domain = SampleDomain::new(0, 1_000_000, 100_000).unwrap();
        let series = sample_asteroid(&params, &domain);
        assert_eq!(series.as_slice()[0], (0.0, 0.0));
        assert_eq!(series.x_bounds(), Some((0.0, 900_000.0)));
    }

    #[test]
    fn sampling_is_deterministic() {
        let params = LifeModelParameters::default();
        let domain = SampleDomain::scaled(params.decay_age(), 1.2, 1e9).unwrap();
        assert_eq!(sample_life(&params, &domain), sample_life(&params, &domain));
    }

    #[test]
    fn x_strictly_increasing() {
        let domain = SampleDomain::new(0, 1_000, 7).unwrap();
        let series = sample(&domain, |x| x as f64);
        assert!(series.as_slice().windows(2).all(|w| w[0].0 < w[1].0));
    }
}
