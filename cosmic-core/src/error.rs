//! Structured error types for the probability models and their controls.
//!
//! These are designed to be displayable in both CLI and TUI contexts.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CosmicError {
    #[error("not a valid number: {input:?}")]
    InvalidNumericInput { input: String },

    #[error("invalid life model: need 0 < current age ({current_age}) < decay age ({decay_age})")]
    InvalidLifeParameters { current_age: f64, decay_age: f64 },

    #[error("annual probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    #[error("invalid sample domain: start {start}, end {end}, step {step}")]
    InvalidSampleDomain { start: u64, end: u64, step: u64 },

    #[error("sample domain would produce {samples} points (limit {max})")]
    TooManySamples { samples: u64, max: u64 },

    #[error("invalid slider: {0}")]
    InvalidSlider(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CosmicError>;
