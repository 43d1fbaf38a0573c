//! Cosmic Odyssey core: probability models, samplers, slider bindings and panels.
//!
//! This crate holds everything that does not touch a terminal:
//! - The two closed-form probability models (intelligent life, asteroid collision)
//! - Evenly spaced series generation over half-open domains
//! - Slider scales and free-text parsing
//! - Slider/text bindings that publish change events on a channel
//! - Per-panel state producing renderer-independent chart models
//! - TOML configuration

pub mod binding;
pub mod config;
pub mod control;
pub mod error;
pub mod models;
pub mod panel;
pub mod sampler;

pub use binding::{event_channel, ControlBinding, PanelEvent, PanelId};
pub use config::CosmicConfig;
pub use error::{CosmicError, Result};
pub use panel::{AsteroidPanel, ChartModel, LifePanel, ProbabilityPanel};
pub use sampler::{SampleDomain, SampleSeries};
