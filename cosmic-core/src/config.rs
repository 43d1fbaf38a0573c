//! TOML configuration for both panels.
//!
//! Every field has a default, so an empty or partial file is valid. Values
//! are validated by building the panels they describe.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::binding::{event_channel, PanelEvent};
use crate::control::SliderScale;
use crate::error::{CosmicError, Result};
use crate::models::asteroid::DEFAULT_ANNUAL_PROBABILITY;
use crate::models::life::{CURRENT_AGE_YEARS, DECAY_AGE_YEARS};
use crate::models::{AsteroidModelParameters, LifeModelParameters};
use crate::panel::{AsteroidPanel, LifePanel};
use crate::sampler::SampleDomain;

/// Directory name under the platform config directory.
pub const APP_DIR: &str = "cosmic-odyssey";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifeConfig {
    /// Current age of the universe (years).
    pub current_age: f64,
    /// Age at which the probability has fallen back to zero (years).
    pub decay_age: f64,
    /// Sampled domain ends at `decay_age * horizon_factor`.
    pub horizon_factor: f64,
    /// Distance between samples (years).
    pub sample_step: f64,
    pub slider_max: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            current_age: CURRENT_AGE_YEARS,
            decay_age: DECAY_AGE_YEARS,
            horizon_factor: 1.2,
            sample_step: 1e9,
            slider_max: 1000,
        }
    }
}

impl LifeConfig {
    pub fn params(&self) -> Result<LifeModelParameters> {
        LifeModelParameters::new(self.current_age, self.decay_age)
    }

    pub fn domain(&self) -> Result<SampleDomain> {
        SampleDomain::scaled(self.decay_age, self.horizon_factor, self.sample_step)
    }

    pub fn build_panel(&self, events: Sender<PanelEvent>) -> Result<LifePanel> {
        LifePanel::new(self.params()?, self.domain()?, self.slider_max, events)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AsteroidConfig {
    /// Initial per-year collision probability.
    pub annual_probability: f64,
    /// Slider positions per unit of probability.
    pub probability_scale: f64,
    pub slider_max: u32,
    pub horizon_years: u64,
    pub step_years: u64,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            annual_probability: DEFAULT_ANNUAL_PROBABILITY,
            probability_scale: 1e8,
            slider_max: 100,
            horizon_years: 1_000_000,
            step_years: 100_000,
        }
    }
}

impl AsteroidConfig {
    pub fn params(&self) -> Result<AsteroidModelParameters> {
        AsteroidModelParameters::new(self.annual_probability)
    }

    pub fn domain(&self) -> Result<SampleDomain> {
        SampleDomain::new(0, self.horizon_years, self.step_years)
    }

    pub fn scale(&self) -> Result<SliderScale> {
        SliderScale::divisor(self.slider_max, self.probability_scale)
    }

    pub fn build_panel(&self, events: Sender<PanelEvent>) -> Result<AsteroidPanel> {
        AsteroidPanel::new(self.params()?, self.domain()?, self.scale()?, events)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CosmicConfig {
    pub life: LifeConfig,
    pub asteroid: AsteroidConfig,
}

impl CosmicConfig {
    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| CosmicError::Config(format!("parse config TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CosmicError::Config(format!("read {}: {e}", path.display())))?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// `<config_dir>/cosmic-odyssey/config.toml`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load an explicit path, or the default path if it exists, or defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Build both panels against a throwaway channel.
    pub fn validate(&self) -> Result<()> {
        let (tx, _rx) = event_channel();
        self.life.build_panel(tx.clone())?;
        self.asteroid.build_panel(tx)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CosmicError::Config(format!("serialize config TOML: {e}")))
    }
}
