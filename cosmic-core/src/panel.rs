//! Per-panel state: parameters, sampling domain and slider binding.
//!
//! A panel owns everything needed to produce its chart. Producing a chart
//! resamples from scratch; the renderer only has to clear, plot and label.

use std::sync::mpsc::Sender;

use serde::Serialize;

use crate::binding::{ControlBinding, PanelEvent, PanelId};
use crate::control::SliderScale;
use crate::error::{CosmicError, Result};
use crate::models::{AsteroidModelParameters, LifeModelParameters};
use crate::sampler::{sample_asteroid, sample_life, SampleDomain, SampleSeries};

/// Vertical reference line drawn across the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartMarker {
    pub x: f64,
    pub label: String,
}

/// Everything a renderer needs to draw one panel's chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series_label: &'static str,
    pub series: SampleSeries,
    pub marker: Option<ChartMarker>,
}

/// Common surface of the two panels.
pub trait ProbabilityPanel {
    fn id(&self) -> PanelId;

    fn binding(&self) -> &ControlBinding;

    fn binding_mut(&mut self) -> &mut ControlBinding;

    /// Prompt shown above the slider.
    fn prompt(&self) -> &'static str;

    /// Placeholder shown in an empty text input.
    fn placeholder(&self) -> &'static str;

    /// Current parameter value formatted for display.
    fn describe_value(&self) -> String;

    /// Resample and build a fresh chart.
    fn chart(&self) -> ChartModel;
}

// ── Intelligent life ─────────────────────────────────────────────────

#[derive(Debug)]
pub struct LifePanel {
    params: LifeModelParameters,
    domain: SampleDomain,
    binding: ControlBinding,
}

impl LifePanel {
    /// The slider spans `[0, decay_age]`; it starts at the current age.
    pub fn new(
        params: LifeModelParameters,
        domain: SampleDomain,
        slider_max: u32,
        events: Sender<PanelEvent>,
    ) -> Result<Self> {
        let scale = SliderScale::fraction(slider_max, params.decay_age())?;
        let initial = scale.position_for(params.current_age())?;
        Ok(Self {
            params,
            domain,
            binding: ControlBinding::new(PanelId::Life, scale, initial, events),
        })
    }

    pub fn params(&self) -> &LifeModelParameters {
        &self.params
    }

    pub fn domain(&self) -> &SampleDomain {
        &self.domain
    }

    /// Years after the Big Bang selected by the slider.
    pub fn selected_time(&self) -> f64 {
        self.binding.value()
    }

    /// Probability at the selected time.
    pub fn selected_probability(&self) -> f64 {
        self.params.probability_at(self.selected_time())
    }
}

impl ProbabilityPanel for LifePanel {
    fn id(&self) -> PanelId {
        PanelId::Life
    }

    fn binding(&self) -> &ControlBinding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut ControlBinding {
        &mut self.binding
    }

    fn prompt(&self) -> &'static str {
        "Select time after the Big Bang (years):"
    }

    fn placeholder(&self) -> &'static str {
        "Enter time in years..."
    }

    fn describe_value(&self) -> String {
        format!(
            "t = {:.2e} years | P = {:.4}",
            self.selected_time(),
            self.selected_probability()
        )
    }

    fn chart(&self) -> ChartModel {
        let time = self.selected_time();
        ChartModel {
            title: "Probability of Intelligent Life in the Universe",
            x_label: "Time after the Big Bang (years)",
            y_label: "Probability",
            series_label: "Probability of Intelligent Life",
            series: sample_life(&self.params, &self.domain),
            marker: Some(ChartMarker {
                x: time,
                label: format!("Current Time: {} years", scientific(time, 1)),
            }),
        }
    }
}

/// Scientific notation with a signed, two-digit exponent (`1.3e+10`, `1.0e-08`).
fn scientific(value: f64, precision: usize) -> String {
    let plain = format!("{value:.precision$e}");
    match plain.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => plain,
    }
}

// ── Asteroid collision ───────────────────────────────────────────────

#[derive(Debug)]
pub struct AsteroidPanel {
    domain: SampleDomain,
    binding: ControlBinding,
}

impl AsteroidPanel {
    /// `scale` must not reach past a probability of 1.
    pub fn new(
        initial: AsteroidModelParameters,
        domain: SampleDomain,
        scale: SliderScale,
        events: Sender<PanelEvent>,
    ) -> Result<Self> {
        let max = scale.max_value();
        if max > 1.0 {
            return Err(CosmicError::ProbabilityOutOfRange(max));
        }
        let position = scale.position_for(initial.annual_probability())?;
        Ok(Self {
            domain,
            binding: ControlBinding::new(PanelId::Asteroid, scale, position, events),
        })
    }

    pub fn domain(&self) -> &SampleDomain {
        &self.domain
    }

    /// Parameters at the current slider position.
    pub fn params(&self) -> AsteroidModelParameters {
        AsteroidModelParameters::clamped(self.binding.value())
    }

    /// Collision probability over the full horizon.
    pub fn horizon_probability(&self) -> f64 {
        self.params().probability_within(self.domain.end())
    }
}

impl ProbabilityPanel for AsteroidPanel {
    fn id(&self) -> PanelId {
        PanelId::Asteroid
    }

    fn binding(&self) -> &ControlBinding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut ControlBinding {
        &mut self.binding
    }

    fn prompt(&self) -> &'static str {
        "Adjust asteroid collision probability (per year):"
    }

    fn placeholder(&self) -> &'static str {
        "Enter probability (e.g., 1e-8)..."
    }

    fn describe_value(&self) -> String {
        format!(
            "p = {:.2e} per year | P({} years) = {:.4e}",
            self.params().annual_probability(),
            self.domain.end(),
            self.horizon_probability()
        )
    }

    fn chart(&self) -> ChartModel {
        ChartModel {
            title: "Probability of an Asteroid Collision with Earth",
            x_label: "Time (years)",
            y_label: "Probability",
            series_label: "Cumulative Collision Probability",
            series: sample_asteroid(&self.params(), &self.domain),
            marker: None,
        }
    }
}
