//! Slider/text binding with change notification.
//!
//! The slider position is the single source of truth for a panel's parameter.
//! Free text never writes the parameter directly: it is parsed, converted to a
//! position and pushed through [`ControlBinding::set_position`], which is also
//! what a slider movement calls. Every effective change publishes a
//! [`PanelEvent`] on the panel's event channel; the UI drains the channel and
//! redraws.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, warn};

use crate::control::{parse_numeric_input, SliderScale};
use crate::error::Result;

/// Identifies one of the two independent panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Life,
    Asteroid,
}

impl PanelId {
    pub fn label(self) -> &'static str {
        match self {
            PanelId::Life => "Intelligent Life Probability",
            PanelId::Asteroid => "Asteroid Collision Probability",
        }
    }
}

/// Notifications sent from a binding to whoever renders the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The slider moved to a new position.
    PositionChanged { panel: PanelId, position: u32 },
    /// Explicit redraw without a parameter change.
    RedrawRequested { panel: PanelId },
}

impl PanelEvent {
    pub fn panel(&self) -> PanelId {
        match *self {
            PanelEvent::PositionChanged { panel, .. } | PanelEvent::RedrawRequested { panel } => {
                panel
            }
        }
    }
}

/// Create the queue panels publish into.
pub fn event_channel() -> (Sender<PanelEvent>, Receiver<PanelEvent>) {
    mpsc::channel()
}

#[derive(Debug)]
pub struct ControlBinding {
    panel: PanelId,
    scale: SliderScale,
    position: u32,
    events: Sender<PanelEvent>,
}

impl ControlBinding {
    /// `initial_position` is clamped to the slider range. No event is sent.
    pub fn new(
        panel: PanelId,
        scale: SliderScale,
        initial_position: u32,
        events: Sender<PanelEvent>,
    ) -> Self {
        Self {
            panel,
            scale,
            position: initial_position.min(scale.max_position()),
            events,
        }
    }

    pub fn panel(&self) -> PanelId {
        self.panel
    }

    pub fn scale(&self) -> &SliderScale {
        &self.scale
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    /// Parameter value at the current position.
    pub fn value(&self) -> f64 {
        self.scale.value_at(self.position)
    }

    /// Move the slider. Returns `true` and publishes an event if the position
    /// actually changed.
    pub fn set_position(&mut self, position: u32) -> bool {
        let position = position.min(self.scale.max_position());
        if position == self.position {
            return false;
        }
        self.position = position;
        debug!(panel = ?self.panel, position, "slider moved");
        self.publish(PanelEvent::PositionChanged {
            panel: self.panel,
            position,
        });
        true
    }

    /// Nudge the slider by `delta` steps, saturating at both ends.
    pub fn step(&mut self, delta: i64) -> bool {
        let target = (i64::from(self.position) + delta).clamp(0, i64::from(self.scale.max_position()));
        self.set_position(target as u32)
    }

    pub fn jump_to_start(&mut self) -> bool {
        self.set_position(0)
    }

    pub fn jump_to_end(&mut self) -> bool {
        self.set_position(self.scale.max_position())
    }

    /// Apply free-text input by routing it through the slider.
    ///
    /// On a parse failure the position is left untouched, nothing is
    /// published, and the error is logged and returned.
    pub fn submit_text(&mut self, text: &str) -> Result<u32> {
        let position = parse_numeric_input(text)
            .and_then(|value| self.scale.position_for(value))
            .map_err(|err| {
                warn!(panel = ?self.panel, %err, "rejected text input");
                err
            })?;
        self.set_position(position);
        Ok(self.position)
    }

    /// Ask for a redraw at the current position.
    pub fn request_redraw(&self) {
        self.publish(PanelEvent::RedrawRequested { panel: self.panel });
    }

    fn publish(&self, event: PanelEvent) {
        // A dropped receiver means nobody is rendering; the state change still stands.
        let _ = self.events.send(event);
    }
}
