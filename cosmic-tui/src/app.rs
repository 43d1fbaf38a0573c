//! Application state, owned by the main thread.
//!
//! All TUI state lives here. Panel bindings publish change events into a
//! channel owned by the app; the main loop drains it and refreshes charts.

use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use cosmic_core::binding::{event_channel, PanelEvent, PanelId};
use cosmic_core::config::CosmicConfig;
use cosmic_core::panel::{ChartModel, ProbabilityPanel};
use cosmic_core::Result;

/// Error history is capped at this many records.
const ERROR_HISTORY_CAP: usize = 50;

/// Frames the "Update Graph" button stays highlighted after a press.
const BUTTON_FLASH_FRAMES: u8 = 4;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Life,
    Asteroid,
    Help,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Life, Panel::Asteroid, Panel::Help];

    pub fn index(self) -> usize {
        match self {
            Panel::Life => 0,
            Panel::Asteroid => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Life => PanelId::Life.label(),
            Panel::Asteroid => PanelId::Asteroid.label(),
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Panel {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The probability panel shown here, if any.
    pub fn panel_id(self) -> Option<PanelId> {
        match self {
            Panel::Life => Some(PanelId::Life),
            Panel::Asteroid => Some(PanelId::Asteroid),
            Panel::Help => None,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub context: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    ErrorHistory,
}

/// Whether keys go to navigation or to the active text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// One probability panel plus what the UI keeps beside it.
pub struct PanelView {
    pub panel: Box<dyn ProbabilityPanel>,
    /// Last chart produced; replaced in full on every refresh.
    pub chart: ChartModel,
    /// Contents of the free-text input.
    pub input: String,
    pub redraws: u64,
    pub button_flash: u8,
}

impl PanelView {
    pub fn new(panel: Box<dyn ProbabilityPanel>) -> Self {
        let chart = panel.chart();
        Self {
            panel,
            chart,
            input: String::new(),
            redraws: 0,
            button_flash: 0,
        }
    }

    /// Resample and replace the chart.
    pub fn refresh(&mut self) {
        self.chart = self.panel.chart();
        self.redraws += 1;
    }
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,
    pub input_mode: InputMode,

    // Panel states
    pub life: PanelView,
    pub asteroid: PanelView,

    // Change notifications from both bindings
    pub events: Receiver<PanelEvent>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(config: &CosmicConfig) -> Result<Self> {
        let (tx, rx) = event_channel();
        let life = config.life.build_panel(tx.clone())?;
        let asteroid = config.asteroid.build_panel(tx)?;
        Ok(Self {
            active_panel: Panel::Life,
            running: true,
            input_mode: InputMode::Normal,
            life: PanelView::new(Box::new(life)),
            asteroid: PanelView::new(Box::new(asteroid)),
            events: rx,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::Welcome,
        })
    }

    pub fn view(&self, id: PanelId) -> &PanelView {
        match id {
            PanelId::Life => &self.life,
            PanelId::Asteroid => &self.asteroid,
        }
    }

    pub fn view_mut(&mut self, id: PanelId) -> &mut PanelView {
        match id {
            PanelId::Life => &mut self.life,
            PanelId::Asteroid => &mut self.asteroid,
        }
    }

    /// The view behind the active panel (`None` on Help).
    pub fn active_view_mut(&mut self) -> Option<&mut PanelView> {
        let id = self.active_panel.panel_id()?;
        Some(self.view_mut(id))
    }

    /// Refresh every panel that published since the last call. Returns the
    /// number of events handled.
    pub fn drain_events(&mut self) -> usize {
        let pending: Vec<PanelEvent> = self.events.try_iter().collect();
        for event in &pending {
            debug!(?event, "panel event");
            self.view_mut(event.panel()).refresh();
        }
        pending.len()
    }

    /// Per-frame housekeeping.
    pub fn tick(&mut self) {
        for view in [&mut self.life, &mut self.asteroid] {
            view.button_flash = view.button_flash.saturating_sub(1);
        }
    }

    /// Move the active slider by `delta` steps.
    pub fn step_slider(&mut self, delta: i64) {
        if let Some(view) = self.active_view_mut() {
            view.panel.binding_mut().step(delta);
        }
    }

    pub fn slider_to_start(&mut self) {
        if let Some(view) = self.active_view_mut() {
            view.panel.binding_mut().jump_to_start();
        }
    }

    pub fn slider_to_end(&mut self) {
        if let Some(view) = self.active_view_mut() {
            view.panel.binding_mut().jump_to_end();
        }
    }

    /// "Update Graph": redraw at the current position.
    pub fn request_redraw(&mut self) {
        let Some(view) = self.active_view_mut() else {
            return;
        };
        view.panel.binding().request_redraw();
        view.button_flash = BUTTON_FLASH_FRAMES;
        self.set_status("Graph updated");
    }

    /// Submit the active text input through the slider.
    pub fn submit_input(&mut self) {
        let Some(id) = self.active_panel.panel_id() else {
            return;
        };
        let view = self.view_mut(id);
        let text = view.input.clone();
        let outcome = view.panel.binding_mut().submit_text(&text);
        let value = view.panel.describe_value();
        match outcome {
            Ok(position) => {
                info!(panel = ?id, position, "text input applied");
                self.set_status(format!("Slider set to {position} ({value})"));
            }
            Err(err) => {
                self.push_error(
                    format!("Error: Please enter a valid number. ({err})"),
                    id.label().to_string(),
                );
            }
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(&CosmicConfig::default()).unwrap()
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Life.next(), Panel::Asteroid);
        assert_eq!(Panel::Help.next(), Panel::Life);
        assert_eq!(Panel::Life.prev(), Panel::Help);
        assert_eq!(Panel::Asteroid.prev(), Panel::Life);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..3 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(3).is_none());
    }

    #[test]
    fn starts_with_welcome_and_initial_charts() {
        let app = app();
        assert_eq!(app.overlay, Overlay::Welcome);
        assert_eq!(app.life.chart.series.len(), 1200);
        assert_eq!(app.asteroid.chart.series.len(), 10);
        assert_eq!(app.life.panel.binding().position(), 13);
        assert_eq!(app.asteroid.panel.binding().position(), 1);
    }

    #[test]
    fn slider_step_refreshes_only_that_panel() {
        let mut app = app();
        app.step_slider(10);
        assert_eq!(app.drain_events(), 1);
        assert_eq!(app.life.redraws, 1);
        assert_eq!(app.asteroid.redraws, 0);
        let marker = app.life.chart.marker.as_ref().unwrap();
        assert_eq!(marker.x, 2.3e10);
    }

    #[test]
    fn help_panel_ignores_slider_keys() {
        let mut app = app();
        app.active_panel = Panel::Help;
        app.step_slider(5);
        app.request_redraw();
        assert_eq!(app.drain_events(), 0);
    }

    #[test]
    fn submit_valid_input_moves_slider() {
        let mut app = app();
        app.active_panel = Panel::Asteroid;
        app.asteroid.input = "5e-7".into();
        app.submit_input();
        assert_eq!(app.asteroid.panel.binding().position(), 50);
        assert_eq!(app.drain_events(), 1);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Info))));
    }

    #[test]
    fn submit_invalid_input_records_error_without_redraw() {
        let mut app = app();
        app.life.input = "abc".into();
        let before = app.life.chart.clone();
        app.submit_input();
        assert_eq!(app.drain_events(), 0);
        assert_eq!(app.life.chart, before);
        assert_eq!(app.life.panel.binding().position(), 13);
        assert_eq!(app.error_history.len(), 1);
        assert!(app.error_history[0].message.contains("valid number"));
        assert!(matches!(app.status_message, Some((_, StatusLevel::Error))));
        // The text stays so it can be corrected.
        assert_eq!(app.life.input, "abc");
    }

    #[test]
    fn update_graph_redraws_and_flashes() {
        let mut app = app();
        app.request_redraw();
        assert_eq!(app.life.button_flash, BUTTON_FLASH_FRAMES);
        assert_eq!(app.drain_events(), 1);
        assert_eq!(app.life.redraws, 1);
        for _ in 0..BUTTON_FLASH_FRAMES {
            app.tick();
        }
        assert_eq!(app.life.button_flash, 0);
    }

    #[test]
    fn slider_jumps() {
        let mut app = app();
        app.slider_to_end();
        assert_eq!(app.life.panel.binding().position(), 1000);
        app.slider_to_start();
        assert_eq!(app.life.panel.binding().position(), 0);
        assert_eq!(app.drain_events(), 2);
    }

    #[test]
    fn error_history_caps_at_50() {
        let mut app = app();
        for i in 0..60 {
            app.push_error(format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }
}
