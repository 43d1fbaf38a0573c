//! End-to-end panel scenarios: control input → event → resample.

use std::sync::mpsc::Receiver;

use cosmic_core::binding::{event_channel, PanelEvent, PanelId};
use cosmic_core::config::CosmicConfig;
use cosmic_core::models::{cumulative_collision_probability, probability_of_intelligent_life};
use cosmic_core::panel::{AsteroidPanel, LifePanel, ProbabilityPanel};
use cosmic_core::CosmicError;

fn panels() -> (LifePanel, AsteroidPanel, Receiver<PanelEvent>) {
    let (tx, rx) = event_channel();
    let config = CosmicConfig::default();
    let life = config.life.build_panel(tx.clone()).unwrap();
    let asteroid = config.asteroid.build_panel(tx).unwrap();
    (life, asteroid, rx)
}

#[test]
fn peak_at_current_age() {
    assert_eq!(probability_of_intelligent_life(13.8e9, 13.8e9, 1e12), 1.0);
}

#[test]
fn hundred_thousand_years_at_one_in_a_hundred_million() {
    let p = cumulative_collision_probability(100_000, 1e-8);
    assert!((p - 9.995e-4).abs() < 1e-6);
}

#[test]
fn invalid_text_changes_nothing_and_triggers_no_redraw() {
    let (mut life, mut asteroid, rx) = panels();
    let life_before = life.chart();
    let asteroid_before = asteroid.chart();

    for panel in [&mut life as &mut dyn ProbabilityPanel, &mut asteroid] {
        let err = panel.binding_mut().submit_text("abc").unwrap_err();
        assert!(matches!(err, CosmicError::InvalidNumericInput { .. }));
    }

    assert!(rx.try_recv().is_err());
    assert_eq!(life.chart(), life_before);
    assert_eq!(asteroid.chart(), asteroid_before);
}

#[test]
fn text_and_slider_produce_the_same_event() {
    let (mut life, _asteroid, rx) = panels();
    life.binding_mut().submit_text("2.5e11").unwrap();
    let via_text: Vec<PanelEvent> = rx.try_iter().collect();

    life.binding_mut().set_position(0);
    let _ = rx.try_iter().count();
    life.binding_mut().set_position(250);
    let via_slider: Vec<PanelEvent> = rx.try_iter().collect();

    assert_eq!(via_text, via_slider);
    assert_eq!(
        via_text,
        vec![PanelEvent::PositionChanged {
            panel: PanelId::Life,
            position: 250
        }]
    );
}

#[test]
fn panels_publish_on_a_shared_queue_independently() {
    let (mut life, mut asteroid, rx) = panels();
    life.binding_mut().set_position(100);
    asteroid.binding_mut().submit_text("5e-7").unwrap();

    let events: Vec<PanelId> = rx.try_iter().map(|e| e.panel()).collect();
    assert_eq!(events, vec![PanelId::Life, PanelId::Asteroid]);
    assert_eq!(asteroid.binding().position(), 50);
    assert_eq!(life.binding().position(), 100);
}

#[test]
fn redraw_button_resamples_identically() {
    let (life, _asteroid, rx) = panels();
    let before = life.chart();
    life.binding().request_redraw();
    assert_eq!(
        rx.try_recv().unwrap(),
        PanelEvent::RedrawRequested {
            panel: PanelId::Life
        }
    );
    assert_eq!(life.chart(), before);
}

#[test]
fn asteroid_curve_rises_with_slider() {
    let (_life, mut asteroid, _rx) = panels();
    let last = |panel: &AsteroidPanel| panel.chart().series.as_slice()[9].1;

    let mut previous = -1.0;
    for position in [0, 1, 10, 50, 100] {
        asteroid.binding_mut().set_position(position);
        let value = last(&asteroid);
        assert!(value > previous || (position == 0 && value == 0.0));
        previous = value;
    }
}
