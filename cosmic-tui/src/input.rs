//! Keyboard input dispatch: overlays, then text editing, then global keys, then panel keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, InputMode, Overlay, Panel};

/// Slider steps moved by PageUp / PageDown.
const PAGE_STEP: i64 = 10;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. The text input owns the keyboard while editing.
    if app.input_mode == InputMode::Editing {
        handle_editing_key(app, key);
        return;
    }

    // 3. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::Life;
            return;
        }
        KeyCode::Char('2') => {
            app.active_panel = Panel::Asteroid;
            return;
        }
        KeyCode::Char('3') | KeyCode::Char('?') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Tab => {
            app.active_panel = app.active_panel.next();
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
            return;
        }
        _ => {}
    }

    // 4. Panel-specific keys.
    match app.active_panel {
        Panel::Life | Panel::Asteroid => handle_panel_key(app, key),
        Panel::Help => {} // display only
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_editing_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.submit_input();
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            if let Some(view) = app.active_view_mut() {
                view.input.pop();
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(view) = app.active_view_mut() {
                view.input.clear();
            }
        }
        KeyCode::Char(c) => {
            if let Some(view) = app.active_view_mut() {
                view.input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_panel_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.step_slider(-1),
        KeyCode::Char('l') | KeyCode::Right => app.step_slider(1),
        KeyCode::PageDown | KeyCode::Char('H') => app.step_slider(-PAGE_STEP),
        KeyCode::PageUp | KeyCode::Char('L') => app.step_slider(PAGE_STEP),
        KeyCode::Home => app.slider_to_start(),
        KeyCode::End => app.slider_to_end(),
        KeyCode::Char('i') | KeyCode::Char('/') => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('u') | KeyCode::Enter => app.request_redraw(),
        _ => {}
    }
}
