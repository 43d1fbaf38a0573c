//! Nord theme tokens for the Cosmic Odyssey TUI
//!
//! # Color Palette
//! - **Background**: Polar night (`#2E3440`)
//! - **Surface**: Slider groove, input fields (`#4C566A`)
//! - **Accent**: Frost blue (curves, slider handle, focus)
//! - **Hover**: Light frost (selected tab, pressed button)
//! - **Text**: Snow storm
//! - **Marker**: Red (selected-time line, errors)
//! - **Warning**: Aurora yellow

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(46, 52, 64);
pub const SURFACE: Color = Color::Rgb(76, 86, 106);
pub const ACCENT: Color = Color::Rgb(129, 161, 193);
pub const HOVER: Color = Color::Rgb(136, 192, 208);
pub const TEXT: Color = Color::Rgb(216, 222, 233);
pub const TEXT_BRIGHT: Color = Color::Rgb(236, 239, 244);
pub const MARKER: Color = Color::Rgb(191, 97, 106);
pub const WARNING: Color = Color::Rgb(235, 203, 139);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BACKGROUND)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn muted() -> Style {
    Style::default().fg(SURFACE)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn marker() -> Style {
    Style::default().fg(MARKER)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(MARKER)
}

/// Border style: frost when focused, grey otherwise.
pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        Style::default().fg(TEXT_BRIGHT).add_modifier(Modifier::BOLD)
    } else {
        text()
    }
}

pub fn tab_selected() -> Style {
    Style::default()
        .fg(TEXT_BRIGHT)
        .bg(SURFACE)
        .add_modifier(Modifier::BOLD)
}

/// Slider handle and filled groove.
pub fn slider_filled() -> Style {
    Style::default().fg(ACCENT).bg(BACKGROUND)
}

pub fn slider_groove() -> Style {
    Style::default().fg(SURFACE).bg(BACKGROUND)
}

/// Text input: bordered with the accent when editing.
pub fn input(editing: bool) -> Style {
    if editing {
        Style::default().fg(TEXT).bg(SURFACE)
    } else {
        Style::default().fg(TEXT)
    }
}

/// "Update Graph" button; lighter once pressed.
pub fn button(pressed: bool) -> Style {
    let bg = if pressed { HOVER } else { ACCENT };
    Style::default()
        .fg(BACKGROUND)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}
