//! Cosmic Odyssey TUI: two probability panels in the terminal.
//!
//! Panels:
//! 1. Intelligent Life: slider over time since the Big Bang
//! 2. Asteroid Collision: slider over the yearly impact probability
//! 3. Help: keyboard shortcuts

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
