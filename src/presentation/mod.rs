//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui, translates
//! keyboard input into calculator button events, and renders the display,
//! keypad, and overlays.

pub mod clipboard;
pub mod input;
pub mod ui;

pub use input::*;
pub use ui::*;
