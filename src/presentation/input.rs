use crate::application::{App, AppMode};
use crate::presentation::clipboard;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::History => Self::handle_history_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        app.status_message = None;

        match key {
            KeyCode::Char(ch @ '0'..='9') => {
                app.calculator.on_button(ch.to_string().as_str());
            }
            KeyCode::Char('.') => {
                app.calculator.on_button(".");
            }
            KeyCode::Char('+') => {
                app.calculator.on_button("+");
            }
            KeyCode::Char('-') => {
                app.calculator.on_button("-");
            }
            KeyCode::Char('*') => {
                app.calculator.on_button("×");
            }
            KeyCode::Char('/') => {
                app.calculator.on_button("÷");
            }
            KeyCode::Char('^') => {
                app.calculator.on_button("^");
            }
            KeyCode::Char('%') => {
                app.calculator.on_button("%");
            }
            KeyCode::Enter | KeyCode::Char('=') => {
                app.calculator.on_button("=");
            }
            KeyCode::Backspace => {
                app.calculator.on_button("⌫");
            }
            KeyCode::Delete => {
                app.calculator.on_button("C");
            }
            KeyCode::Char('n') => {
                app.calculator.on_button("±");
            }
            KeyCode::Char('y') => {
                let result = clipboard::copy_to_clipboard(app.calculator.result());
                app.set_clipboard_result(result);
            }
            KeyCode::Tab => {
                app.open_history();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            KeyCode::F(2) => {
                app.calculator.toggle_scientific_mode();
            }
            KeyCode::F(3) => {
                app.calculator.toggle_theme();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => Self::handle_scientific_keys(app, key),
        }
    }

    /// Letter keys for the extended keypad. Only active while scientific mode
    /// is toggled on, matching the on-screen keypad.
    fn handle_scientific_keys(app: &mut App, key: KeyCode) {
        if !app.calculator.is_scientific_mode() {
            return;
        }

        match key {
            KeyCode::Char('s') => app.calculator.on_scientific_button("sin"),
            KeyCode::Char('c') => app.calculator.on_scientific_button("cos"),
            KeyCode::Char('t') => app.calculator.on_scientific_button("tan"),
            KeyCode::Char('l') => app.calculator.on_scientific_button("ln"),
            KeyCode::Char('g') => app.calculator.on_scientific_button("log"),
            KeyCode::Char('r') => app.calculator.on_scientific_button("√"),
            KeyCode::Char('x') => app.calculator.on_scientific_button("x²"),
            KeyCode::Char('p') => app.calculator.on_scientific_button("π"),
            KeyCode::Char('e') => app.calculator.on_scientific_button("e"),
            KeyCode::Char('(') => app.calculator.on_scientific_button("("),
            KeyCode::Char(')') => app.calculator.on_scientific_button(")"),
            _ => {}
        }
    }

    fn handle_history_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Tab => {
                app.close_overlay();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.history_cursor_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.history_cursor_down();
            }
            KeyCode::Enter => {
                app.select_history_entry();
            }
            KeyCode::Char('D') => {
                app.clear_history();
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_overlay();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
