//! Keyboard input mapping
//!
//! Printable keys become tokens with the same names a browser reports for
//! `KeyboardEvent.key`, so the controller sees identical input from both
//! hosts. Control chords drive the terminal-only actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed a token to the calculator
    Token(String),
    /// Switch to the next preset base color
    CycleTheme,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

impl KeyAction {
    /// Shorthand for a token action
    #[must_use]
    pub fn token(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::token("CLEAR"),
                KeyCode::Char('o') => KeyAction::token("OFF"),
                KeyCode::Char('t') => KeyAction::CycleTheme,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => KeyAction::Token(c.to_string()),
            KeyCode::Enter => KeyAction::token("Enter"),
            KeyCode::Backspace => KeyAction::token("Backspace"),
            KeyCode::Esc => KeyAction::token("CLEAR"),
            _ => KeyAction::None,
        }
    }
}
