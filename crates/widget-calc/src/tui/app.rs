//! TUI Application State

use ratatui::layout::Rect;
use tracing::{debug, warn};

use super::input::KeyAction;
use super::keypad::hit_test;
use crate::config::WidgetConfig;
use crate::core::HistoryEntry;
use crate::error::WidgetResult;
use crate::keypad::{find_by_token, BUTTONS};
use crate::theme::Theme;
use crate::widget::{Surface, Widget};

/// Base colors cycled with Ctrl+T
pub const PRESET_COLORS: [&str; 5] = ["#4b5563", "#1e293b", "#f5f5f4", "#7c3aed", "#065f46"];

/// What the terminal shows, as last told by the widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    /// Readout text
    pub readout: String,
    /// History lines, oldest first
    pub history: Vec<String>,
    /// Active palette
    pub theme: Option<Theme>,
}

impl Surface for Screen {
    fn set_readout(&mut self, text: &str) {
        self.readout = text.to_string();
    }

    fn append_history(&mut self, entry: &HistoryEntry) {
        self.history.push(entry.text.clone());
    }

    fn apply_theme(&mut self, theme: &Theme) {
        self.theme = Some(theme.clone());
    }
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    widget: Widget<Screen>,
    /// Keypad button shown as pressed
    pressed: Option<usize>,
    show_keypad: bool,
    /// Index into [`PRESET_COLORS`] of the last cycled color
    preset: Option<usize>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an unthemed app with the keypad shown
    #[must_use]
    pub fn new() -> Self {
        Self {
            widget: Widget::new(Screen::default()),
            pressed: None,
            show_keypad: true,
            preset: None,
            should_quit: false,
        }
    }

    /// Creates an app from a configuration, applying its theme
    pub fn with_config(config: &WidgetConfig) -> WidgetResult<Self> {
        config.validate()?;
        let mut app = Self::new();
        app.show_keypad = config.show_keypad;
        app.set_theme(&config.theme)?;
        Ok(app)
    }

    /// Applies one input action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Token(token) => self.press(&token),
            KeyAction::CycleTheme => self.cycle_theme(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Sends one token to the widget and highlights its button
    pub fn press(&mut self, token: &str) {
        let key = if token == "Enter" { "=" } else { token };
        self.pressed = find_by_token(key);
        self.widget.handle(token);
    }

    /// Handles a mouse click at (x, y) on a keypad drawn in `area`
    ///
    /// Returns true if a button was hit.
    pub fn click(&mut self, area: Rect, x: u16, y: u16) -> bool {
        let Some(button) = hit_test(area, x, y).and_then(|i| BUTTONS.get(i)) else {
            return false;
        };
        debug!(token = button.token, "keypad click");
        self.press(button.token);
        true
    }

    /// Derives and applies a theme from a base color
    pub fn set_theme(&mut self, color: &str) -> WidgetResult<&Theme> {
        self.widget.recolor(color)
    }

    /// Switches to the next preset base color
    pub fn cycle_theme(&mut self) {
        let next = self.preset.map_or(0, |i| (i + 1) % PRESET_COLORS.len());
        self.preset = Some(next);
        if let Err(e) = self.set_theme(PRESET_COLORS[next]) {
            warn!(%e, "preset color rejected");
        }
    }

    /// Returns what the terminal shows
    #[must_use]
    pub fn screen(&self) -> &Screen {
        self.widget.surface()
    }

    /// Returns the widget
    #[must_use]
    pub fn widget(&self) -> &Widget<Screen> {
        &self.widget
    }

    /// Returns the highlighted keypad button
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Returns whether the keypad is drawn
    #[must_use]
    pub fn show_keypad(&self) -> bool {
        self.show_keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(app: &mut CalculatorApp, tokens: &[&str]) {
        for token in tokens {
            app.apply(KeyAction::token(token));
        }
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.screen().readout, "0");
        assert!(app.screen().history.is_empty());
        assert!(app.screen().theme.is_none());
        assert!(app.show_keypad());
        assert!(!app.should_quit());
        assert!(app.pressed().is_none());
    }

    #[test]
    fn test_app_with_config() {
        let config = WidgetConfig::new().with_theme("#000000").with_keypad(false);
        let app = CalculatorApp::with_config(&config).unwrap();
        assert!(!app.show_keypad());
        assert!(app.screen().theme.as_ref().unwrap().dark);
    }

    #[test]
    fn test_app_with_bad_config() {
        let config = WidgetConfig::new().with_theme("#12");
        assert!(CalculatorApp::with_config(&config).is_err());
    }

    #[test]
    fn test_tokens_update_screen() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["1", "2", "+", "3", "Enter"]);
        assert_eq!(app.screen().readout, "15");
        assert_eq!(app.screen().history, vec!["12 + 3 = 15"]);
    }

    #[test]
    fn test_press_highlights_button() {
        let mut app = CalculatorApp::new();
        app.press("7");
        assert_eq!(app.pressed(), find_by_token("7"));
        app.press("Enter");
        assert_eq!(app.pressed(), find_by_token("="));
        app.press("x");
        assert!(app.pressed().is_none());
    }

    #[test]
    fn test_click_sends_token() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 34, 12);
        // row 1, col 0 is "7"
        assert!(app.click(area, 1, 3));
        assert_eq!(app.screen().readout, "7");
        assert!(!app.click(area, 0, 0));
        assert_eq!(app.screen().readout, "7");
    }

    #[test]
    fn test_cycle_theme_walks_presets() {
        let mut app = CalculatorApp::new();
        for expected in PRESET_COLORS {
            app.apply(KeyAction::CycleTheme);
            assert_eq!(app.screen().theme.as_ref().unwrap().panel, expected);
        }
        app.apply(KeyAction::CycleTheme);
        assert_eq!(app.screen().theme.as_ref().unwrap().panel, PRESET_COLORS[0]);
    }

    #[test]
    fn test_set_theme_invalid_keeps_previous() {
        let mut app = CalculatorApp::new();
        app.set_theme("#ffffff").unwrap();
        assert!(app.set_theme("white").is_err());
        assert_eq!(app.screen().theme.as_ref().unwrap().panel, "#ffffff");
    }

    #[test]
    fn test_quit_and_none() {
        let mut app = CalculatorApp::new();
        app.apply(KeyAction::None);
        assert!(!app.should_quit());
        app.apply(KeyAction::Quit);
        assert!(app.should_quit());
    }
}
