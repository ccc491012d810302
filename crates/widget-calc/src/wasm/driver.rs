//! WASM Driver - Unified Testing Interface
//!
//! Implements [`CalculatorDriver`] over the mock page, so the shared
//! scenarios exercise the same event wiring the browser uses: tokens that
//! have a keypad button are clicked, everything else is typed.

use super::dom::{DomEvent, STYLE_INPUT_ID};
use super::page::PageCalculator;
use crate::core::CalculatorState;
use crate::driver::CalculatorDriver;
use crate::error::{WidgetError, WidgetResult};
use crate::theme::Theme;

/// Driver wrapping a loaded mock page
#[derive(Debug)]
pub struct WasmDriver {
    page: PageCalculator,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver on a freshly loaded page
    #[must_use]
    pub fn new() -> Self {
        let mut page = PageCalculator::new();
        page.handle_event(&DomEvent::PageLoad);
        Self { page }
    }

    /// Creates a driver around an existing page
    #[must_use]
    pub fn with_page(page: PageCalculator) -> Self {
        Self { page }
    }

    /// Returns the page
    #[must_use]
    pub fn page(&self) -> &PageCalculator {
        &self.page
    }

    /// Clicks the keypad button that sends `token`
    ///
    /// Returns false if no such button exists.
    pub fn click_button(&mut self, token: &str) -> bool {
        let Some(id) = self.page.dom().find_button(token).map(|e| e.id.clone()) else {
            return false;
        };
        self.page.handle_event(&DomEvent::click(&id));
        true
    }

    /// Types a key on the page
    pub fn type_key(&mut self, key: &str) {
        self.page.handle_event(&DomEvent::key_down(key));
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, token: &str) {
        if !self.click_button(token) {
            self.type_key(token);
        }
    }

    fn readout(&self) -> String {
        self.page.readout()
    }

    fn history(&self) -> Vec<String> {
        self.page.history_lines()
    }

    fn state(&self) -> CalculatorState {
        self.page.widget().state().clone()
    }

    fn recolor(&mut self, color: &str) -> WidgetResult<Theme> {
        self.page
            .handle_event(&DomEvent::input(STYLE_INPUT_ID, color));
        match self.page.widget().theme() {
            Some(theme) if theme.panel == color => Ok(theme.clone()),
            _ => Err(WidgetError::invalid_color(color)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{
        verify_backspace, verify_basic_arithmetic, verify_clear_and_off,
        verify_division_by_zero, verify_history, verify_input_validation, verify_percent,
        verify_theme,
    };

    #[test]
    fn test_wasm_driver_new_is_loaded() {
        let driver = WasmDriver::new();
        assert!(driver.page().clicks_attached());
        assert_eq!(driver.readout(), "0");
    }

    #[test]
    fn test_wasm_driver_with_page() {
        let driver = WasmDriver::with_page(PageCalculator::new());
        assert!(!driver.page().clicks_attached());
    }

    #[test]
    fn test_click_button_known_and_unknown() {
        let mut driver = WasmDriver::new();
        assert!(driver.click_button("4"));
        assert!(!driver.click_button("Enter"));
        assert_eq!(driver.readout(), "4");
    }

    #[test]
    fn test_type_key() {
        let mut driver = WasmDriver::new();
        driver.type_key("8");
        driver.type_key("Backspace");
        assert_eq!(driver.readout(), "0");
    }

    #[test]
    fn test_press_records_events() {
        let mut driver = WasmDriver::new();
        driver.press_all(&["1", "Enter"]);
        let events = driver.page().dom().event_history();
        // page load, click on btn-1, keydown Enter
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], DomEvent::click("btn-1"));
        assert_eq!(events[2], DomEvent::key_down("Enter"));
    }

    #[test]
    fn test_recolor_invalid() {
        let mut driver = WasmDriver::new();
        assert!(driver.recolor("#zzzzzz").is_err());
    }

    #[test]
    fn test_scenarios_individually() {
        let mut driver = WasmDriver::new();
        verify_basic_arithmetic(&mut driver);
        verify_percent(&mut driver);
        verify_division_by_zero(&mut driver);
        verify_input_validation(&mut driver);
        verify_backspace(&mut driver);
        verify_clear_and_off(&mut driver);
        verify_history(&mut driver);
        verify_theme(&mut driver);
    }
}
