//! Unified calculator driver
//!
//! Write the scenario once, run it against every host. Both the mock page
//! ([`WasmDriver`](crate::wasm::WasmDriver)) and the terminal app
//! ([`TuiDriver`]) implement [`CalculatorDriver`]; the `verify_*` functions
//! below drive a calculator purely through that trait.
//!
//! ```rust
//! use widget_calc::driver::{run_all_scenarios, CalculatorDriver};
//! use widget_calc::wasm::WasmDriver;
//!
//! let mut driver = WasmDriver::new();
//! run_all_scenarios(&mut driver);
//! ```

use crate::core::CalculatorState;
use crate::error::WidgetResult;
use crate::theme::Theme;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Sends one token (key name or button identifier)
    fn press(&mut self, token: &str);

    /// Current readout text
    fn readout(&self) -> String;

    /// Rendered history lines, oldest first
    fn history(&self) -> Vec<String>;

    /// Snapshot of the calculator state
    fn state(&self) -> CalculatorState;

    /// Changes the base color and returns the applied theme
    fn recolor(&mut self, color: &str) -> WidgetResult<Theme>;

    /// Sends several tokens in order
    fn press_all(&mut self, tokens: &[&str]) {
        for token in tokens {
            self.press(token);
        }
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, CalculatorState, Theme, WidgetResult};
    use crate::tui::{CalculatorApp, KeyAction};

    /// Driver wrapping the terminal calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, token: &str) {
            self.app.apply(KeyAction::Token(token.to_string()));
        }

        fn readout(&self) -> String {
            self.app.screen().readout.clone()
        }

        fn history(&self) -> Vec<String> {
            self.app.screen().history.clone()
        }

        fn state(&self) -> CalculatorState {
            self.app.widget().state().clone()
        }

        fn recolor(&mut self, color: &str) -> WidgetResult<Theme> {
            self.app.set_theme(color).cloned()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.press("CLEAR");

    driver.press_all(&["5", "+", "3", "="]);
    assert_eq!(driver.readout(), "8");
    assert_eq!(driver.state().current, "8");

    driver.press("CLEAR");
    driver.press_all(&["1", "0", "-", "4", "Enter"]);
    assert_eq!(driver.readout(), "6");

    driver.press("CLEAR");
    driver.press_all(&["6", "*", "7", "="]);
    assert_eq!(driver.readout(), "42");

    driver.press("CLEAR");
    driver.press_all(&["7", "/", "2", "="]);
    assert_eq!(driver.readout(), "3.5");
}

/// Verifies percent mode
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.press("CLEAR");
    driver.press_all(&["1", "0", "0", "-", "1", "0", "%", "="]);
    assert_eq!(driver.readout(), "90");
    assert_eq!(driver.history().last().map(String::as_str), Some("100 - 10% = 90"));

    driver.press("CLEAR");
    driver.press_all(&["2", "0", "0", "+", "5", "%", "="]);
    assert_eq!(driver.readout(), "210");
}

/// Verifies that division by zero shows as text
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press("CLEAR");
    driver.press_all(&["1", "0", "/", "0", "="]);
    assert_eq!(driver.readout(), "Infinity");

    driver.press("CLEAR");
    driver.press_all(&["0", "/", "0", "="]);
    assert_eq!(driver.readout(), "NaN");
}

/// Verifies that malformed input is silently ignored
pub fn verify_input_validation<D: CalculatorDriver>(driver: &mut D) {
    driver.press("CLEAR");
    driver.press_all(&["1", ".", "5", ".", "2"]);
    assert_eq!(driver.state().current, "1.52");

    driver.press("CLEAR");
    driver.press_all(&["1", "0", "%", "5", "Shift", "a"]);
    assert_eq!(driver.state().current, "10%");
    assert_eq!(driver.readout(), "10%");
}

/// Verifies Backspace, including the empty-operand case
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.press("CLEAR");
    driver.press_all(&["1", "2", "3", "Backspace"]);
    assert_eq!(driver.readout(), "12");

    driver.press_all(&["+", "Backspace"]);
    let state = driver.state();
    assert!(state.operator.is_none());
    assert_eq!(state.previous, "12");
    assert!(state.current.is_empty());
}

/// Verifies CLEAR and OFF
pub fn verify_clear_and_off<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&["4", "+", "4"]);
    driver.press("OFF");
    assert_eq!(driver.readout(), "Calculator Off");
    assert!(driver.state().is_empty());

    driver.press_all(&["4", "+"]);
    driver.press("CLEAR");
    assert_eq!(driver.readout(), "");
    assert!(driver.state().is_empty());
}

/// Verifies that history is appended in order and survives CLEAR
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.press("CLEAR");
    let before = driver.history().len();

    driver.press_all(&["1", "+", "1", "="]);
    driver.press_all(&["*", "3", "="]);
    driver.press("CLEAR");

    let history = driver.history();
    assert_eq!(history.len(), before + 2);
    assert_eq!(history[before], "1 + 1 = 2");
    assert_eq!(history[before + 1], "2 * 3 = 6");
}

/// Verifies theme derivation through the host
pub fn verify_theme<D: CalculatorDriver>(driver: &mut D) {
    let dark = driver.recolor("#000000").expect("black is a valid color");
    assert!(dark.dark);
    assert_eq!(dark.button_background, "#444");

    let light = driver.recolor("#ffffff").expect("white is a valid color");
    assert!(!light.dark);
    assert_eq!(light.display, "#f2f2f2");

    assert!(driver.recolor("#fff0").is_err());
}

/// Runs every scenario above in order
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_percent(driver);
    verify_division_by_zero(driver);
    verify_input_validation(driver);
    verify_backspace(driver);
    verify_clear_and_off(driver);
    verify_history(driver);
    verify_theme(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert_eq!(driver.readout(), "0");
            assert!(driver.history().is_empty());
        }

        #[test]
        fn test_tui_driver_with_app() {
            let driver = TuiDriver::with_app(crate::tui::CalculatorApp::new());
            assert!(driver.state().is_empty());
        }

        #[test]
        fn test_tui_all_scenarios() {
            let mut driver = TuiDriver::new();
            run_all_scenarios(&mut driver);
        }

        #[test]
        fn test_tui_app_access() {
            let mut driver = TuiDriver::new();
            driver.press("5");
            assert_eq!(driver.app().widget().state().current, "5");
            driver.app_mut().apply(crate::tui::KeyAction::Quit);
            assert!(driver.app().should_quit());
        }
    }

    mod wasm_tests {
        use super::*;
        use crate::wasm::WasmDriver;

        #[test]
        fn test_wasm_all_scenarios() {
            let mut driver = WasmDriver::new();
            run_all_scenarios(&mut driver);
        }

        #[test]
        fn test_wasm_press_all() {
            let mut driver = WasmDriver::new();
            driver.press_all(&["9", "-", "1", "="]);
            assert_eq!(driver.readout(), "8");
        }
    }
}
