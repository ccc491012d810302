//! Keypad calculator widget
//!
//! A small calculator meant to sit on a web page: two operands, one of
//! `+ - * /`, an optional percent mode, and an append-only history log. The
//! whole widget recolors itself from a single base color.
//!
//! The crate is split the way the widget is:
//!
//! - [`core`] holds the calculator state and a pure token dispatcher
//! - [`theme`] derives a palette from a base color
//! - [`widget`] binds a controller to a host [`widget::Surface`]
//! - [`wasm`] hosts it on a page (mock DOM always, `web-sys` with `wasm`)
//! - [`tui`] hosts it in a terminal (feature `tui`, on by default)
//!
//! # Example
//!
//! ```rust
//! use widget_calc::prelude::*;
//!
//! let mut controller = Controller::new();
//! for token in ["1", "0", "0", "-", "1", "0", "%", "Enter"] {
//!     controller.handle(token);
//! }
//! assert_eq!(controller.readout(), "90");
//! assert_eq!(controller.history().lines(), vec!["100 - 10% = 90"]);
//!
//! assert!(is_dark_theme("#4b5563").unwrap());
//! assert_eq!(adjust_brightness("#ffffff", -5.0).unwrap(), "#f2f2f2");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

#[cfg(feature = "tui")]
pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod keypad;
pub mod theme;
pub mod widget;

#[cfg(feature = "tui")]
pub mod tui;

/// Page host - always available for testing
/// (the mock DOM exercises the page wiring without a browser)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        dispatch, CalculatorState, Controller, Effect, History, HistoryEntry, Operator, Token,
        Transition,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::error::{WidgetError, WidgetResult};
    pub use crate::theme::{adjust_brightness, is_dark_theme, Theme, ThemeColor};
    pub use crate::widget::{Surface, Widget};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomEvent, MockDom, PageCalculator, WasmDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut controller = Controller::new();
        controller.handle("7");
        assert_eq!(controller.state().current, "7");
    }

    #[test]
    fn test_dispatch_is_pure() {
        let state = CalculatorState::with_parts("5", "3", Some(Operator::Add));
        let transition = dispatch(&state, &Token::classify("="));
        assert_eq!(state.current, "5");
        assert_eq!(transition.state.current, "8");
        assert_eq!(transition.effects.len(), 2);
    }

    #[test]
    fn test_theme_helpers() {
        assert!(is_dark_theme("#000000").unwrap());
        assert!(!is_dark_theme("#ffffff").unwrap());
        assert!(matches!(
            adjust_brightness("bad", 5.0),
            Err(WidgetError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_page_calculator_from_prelude() {
        let mut page = PageCalculator::new();
        page.handle_event(&DomEvent::key_down("9"));
        assert_eq!(page.readout(), "9");
    }
}
