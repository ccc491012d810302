//! Browser host for the widget
//!
//! The real page binding lives behind the `wasm` feature. The mock DOM and
//! [`PageCalculator`] are always built so the page wiring is testable
//! without a browser.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod page;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{
    DomElement, DomEvent, MockDom, BUTTON_GROUP_CLASS, CALCULATOR_ID, DATA_BUTTON, DEFAULT_COLOR,
    HISTORY_ID, RESULT_ID, STYLE_INPUT_ID,
};
pub use driver::WasmDriver;
pub use page::PageCalculator;
