//! Terminal host for the widget

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{CalculatorApp, Screen, PRESET_COLORS};
pub use input::{InputHandler, KeyAction};
pub use keypad::{hit_test, KeypadStyle, KeypadWidget};
pub use ui::{render, terminal_color, CalculatorUI, UiLayout};
