//! Keypad layout shared by every host
//!
//! Layout:
//! ```text
//! [ C ] [OFF] [ ⌫ ] [ / ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ % ] [ = ]
//! ```
//!
//! Each button carries the token it sends, which is also the value of its
//! `data-button` attribute on the host page.

/// What kind of key a button is, for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digit, decimal point or percent
    Number,
    /// One of `+ - * /`
    Operator,
    /// `=`
    Equals,
    /// CLEAR, OFF, Backspace
    Control,
}

/// A single keypad button definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// Token sent when pressed
    pub token: &'static str,
    /// Text drawn on the button
    pub label: &'static str,
    /// Styling group
    pub kind: ButtonKind,
}

impl KeypadButton {
    const fn new(token: &'static str, label: &'static str, kind: ButtonKind) -> Self {
        Self { token, label, kind }
    }

    /// DOM element ID for this button
    #[must_use]
    pub fn element_id(&self) -> String {
        let name = match self.token {
            "CLEAR" => "clear",
            "OFF" => "off",
            "Backspace" => "backspace",
            "/" => "divide",
            "*" => "times",
            "-" => "minus",
            "+" => "plus",
            "=" => "equals",
            "." => "decimal",
            "%" => "percent",
            digit => digit,
        };
        format!("btn-{name}")
    }
}

/// Number of keypad rows
pub const ROWS: usize = 5;
/// Number of keypad columns
pub const COLS: usize = 4;

/// Buttons in row-major order
pub const BUTTONS: [KeypadButton; ROWS * COLS] = [
    KeypadButton::new("CLEAR", "C", ButtonKind::Control),
    KeypadButton::new("OFF", "OFF", ButtonKind::Control),
    KeypadButton::new("Backspace", "⌫", ButtonKind::Control),
    KeypadButton::new("/", "/", ButtonKind::Operator),
    KeypadButton::new("7", "7", ButtonKind::Number),
    KeypadButton::new("8", "8", ButtonKind::Number),
    KeypadButton::new("9", "9", ButtonKind::Number),
    KeypadButton::new("*", "*", ButtonKind::Operator),
    KeypadButton::new("4", "4", ButtonKind::Number),
    KeypadButton::new("5", "5", ButtonKind::Number),
    KeypadButton::new("6", "6", ButtonKind::Number),
    KeypadButton::new("-", "-", ButtonKind::Operator),
    KeypadButton::new("1", "1", ButtonKind::Number),
    KeypadButton::new("2", "2", ButtonKind::Number),
    KeypadButton::new("3", "3", ButtonKind::Number),
    KeypadButton::new("+", "+", ButtonKind::Operator),
    KeypadButton::new("0", "0", ButtonKind::Number),
    KeypadButton::new(".", ".", ButtonKind::Number),
    KeypadButton::new("%", "%", ButtonKind::Number),
    KeypadButton::new("=", "=", ButtonKind::Equals),
];

/// Gets a button by row and column
#[must_use]
pub fn button_at(row: usize, col: usize) -> Option<&'static KeypadButton> {
    if row < ROWS && col < COLS {
        BUTTONS.get(row * COLS + col)
    } else {
        None
    }
}

/// Finds the button that sends `token`
#[must_use]
pub fn find_by_token(token: &str) -> Option<usize> {
    BUTTONS.iter().position(|b| b.token == token)
}

/// Iterates over buttons with their (row, col) positions
pub fn with_positions() -> impl Iterator<Item = ((usize, usize), &'static KeypadButton)> {
    BUTTONS
        .iter()
        .enumerate()
        .map(|(i, btn)| ((i / COLS, i % COLS), btn))
}
