//! Calculator state: two operand buffers and a pending operator

use serde::{Deserialize, Serialize};

use super::operations::{operator_symbol, Operator};

/// Text shown on the readout when nothing has been entered
pub const EMPTY_READOUT: &str = "0";

/// The running expression
///
/// `current` is the operand being typed (or the text of the last result),
/// `previous` the operand waiting on the left of `operator`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand currently being entered
    pub current: String,
    /// Left-hand operand, filled when an operator is pressed
    pub previous: String,
    /// Pending operator, if any
    pub operator: Option<Operator>,
}

impl CalculatorState {
    /// Creates an empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state from its parts (for tests and replays)
    #[must_use]
    pub fn with_parts(current: &str, previous: &str, operator: Option<Operator>) -> Self {
        Self {
            current: current.to_string(),
            previous: previous.to_string(),
            operator,
        }
    }

    /// Returns true when all three fields are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.previous.is_empty() && self.operator.is_none()
    }

    /// Returns true when both operands are present, so `=` can evaluate
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.current.is_empty() && !self.previous.is_empty()
    }

    /// Resets every field
    pub fn reset(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.operator = None;
    }

    /// Readout text: `previous`, operator and `current` run together
    #[must_use]
    pub fn readout(&self) -> String {
        let text = format!(
            "{}{}{}",
            self.previous,
            operator_symbol(self.operator),
            self.current
        );
        if text.is_empty() {
            EMPTY_READOUT.to_string()
        } else {
            text
        }
    }
}
