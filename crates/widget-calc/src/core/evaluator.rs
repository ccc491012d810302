//! Evaluation of a ready expression
//!
//! Two modes, picked by the right operand:
//!
//! - **plain**: `previous <op> current` in f64 arithmetic
//! - **percent** (`current` ends in `%`): the right operand is taken as a
//!   percentage of the left one, so `100 - 10%` is `90`
//!
//! Percent mode only knows `+` and `-`. Any other operator yields
//! [`Evaluation::Unsupported`]: the line is logged without a result and the
//! state stays as it was.

use super::number::{format_number, parse_float};
use super::operand::strip_percent;
use super::operations::{apply_operator, operator_symbol, Operator};
use super::state::CalculatorState;

/// Outcome of pressing `=` on a ready state
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// A result was computed
    Completed {
        /// History line, e.g. `"100 - 10% = 90"`
        line: String,
        /// The computed value
        result: f64,
    },
    /// Percent mode with an operator other than `+`/`-`
    Unsupported {
        /// History line without a result, e.g. `"5 * 10%"`
        line: String,
    },
}

impl Evaluation {
    /// Returns the history line
    #[must_use]
    pub fn line(&self) -> &str {
        match self {
            Self::Completed { line, .. } | Self::Unsupported { line } => line,
        }
    }

    /// Returns the result, if one was computed
    #[must_use]
    pub fn result(&self) -> Option<f64> {
        match self {
            Self::Completed { result, .. } => Some(*result),
            Self::Unsupported { .. } => None,
        }
    }
}

/// Evaluates `state`, or returns `None` when an operand is missing
#[must_use]
pub fn evaluate(state: &CalculatorState) -> Option<Evaluation> {
    if !state.is_ready() {
        return None;
    }

    let symbol = operator_symbol(state.operator);
    let evaluation = match strip_percent(&state.current) {
        Some(percent) => evaluate_percent(state, percent, symbol),
        None => {
            let result = apply_operator(&state.previous, &state.current, state.operator);
            Evaluation::Completed {
                line: format!(
                    "{} {} {} = {}",
                    state.previous,
                    symbol,
                    state.current,
                    format_number(result)
                ),
                result,
            }
        }
    };
    Some(evaluation)
}

fn evaluate_percent(state: &CalculatorState, percent: &str, symbol: &str) -> Evaluation {
    let percentage = parse_float(percent);
    let base = parse_float(&state.previous);
    let amount = percentage / 100.0 * base;

    let result = match state.operator {
        Some(Operator::Subtract) => base - amount,
        Some(Operator::Add) => base + amount,
        _ => {
            return Evaluation::Unsupported {
                line: format!("{} {} {}", state.previous, symbol, state.current),
            }
        }
    };

    Evaluation::Completed {
        line: format!(
            "{} {} {}% = {}",
            state.previous,
            symbol,
            format_number(percentage),
            format_number(result)
        ),
        result,
    }
}
