//! Calculator core: state, token dispatch, evaluation, history
//!
//! Nothing in here knows about a DOM or a terminal. Hosts feed raw tokens to
//! a [`Controller`] and play back the [`Effect`]s it returns.

pub mod controller;
pub mod evaluator;
pub mod history;
pub mod number;
pub mod operand;
mod operations;
pub mod state;

pub use controller::{dispatch, Controller, Effect, Token, Transition, OFF_READOUT};
pub use evaluator::{evaluate, Evaluation};
pub use history::{History, HistoryEntry};
pub use number::{format_number, parse_float};
pub use operations::{apply_operator, operator_symbol, Operator};
pub use state::{CalculatorState, EMPTY_READOUT};
