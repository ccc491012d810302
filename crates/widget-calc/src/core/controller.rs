//! Token dispatch
//!
//! [`dispatch`] is a pure state transition: it takes the current state and
//! one token and returns the next state plus the effects a host must play
//! (readout text, history lines). [`Controller`] owns the state and the
//! history and applies transitions one token at a time.

use tracing::{debug, info, warn};

use super::evaluator::{evaluate, Evaluation};
use super::history::{History, HistoryEntry};
use super::number::format_number;
use super::operand::accepts_input;
use super::operations::Operator;
use super::state::CalculatorState;

/// Readout text after `OFF`
pub const OFF_READOUT: &str = "Calculator Off";

/// A classified input token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `CLEAR` button
    Clear,
    /// `OFF` button
    Off,
    /// `=` button or the Enter key
    Equals,
    /// One of `+ - * /`
    Operator(Operator),
    /// The Backspace key
    Backspace,
    /// Anything else: a digit, `.`, `%`, or a key that will be rejected
    Input(String),
}

impl Token {
    /// Classifies a raw key name or button identifier
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        match raw {
            "CLEAR" => Self::Clear,
            "OFF" => Self::Off,
            "=" | "Enter" => Self::Equals,
            "Backspace" => Self::Backspace,
            other => Operator::from_token(other)
                .map_or_else(|| Self::Input(other.to_string()), Self::Operator),
        }
    }
}

/// Something the host has to show
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Replace the readout text
    Readout(String),
    /// Append one line to the history log
    AppendHistory(HistoryEntry),
}

/// Result of dispatching one token
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The state after the token
    pub state: CalculatorState,
    /// Effects in the order they must be played
    pub effects: Vec<Effect>,
}

impl Transition {
    fn refreshed(state: CalculatorState, mut effects: Vec<Effect>) -> Self {
        effects.push(Effect::Readout(state.readout()));
        Self { state, effects }
    }

    fn unchanged(state: &CalculatorState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }
}

/// Computes the transition for one token
#[must_use]
pub fn dispatch(state: &CalculatorState, token: &Token) -> Transition {
    match token {
        Token::Clear | Token::Off => {
            let readout = if *token == Token::Off { OFF_READOUT } else { "" };
            Transition {
                state: CalculatorState::new(),
                effects: vec![Effect::Readout(readout.to_string())],
            }
        }
        Token::Equals => match evaluate(state) {
            None => Transition::refreshed(state.clone(), Vec::new()),
            Some(Evaluation::Completed { line, result }) => {
                let next = CalculatorState {
                    current: format_number(result),
                    previous: String::new(),
                    operator: None,
                };
                let entry = HistoryEntry::new(line, result);
                Transition::refreshed(next, vec![Effect::AppendHistory(entry)])
            }
            Some(Evaluation::Unsupported { line }) => Transition {
                state: state.clone(),
                effects: vec![Effect::AppendHistory(HistoryEntry::without_result(line))],
            },
        },
        Token::Operator(op) => {
            let mut next = state.clone();
            next.operator = Some(*op);
            if !next.current.is_empty() {
                next.previous = std::mem::take(&mut next.current);
            }
            Transition::refreshed(next, Vec::new())
        }
        Token::Backspace => {
            let mut next = state.clone();
            if next.current.is_empty() {
                next.operator = None;
            } else {
                next.current.pop();
            }
            Transition::refreshed(next, Vec::new())
        }
        Token::Input(text) => {
            if !accepts_input(&state.current, text) {
                return Transition::unchanged(state);
            }
            let mut next = state.clone();
            next.current.push_str(text);
            Transition::refreshed(next, Vec::new())
        }
    }
}

/// Owns the calculator state and its history
#[derive(Debug, Default)]
pub struct Controller {
    state: CalculatorState,
    history: History,
}

impl Controller {
    /// Creates a controller with empty state and history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the readout for the current state
    #[must_use]
    pub fn readout(&self) -> String {
        self.state.readout()
    }

    /// Handles one raw token and returns the effects to play
    pub fn handle(&mut self, raw: &str) -> Vec<Effect> {
        let token = Token::classify(raw);
        let transition = dispatch(&self.state, &token);

        if transition.effects.is_empty() {
            debug!(token = raw, "token ignored");
        } else {
            debug!(token = raw, ?token, "token handled");
        }

        for effect in &transition.effects {
            if let Effect::AppendHistory(entry) = effect {
                if entry.result.is_none() {
                    warn!(
                        line = %entry.text,
                        "percent evaluation only supports + and -, state left unchanged"
                    );
                } else {
                    info!(line = %entry.text, "calculation completed");
                }
                self.history.push(entry.clone());
            }
        }

        self.state = transition.state;
        transition.effects
    }
}
