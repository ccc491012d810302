//! Operand input validation

use regex::Regex;
use std::sync::OnceLock;

/// Digits, at most one decimal point, at most one trailing percent sign
const OPERAND_PATTERN: &str = r"^[0-9]*\.?[0-9]*%?$";

fn operand_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(OPERAND_PATTERN).expect("operand pattern is valid"))
}

/// Returns true if `text` is a well-formed operand buffer
#[must_use]
pub fn is_valid_operand(text: &str) -> bool {
    operand_regex().is_match(text)
}

/// Returns true if appending `token` to `current` keeps a valid operand
#[must_use]
pub fn accepts_input(current: &str, token: &str) -> bool {
    let mut candidate = String::with_capacity(current.len() + token.len());
    candidate.push_str(current);
    candidate.push_str(token);
    is_valid_operand(&candidate)
}

/// Splits a trailing percent sign off an operand
#[must_use]
pub fn strip_percent(operand: &str) -> Option<&str> {
    operand.strip_suffix('%')
}
