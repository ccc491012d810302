//! The four keypad operators and their arithmetic
//!
//! Plain IEEE-754: dividing by zero yields `Infinity` or `NaN`, which the
//! widget shows as text rather than reporting an error.

use serde::{Deserialize, Serialize};

use super::number::parse_float;

/// A pending binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Parses an operator token (`"+"`, `"-"`, `"*"`, `"/"`)
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == token)
    }

    /// Applies the operator to two numbers
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Symbol for an optional operator; no operator renders as nothing
#[must_use]
pub fn operator_symbol(operator: Option<Operator>) -> &'static str {
    operator.map_or("", |op| op.symbol())
}

/// Computes `a <op> b` from operand text
///
/// With no operator the second operand is returned unchanged.
#[must_use]
pub fn apply_operator(a: &str, b: &str, operator: Option<Operator>) -> f64 {
    let lhs = parse_float(a);
    let rhs = parse_float(b);
    match operator {
        Some(op) => op.apply(lhs, rhs),
        None => rhs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "*");
        assert_eq!(Operator::Divide.symbol(), "/");
    }

    #[test]
    fn test_from_token() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_token(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_token("^"), None);
        assert_eq!(Operator::from_token("x"), None);
        assert_eq!(Operator::from_token(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Operator::Multiply), "*");
    }

    #[test]
    fn test_operator_symbol_none() {
        assert_eq!(operator_symbol(None), "");
        assert_eq!(operator_symbol(Some(Operator::Divide)), "/");
    }

    #[test]
    fn test_apply_basic() {
        assert_eq!(apply_operator("5", "3", Some(Operator::Add)), 8.0);
        assert_eq!(apply_operator("10", "4", Some(Operator::Subtract)), 6.0);
        assert_eq!(apply_operator("6", "7", Some(Operator::Multiply)), 42.0);
        assert_eq!(apply_operator("20", "4", Some(Operator::Divide)), 5.0);
    }

    #[test]
    fn test_divide_by_zero_is_not_an_error() {
        assert_eq!(apply_operator("10", "0", Some(Operator::Divide)), f64::INFINITY);
        assert_eq!(
            apply_operator("-10", "0", Some(Operator::Divide)),
            f64::NEG_INFINITY
        );
        assert!(apply_operator("0", "0", Some(Operator::Divide)).is_nan());
    }

    #[test]
    fn test_no_operator_returns_second() {
        assert_eq!(apply_operator("5", "3", None), 3.0);
    }

    #[test]
    fn test_unparseable_operand_is_nan() {
        assert!(apply_operator(".", "3", Some(Operator::Add)).is_nan());
    }
}
