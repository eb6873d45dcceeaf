//! The four binary operators understood by the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operator.
///
/// Application is plain IEEE-754 double arithmetic. Division by zero is not
/// trapped: it yields `inf`, `-inf` or `NaN` exactly as the hardware does.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::Operator;
///
/// assert_eq!(Operator::Add.apply(5.0, 3.0), 8.0);
/// assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
/// assert!(Operator::Divide.apply(8.0, 0.0).is_infinite());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Look up an operator by its keypad symbol.
    ///
    /// Only the exact symbols `+`, `-`, `*` and `/` match.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// The keypad symbol, also used when writing history expressions.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operator (pure).
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
