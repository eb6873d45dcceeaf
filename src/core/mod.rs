//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The `CalculatorState` value and its derived `Phase`
//! - The four `Operator`s and number/text conversion
//! - Guard predicates and the transitions they steer
//! - Calculation history records
//!
//! Nothing in this module performs I/O or holds mutable shared state.

mod guard;
mod history;
mod number;
mod operator;
mod state;
mod transition;

pub use history::{Calculation, CalculationHistory};
pub use number::{format_number, parse_number};
pub use operator::Operator;
pub use state::{CalculatorState, Phase, INITIAL_DISPLAY};
pub use transition::{enter_decimal, enter_digit, evaluate, reset, select_operator, Digit};
