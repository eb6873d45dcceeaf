//! Guard predicates for calculator transitions.
//!
//! Guards are pure boolean functions over [`CalculatorState`] that decide
//! which branch a transition takes. Keeping them separate lets the
//! transitions read as a sequence of named conditions.

use super::state::CalculatorState;

/// The next digit or decimal point starts a fresh number.
pub fn starts_new_operand(state: &CalculatorState) -> bool {
    state.awaiting_second_operand
}

/// An operator press should only swap the pending operator.
///
/// True when an operator is pending and no digit has been typed since,
/// so consecutive operator presses keep the last one.
pub fn replaces_operator(state: &CalculatorState) -> bool {
    state.pending_operator.is_some() && state.awaiting_second_operand
}

/// `=` has both operands and an operator to work with.
pub fn can_evaluate(state: &CalculatorState) -> bool {
    state.pending_operator.is_some() && !state.awaiting_second_operand
}

/// The display can take a decimal point without a second one appearing.
pub fn accepts_decimal(state: &CalculatorState) -> bool {
    !state.display_text.contains('.')
}
