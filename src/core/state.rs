//! Calculator state and its derived phase.
//!
//! `CalculatorState` is a plain value. Transitions in
//! [`transition`](super::transition) take one and return the next; nothing in
//! this module mutates shared state.

use super::number::{self, parse_number};
use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display text of a freshly created or reset calculator.
pub const INITIAL_DISPLAY: &str = "0";

/// The complete state of the calculator.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.display_text(), "0");
/// assert_eq!(state.first_operand(), None);
/// assert_eq!(state.pending_operator(), None);
/// assert!(!state.is_awaiting_second_operand());
/// assert_eq!(state.phase(), Phase::EnteringFirst);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) display_text: String,
    #[serde(with = "number::as_text::option")]
    pub(crate) first_operand: Option<f64>,
    pub(crate) pending_operator: Option<Operator>,
    pub(crate) awaiting_second_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create the initial state: display `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            display_text: INITIAL_DISPLAY.to_string(),
            first_operand: None,
            pending_operator: None,
            awaiting_second_operand: false,
        }
    }

    /// Text currently shown, including partial input such as `"3."`.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// The display parsed as a number.
    pub fn display_value(&self) -> f64 {
        parse_number(&self.display_text)
    }

    /// Left-hand operand of the pending or just-completed operation.
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// True when the next digit starts a new number instead of extending
    /// the display.
    pub fn is_awaiting_second_operand(&self) -> bool {
        self.awaiting_second_operand
    }

    /// Named summary of where the calculator is in an operation (pure).
    pub fn phase(&self) -> Phase {
        match (self.pending_operator.is_some(), self.awaiting_second_operand) {
            (false, false) => Phase::EnteringFirst,
            (true, true) => Phase::OperatorPending,
            (true, false) => Phase::EnteringSecond,
            (false, true) => Phase::ShowingResult,
        }
    }

    /// Check that the display holds something a user could have produced.
    ///
    /// Used when restoring a state from outside the process.
    pub fn check_display(&self) -> Result<(), String> {
        if self.display_text.is_empty() {
            return Err("display text is empty".to_string());
        }
        if self.display_text.matches('.').count() > 1 {
            return Err(format!(
                "display text '{}' has more than one decimal point",
                self.display_text
            ));
        }
        Ok(())
    }
}

/// Where the calculator is within an operation.
///
/// Derived from the pending operator and the awaiting flag, so every state
/// has exactly one phase.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Typing the first operand (or nothing typed yet).
    EnteringFirst,
    /// An operator was chosen; the next digit starts the second operand.
    OperatorPending,
    /// Typing the second operand.
    EnteringSecond,
    /// A result is on the display after `=`.
    ShowingResult,
}

impl Phase {
    /// Stable name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnteringFirst => "EnteringFirst",
            Self::OperatorPending => "OperatorPending",
            Self::EnteringSecond => "EnteringSecond",
            Self::ShowingResult => "ShowingResult",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(pending: Option<Operator>, awaiting: bool) -> CalculatorState {
        CalculatorState {
            display_text: "5".to_string(),
            first_operand: Some(5.0),
            pending_operator: pending,
            awaiting_second_operand: awaiting,
        }
    }

    #[test]
    fn new_state_has_identity_values() {
        let state = CalculatorState::new();
        assert_eq!(state.display_text(), "0");
        assert_eq!(state.display_value(), 0.0);
        assert_eq!(state.first_operand(), None);
        assert_eq!(state.pending_operator(), None);
        assert!(!state.is_awaiting_second_operand());
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn phase_covers_every_flag_combination() {
        assert_eq!(state(None, false).phase(), Phase::EnteringFirst);
        assert_eq!(
            state(Some(Operator::Add), true).phase(),
            Phase::OperatorPending
        );
        assert_eq!(
            state(Some(Operator::Add), false).phase(),
            Phase::EnteringSecond
        );
        assert_eq!(state(None, true).phase(), Phase::ShowingResult);
    }

    #[test]
    fn phase_names_are_stable() {
        assert_eq!(Phase::EnteringFirst.name(), "EnteringFirst");
        assert_eq!(Phase::OperatorPending.to_string(), "OperatorPending");
        assert_eq!(Phase::EnteringSecond.name(), "EnteringSecond");
        assert_eq!(Phase::ShowingResult.name(), "ShowingResult");
    }

    #[test]
    fn check_display_rejects_impossible_text() {
        let mut state = CalculatorState::new();
        assert!(state.check_display().is_ok());

        state.display_text = String::new();
        assert!(state.check_display().is_err());

        state.display_text = "1.2.3".to_string();
        assert!(state.check_display().is_err());

        state.display_text = "Infinity".to_string();
        assert!(state.check_display().is_ok());
    }

    #[test]
    fn state_serializes_non_finite_operands() {
        let state = CalculatorState {
            display_text: "Infinity".to_string(),
            first_operand: Some(f64::INFINITY),
            pending_operator: Some(Operator::Divide),
            awaiting_second_operand: true,
        };

        let json = serde_json::to_string(&state).unwrap();
        let restored: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
