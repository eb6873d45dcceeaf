//! Pure calculator transitions.
//!
//! Each function takes the current [`CalculatorState`] by reference and
//! returns the next one. Only [`evaluate`] produces anything else: the
//! history record for a completed calculation.

use super::guard;
use super::history::Calculation;
use super::number::format_number;
use super::operator::Operator;
use super::state::CalculatorState;

/// A single numeral character, `'0'..='9'`.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::Digit;
///
/// assert_eq!(Digit::new('7').map(|d| d.as_char()), Some('7'));
/// assert!(Digit::new('x').is_none());
/// assert!(Digit::new('٣').is_none()); // only ASCII numerals
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Digit(char);

impl Digit {
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_digit().then_some(Self(c))
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

/// Type a digit.
///
/// Starts a new number when awaiting an operand, replaces a lone `"0"`,
/// and appends otherwise.
///
/// ```rust
/// use chaincalc::core::{enter_digit, CalculatorState, Digit};
///
/// let d = |c| Digit::new(c).unwrap();
/// let state = enter_digit(&CalculatorState::new(), d('0'));
/// let state = enter_digit(&state, d('5'));
/// assert_eq!(state.display_text(), "5");
/// ```
pub fn enter_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    let mut next = state.clone();
    if guard::starts_new_operand(state) {
        next.display_text = digit.as_char().to_string();
        next.awaiting_second_operand = false;
    } else if state.display_text == "0" {
        next.display_text = digit.as_char().to_string();
    } else {
        next.display_text.push(digit.as_char());
    }
    next
}

/// Type a decimal point.
///
/// A new number starts as `"0."`; otherwise the point is appended unless
/// the display already has one.
pub fn enter_decimal(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    if guard::starts_new_operand(state) {
        next.display_text = "0.".to_string();
        next.awaiting_second_operand = false;
    } else if guard::accepts_decimal(state) {
        next.display_text.push('.');
    }
    next
}

/// Choose an operator.
///
/// Pressing operators back to back keeps the last one. When a second
/// operand has been typed under a pending operator, the pending operation is
/// applied first and its result becomes the new first operand; that
/// intermediate result is not recorded in the history.
///
/// ```rust
/// use chaincalc::core::{enter_digit, select_operator, CalculatorState, Digit, Operator};
///
/// let d = |c| Digit::new(c).unwrap();
/// let state = enter_digit(&CalculatorState::new(), d('5'));
/// let state = select_operator(&state, Operator::Add);
/// let state = enter_digit(&state, d('3'));
/// let state = select_operator(&state, Operator::Add);
/// assert_eq!(state.display_text(), "8");
/// ```
pub fn select_operator(state: &CalculatorState, operator: Operator) -> CalculatorState {
    let mut next = state.clone();

    if guard::replaces_operator(state) {
        next.pending_operator = Some(operator);
        return next;
    }

    let input = state.display_value();
    match (state.first_operand, state.pending_operator) {
        (None, _) => {
            next.first_operand = Some(input);
        }
        (Some(first), Some(pending)) => {
            let result = pending.apply(first, input);
            next.display_text = format_number(result);
            next.first_operand = Some(result);
        }
        // A result is showing, or digits were typed after it without an
        // operator: the first operand stays as it is.
        (Some(_), None) => {}
    }

    next.awaiting_second_operand = true;
    next.pending_operator = Some(operator);
    next
}

/// Press `=`.
///
/// Returns the state unchanged and no record unless an operator is pending
/// and a second operand has been typed.
///
/// ```rust
/// use chaincalc::core::{enter_digit, evaluate, select_operator, CalculatorState, Digit, Operator};
///
/// let d = |c| Digit::new(c).unwrap();
/// let state = enter_digit(&CalculatorState::new(), d('8'));
/// let state = select_operator(&state, Operator::Divide);
/// let state = enter_digit(&state, d('0'));
/// let (state, record) = evaluate(&state);
///
/// assert_eq!(state.display_text(), "Infinity");
/// assert_eq!(record.unwrap().expression, "8 / 0");
/// ```
pub fn evaluate(state: &CalculatorState) -> (CalculatorState, Option<Calculation>) {
    if !guard::can_evaluate(state) {
        return (state.clone(), None);
    }
    let (Some(first), Some(operator)) = (state.first_operand, state.pending_operator) else {
        return (state.clone(), None);
    };

    let second_text = state.display_text.as_str();
    let result = operator.apply(first, state.display_value());
    let expression = format!(
        "{} {} {}",
        format_number(first),
        operator.symbol(),
        second_text
    );

    let next = CalculatorState {
        display_text: format_number(result),
        first_operand: Some(result),
        pending_operator: None,
        awaiting_second_operand: true,
    };

    (next, Some(Calculation::new(expression, result)))
}

/// Return to the initial state.
pub fn reset(_state: &CalculatorState) -> CalculatorState {
    CalculatorState::new()
}
