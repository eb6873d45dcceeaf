//! Calculator that runs the pure transitions against its sinks.

use super::sink::{DisplayBuffer, DisplaySink, HistorySink};
use crate::core::{
    enter_decimal, enter_digit, evaluate, reset, select_operator, Calculation,
    CalculationHistory, CalculatorState,
};
use crate::input::{route_button, route_key, Command, Routing};
use tracing::{debug, info, trace};

/// The long-lived calculator a host owns.
///
/// Holds the single [`CalculatorState`] and the two sinks. Every command runs
/// a pure transition, then the new display text is written to the display
/// sink and, for a completed `=`, the record goes to the history sink.
///
/// # Example
///
/// ```rust
/// use chaincalc::effects::{Calculator, DisplaySink};
///
/// let mut calc = Calculator::new();
/// for key in ["5", "+", "3", "+", "2", "Enter"] {
///     calc.press_key(key);
/// }
///
/// assert_eq!(calc.display().display_text(), "10");
/// assert_eq!(calc.history().len(), 1);
/// ```
pub struct Calculator<D: DisplaySink = DisplayBuffer, H: HistorySink = CalculationHistory> {
    state: CalculatorState,
    display: D,
    history: H,
}

impl Calculator {
    /// Calculator with an in-memory display and an unbounded history.
    pub fn new() -> Self {
        Self::with_sinks(DisplayBuffer::new(), CalculationHistory::new())
    }

    /// Calculator whose history keeps at most `limit` records.
    pub fn with_history_limit(limit: usize) -> Self {
        Self::with_sinks(DisplayBuffer::new(), CalculationHistory::with_limit(limit))
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DisplaySink, H: HistorySink> Calculator<D, H> {
    /// Calculator in the initial state writing to the given sinks.
    pub fn with_sinks(display: D, history: H) -> Self {
        Self::from_parts(CalculatorState::new(), display, history)
    }

    /// Calculator resuming from an existing state.
    pub fn from_parts(state: CalculatorState, mut display: D, history: H) -> Self {
        display.set_display_text(state.display_text());
        Self {
            state,
            display,
            history,
        }
    }

    /// Current state (pure).
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Split into the state and sinks.
    pub fn into_parts(self) -> (CalculatorState, D, H) {
        (self.state, self.display, self.history)
    }

    /// Replace the current state, e.g. from a checkpoint.
    pub fn restore(&mut self, state: CalculatorState) {
        debug!(phase = %state.phase(), display = state.display_text(), "state restored");
        self.display.set_display_text(state.display_text());
        self.state = state;
    }

    /// Route and dispatch a keypad button value.
    pub fn press_button(&mut self, value: &str) -> Routing {
        let routing = route_button(value);
        self.dispatch_routing(value, routing);
        routing
    }

    /// Route and dispatch a keyboard key.
    ///
    /// The returned [`Routing`] tells the host whether to suppress the
    /// key's default behaviour.
    pub fn press_key(&mut self, key: &str) -> Routing {
        let routing = route_key(key);
        self.dispatch_routing(key, routing);
        routing
    }

    fn dispatch_routing(&mut self, token: &str, routing: Routing) {
        match routing {
            Routing::Handled(command) => {
                self.dispatch(command);
            }
            Routing::Ignored => trace!(token, "token ignored"),
        }
    }

    /// Run one command.
    ///
    /// Returns the history record when the command completed a calculation.
    pub fn dispatch(&mut self, command: Command) -> Option<Calculation> {
        let from = self.state.phase();

        let (next, record) = match command {
            Command::Digit(digit) => (enter_digit(&self.state, digit), None),
            Command::Decimal => (enter_decimal(&self.state), None),
            Command::Operator(op) => (select_operator(&self.state, op), None),
            Command::Evaluate => evaluate(&self.state),
            Command::Clear => (reset(&self.state), None),
        };

        debug!(
            command = command.name(),
            input = %command,
            from = %from,
            to = %next.phase(),
            display = next.display_text(),
            "command dispatched"
        );

        self.state = next;
        self.display.set_display_text(self.state.display_text());

        if let Some(calculation) = &record {
            info!(
                expression = calculation.expression.as_str(),
                result = %calculation.result_text(),
                "calculation completed"
            );
            self.history.append(calculation);
        }

        record
    }

    /// Clear the history sink. The calculator state is untouched.
    pub fn clear_history(&mut self) {
        debug!("history cleared");
        self.history.clear_history();
    }
}
