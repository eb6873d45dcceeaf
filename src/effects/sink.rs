//! Collaborator interfaces the calculator writes to.
//!
//! The engine only knows these two traits. Hosts implement them to render
//! the display and keep the history however they like.

use crate::core::{Calculation, CalculationHistory, INITIAL_DISPLAY};

/// Where the current display text goes.
pub trait DisplaySink {
    fn set_display_text(&mut self, text: &str);

    fn display_text(&self) -> &str;
}

/// Where completed calculations go.
///
/// `record_calculation` is called once per successful `=`. The calculator
/// never calls `clear_history` on its own; hosts trigger it explicitly.
pub trait HistorySink {
    fn record_calculation(&mut self, expression: &str, result: f64);

    fn clear_history(&mut self);

    /// Record a full calculation, timestamp included.
    ///
    /// Defaults to [`record_calculation`](Self::record_calculation); sinks
    /// that keep timestamps override it.
    fn append(&mut self, calculation: &Calculation) {
        self.record_calculation(&calculation.expression, calculation.result);
    }
}

/// In-memory display holding the last text written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self {
            text: INITIAL_DISPLAY.to_string(),
        }
    }
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for DisplayBuffer {
    fn set_display_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }

    fn display_text(&self) -> &str {
        &self.text
    }
}

impl HistorySink for CalculationHistory {
    fn record_calculation(&mut self, expression: &str, result: f64) {
        self.push(Calculation::new(expression, result));
    }

    fn clear_history(&mut self) {
        self.clear();
    }

    fn append(&mut self, calculation: &Calculation) {
        self.push(calculation.clone());
    }
}
