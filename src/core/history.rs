//! Calculation history.
//!
//! Every completed `=` produces one [`Calculation`]. [`CalculationHistory`]
//! keeps them newest first, optionally bounded.

use super::number::{self, format_number};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Record of a single completed evaluation.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::Calculation;
///
/// let calc = Calculation::new("5 + 3", 8.0);
/// assert_eq!(calc.expression, "5 + 3");
/// assert_eq!(calc.result_text(), "8");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Calculation {
    /// `"{first} {symbol} {second as typed}"`
    pub expression: String,
    /// The numeric result
    #[serde(with = "number::as_text")]
    pub result: f64,
    /// When the evaluation happened
    pub recorded_at: DateTime<Utc>,
}

impl Calculation {
    /// Create a record stamped with the current time.
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
            recorded_at: Utc::now(),
        }
    }

    /// The result as it appears on the display.
    pub fn result_text(&self) -> String {
        format_number(self.result)
    }
}

/// Ordered history of calculations, newest first.
///
/// `record` follows the immutable style and returns a new history;
/// `push` and `clear` mutate in place for hosts that own the history as a
/// sink.
///
/// The limit is a setting of the owning session, not data: it is not
/// serialized, so a restored history starts unbounded until
/// [`set_limit`](Self::set_limit) is called.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{Calculation, CalculationHistory};
///
/// let history = CalculationHistory::new()
///     .record(Calculation::new("5 + 3", 8.0))
///     .record(Calculation::new("8 * 2", 16.0));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().expression, "8 * 2");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: VecDeque<Calculation>,
    #[serde(skip)]
    limit: Option<usize>,
}

impl CalculationHistory {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that keeps at most `limit` records.
    ///
    /// A limit of zero is treated as unbounded.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: (limit > 0).then_some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Change the limit, dropping the oldest records beyond it.
    ///
    /// `None` and `Some(0)` both mean unbounded.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit.filter(|&n| n > 0);
        self.enforce_limit();
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            self.entries.truncate(limit);
        }
    }

    /// Record a calculation, returning a new history (pure).
    ///
    /// ```rust
    /// use chaincalc::core::{Calculation, CalculationHistory};
    ///
    /// let history = CalculationHistory::new();
    /// let updated = history.record(Calculation::new("1 + 1", 2.0));
    ///
    /// assert_eq!(updated.len(), 1);
    /// assert!(history.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, calculation: Calculation) -> Self {
        let mut next = self.clone();
        next.push(calculation);
        next
    }

    /// Add a calculation in place, dropping the oldest beyond the limit.
    pub fn push(&mut self, calculation: Calculation) {
        self.entries.push_front(calculation);
        self.enforce_limit();
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All records, newest first.
    pub fn entries(&self) -> &VecDeque<Calculation> {
        &self.entries
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&Calculation> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = CalculationHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.limit(), None);
    }

    #[test]
    fn record_is_immutable() {
        let history = CalculationHistory::new();
        let updated = history.record(Calculation::new("5 + 3", 8.0));

        assert_eq!(history.len(), 0);
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn entries_are_newest_first() {
        let history = CalculationHistory::new()
            .record(Calculation::new("5 + 3", 8.0))
            .record(Calculation::new("8 - 1", 7.0))
            .record(Calculation::new("7 * 2", 14.0));

        let expressions: Vec<&str> = history
            .entries()
            .iter()
            .map(|c| c.expression.as_str())
            .collect();
        assert_eq!(expressions, vec!["7 * 2", "8 - 1", "5 + 3"]);
    }

    #[test]
    fn limit_drops_oldest_records() {
        let mut history = CalculationHistory::with_limit(2);
        history.push(Calculation::new("1 + 1", 2.0));
        history.push(Calculation::new("2 + 2", 4.0));
        history.push(Calculation::new("3 + 3", 6.0));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].expression, "3 + 3");
        assert_eq!(history.entries()[1].expression, "2 + 2");
    }

    #[test]
    fn zero_limit_is_unbounded() {
        let mut history = CalculationHistory::with_limit(0);
        for i in 0..5 {
            history.push(Calculation::new(format!("{i} + 0"), i as f64));
        }
        assert_eq!(history.limit(), None);
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn set_limit_trims_existing_records() {
        let mut history = CalculationHistory::new();
        for i in 0..4 {
            history.push(Calculation::new(format!("{i} + 0"), i as f64));
        }

        history.set_limit(Some(2));
        assert_eq!(history.limit(), Some(2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].expression, "3 + 0");
        assert_eq!(history.entries()[1].expression, "2 + 0");

        history.set_limit(Some(0));
        assert_eq!(history.limit(), None);
        history.push(Calculation::new("9 + 0", 9.0));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn limit_is_not_serialized() {
        let mut history = CalculationHistory::with_limit(50);
        history.push(Calculation::new("1 + 1", 2.0));

        let json = serde_json::to_string(&history).unwrap();
        assert!(!json.contains("limit"));

        let restored: CalculationHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.limit(), None);
        assert_eq!(restored.len(), 1);
    }

    #[test]
    fn stray_zero_limit_in_input_is_ignored() {
        let json = r#"{"entries":[],"limit":0}"#;
        let mut history: CalculationHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.limit(), None);

        history.push(Calculation::new("2 + 2", 4.0));
        history.push(Calculation::new("3 + 3", 6.0));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn clear_removes_everything() {
        let mut history = CalculationHistory::new().record(Calculation::new("1 + 1", 2.0));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_non_finite_results() {
        let history = CalculationHistory::new()
            .record(Calculation::new("8 / 0", f64::INFINITY))
            .record(Calculation::new("0 / 0", f64::NAN));

        let json = serde_json::to_string(&history).unwrap();
        let restored: CalculationHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 2);
        assert!(restored.entries()[0].result.is_nan());
        assert_eq!(restored.entries()[1].result, f64::INFINITY);
        assert_eq!(restored.entries()[1].result_text(), "Infinity");
    }
}
