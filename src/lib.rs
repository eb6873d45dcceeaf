//! Chaincalc: a four-function calculator as a pure state machine
//!
//! Chaincalc follows a "pure core, imperative shell" design. The calculator
//! logic is a set of pure transitions over an explicit state value, while the
//! display, the history and logging live in a thin shell around it.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState` holds the display text, the first operand,
//!   the pending operator and the awaiting-second-operand flag
//! - **Transitions**: digit entry, decimal entry, operator selection,
//!   evaluation and reset, each a pure function of the state
//! - **Routing**: button values and key names map onto one `Command` set
//! - **Sinks**: the display and the history are collaborators behind traits
//!
//! # Example
//!
//! ```rust
//! use chaincalc::core::{enter_digit, evaluate, select_operator, CalculatorState, Digit, Operator};
//!
//! let d = |c| Digit::new(c).unwrap();
//!
//! let state = CalculatorState::new();
//! let state = enter_digit(&state, d('5'));
//! let state = select_operator(&state, Operator::Add);
//! let state = select_operator(&state, Operator::Multiply); // last operator wins
//! let state = enter_digit(&state, d('3'));
//! let (state, record) = evaluate(&state);
//!
//! assert_eq!(state.display_text(), "15");
//! assert_eq!(record.unwrap().expression, "5 * 3");
//! ```

pub mod checkpoint;
pub mod config;
pub mod core;
pub mod effects;
pub mod host;
pub mod input;

// Re-export commonly used types
pub use self::core::{Calculation, CalculationHistory, CalculatorState, Operator, Phase};
pub use effects::{Calculator, DisplaySink, HistorySink};
pub use input::{Command, Routing};
