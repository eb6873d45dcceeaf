//! The imperative shell around the pure core.
//!
//! The core computes; this module owns the long-lived state and performs
//! the side effects: writing the display, recording history, logging.
//!
//! # Key Concepts
//!
//! - **Sinks**: `DisplaySink` and `HistorySink` are the only ways the
//!   calculator reaches the outside world
//! - **Calculator**: runs one pure transition per command and forwards the
//!   results to the sinks

mod calculator;
mod sink;

pub use calculator::Calculator;
pub use sink::{DisplayBuffer, DisplaySink, HistorySink};
