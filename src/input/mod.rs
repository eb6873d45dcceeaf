//! Input routing.
//!
//! Normalises raw tokens from two sources (keypad buttons and keyboard keys)
//! into a single [`Command`] vocabulary. The router is stateless.

mod command;
mod router;

pub use command::{Command, Routing};
pub use router::{route_button, route_key, ALL_CLEAR};
