//! Classification of raw tokens into commands.
//!
//! Buttons and keys share one vocabulary. The keyboard additionally accepts
//! `Enter` for `=` and `Delete`, `c`, `C` for all-clear. Anything else is
//! ignored.

use super::command::{Command, Routing};
use crate::core::{Digit, Operator};

/// Button value that clears the calculator.
pub const ALL_CLEAR: &str = "all-clear";

/// Route the value of a pressed keypad button.
///
/// # Example
///
/// ```rust
/// use chaincalc::input::{route_button, Command, Routing};
///
/// assert_eq!(route_button("="), Routing::Handled(Command::Evaluate));
/// assert_eq!(route_button("all-clear"), Routing::Handled(Command::Clear));
/// assert_eq!(route_button("Enter"), Routing::Ignored);
/// ```
pub fn route_button(value: &str) -> Routing {
    classify(value).map_or(Routing::Ignored, Routing::Handled)
}

/// Route a keyboard key name.
///
/// # Example
///
/// ```rust
/// use chaincalc::input::{route_key, Command, Routing};
///
/// assert_eq!(route_key("Enter"), Routing::Handled(Command::Evaluate));
/// assert_eq!(route_key("c"), Routing::Handled(Command::Clear));
/// assert_eq!(route_key("Shift"), Routing::Ignored);
/// ```
pub fn route_key(key: &str) -> Routing {
    let command = match key {
        "Enter" => Some(Command::Evaluate),
        "Delete" | "c" | "C" => Some(Command::Clear),
        _ => classify(key),
    };
    command.map_or(Routing::Ignored, Routing::Handled)
}

/// The vocabulary common to both sources.
fn classify(token: &str) -> Option<Command> {
    if let Some(op) = Operator::from_symbol(token) {
        return Some(Command::Operator(op));
    }
    match token {
        "." => Some(Command::Decimal),
        "=" => Some(Command::Evaluate),
        ALL_CLEAR => Some(Command::Clear),
        _ => single_digit(token).map(Command::Digit),
    }
}

fn single_digit(token: &str) -> Option<Digit> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::new(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_numeral_routes_to_its_digit() {
        for c in '0'..='9' {
            let token = c.to_string();
            let expected = Routing::Handled(Command::Digit(Digit::new(c).unwrap()));
            assert_eq!(route_button(&token), expected);
            assert_eq!(route_key(&token), expected);
        }
    }

    #[test]
    fn operators_route_from_both_sources() {
        for op in Operator::ALL {
            let expected = Routing::Handled(Command::Operator(op));
            assert_eq!(route_button(op.symbol()), expected);
            assert_eq!(route_key(op.symbol()), expected);
        }
    }

    #[test]
    fn clear_aliases_share_one_command() {
        assert_eq!(route_button("all-clear"), Routing::Handled(Command::Clear));
        for key in ["Delete", "c", "C", "all-clear"] {
            assert_eq!(route_key(key), Routing::Handled(Command::Clear), "{key}");
        }
    }

    #[test]
    fn keyboard_only_aliases_are_not_buttons() {
        assert_eq!(route_button("Enter"), Routing::Ignored);
        assert_eq!(route_button("Delete"), Routing::Ignored);
        assert_eq!(route_button("c"), Routing::Ignored);
    }

    #[test]
    fn numeric_looking_tokens_are_not_digits() {
        for token in ["", " ", "12", "1.5", "-1", "Infinity", "NaN", "٣", "１"] {
            assert_eq!(route_button(token), Routing::Ignored, "{token:?}");
            assert_eq!(route_key(token), Routing::Ignored, "{token:?}");
        }
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        for key in ["Shift", "Escape", "Backspace", "x", "a", "Tab", "==", "+-"] {
            assert_eq!(route_key(key), Routing::Ignored, "{key}");
            assert!(!route_key(key).prevents_default());
        }
    }

    #[test]
    fn handled_keys_prevent_default() {
        assert!(route_key("Enter").prevents_default());
        assert!(route_key("7").prevents_default());
    }
}
