//! The command vocabulary shared by every input source.

use crate::core::{Digit, Operator};
use std::fmt;

/// One engine operation, normalised from a button press or key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Evaluate,
    Clear,
}

impl Command {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operator",
            Self::Evaluate => "evaluate",
            Self::Clear => "clear",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d.as_char()),
            Self::Decimal => f.write_str("."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Evaluate => f.write_str("="),
            Self::Clear => f.write_str("all-clear"),
        }
    }
}

/// Outcome of routing one raw token.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Routing {
    /// The token maps to a command.
    Handled(Command),
    /// The token is outside the vocabulary and must not change anything.
    Ignored,
}

impl Routing {
    pub fn command(&self) -> Option<Command> {
        match self {
            Self::Handled(command) => Some(*command),
            Self::Ignored => None,
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    /// Whether the host should suppress the key's default behaviour
    /// (form submission on Enter, scrolling, and so on).
    pub fn prevents_default(&self) -> bool {
        self.is_handled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_display_as_keypad_labels() {
        assert_eq!(Command::Digit(Digit::new('4').unwrap()).to_string(), "4");
        assert_eq!(Command::Decimal.to_string(), ".");
        assert_eq!(Command::Operator(Operator::Subtract).to_string(), "-");
        assert_eq!(Command::Evaluate.to_string(), "=");
        assert_eq!(Command::Clear.to_string(), "all-clear");
    }

    #[test]
    fn routing_exposes_command() {
        let handled = Routing::Handled(Command::Evaluate);
        assert_eq!(handled.command(), Some(Command::Evaluate));
        assert!(handled.prevents_default());

        assert_eq!(Routing::Ignored.command(), None);
        assert!(!Routing::Ignored.prevents_default());
    }
}
