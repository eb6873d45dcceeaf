//! Line-oriented terminal host.
//!
//! [`Session`] turns one line of user input into key presses or a
//! meta-command and returns the lines to print. It owns the only
//! [`Calculator`] of the process; `main` just feeds it stdin.

use crate::checkpoint::Checkpoint;
use crate::config::CalculatorConfig;
use crate::core::CalculationHistory;
use crate::effects::{Calculator, DisplayBuffer, DisplaySink};
use crate::input::ALL_CLEAR;
use std::path::Path;
use tracing::{debug, warn};

/// Key names that arrive as whole words rather than single characters.
const NAMED_KEYS: [&str; 3] = ["Enter", "Delete", ALL_CLEAR];

const HELP: &str = "\
Type digits, '.', + - * /, '=' or Enter. c, C, Delete or all-clear resets.
Several keys may share a line: '12*3=' or '12 * 3 Enter'.
Meta-commands:
  :history          list calculations, newest first
  :clear-history    forget all calculations
  :state            show the calculator state
  :save <path>      write a checkpoint (.json for JSON, otherwise binary)
  :load <path>      restore a checkpoint
  :help             this text
  :quit             leave";

/// What the caller should do after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print these lines and keep reading.
    Continue(Vec<String>),
    /// Stop reading input.
    Quit,
}

/// An interactive calculator session.
///
/// # Example
///
/// ```rust
/// use chaincalc::host::{Outcome, Session};
///
/// let mut session = Session::default();
/// assert_eq!(session.handle_line("5+3+"), Outcome::Continue(vec!["8".to_string()]));
/// assert_eq!(session.handle_line("2 Enter"), Outcome::Continue(vec!["10".to_string()]));
/// assert_eq!(session.handle_line(":quit"), Outcome::Quit);
/// ```
pub struct Session {
    calculator: Calculator<DisplayBuffer, CalculationHistory>,
    prompt: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&CalculatorConfig::default())
    }
}

impl Session {
    pub fn new(config: &CalculatorConfig) -> Self {
        let calculator = match config.history.limit {
            Some(limit) => Calculator::with_history_limit(limit),
            None => Calculator::new(),
        };
        Self {
            calculator,
            prompt: config.host.prompt.clone(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn calculator(&self) -> &Calculator<DisplayBuffer, CalculationHistory> {
        &self.calculator
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        if let Some(meta) = line.strip_prefix(':') {
            return self.handle_meta(meta);
        }

        let mut ignored = 0usize;
        for key in split_keys(line) {
            if !self.calculator.press_key(key).is_handled() {
                ignored += 1;
            }
        }
        if ignored > 0 {
            debug!(ignored, "line contained keys outside the keypad");
        }

        Outcome::Continue(vec![self.display_text().to_string()])
    }

    fn display_text(&self) -> &str {
        self.calculator.display().display_text()
    }

    fn handle_meta(&mut self, meta: &str) -> Outcome {
        let (command, argument) = match meta.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (meta, ""),
        };

        let lines = match command {
            "quit" | "q" => return Outcome::Quit,
            "help" => HELP.lines().map(str::to_string).collect(),
            "history" => self.history_lines(),
            "clear-history" => {
                self.calculator.clear_history();
                vec!["history cleared".to_string()]
            }
            "state" => self.state_lines(),
            "save" => vec![self.save(argument)],
            "load" => vec![self.load(argument)],
            other => vec![format!("unknown command ':{other}' (try :help)")],
        };
        Outcome::Continue(lines)
    }

    fn history_lines(&self) -> Vec<String> {
        let history = self.calculator.history();
        if history.is_empty() {
            return vec!["(no calculations)".to_string()];
        }
        history
            .entries()
            .iter()
            .map(|calc| format!("{} = {}", calc.expression, calc.result_text()))
            .collect()
    }

    fn state_lines(&self) -> Vec<String> {
        let state = self.calculator.state();
        vec![
            format!("display:  {}", state.display_text()),
            format!(
                "first:    {}",
                state
                    .first_operand()
                    .map(crate::core::format_number)
                    .unwrap_or_else(|| "-".to_string())
            ),
            format!(
                "operator: {}",
                state
                    .pending_operator()
                    .map(|op| op.symbol())
                    .unwrap_or("-")
            ),
            format!("phase:    {}", state.phase()),
        ]
    }

    fn save(&self, path: &str) -> String {
        if path.is_empty() {
            return "usage: :save <path>".to_string();
        }
        let checkpoint = Checkpoint::capture(self.calculator.state(), self.calculator.history());
        match checkpoint.save(Path::new(path)) {
            Ok(()) => format!("saved checkpoint {} to {path}", checkpoint.id),
            Err(e) => {
                warn!(path, error = %e, "checkpoint save failed");
                format!("error: {e}")
            }
        }
    }

    fn load(&mut self, path: &str) -> String {
        if path.is_empty() {
            return "usage: :load <path>".to_string();
        }
        match Checkpoint::load(Path::new(path)) {
            Ok(checkpoint) => {
                let mut history = checkpoint.history;
                history.set_limit(self.calculator.history().limit());
                self.calculator =
                    Calculator::from_parts(checkpoint.state, DisplayBuffer::new(), history);
                self.display_text().to_string()
            }
            Err(e) => {
                warn!(path, error = %e, "checkpoint load failed");
                format!("error: {e}")
            }
        }
    }
}

/// Split a line into key tokens.
///
/// Named keys are whole words; every other word is split into characters.
fn split_keys(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace().flat_map(|word| {
        let keys: Vec<&str> = if NAMED_KEYS.contains(&word) {
            vec![word]
        } else {
            word.char_indices()
                .map(|(i, c)| &word[i..i + c.len_utf8()])
                .collect()
        };
        keys
    })
}
