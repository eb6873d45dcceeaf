//! Checkpoint and resume for calculator sessions.
//!
//! A checkpoint captures the calculator state and its history so a session
//! can be saved and picked up later. JSON is readable; the binary form is
//! compact.

use crate::core::{CalculationHistory, CalculatorState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a calculator session.
///
/// # Example
///
/// ```rust
/// use chaincalc::checkpoint::Checkpoint;
/// use chaincalc::effects::Calculator;
///
/// let mut calc = Calculator::new();
/// for key in ["6", "*", "7", "="] {
///     calc.press_key(key);
/// }
///
/// let checkpoint = Checkpoint::capture(calc.state(), calc.history());
/// let json = checkpoint.to_json().unwrap();
/// let restored = Checkpoint::from_json(&json).unwrap();
///
/// assert_eq!(restored.state.display_text(), "42");
/// assert_eq!(restored.history.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Calculator state at capture time
    pub state: CalculatorState,

    /// Calculation history at capture time
    pub history: CalculationHistory,
}

impl Checkpoint {
    /// Snapshot a state and history.
    pub fn capture(state: &CalculatorState, history: &CalculationHistory) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state: state.clone(),
            history: history.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Parse and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Parse and validate a binary checkpoint.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check version and state invariants.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        self.state
            .check_display()
            .map_err(CheckpointError::ValidationFailed)?;
        if self.state.pending_operator().is_some() && self.state.first_operand().is_none() {
            return Err(CheckpointError::ValidationFailed(
                "operator pending without a first operand".to_string(),
            ));
        }
        Ok(())
    }

    /// Write to `path`; `.json` files get JSON, anything else binary.
    ///
    /// Writes to a sibling temp file first and renames it into place.
    pub fn save(&self, path: &Path) -> Result<(), CheckpointError> {
        let bytes = if is_json(path) {
            self.to_json()?.into_bytes()
        } else {
            self.to_binary()?
        };

        let mut temp = path.as_os_str().to_owned();
        temp.push(".tmp");
        fs::write(&temp, bytes).map_err(|e| CheckpointError::Io(e.to_string()))?;
        fs::rename(&temp, path).map_err(|e| {
            // best effort, the rename error is reported
            let _ = fs::remove_file(&temp);
            CheckpointError::Io(e.to_string())
        })
    }

    /// Read from `path`, picking the format by extension like [`save`](Self::save).
    pub fn load(path: &Path) -> Result<Self, CheckpointError> {
        let bytes = fs::read(path).map_err(|e| CheckpointError::Io(e.to_string()))?;
        if is_json(path) {
            let json = String::from_utf8(bytes)
                .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
            Self::from_json(&json)
        } else {
            Self::from_binary(&bytes)
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Calculator;

    fn sample() -> Checkpoint {
        let mut calc = Calculator::new();
        for key in ["8", "/", "0", "=", "+", "1", "."] {
            calc.press_key(key);
        }
        Checkpoint::capture(calc.state(), calc.history())
    }

    #[test]
    fn capture_uses_current_version() {
        let checkpoint = sample();
        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert!(checkpoint.validate().is_ok());
    }

    #[test]
    fn json_preserves_state_and_history() {
        let checkpoint = sample();
        let restored = Checkpoint::from_json(&checkpoint.to_json().unwrap()).unwrap();

        assert_eq!(restored.id, checkpoint.id);
        assert_eq!(restored.state, checkpoint.state);
        assert_eq!(restored.state.first_operand(), Some(f64::INFINITY));
        assert_eq!(restored.history.len(), 1);
        assert_eq!(restored.history.entries()[0].expression, "8 / 0");
    }

    #[test]
    fn binary_preserves_state_and_history() {
        let checkpoint = sample();
        let restored = Checkpoint::from_binary(&checkpoint.to_binary().unwrap()).unwrap();

        assert_eq!(restored.state, checkpoint.state);
        assert_eq!(restored.history.len(), 1);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = sample();
        checkpoint.version = CHECKPOINT_VERSION + 1;
        let json = serde_json::to_string(&checkpoint).unwrap();

        match Checkpoint::from_json(&json) {
            Err(CheckpointError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, CHECKPOINT_VERSION + 1);
                assert_eq!(supported, CHECKPOINT_VERSION);
            }
            other => panic!("expected version error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_display_is_rejected() {
        let checkpoint = sample();
        let json = checkpoint
            .to_json()
            .unwrap()
            .replace("\"display_text\": \"1.\"", "\"display_text\": \"1..\"");

        assert!(matches!(
            Checkpoint::from_json(&json),
            Err(CheckpointError::ValidationFailed(_))
        ));
    }

    #[test]
    fn garbage_input_fails_to_deserialize() {
        assert!(matches!(
            Checkpoint::from_json("{not json"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Checkpoint::from_binary(&[1, 2, 3]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn save_and_load_pick_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let checkpoint = sample();

        for name in ["session.json", "session.bin"] {
            let path = dir.path().join(name);
            checkpoint.save(&path).unwrap();
            let loaded = Checkpoint::load(&path).unwrap();
            assert_eq!(loaded.state, checkpoint.state);
        }

        let json = fs::read_to_string(dir.path().join("session.json")).unwrap();
        assert!(json.contains("\"Infinity\""));
    }

    #[test]
    fn failed_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in the way makes the final rename fail
        let target = dir.path().join("occupied.bin");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), b"x").unwrap();

        let result = sample().save(&target);
        assert!(matches!(result, Err(CheckpointError::Io(_))));
        assert!(!dir.path().join("occupied.bin.tmp").exists());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Checkpoint::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(CheckpointError::Io(_))));
    }
}
