// File: src/result.rs
// Purpose: Outcome of validating a single field

use serde::{Deserialize, Serialize};

/// Result of validating one field
///
/// `message` is empty iff `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// Create a failed validation result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Convert from a rule chain result
    pub fn from_result(result: Result<(), &str>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(msg) => Self::failure(msg),
        }
    }
}
