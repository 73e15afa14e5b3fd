//! Status messages for operation feedback.

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// Structured `{ success, message }` outcome handed to the UI.
///
/// Validation and parse failures surface through this type instead of
/// propagating as errors, so the UI can always show a field-level message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OperationStatus {
    pub success: bool,
    pub message: String,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Folds a result into a status, using `on_success` for the message when
    /// it succeeded and the error text otherwise.
    pub fn from_result<T>(result: Result<T>, on_success: impl FnOnce(&T) -> String) -> Self {
        match result {
            Ok(value) => Self::success(on_success(&value)),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}
