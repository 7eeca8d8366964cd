//! Trial error types.
//!
//! Defined as a typed enum so the CLI can downcast an `anyhow::Error` and
//! pick an exit code without string matching.

use thiserror::Error;

/// Errors that can occur while generating or running a trial.
#[derive(Debug, Error)]
pub enum TrialError {
    /// The configured bounds cannot produce any value.
    #[error("invalid number range: min {min} must be below max {max}, and max must be positive")]
    InvalidRange { min: i64, max: i64 },

    /// The user pressed a key bound to the quit action.
    #[error("aborted by user")]
    Aborted,

    /// The input stream ended before the trial was complete.
    #[error("input closed before the trial finished")]
    InputClosed,
}

impl TrialError {
    /// Returns `true` if the user asked to leave.
    pub fn is_abort(&self) -> bool {
        matches!(self, TrialError::Aborted)
    }
}
