use thiserror::Error;

#[derive(Debug, Error)]
pub enum WealthCalcError {
    #[error("Invalid range: {field} — {reason}")]
    InvalidRange { field: String, reason: String },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for WealthCalcError {
    fn from(e: serde_json::Error) -> Self {
        WealthCalcError::SerializationError(e.to_string())
    }
}

impl WealthCalcError {
    /// True when the error is a user-correctable range violation rather than
    /// an internal failure. Callers surface these as validation messages.
    pub fn is_range_error(&self) -> bool {
        matches!(self, WealthCalcError::InvalidRange { .. })
    }
}
