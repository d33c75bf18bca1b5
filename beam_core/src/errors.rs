//! # Error Types
//!
//! Structured error types for beam_core. Every failure carries enough context
//! for a front end to tell the user what to fix, and serializes cleanly to
//! JSON for scripted consumers.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and I/O operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A numeric value is unparseable, non-finite, or out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A menu choice or type name outside the supported set
    #[error("Invalid selection for {field}: '{value}'")]
    InvalidSelection { field: String, value: String },

    /// The (beam, load) pair is not one of the four defined cases, or the
    /// load magnitudes do not match the selected load type
    #[error("Invalid combination: beam type '{beam_type}' with load type '{load_type}'")]
    InvalidCombination {
        beam_type: String,
        load_type: String,
    },

    /// Input stream ended while a value was still required
    #[error("Input closed before a value was entered")]
    InputClosed,

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Rendering the deflection plot failed
    #[error("Plot error: {reason}")]
    PlotError { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSelection error
    pub fn invalid_selection(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::InvalidSelection {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an InvalidCombination error
    pub fn invalid_combination(beam_type: impl Into<String>, load_type: impl Into<String>) -> Self {
        CalcError::InvalidCombination {
            beam_type: beam_type.into(),
            load_type: load_type.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a PlotError
    pub fn plot_error(reason: impl Into<String>) -> Self {
        CalcError::PlotError {
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (the caller may ask again)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidSelection { .. } => "INVALID_SELECTION",
            CalcError::InvalidCombination { .. } => "INVALID_COMBINATION",
            CalcError::InputClosed => "INPUT_CLOSED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::PlotError { .. } => "PLOT_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}
