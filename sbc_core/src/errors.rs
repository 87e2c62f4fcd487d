//! # Error Types
//!
//! Structured error types for sbc_core. The calculation pipeline itself has a
//! single failure path (a zero effective stress reaching the overburden
//! correction); every other variant belongs to the collaborators around it
//! (input validation, configuration, JSON, report rendering).
//!
//! ## Example
//!
//! ```rust
//! use sbc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_depth(test_depth_m: f64) -> CalcResult<()> {
//!     if test_depth_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "test_depth_m",
//!             test_depth_m.to_string(),
//!             "Test depth must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sbc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Message shown when the effective stress resolves to zero.
pub const ZERO_STRESS_MESSAGE: &str = "test depth cannot be zero for stress calculation";

/// Kinds of arithmetic domain failure inside the calculation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainErrorKind {
    /// A divisor resolved to exactly zero
    DivisionByZero,
}

impl DomainErrorKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            DomainErrorKind::DivisionByZero => "division by zero",
        }
    }
}

impl std::fmt::Display for DomainErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structured error type for calculation and report operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The inputs drive a formula outside its mathematical domain
    #[error("Domain error ({kind}): {message}")]
    Domain {
        kind: DomainErrorKind,
        message: String,
    },

    /// An input value is outside its accepted range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Configuration file could not be parsed
    #[error("Config error in '{path}': {reason}")]
    Config { path: String, reason: String },

    /// Typst compilation or PDF export failed
    #[error("Report error: {stage} - {reason}")]
    Report { stage: String, reason: String },
}

impl CalcError {
    /// Create the zero effective stress domain error
    pub fn division_by_zero() -> Self {
        CalcError::Domain {
            kind: DomainErrorKind::DivisionByZero,
            message: ZERO_STRESS_MESSAGE.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
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

    /// Create a Report error
    pub fn report(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Report {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// True only for file errors, the one failure a retry can clear.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileError { .. })
    }

    /// True for failures of the calculation itself (domain or range errors)
    pub fn is_input_error(&self) -> bool {
        matches!(self, CalcError::Domain { .. } | CalcError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Domain { kind: DomainErrorKind::DivisionByZero, .. } => "DIVISION_BY_ZERO",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Config { .. } => "CONFIG_ERROR",
            CalcError::Report { .. } => "REPORT_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError { reason: e.to_string() }
    }
}
