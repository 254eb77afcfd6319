//! Error types for Vitro operations.
//!
//! Provides structured error handling instead of panics.

use std::error::Error;
use std::fmt;

/// Result type for Vitro operations.
pub type Result<T> = std::result::Result<T, VitroError>;

/// Errors that can occur during Vitro operations.
#[derive(Debug, Clone, PartialEq)]
pub enum VitroError {
    /// A record or parameter failed validation.
    Validation(ValidationError),
    /// Unknown research domain key.
    UnknownDomain(String),
    /// I/O errors (wrapped).
    Io(String),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for VitroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VitroError::Validation(e) => write!(f, "Validation error: {}", e),
            VitroError::UnknownDomain(key) => write!(f, "Unknown research domain: {}", key),
            VitroError::Io(msg) => write!(f, "I/O error: {}", msg),
            VitroError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for VitroError {}

impl From<std::io::Error> for VitroError {
    fn from(e: std::io::Error) -> Self {
        VitroError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for VitroError {
    fn from(e: serde_json::Error) -> Self {
        VitroError::Serialization(e.to_string())
    }
}

impl From<ValidationError> for VitroError {
    fn from(e: ValidationError) -> Self {
        VitroError::Validation(e)
    }
}

/// Validation errors for records built from static tables or snapshots.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty.
    EmptyField(String),
    /// Out of range.
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
    /// Record is keyed under a different domain than it declares.
    DomainMismatch { key: String, declared: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyField(field) => write!(f, "Field is empty: {}", field),
            ValidationError::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                write!(
                    f,
                    "{} out of range: {} (must be {}-{})",
                    field, value, min, max
                )
            }
            ValidationError::DomainMismatch { key, declared } => {
                write!(f, "Record keyed as {} declares domain {}", key, declared)
            }
        }
    }
}

// Convenience constructors
impl VitroError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        VitroError::Validation(ValidationError::EmptyField(field.into()))
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        VitroError::Validation(ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    pub fn unknown_domain(key: impl Into<String>) -> Self {
        VitroError::UnknownDomain(key.into())
    }
}

/// Check that `value` lies in the closed unit interval.
pub fn ensure_unit_interval(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(VitroError::out_of_range(field, 0.0, 1.0, value))
    }
}
