//! Error types for soil input handling.
//!
//! The estimator itself never fails. These errors only arise where a sample
//! is assembled from user input: the collector, the CLI argument parser and
//! the HTTP boundary.

use thiserror::Error;

use crate::sample::SoilField;

/// Errors raised while building or validating a [`crate::SoilSample`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SoilError {
    /// Value lies outside the field's documented measurement range.
    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        field: SoilField,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite value.
    #[error("{field} must be a finite number")]
    NotFinite { field: SoilField },

    /// Field name not recognised.
    #[error("Unknown soil field: {0}")]
    UnknownField(String),

    /// Text that could not be parsed as a number.
    #[error("Invalid value for {field}: {raw:?}")]
    InvalidValue { field: SoilField, raw: String },

    /// Override not written as `FIELD=VALUE`.
    #[error("Expected FIELD=VALUE, got {0:?}")]
    MalformedAssignment(String),
}

pub type Result<T> = std::result::Result<T, SoilError>;
