//! # Decode Error Taxonomy
//!
//! Failures raised when converting wire values into typed domain objects.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Shape errors carry the exact caller-facing message so that callers can
//!   rely on stable wording.
//! - Field errors include the field label and the expected vs. found shape.
//! - Every error surfaces immediately from the decode call that hit it;
//!   there is no retry and no partial result.

use thiserror::Error;

/// Caller-facing message for a value that must be a record but is not.
pub const NOT_A_RECORD: &str = "Contracts must be constructed from Records";

/// Failure while decoding a wire value into a typed payload, key, or
/// contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A record was required and the presented value is not record-shaped.
    #[error("{message}")]
    Shape {
        /// What was expected, in caller-facing wording.
        message: String,
    },

    /// The record had the right shape but a named field's value could not be
    /// converted to its declared target type.
    #[error("field {field}: expected {expected}, found {found}")]
    Field {
        /// Label of the offending field.
        field: String,
        /// The shape the generated decoder expected.
        expected: String,
        /// The shape actually present on the wire.
        found: String,
    },

    /// A declared field was absent from the record entirely.
    #[error("missing record field {field}")]
    MissingField {
        /// Label of the absent field.
        field: String,
    },

    /// Malformed contract-id text. This crate forwards id text opaquely, so
    /// this variant originates only from generated id constructors.
    #[error("malformed contract id: {message}")]
    Identity {
        /// Description of the malformation.
        message: String,
    },
}

impl DecodeError {
    /// A value that had to be record-shaped was not.
    pub fn not_a_record() -> Self {
        DecodeError::Shape {
            message: NOT_A_RECORD.to_string(),
        }
    }

    /// A named field's value did not match its declared shape.
    pub fn field(field: impl Into<String>, expected: impl Into<String>, found: impl Into<String>) -> Self {
        DecodeError::Field {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// A declared field was missing from the record.
    pub fn missing_field(field: impl Into<String>) -> Self {
        DecodeError::MissingField {
            field: field.into(),
        }
    }
}
