//! Error types for customer identity and token issuance
//!
//! Messages here are developer-facing. The HTTP layer maps each variant to a
//! stable error code and status.

use thiserror::Error;

/// Input validation failures, raised before any storage access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    Required { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid check digit: {field}")]
    InvalidCheckDigit { field: String },
}

impl ValidationError {
    pub fn required(field: &str) -> Self {
        Self::Required {
            field: field.to_string(),
        }
    }

    pub fn invalid_format(field: &str) -> Self {
        Self::InvalidFormat {
            field: field.to_string(),
        }
    }

    pub fn invalid_check_digit(field: &str) -> Self {
        Self::InvalidCheckDigit {
            field: field.to_string(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::Required { field }
            | Self::InvalidFormat { field }
            | Self::InvalidCheckDigit { field } => field,
        }
    }
}

/// Identity resolution failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Customer not found")]
    CustomerNotFound,
}

/// Token signing and verification failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Signing key missing")]
    SigningKeyMissing,

    #[error("Signing key shorter than {min} bytes")]
    SigningKeyTooShort { min: usize },

    #[error("Unsupported signing algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    #[error("Token lifetime of {hours} hours is outside 1..={max}")]
    InvalidLifetime { hours: i64, max: i64 },

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,
}
