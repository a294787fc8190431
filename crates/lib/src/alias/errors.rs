//! Error types for alias operations.
//!
//! The alias primitives themselves are total: register, remove, clear and
//! the existence checks cannot fail. The only fallible surface is typed
//! extraction out of an [`Entry`](crate::alias::Entry), which is what this
//! module covers.

use thiserror::Error;

/// Structured error types for alias operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AliasError {
    /// Type mismatch when converting an entry to a concrete variant
    #[error("alias entry type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl AliasError {
    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, AliasError::TypeMismatch { .. })
    }
}

// Conversion from AliasError to the main Error type
impl From<AliasError> for crate::Error {
    fn from(err: AliasError) -> Self {
        crate::Error::Alias(err)
    }
}
