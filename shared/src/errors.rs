//! Error types for the Ginger dashboard core

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while interpreting data received from the service or
/// input collected locally before a submission
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {}", .0.user_message())]
    Validation(ValidationError),

    #[error("Invalid page: {0}")]
    InvalidPage(String),
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::Validation(err)
    }
}
