//! Client error handling
//!
//! Every failure ends up as a display-only message on the screen that
//! triggered it. Nothing here is fatal to the process.

use ginger_shared::validation::ValidationError;
use ginger_shared::DomainError;
use thiserror::Error;

/// Errors raised by the service client and the view models
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Local input rejected before anything was sent
    #[error("Validation error: {}", .0.user_message())]
    Validation(ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The action is not offered in the current state
    #[error("Action not available: {0}")]
    NotAllowed(String),

    /// The service returned no users to pick from
    #[error("No users available")]
    NoUsers,

    /// Another mutation is still in flight
    #[error("Another action is still in progress")]
    Busy,
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Message shown to the user on the screen that triggered the action
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } if !message.is_empty() => message.clone(),
            ClientError::Validation(err) => err.user_message(),
            other => other.to_string(),
        }
    }

    /// Transport or response failures, as opposed to local rejections
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ClientError::Http(_) | ClientError::Api { .. } | ClientError::InvalidResponse(_)
        )
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Validation(err)
    }
}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(v) => ClientError::Validation(v),
            DomainError::InvalidPage(msg) => ClientError::InvalidResponse(msg),
        }
    }
}
