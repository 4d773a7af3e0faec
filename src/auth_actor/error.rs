//! Error types for the auth store.

use thiserror::Error;

/// Errors that can surface from auth operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// An error occurred while communicating with the store actor.
    #[error("Auth store communication error: {0}")]
    StoreCommunicationError(String),

    /// The store answered a query with a mismatched result variant.
    #[error("Unexpected auth query reply: {0}")]
    UnexpectedReply(String),
}

impl From<String> for AuthError {
    fn from(msg: String) -> Self {
        AuthError::StoreCommunicationError(msg)
    }
}
