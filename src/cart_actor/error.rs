//! Error types for the cart store.

use thiserror::Error;

/// Errors that can surface from cart operations.
///
/// Cart mutations themselves never fail; the only failures are plumbing
/// (store task gone) or a reply that does not match the query that was asked.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// An error occurred while communicating with the store actor.
    #[error("Cart store communication error: {0}")]
    StoreCommunicationError(String),

    /// The store answered a query with a mismatched result variant.
    #[error("Unexpected cart query reply: {0}")]
    UnexpectedReply(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::StoreCommunicationError(msg)
    }
}
