//! Error types for the wishlist store.

use thiserror::Error;

/// Errors that can surface from wishlist operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WishlistError {
    /// An error occurred while communicating with the store actor.
    #[error("Wishlist store communication error: {0}")]
    StoreCommunicationError(String),

    /// The store answered a query with a mismatched result variant.
    #[error("Unexpected wishlist query reply: {0}")]
    UnexpectedReply(String),
}

impl From<String> for WishlistError {
    fn from(msg: String) -> Self {
        WishlistError::StoreCommunicationError(msg)
    }
}
