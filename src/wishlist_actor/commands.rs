//! Commands and queries for the wishlist store.

use crate::model::{Product, ProductId};

/// Mutations of the wishlist aggregate. Set semantics, no quantity:
/// adding an already-present product is an idempotent no-op.
#[derive(Debug, Clone)]
pub enum WishlistCommand {
    Add(Product),
    /// Remove the entry for the product. Unknown id: no-op.
    Remove(ProductId),
    Clear,
}

/// Read-only questions about the wishlist.
#[derive(Debug, Clone)]
pub enum WishlistQuery {
    /// Membership predicate for one product.
    Contains(ProductId),
    /// Count of distinct entries.
    ItemCount,
    /// The entries in insertion order.
    Entries,
}

/// Results from wishlist queries - variants match 1:1 with [`WishlistQuery`].
#[derive(Debug, Clone)]
pub enum WishlistQueryResult {
    Contains(bool),
    ItemCount(usize),
    Entries(Vec<Product>),
}
