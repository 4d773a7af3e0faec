//! Commands and queries for the cart store.
//!
//! These are the only ways to mutate or read the [`Cart`](crate::model::Cart)
//! aggregate; views hold a [`CartClient`](crate::clients::CartClient) and
//! never touch the state directly.

use std::num::NonZeroU32;

use crate::model::{CartLine, Product, ProductId};

/// Mutations of the cart aggregate.
///
/// None of these can fail: unknown product ids are no-ops, and the quantity
/// type rules out non-positive updates. The zero-means-remove convention is
/// applied at the client boundary, so the store never sees it.
#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Add one unit of the product, merging into an existing line if present.
    Add(Product),
    /// Set the quantity of an existing line. Unknown id: no-op.
    SetQuantity {
        product_id: ProductId,
        quantity: NonZeroU32,
    },
    /// Remove the line for the product. Unknown id: no-op.
    Remove(ProductId),
    /// Empty the cart unconditionally.
    Clear,
}

/// Read-only questions about the cart.
#[derive(Debug, Clone)]
pub enum CartQuery {
    /// Sum of quantities across all lines (the badge number).
    ItemCount,
    /// Σ unit price × quantity, in minor currency units.
    Subtotal,
    /// The lines in display order.
    Lines,
}

/// Results from cart queries - variants match 1:1 with [`CartQuery`].
#[derive(Debug, Clone)]
pub enum CartQueryResult {
    ItemCount(u32),
    Subtotal(u64),
    Lines(Vec<CartLine>),
}
