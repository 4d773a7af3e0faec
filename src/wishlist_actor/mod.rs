//! Wishlist-specific store logic: commands, queries, and the state
//! implementation.

pub mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use error::*;

use crate::clients::WishlistClient;
use crate::framework::StoreActor;
use crate::model::Wishlist;

/// Creates a new wishlist store and its client.
pub fn new() -> (StoreActor<Wishlist>, WishlistClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = WishlistClient::new(generic_client);

    (actor, client)
}
