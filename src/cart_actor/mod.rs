//! Cart-specific store logic: commands, queries, and the state implementation.

pub mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::StoreActor;
use crate::model::Cart;

/// Creates a new cart store and its client.
pub fn new() -> (StoreActor<Cart>, CartClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = CartClient::new(generic_client);

    (actor, client)
}
