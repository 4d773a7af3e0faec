//! Fake authentication store: session user state behind the same actor
//! pattern as the cart and wishlist. The simulated login/signup latency lives
//! in [`AuthClient`](crate::clients::AuthClient), not here; the store only
//! holds the committed session state.

pub mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use entity::AuthSession;
pub use error::*;

use crate::clients::AuthClient;
use crate::framework::StoreActor;

/// Creates a new auth store and its client.
pub fn new() -> (StoreActor<AuthSession>, AuthClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = AuthClient::new(generic_client);

    (actor, client)
}
