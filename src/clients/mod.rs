//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient).
//!
//! Views never speak raw store requests; they hold one of these domain
//! clients instead. The clients own the boundary conventions (e.g., routing
//! a zero quantity to removal) and map framework errors to domain errors.

pub mod auth_client;
pub mod cart_client;
pub mod store_handle;
pub mod wishlist_client;

pub use auth_client::*;
pub use cart_client::*;
pub use store_handle::*;
pub use wishlist_client::*;
