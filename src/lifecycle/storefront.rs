use tracing::{error, info};

use crate::catalog::Catalog;
use crate::checkout::CheckoutFlow;
use crate::clients::{AuthClient, CartClient, WishlistClient};

/// The main runtime orchestrator for the storefront session.
///
/// `Storefront` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all store actors
/// - **Wiring**: Handing views the clients they need (cart, wishlist, auth)
/// - **Session Scope**: One `Storefront` per session; its stores start empty
///   and their contents die with it (nothing is persisted)
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::new();
///
/// let product = storefront.catalog.get(1).cloned().unwrap();
/// storefront.cart_client.add_to_cart(product).await?;
///
/// let pending = storefront.checkout().submit(form);
/// let payload = pending.wait().await?;
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    /// Read-only product data, shared by all views.
    pub catalog: Catalog,

    /// Client for the cart store
    pub cart_client: CartClient,

    /// Client for the wishlist store
    pub wishlist_client: WishlistClient,

    /// Client for the fake auth store
    pub auth_client: AuthClient,

    /// Task handles for all running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Creates and initializes a new `Storefront` with all stores running.
    ///
    /// Each store actor is spawned in its own tokio task; the three stores
    /// are independent (moving an item to the cart does not touch the
    /// wishlist), so there are no cross-store dependencies to wire.
    pub fn new() -> Self {
        let (cart_actor, cart_client) = crate::cart_actor::new();
        let (wishlist_actor, wishlist_client) = crate::wishlist_actor::new();
        let (auth_actor, auth_client) = crate::auth_actor::new();

        let cart_handle = tokio::spawn(cart_actor.run());
        let wishlist_handle = tokio::spawn(wishlist_actor.run());
        let auth_handle = tokio::spawn(auth_actor.run());

        Self {
            catalog: Catalog::sample(),
            cart_client,
            wishlist_client,
            auth_client,
            handles: vec![cart_handle, wishlist_handle, auth_handle],
        }
    }

    /// Builds a checkout flow over this session's cart.
    pub fn checkout(&self) -> CheckoutFlow {
        CheckoutFlow::new(self.cart_client.clone())
    }

    /// Gracefully shuts down the session.
    ///
    /// Dropping the clients closes their channels; each store actor detects
    /// the closed channel and exits its event loop. Any state still in the
    /// cart or wishlist is lost, which is the intended session lifecycle.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.cart_client);
        drop(self.wishlist_client);
        drop(self.auth_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}
