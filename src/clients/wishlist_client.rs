use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::store_handle::StoreHandle;
use crate::framework::{FrameworkError, StoreClient};
use crate::model::{Product, ProductId, Wishlist};
use crate::wishlist_actor::{WishlistCommand, WishlistError, WishlistQuery, WishlistQueryResult};

/// Client for interacting with the wishlist store.
#[derive(Clone)]
pub struct WishlistClient {
    inner: StoreClient<Wishlist>,
}

impl WishlistClient {
    pub fn new(inner: StoreClient<Wishlist>) -> Self {
        Self { inner }
    }

    /// Adds `product` to the wishlist. Idempotent: adding a product that is
    /// already present leaves exactly one entry.
    #[instrument(skip(self, product))]
    pub async fn add_to_wishlist(&self, product: Product) -> Result<(), WishlistError> {
        debug!(product_id = product.id, name = %product.name, "add_to_wishlist called");
        self.inner
            .command(WishlistCommand::Add(product))
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Removes the entry for `product_id`; no-op (not an error) if absent.
    #[instrument(skip(self))]
    pub async fn remove_from_wishlist(&self, product_id: ProductId) -> Result<(), WishlistError> {
        self.inner
            .command(WishlistCommand::Remove(product_id))
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Empties the wishlist unconditionally.
    #[instrument(skip(self))]
    pub async fn clear_wishlist(&self) -> Result<(), WishlistError> {
        self.inner
            .command(WishlistCommand::Clear)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Membership predicate (drives the heart toggle on product cards).
    pub async fn is_in_wishlist(&self, product_id: ProductId) -> Result<bool, WishlistError> {
        match self.query(WishlistQuery::Contains(product_id)).await? {
            WishlistQueryResult::Contains(contained) => Ok(contained),
            other => Err(WishlistError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Count of distinct entries.
    pub async fn item_count(&self) -> Result<usize, WishlistError> {
        match self.query(WishlistQuery::ItemCount).await? {
            WishlistQueryResult::ItemCount(count) => Ok(count),
            other => Err(WishlistError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// The entries in insertion order.
    pub async fn entries(&self) -> Result<Vec<Product>, WishlistError> {
        match self.query(WishlistQuery::Entries).await? {
            WishlistQueryResult::Entries(entries) => Ok(entries),
            other => Err(WishlistError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    async fn query(&self, query: WishlistQuery) -> Result<WishlistQueryResult, WishlistError> {
        self.inner.query(query).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreHandle<Wishlist> for WishlistClient {
    type Error = WishlistError;

    fn inner(&self) -> &StoreClient<Wishlist> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        WishlistError::StoreCommunicationError(e.to_string())
    }
}
