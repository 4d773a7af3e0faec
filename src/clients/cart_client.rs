use std::num::NonZeroU32;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::cart_actor::{CartCommand, CartError, CartQuery, CartQueryResult};
use crate::clients::store_handle::StoreHandle;
use crate::framework::{FrameworkError, StoreClient};
use crate::model::{Cart, CartLine, Product, ProductId};

/// Client for interacting with the cart store.
///
/// This is the only mutation path into the cart; product listings, the
/// product detail view, the cart view, and the checkout flow all hold a
/// clone of this client.
///
/// Boundary convention: a quantity of zero passed to
/// [`set_quantity`](CartClient::set_quantity) is rerouted to removal, so the
/// store never receives a non-positive quantity.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StoreClient<Cart>) -> Self {
        Self { inner }
    }

    /// Adds one unit of `product`, merging into an existing line if present.
    /// Always succeeds; there is no capacity or stock check here (stock
    /// bounding is a view-boundary concern, see `Product::stock_count`).
    #[instrument(skip(self, product))]
    pub async fn add_to_cart(&self, product: Product) -> Result<(), CartError> {
        debug!(product_id = product.id, name = %product.name, "add_to_cart called");
        self.inner
            .command(CartCommand::Add(product))
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Sets the quantity of the line for `product_id`. A quantity of zero is
    /// interpreted as removal of the line, per the cart view's decrement
    /// convention; unknown ids are a no-op either way.
    #[instrument(skip(self))]
    pub async fn set_quantity(&self, product_id: ProductId, quantity: u32) -> Result<(), CartError> {
        match NonZeroU32::new(quantity) {
            Some(quantity) => self
                .inner
                .command(CartCommand::SetQuantity {
                    product_id,
                    quantity,
                })
                .await
                .map(|_| ())
                .map_err(Self::map_error),
            None => self.remove_from_cart(product_id).await,
        }
    }

    /// Removes the line for `product_id`; no-op (not an error) if absent.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, product_id: ProductId) -> Result<(), CartError> {
        self.inner
            .command(CartCommand::Remove(product_id))
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Empties the cart unconditionally.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), CartError> {
        self.inner
            .command(CartCommand::Clear)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Sum of quantities across all lines (the badge number).
    pub async fn item_count(&self) -> Result<u32, CartError> {
        match self.query(CartQuery::ItemCount).await? {
            CartQueryResult::ItemCount(count) => Ok(count),
            other => Err(CartError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Σ unit price × quantity, in minor currency units.
    pub async fn subtotal(&self) -> Result<u64, CartError> {
        match self.query(CartQuery::Subtotal).await? {
            CartQueryResult::Subtotal(subtotal) => Ok(subtotal),
            other => Err(CartError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// The lines in display order.
    pub async fn lines(&self) -> Result<Vec<CartLine>, CartError> {
        match self.query(CartQuery::Lines).await? {
            CartQueryResult::Lines(lines) => Ok(lines),
            other => Err(CartError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    async fn query(&self, query: CartQuery) -> Result<CartQueryResult, CartError> {
        self.inner.query(query).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreHandle<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::StoreCommunicationError(e.to_string())
    }
}
