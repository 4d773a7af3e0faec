//! The checkout flow: validate the form, simulate payment processing, then
//! clear the cart and hand a confirmation payload to the caller.
//!
//! # Cancellation
//! A pending order is an explicit task, not a fire-and-forget timer:
//! [`CheckoutFlow::submit`] returns a [`PendingOrder`] whose
//! [`cancel`](PendingOrder::cancel) aborts it when the user navigates away
//! mid-checkout. Cancellation before the simulated delay elapses leaves the
//! cart untouched and records no order; there is no persisted pending-order
//! state to roll back.

pub mod form;

pub use form::{CheckoutForm, Field, FieldError, ValidationErrors};

use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::{next_order_id, OrderPayload, OrderTotals};

/// Default simulated payment-processing latency.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(3000);

/// Errors that can end a checkout attempt.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// One or more required fields were empty; submission was blocked before
    /// any processing started. The cart is untouched.
    #[error("Checkout validation failed: {0}")]
    Validation(ValidationErrors),

    /// Communicating with the cart store failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The pending order was cancelled before the simulated processing
    /// completed. The cart is untouched and no order was recorded.
    #[error("Checkout cancelled before completion")]
    Cancelled,
}

/// Drives a checkout against the cart store.
#[derive(Clone)]
pub struct CheckoutFlow {
    cart: CartClient,
    processing_delay: Duration,
}

impl CheckoutFlow {
    pub fn new(cart: CartClient) -> Self {
        Self {
            cart,
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }

    /// Overrides the simulated processing latency. Tests pair this with a
    /// paused tokio clock.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Places an order: validates the form, waits out the simulated payment
    /// processing, snapshots the cart, clears it, and returns the
    /// confirmation payload.
    ///
    /// Validation failures block submission before any await, so a rejected
    /// form can never touch the cart. The future is cancel-safe up to the
    /// point the cart is cleared: dropping it during the simulated delay
    /// leaves everything as it was.
    #[instrument(skip(self, form))]
    pub async fn place_order(&self, form: &CheckoutForm) -> Result<OrderPayload, CheckoutError> {
        let errors = form.validate();
        if !errors.is_empty() {
            debug!(%errors, "Submission blocked");
            return Err(CheckoutError::Validation(errors));
        }

        info!("Processing payment");
        tokio::time::sleep(self.processing_delay).await;

        // Snapshot at submission time, then destroy the cart. The session is
        // single-owner and mutated serially, so nothing can interleave here.
        let items = self.cart.lines().await?;
        let totals = OrderTotals::from_subtotal(items.iter().map(|l| l.line_total()).sum());
        self.cart.clear_cart().await?;

        let payload = OrderPayload {
            order_id: next_order_id(),
            items,
            total: totals.total,
            shipping_address: form.shipping_address(),
        };
        info!(order_id = %payload.order_id, total = payload.total, "Order confirmed");
        Ok(payload)
    }

    /// Spawns [`place_order`](CheckoutFlow::place_order) as an explicit task
    /// and returns a handle tied to the consuming view's lifetime.
    pub fn submit(&self, form: CheckoutForm) -> PendingOrder {
        let flow = self.clone();
        let handle = tokio::spawn(async move { flow.place_order(&form).await });
        PendingOrder { handle }
    }
}

/// A checkout in flight. Await it with [`PendingOrder::wait`], or abort it
/// with [`PendingOrder::cancel`] when the view goes away.
pub struct PendingOrder {
    handle: JoinHandle<Result<OrderPayload, CheckoutError>>,
}

impl PendingOrder {
    /// Cancels the pending order. If the simulated processing has not
    /// completed, the cart is left untouched and no order is recorded.
    /// A subsequent [`wait`](PendingOrder::wait) reports
    /// [`CheckoutError::Cancelled`].
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Waits for the order to complete (or to have been cancelled).
    pub async fn wait(self) -> Result<OrderPayload, CheckoutError> {
        match self.handle.await {
            Ok(result) => result,
            Err(join_err) if join_err.is_cancelled() => Err(CheckoutError::Cancelled),
            Err(join_err) => std::panic::resume_unwind(join_err.into_panic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockStore;
    use crate::model::{Cart, Category, Product};

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Priya".into(),
            last_name: "Sharma".into(),
            email: "priya@example.com".into(),
            phone: "9876543210".into(),
            address: "42 MG Road".into(),
            city: "Pune".into(),
            state: "Maharashtra".into(),
            pincode: "411001".into(),
            card_number: "1234 5678 9012 3456".into(),
            expiry_date: "12/27".into(),
            cvv: "123".into(),
            card_name: "Priya Sharma".into(),
        }
    }

    fn cart_with_two_lines() -> Cart {
        let mut cart = Cart::default();
        cart.add(Product::new(1, "Aloo Bhujia", 100, Category::Spicy));
        cart.add(Product::new(1, "Aloo Bhujia", 100, Category::Spicy));
        cart.add(Product::new(2, "Classic Sev", 50, Category::Crunchy));
        cart
    }

    #[tokio::test(start_paused = true)]
    async fn validation_failure_blocks_without_touching_the_cart() {
        // No expectations: the flow must not talk to the cart store at all.
        let mock = MockStore::<Cart>::new();
        let flow = CheckoutFlow::new(CartClient::new(mock.client()));

        let mut form = filled_form();
        form.card_number.clear();

        let err = flow.place_order(&form).await.unwrap_err();
        match err {
            CheckoutError::Validation(errors) => {
                assert_eq!(
                    errors.message_for(Field::CardNumber),
                    Some("Card number is required")
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        mock.verify();
    }

    #[tokio::test(start_paused = true)]
    async fn successful_checkout_snapshots_then_clears() {
        let cart = cart_with_two_lines();

        let mut mock = MockStore::<Cart>::new();
        mock.expect_query().return_result(
            crate::cart_actor::CartQueryResult::Lines(cart.lines().to_vec()),
        );
        mock.expect_command().return_state(Cart::default());

        let flow = CheckoutFlow::new(CartClient::new(mock.client()));
        let payload = flow.place_order(&filled_form()).await.unwrap();

        // subtotal 250, tax 45, total 295
        assert_eq!(payload.total, 295);
        assert_eq!(payload.items.len(), 2);
        assert!(payload.order_id.starts_with("MK"));
        assert_eq!(payload.shipping_address.name, "Priya Sharma");
        mock.verify();
    }
}
