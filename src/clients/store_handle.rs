use crate::framework::{FrameworkError, StoreClient, StoreState};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for store-specific clients to inherit the shared read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations every store client supports: taking a linearized snapshot
/// and subscribing to change notifications.
#[async_trait]
pub trait StoreHandle<S: StoreState>: Send + Sync {
    /// The store-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the specific store error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of the aggregate, linearized with in-flight commands.
    #[tracing::instrument(skip(self))]
    async fn state(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending snapshot request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Subscribe to state changes. Every applied command publishes a fresh
    /// snapshot to all current subscribers.
    fn subscribe(&self) -> watch::Receiver<S> {
        self.inner().subscribe()
    }
}
