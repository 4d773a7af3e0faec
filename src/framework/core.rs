//! # Core Store Framework
//!
//! This module defines the generic building blocks for session-scoped state.
//!
//! ## Key Types
//!
//! - [`StoreState`]: The trait that all session aggregates must implement.
//! - [`StoreActor`]: The generic actor that owns one aggregate.
//! - [`StoreClient`]: The generic client for communicating with a store.
//! - [`FrameworkError`]: Common errors (e.g., StoreClosed).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Commands and Queries)
// =============================================================================

/// Trait that any session aggregate must implement to be managed by a
/// [`StoreActor`].
///
/// # Architecture Note
/// A session owns exactly one cart, one wishlist, and one auth session.
/// Unlike a keyed CRUD collection, each of these is a *singleton* aggregate:
/// the actor holds the whole value and every request targets it. By defining
/// a contract (`StoreState`) that all our aggregates (Cart, Wishlist,
/// AuthSession) satisfy, we write the message loop *once* and reuse it for
/// every store.
///
/// The associated types enforce type safety: a `Cart` store only accepts
/// [`CartCommand`](crate::cart_actor::CartCommand)s, and the compiler rejects
/// a wishlist command sent to it.
///
/// # Commands never fail
/// Store mutations have no failure semantics: an unknown product id in a
/// remove or update is a no-op, not a fault. `apply` therefore returns
/// nothing; the only errors a caller can observe are channel-level
/// ([`FrameworkError`]).
pub trait StoreState: Clone + Default + Debug + Send + Sync + 'static {
    /// A mutation of the aggregate.
    type Command: Send + Sync + Debug;

    /// A read-only question about the aggregate.
    type Query: Send + Sync + Debug;

    /// The answer type for queries (variants match 1:1 with `Query`).
    type QueryResult: Send + Sync + Debug;

    /// Apply a command, mutating the aggregate in place.
    fn apply(&mut self, command: Self::Command);

    /// Answer a query against the current state.
    fn query(&self, query: Self::Query) -> Self::QueryResult;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to the store actor.
///
/// # Command / Query split
/// Instead of ad-hoc messages per operation, every store speaks the same
/// three-request protocol:
///
/// - **Command**: State mutation. Applies a [`StoreState::Command`] and
///   replies with the post-mutation snapshot.
/// - **Query**: Read. Answers a [`StoreState::Query`] against current state.
/// - **Snapshot**: Read. Returns a clone of the whole aggregate, linearized
///   with respect to in-flight commands.
#[derive(Debug)]
pub enum StoreRequest<S: StoreState> {
    Command {
        command: S::Command,
        respond_to: Response<S>,
    },
    Query {
        query: S::Query,
        respond_to: Response<S::QueryResult>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}

// =============================================================================
// 3. THE GENERIC STORE ACTOR
// =============================================================================

/// The generic actor that owns a single session aggregate.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `StoreActor` processes its messages *sequentially* in a loop, so the
/// aggregate needs no `Mutex` or `RwLock`: the actor task has exclusive
/// ownership. One store instance per session, mutated serially.
///
/// **Subscriber notification**:
/// After every applied command the actor publishes a snapshot on a
/// [`watch`] channel, *before* replying to the caller. Views subscribe via
/// [`StoreClient::subscribe`] and re-render on change: an explicit
/// single-owner/many-readers contract with no ambient globals.
pub struct StoreActor<S: StoreState> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: StoreState> StoreActor<S> {
    pub fn new(buffer_size: usize) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(S::default());
        let actor = Self {
            receiver,
            state: S::default(),
            publisher,
        };
        let client = StoreClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the store's event loop, processing requests until the channel
    /// closes (i.e., until every client has been dropped).
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Cart" instead of "storefront::model::cart::Cart")
        let store_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(store_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Command { command, respond_to } => {
                    debug!(store_type, ?command, "Command");
                    self.state.apply(command);
                    // Publish to subscribers before acknowledging the caller,
                    // so every observer sees the mutation as soon as it lands.
                    self.publisher.send_replace(self.state.clone());
                    info!(store_type, "Applied");
                    let _ = respond_to.send(self.state.clone());
                }
                StoreRequest::Query { query, respond_to } => {
                    debug!(store_type, ?query, "Query");
                    let _ = respond_to.send(self.state.query(query));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(store_type, "Snapshot");
                    let _ = respond_to.send(self.state.clone());
                }
            }
        }

        info!(store_type, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `StoreActor`.
pub struct StoreClient<S: StoreState> {
    sender: mpsc::Sender<StoreRequest<S>>,
    watcher: watch::Receiver<S>,
}

// Manual Clone impl: a derive would put an `S: Clone` bound on the generated
// impl even though only the channel halves are cloned.
impl<S: StoreState> Clone for StoreClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            watcher: self.watcher.clone(),
        }
    }
}

impl<S: StoreState> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>, watcher: watch::Receiver<S>) -> Self {
        Self { sender, watcher }
    }

    /// Apply a command and return the post-mutation snapshot.
    pub async fn command(&self, command: S::Command) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Command { command, respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }

    /// Answer a read-only query against the store's current state.
    pub async fn query(&self, query: S::Query) -> Result<S::QueryResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Query { query, respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }

    /// Return a clone of the whole aggregate, linearized with commands.
    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }

    /// Subscribe to state changes. The receiver yields a fresh snapshot after
    /// every applied command; the current value is available immediately.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.watcher.clone()
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tally {
        count: u32,
    }

    #[derive(Debug)]
    enum TallyCommand {
        Increment(u32),
        Reset,
    }

    #[derive(Debug)]
    enum TallyQuery {
        Total,
    }

    impl StoreState for Tally {
        type Command = TallyCommand;
        type Query = TallyQuery;
        type QueryResult = u32;

        fn apply(&mut self, command: TallyCommand) {
            match command {
                TallyCommand::Increment(by) => self.count += by,
                TallyCommand::Reset => self.count = 0,
            }
        }

        fn query(&self, query: TallyQuery) -> u32 {
            match query {
                TallyQuery::Total => self.count,
            }
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_store_actor_commands_and_queries() {
        let (actor, client) = StoreActor::<Tally>::new(10);
        tokio::spawn(actor.run());

        // 1. Command returns the post-mutation snapshot
        let snap = client.command(TallyCommand::Increment(3)).await.unwrap();
        assert_eq!(snap.count, 3);

        // 2. Query reads current state
        let total = client.query(TallyQuery::Total).await.unwrap();
        assert_eq!(total, 3);

        // 3. Snapshot is linearized with commands
        client.command(TallyCommand::Increment(2)).await.unwrap();
        let snap = client.snapshot().await.unwrap();
        assert_eq!(snap.count, 5);

        // 4. Reset
        let snap = client.command(TallyCommand::Reset).await.unwrap();
        assert_eq!(snap.count, 0);
    }

    #[tokio::test]
    async fn test_subscribers_see_every_mutation() {
        let (actor, client) = StoreActor::<Tally>::new(10);
        tokio::spawn(actor.run());

        let mut sub = client.subscribe();
        assert_eq!(sub.borrow().count, 0);

        client.command(TallyCommand::Increment(7)).await.unwrap();

        // The snapshot was published before the command reply, so the new
        // value is already visible to the subscriber.
        assert_eq!(sub.borrow_and_update().count, 7);
    }

    #[tokio::test]
    async fn test_requests_fail_once_store_is_gone() {
        let (actor, client) = StoreActor::<Tally>::new(10);
        let handle = tokio::spawn(actor.run());

        client.command(TallyCommand::Increment(1)).await.unwrap();

        // Kill the actor task; pending clients must observe a channel error
        // rather than hang.
        handle.abort();
        let _ = handle.await;

        let err = client.query(TallyQuery::Total).await.unwrap_err();
        assert!(matches!(
            err,
            FrameworkError::StoreClosed | FrameworkError::StoreDropped
        ));
    }
}
