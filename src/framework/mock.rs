//! # Mock Framework
//!
//! Utilities for testing store clients in isolation.
//!
//! Use [`MockStore`] to get a [`StoreClient`] backed by scripted expectations
//! instead of a real [`StoreActor`](crate::framework::StoreActor). Helpers
//! like [`MockStore::expect_command`] and [`MockStore::expect_query`] assert
//! the request order and supply canned responses.

use crate::framework::{StoreClient, StoreRequest, StoreState};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock store.
enum Expectation<S: StoreState> {
    Command { response: S },
    Query { response: S::QueryResult },
    Snapshot { response: S },
}

/// A mock store with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::<Cart>::new();
/// mock.expect_snapshot().return_state(cart_with_lines);
/// mock.expect_command().return_state(Cart::default());
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockStore<S: StoreState> {
    client: StoreClient<S>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: StoreState> MockStore<S> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let (publisher, watcher) = watch::channel(S::default());
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to answer requests from the script
        let handle = tokio::spawn(async move {
            // Hold the publisher so subscribers stay connected.
            let _publisher = publisher;
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before responding

                match (request, expectation) {
                    (
                        StoreRequest::Command { command: _, respond_to },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Query { query: _, respond_to },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, watcher),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Expects a command; the mock replies with the given post-mutation state.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<S> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a query; the mock replies with the given result.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<S> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a snapshot request; the mock replies with the given state.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<S: StoreState> Default for MockStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for command expectations.
pub struct CommandExpectationBuilder<S: StoreState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: StoreState> CommandExpectationBuilder<S> {
    /// Sets the post-mutation state the mock replies with.
    pub fn return_state(self, state: S) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Command { response: state });
    }
}

/// Builder for query expectations.
pub struct QueryExpectationBuilder<S: StoreState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: StoreState> QueryExpectationBuilder<S> {
    /// Sets the query result the mock replies with.
    pub fn return_result(self, result: S::QueryResult) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Query { response: result });
    }
}

/// Builder for snapshot expectations.
pub struct SnapshotExpectationBuilder<S: StoreState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: StoreState> SnapshotExpectationBuilder<S> {
    /// Sets the state the mock replies with.
    pub fn return_state(self, state: S) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot { response: state });
    }
}
