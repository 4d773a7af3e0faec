//! Generic actor framework for session-scoped state.
//!
//! This module provides the core building blocks for type-safe session
//! stores: singleton aggregates owned by an actor task, mutated through a
//! typed command channel, and observed through a watch-based subscription.
//!
//! # Main Components
//!
//! - [`StoreState`] - Trait that session aggregates implement to be managed by stores
//! - [`StoreActor`] - Generic actor that owns one aggregate
//! - [`StoreClient`] - Type-safe client for commands, queries, and subscriptions
//! - [`FrameworkError`] - Common channel-level error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full stores.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
