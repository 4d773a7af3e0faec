#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Storefront
//!
//! > **A session-scoped state engine for a storefront, built on actors.**
//!
//! This crate implements the state core of a small shop: a product catalog,
//! a cart and a wishlist with derived totals, a fake auth stub, and a
//! checkout flow with simulated payment processing. Every piece of session
//! state is owned by exactly one actor and mutated only through typed
//! commands — no ambient globals, no locks.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Single owner, many readers
//! A session has one cart, one wishlist, one auth session. Each lives inside
//! its own [`StoreActor`](framework::StoreActor) task, which processes
//! commands sequentially and publishes a snapshot to all subscribers after
//! every mutation. Views hold clients and watch receivers; they never touch
//! the state directly.
//!
//! ### Generics: The Power of `S`
//! You'll see `StoreActor<S: StoreState>` everywhere. It means "I can manage
//! *any* session aggregate, as long as it behaves like a StoreState." The
//! message loop is written **once** and reused for Cart, Wishlist, and
//! AuthSession.
//!
//! ### Simulated backends, explicit tasks
//! Login, signup, and payment processing are delay-based stubs. They are
//! modeled as explicit async operations that commit only *after* the delay:
//! cancelling one mid-flight (dropping the future, or
//! [`PendingOrder::cancel`](checkout::PendingOrder::cancel)) leaves every
//! store exactly as it was.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `StoreActor<S>` that powers every store, plus the mock store
//! for testing clients in isolation.
//! - **Key items**: [`StoreState`](framework::StoreState), [`StoreActor`](framework::StoreActor).
//!
//! ### 2. The Domain ([`model`], [`catalog`])
//! Pure data: products, cart lines, the wishlist, order payloads, and the
//! static sample catalog. The cart/wishlist invariants (duplicate merging,
//! quantity floors, derived totals) live here and are unit-tested here.
//!
//! ### 3. The Stores ([`cart_actor`], [`wishlist_actor`], [`auth_actor`])
//! Command/query vocabularies and `StoreState` implementations for the three
//! session aggregates.
//!
//! ### 4. The Interface ([`clients`], [`checkout`], [`routes`])
//! Domain clients wrapping the generic store client (the only mutation
//! paths), the checkout flow, and the view route table.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`Storefront`](lifecycle::Storefront) spins up the stores, hands out
//! clients, and shuts the session down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the scripted demo session with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod auth_actor;
pub mod cart_actor;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod routes;
pub mod wishlist_actor;
