//! # Observability & Tracing
//!
//! Structured logging setup for the whole storefront.
//!
//! Every store actor logs its lifecycle (startup, applied commands,
//! shutdown) with a `store_type` field, and the clients create spans per
//! operation via `#[instrument]`. The subscriber uses a compact format that
//! hides the crate/module prefix (`with_target(false)`) since `store_type`
//! already identifies the source.
//!
//! Levels are controlled through `RUST_LOG`:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full commands and queries
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=storefront::framework=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // store_type identifies the source instead
        .compact()
        .init();
}
