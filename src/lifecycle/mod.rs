//! System lifecycle: wiring the stores together and observability setup.

pub mod storefront;
pub mod tracing;

pub use self::storefront::Storefront;
pub use self::tracing::setup_tracing;
