//! Order payload types and the canonical total computation.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::CartLine;

/// GST applied on the cart subtotal, in percent.
pub const TAX_RATE_PERCENT: u64 = 18;

/// Shipping address fields captured from the checkout form. Free-form
/// strings; the stub performs no format validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Derived order totals, in minor currency units.
///
/// Canonical rounding rule: tax is `subtotal × 18%` rounded half-up once, and
/// the total is `subtotal + tax`. Because the subtotal is an integer this is
/// identical to rounding `subtotal × 1.18`, so subtotal, tax, and total are
/// always mutually consistent wherever they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: u64,
    pub tax: u64,
    pub total: u64,
}

impl OrderTotals {
    pub fn from_subtotal(subtotal: u64) -> Self {
        let tax = (subtotal * TAX_RATE_PERCENT + 50) / 100;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// The payload handed to the order-confirmation view after a successful
/// checkout.
///
/// Navigation-transient: it lives only in memory on the way to the
/// confirmation view. A consumer that ends up without one (e.g., after a
/// reload) renders a "not found" fallback rather than faulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Synthesized order identifier, e.g. `"MK1724382000000"`.
    pub order_id: String,
    /// Cart contents at submission time.
    pub items: Vec<CartLine>,
    /// Grand total including tax, per [`OrderTotals`].
    pub total: u64,
    pub shipping_address: ShippingAddress,
}

/// Synthesizes an order identifier from the current wall clock.
pub fn next_order_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("MK{millis}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_follow_the_canonical_rounding_rule() {
        // 250 * 0.18 = 45 exactly
        let totals = OrderTotals::from_subtotal(250);
        assert_eq!(totals.tax, 45);
        assert_eq!(totals.total, 295);

        // 103 * 0.18 = 18.54 -> 19
        let totals = OrderTotals::from_subtotal(103);
        assert_eq!(totals.tax, 19);
        assert_eq!(totals.total, 122);

        // 25 * 0.18 = 4.5 -> rounds half-up to 5
        let totals = OrderTotals::from_subtotal(25);
        assert_eq!(totals.tax, 5);
        assert_eq!(totals.total, 30);
    }

    #[test]
    fn subtotal_plus_tax_always_equals_total() {
        for subtotal in [0u64, 1, 99, 100, 299, 1234, 99_999] {
            let totals = OrderTotals::from_subtotal(subtotal);
            assert_eq!(totals.subtotal + totals.tax, totals.total);
        }
    }

    #[test]
    fn order_ids_carry_the_storefront_prefix() {
        let id = next_order_id();
        assert!(id.starts_with("MK"));
        assert!(id.len() > 2 && id[2..].chars().all(|c| c.is_ascii_digit()));
    }
}
