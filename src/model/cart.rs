//! The cart aggregate: ordered line items with quantity merging and derived
//! totals. This is the state the cart store actor owns; all mutation goes
//! through [`CartCommand`](crate::cart_actor::CartCommand).

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::model::{Product, ProductId};

/// One line in the cart: a product plus how many of it.
///
/// The quantity is a [`NonZeroU32`]: a line with quantity zero cannot be
/// represented. Reducing a line to zero is expressed as removal at the client
/// boundary instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: NonZeroU32,
}

impl CartLine {
    pub fn new(product: Product, quantity: NonZeroU32) -> Self {
        Self { product, quantity }
    }

    /// Price × quantity for this line, using the live product price.
    pub fn line_total(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity.get())
    }
}

/// The cart aggregate: at most one line per product id, insertion order
/// preserved (insertion order is display order).
///
/// Created empty at session start, destroyed on successful checkout or
/// explicit clear. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Adds one unit of `product`. If a line for the product already exists
    /// its quantity is incremented; otherwise a new line is appended with
    /// quantity 1.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::new(product, NonZeroU32::MIN));
        }
    }

    /// Sets the quantity of the line for `product_id`. Unknown ids are a
    /// no-op, not a fault. The quantity type makes non-positive updates
    /// unrepresentable; callers route those to [`Cart::remove`].
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: NonZeroU32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Removes the line for `product_id` if present; no-op if absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines (not the number of distinct lines);
    /// this is the number shown on the cart badge.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity.get()).sum()
    }

    /// Σ unit price × quantity over all lines, in minor currency units.
    /// Integer arithmetic only; tax and order totals are computed by the
    /// checkout flow.
    pub fn subtotal(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn bhujia() -> Product {
        Product::new(1, "Aloo Bhujia", 299, Category::Spicy)
    }

    fn chivda() -> Product {
        Product::new(2, "Premium Chivda Mix", 249, Category::Crunchy)
    }

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::default();
        for _ in 0..4 {
            cart.add(bhujia());
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity.get(), 4);
    }

    #[test]
    fn distinct_products_keep_insertion_order() {
        let mut cart = Cart::default();
        cart.add(bhujia());
        cart.add(chivda());

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].product.id, 1);
        assert_eq!(cart.lines()[1].product.id, 2);
        assert!(cart.lines().iter().all(|l| l.quantity.get() == 1));
    }

    #[test]
    fn remove_on_absent_id_is_a_noop() {
        let mut cart = Cart::default();
        cart.add(bhujia());

        let before = cart.clone();
        cart.remove(999);

        assert_eq!(cart, before);
    }

    #[test]
    fn item_count_sums_quantities_not_lines() {
        let mut cart = Cart::default();
        cart.add(bhujia());
        cart.add(bhujia());
        cart.add(chivda());
        cart.set_quantity(2, qty(3));

        // [{p1, qty 2}, {p2, qty 3}] => 5
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn subtotal_is_price_times_quantity() {
        let mut cart = Cart::default();
        cart.add(Product::new(1, "A", 100, Category::Sweet));
        cart.add(Product::new(1, "A", 100, Category::Sweet));
        cart.add(Product::new(2, "B", 50, Category::Sweet));

        // {price 100, qty 2} + {price 50, qty 1} => 250
        assert_eq!(cart.subtotal(), 250);
    }

    #[test]
    fn clear_resets_count_and_subtotal() {
        let mut cart = Cart::default();
        cart.add(bhujia());
        cart.add(chivda());
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), 0);
    }

    #[test]
    fn set_quantity_on_absent_id_is_a_noop() {
        let mut cart = Cart::default();
        cart.add(bhujia());

        cart.set_quantity(999, qty(5));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity.get(), 1);
    }

    #[test]
    fn set_quantity_replaces_rather_than_increments() {
        let mut cart = Cart::default();
        cart.add(bhujia());
        cart.set_quantity(1, qty(7));

        assert_eq!(cart.lines()[0].quantity.get(), 7);
    }
}
