//! The wishlist aggregate: an ordered set of products, presence only.

use serde::{Deserialize, Serialize};

use crate::model::{Product, ProductId};

/// The wishlist aggregate: each product appears at most once, insertion order
/// preserved. Independent of the cart — moving an item to the cart does not
/// implicitly remove it here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    entries: Vec<Product>,
}

impl Wishlist {
    /// Adds `product` if not already present. Idempotent.
    pub fn add(&mut self, product: Product) {
        if !self.contains(product.id) {
            self.entries.push(product);
        }
    }

    /// Removes the entry for `product_id` if present; no-op if absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.entries.retain(|p| p.id != product_id);
    }

    /// Empties the wishlist unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Membership predicate.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.entries.iter().any(|p| p.id == product_id)
    }

    /// Count of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Product] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn kaju() -> Product {
        Product::new(11, "Kaju Katli", 549, Category::Sweet)
    }

    #[test]
    fn add_is_idempotent() {
        let mut wishlist = Wishlist::default();
        wishlist.add(kaju());
        wishlist.add(kaju());

        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(11));
    }

    #[test]
    fn remove_on_absent_id_is_a_noop() {
        let mut wishlist = Wishlist::default();
        wishlist.add(kaju());

        wishlist.remove(999);

        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut wishlist = Wishlist::default();
        wishlist.add(Product::new(3, "Cornflakes Mixture", 179, Category::Crunchy));
        wishlist.add(kaju());

        let ids: Vec<_> = wishlist.entries().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 11]);
    }

    #[test]
    fn clear_empties_the_wishlist() {
        let mut wishlist = Wishlist::default();
        wishlist.add(kaju());
        wishlist.clear();

        assert!(wishlist.is_empty());
        assert!(!wishlist.contains(11));
    }
}
