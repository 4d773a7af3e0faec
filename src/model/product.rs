use serde::{Deserialize, Serialize};

/// Unique product identifier.
pub type ProductId = u32;

/// Product category, as displayed in the shop filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Spicy,
    Crunchy,
    Sweet,
    Healthy,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Spicy => "Spicy",
            Category::Crunchy => "Crunchy",
            Category::Sweet => "Sweet",
            Category::Healthy => "Healthy",
        };
        f.write_str(label)
    }
}

/// A catalog product. Immutable once loaded.
///
/// Prices are in the smallest currency unit. `original_price` is the
/// pre-discount price used for strike-through display; `stock_count` is the
/// advertised availability. Both are genuinely optional, so they are `Option`
/// fields rather than sentinel values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in minor currency units, always positive.
    pub price: u32,
    pub original_price: Option<u32>,
    pub category: Category,
    pub rating: f32,
    pub reviews: u32,
    pub image: String,
    pub description: String,
    pub stock_count: Option<u32>,
}

impl Product {
    /// Creates a product with the required fields; optional fields start
    /// empty and are filled with the `with_*` builders.
    pub fn new(id: ProductId, name: impl Into<String>, price: u32, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            original_price: None,
            category,
            rating: 0.0,
            reviews: 0,
            image: String::new(),
            description: String::new(),
            stock_count: None,
        }
    }

    pub fn with_original_price(mut self, original_price: u32) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stock_count(mut self, stock_count: u32) -> Self {
        self.stock_count = Some(stock_count);
        self
    }

    /// Whether the product can currently be ordered. Products without an
    /// advertised stock count are treated as available.
    pub fn in_stock(&self) -> bool {
        self.stock_count.map_or(true, |count| count > 0)
    }

    /// Discount percentage against the original price, rounded to the nearest
    /// whole percent. `None` when there is no original price to compare with.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original == 0 || original <= self.price {
            return None;
        }
        let saved = u64::from(original - self.price);
        Some(((saved * 100 + u64::from(original) / 2) / u64::from(original)) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_percent_rounds_to_nearest() {
        // 299 -> 349 saves 50/349 = 14.33% -> 14
        let p = Product::new(1, "Aloo Bhujia", 299, Category::Spicy).with_original_price(349);
        assert_eq!(p.discount_percent(), Some(14));

        // 139 -> 169 saves 30/169 = 17.75% -> 18
        let p = Product::new(10, "Classic Sev", 139, Category::Crunchy).with_original_price(169);
        assert_eq!(p.discount_percent(), Some(18));
    }

    #[test]
    fn discount_percent_absent_without_original_price() {
        let p = Product::new(1, "Aloo Bhujia", 299, Category::Spicy);
        assert_eq!(p.discount_percent(), None);

        // An "original" price at or below the live price is not a discount.
        let p = Product::new(1, "Aloo Bhujia", 299, Category::Spicy).with_original_price(299);
        assert_eq!(p.discount_percent(), None);
    }

    #[test]
    fn stock_availability() {
        let unlisted = Product::new(1, "Aloo Bhujia", 299, Category::Spicy);
        assert!(unlisted.in_stock());

        let stocked = unlisted.clone().with_stock_count(50);
        assert!(stocked.in_stock());

        let sold_out = unlisted.with_stock_count(0);
        assert!(!sold_out.in_stock());
    }
}
