//! The product catalog: static, in-memory sample data plus the lookup,
//! filter, and sort operations the shop views use. Products are immutable
//! once loaded; the catalog hands out references only.

use crate::model::{Category, Product, ProductId};

/// Sort modes offered by the shop view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Catalog order (the default).
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    /// Highest rated first.
    Rating,
    /// Alphabetical by name.
    Name,
}

/// Read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds the sample catalog.
    pub fn sample() -> Self {
        Self {
            products: sample_products(),
        }
    }

    /// Looks up one product. Unknown ids return `None`; the product detail
    /// view renders its "not found" fallback from that.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in the given category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Case-insensitive substring search over product names.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(move |p| p.name.to_lowercase().contains(&term))
    }

    /// Products sorted for display. `Featured` keeps catalog order; the
    /// other keys sort a copy of the reference list.
    pub fn sorted(&self, key: SortKey) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.iter().collect();
        match key {
            SortKey::Featured => {}
            SortKey::PriceLowToHigh => products.sort_by_key(|p| p.price),
            SortKey::PriceHighToLow => {
                products.sort_by_key(|p| std::cmp::Reverse(p.price))
            }
            SortKey::Rating => {
                products.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            }
            SortKey::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        }
        products
    }
}

/// The sample product data the storefront ships with.
fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Aloo Bhujia", 299, Category::Spicy)
            .with_original_price(349)
            .with_rating(4.8, 142)
            .with_image("/images/aloo_bhujhia.png")
            .with_description("Crispy potato-based bhujia with traditional spices and herbs.")
            .with_stock_count(50),
        Product::new(2, "Premium Chivda Mix", 249, Category::Crunchy)
            .with_original_price(299)
            .with_rating(4.7, 198)
            .with_image("/images/chivda.png")
            .with_description(
                "Traditional Maharashtrian chivda with peanuts, curry leaves, and aromatic spices.",
            )
            .with_stock_count(45),
        Product::new(3, "Cornflakes Mixture", 179, Category::Crunchy)
            .with_original_price(219)
            .with_rating(4.5, 167)
            .with_image("/images/cornflakes_mixture.png")
            .with_description("Crunchy cornflakes mixed with nuts, raisins, and light spices.")
            .with_stock_count(60),
        Product::new(4, "Gulab Jamun", 399, Category::Sweet)
            .with_original_price(449)
            .with_rating(4.9, 234)
            .with_image("/images/gulab_jamun.png")
            .with_description("Soft, spongy gulab jamuns soaked in rose-flavored sugar syrup.")
            .with_stock_count(25),
        Product::new(5, "Khatta Meetha", 219, Category::Spicy)
            .with_original_price(259)
            .with_rating(4.6, 156)
            .with_image("/images/khatta_meetha.png")
            .with_description(
                "Perfect balance of sweet and tangy flavors with crunchy sev and puffed rice.",
            )
            .with_stock_count(55),
        Product::new(6, "Masala Peanuts", 159, Category::Spicy)
            .with_original_price(189)
            .with_rating(4.4, 189)
            .with_image("/images/masala_peanut.png")
            .with_description("Roasted peanuts coated with spicy masala blend.")
            .with_stock_count(70),
        Product::new(7, "Special Mixtures", 329, Category::Crunchy)
            .with_original_price(379)
            .with_rating(4.8, 178)
            .with_image("/images/mixtures.png")
            .with_description(
                "A delightful mix of various crunchy elements including sev, nuts, and fried lentils.",
            )
            .with_stock_count(40),
        Product::new(8, "Moong Dal Namkeen", 199, Category::Healthy)
            .with_original_price(239)
            .with_rating(4.5, 145)
            .with_image("/images/moong_dal.png")
            .with_description("Crispy roasted moong dal with mild spices.")
            .with_stock_count(65),
        Product::new(9, "Rasgulla", 349, Category::Sweet)
            .with_original_price(399)
            .with_rating(4.7, 203)
            .with_image("/images/rasgulla.png")
            .with_description("Soft, spongy cheese balls soaked in light sugar syrup.")
            .with_stock_count(30),
        Product::new(10, "Classic Sev", 139, Category::Crunchy)
            .with_original_price(169)
            .with_rating(4.3, 167)
            .with_image("/images/sev.png")
            .with_description("Fine gram flour sev with traditional spices.")
            .with_stock_count(80),
        Product::new(11, "Kaju Katli", 549, Category::Sweet)
            .with_original_price(649)
            .with_rating(4.9, 287)
            .with_image("/images/kaju_katli.png")
            .with_description(
                "Premium silver-coated cashew sweets made with pure cashews and ghee.",
            )
            .with_stock_count(20),
        Product::new(12, "Soan Papdi", 279, Category::Sweet)
            .with_original_price(329)
            .with_rating(4.6, 156)
            .with_image("/images/soan_papdi.png")
            .with_description(
                "Flaky, melt-in-mouth sweet made with gram flour, sugar, and ghee.",
            )
            .with_stock_count(35),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::sample();

        let kaju = catalog.get(11).unwrap();
        assert_eq!(kaju.name, "Kaju Katli");
        assert_eq!(kaju.price, 549);

        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn category_filter() {
        let catalog = Catalog::sample();

        let sweets: Vec<_> = catalog.by_category(Category::Sweet).collect();
        assert_eq!(sweets.len(), 4);
        assert!(sweets.iter().all(|p| p.category == Category::Sweet));
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = Catalog::sample();

        let hits: Vec<_> = catalog.search("MIX").map(|p| p.id).collect();
        assert_eq!(hits, vec![2, 3, 7]);
    }

    #[test]
    fn sort_modes() {
        let catalog = Catalog::sample();

        let by_price = catalog.sorted(SortKey::PriceLowToHigh);
        assert_eq!(by_price.first().map(|p| p.id), Some(10)); // Classic Sev, 139
        assert_eq!(by_price.last().map(|p| p.id), Some(11)); // Kaju Katli, 549

        let by_price_desc = catalog.sorted(SortKey::PriceHighToLow);
        assert_eq!(by_price_desc.first().map(|p| p.id), Some(11));

        let by_rating = catalog.sorted(SortKey::Rating);
        assert_eq!(by_rating.first().map(|p| p.rating), Some(4.9));

        let by_name = catalog.sorted(SortKey::Name);
        assert_eq!(by_name.first().map(|p| p.name.as_str()), Some("Aloo Bhujia"));

        // Featured keeps catalog order
        let featured = catalog.sorted(SortKey::Featured);
        assert_eq!(featured.first().map(|p| p.id), Some(1));
    }

    #[test]
    fn sample_data_is_well_formed() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 12);
        for product in catalog.products() {
            assert!(product.price > 0);
            assert!(product.in_stock());
            // Every sample product advertises a discount
            assert!(product.discount_percent().is_some());
        }
    }
}
