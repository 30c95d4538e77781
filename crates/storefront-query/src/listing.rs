use serde::Serialize;
use storefront_core::Product;

use crate::price::normalize_price;
use crate::text::{slugify, truncate};

/// Display strings for one product card on a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub id: u32,
    /// Title cut to the card's character budget.
    pub title: String,
    /// Canonical `"Rs. 6,250"` price.
    pub price: String,
    /// Product page slug, always derived from the full title.
    pub slug: String,
    pub in_stock: bool,
    pub featured: bool,
}

impl ListingEntry {
    #[must_use]
    pub fn from_product(product: &Product, title_max_len: usize) -> Self {
        Self {
            id: product.id,
            title: truncate(&product.title, title_max_len),
            price: normalize_price(product.price.as_str()),
            slug: slugify(&product.title),
            in_stock: product.is_in_stock(),
            featured: product.is_featured(),
        }
    }
}
