use std::borrow::Borrow;
use std::collections::BTreeSet;

use serde::Serialize;
use storefront_core::{PriceRange, Product};

use crate::price::extract_numeric_price;

/// Filter-sidebar options derived from a set of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogFacets {
    /// Distinct non-empty categories, sorted.
    pub categories: Vec<String>,
    /// Distinct sizes in first-seen order.
    pub sizes: Vec<String>,
    /// Cheapest and dearest numeric price; `None` for an empty input.
    pub price_bounds: Option<PriceRange>,
    pub in_stock: usize,
    pub out_of_stock: usize,
}

#[must_use]
pub fn catalog_facets<P: Borrow<Product>>(products: &[P]) -> CatalogFacets {
    let mut categories = BTreeSet::new();
    let mut sizes: Vec<String> = Vec::new();
    let mut price_bounds: Option<PriceRange> = None;
    let mut in_stock = 0usize;

    for item in products {
        let product: &Product = item.borrow();

        if let Some(category) = product.category.as_deref().filter(|c| !c.is_empty()) {
            categories.insert(category.to_string());
        }

        for size in &product.sizes {
            if !sizes.contains(size) {
                sizes.push(size.clone());
            }
        }

        let price = extract_numeric_price(&product.price);
        price_bounds = Some(match price_bounds {
            None => PriceRange::new(price, price),
            Some(bounds) => PriceRange::new(bounds.min.min(price), bounds.max.max(price)),
        });

        if product.is_in_stock() {
            in_stock += 1;
        }
    }

    CatalogFacets {
        categories: categories.into_iter().collect(),
        sizes,
        price_bounds,
        in_stock,
        out_of_stock: products.len() - in_stock,
    }
}
