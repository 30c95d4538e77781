//! Multi-criteria catalog filtering.
//!
//! A product is kept only when every [`Clause`] passes. Clauses are evaluated
//! independently; none of them reorders or mutates the catalog.

use storefront_core::{Availability, Product, SearchFilters};

use crate::price::extract_numeric_price;

/// One independent filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Category,
    Size,
    Availability,
    /// Reserved: products carry no type attribute yet.
    Type,
    /// Reserved: products carry no fabric attribute yet.
    Fabric,
    /// Reserved: products carry no piece-count attribute yet.
    Pieces,
    Price,
}

impl Clause {
    /// Evaluation order. Every clause runs for every product.
    pub const ALL: [Clause; 7] = [
        Clause::Category,
        Clause::Size,
        Clause::Availability,
        Clause::Type,
        Clause::Fabric,
        Clause::Pieces,
        Clause::Price,
    ];

    #[must_use]
    pub fn passes(self, product: &Product, filters: &SearchFilters) -> bool {
        match self {
            Clause::Category => {
                filters.categories.is_empty()
                    || filters.categories.contains(product.category_or_empty())
            }
            Clause::Size => filters.sizes.is_empty() || product.has_any_size(&filters.sizes),
            Clause::Availability => availability_passes(product, filters),
            Clause::Type | Clause::Fabric | Clause::Pieces => true,
            Clause::Price => filters
                .price_range
                .contains(extract_numeric_price(&product.price)),
        }
    }
}

/// Each requested label excludes products on the other side independently,
/// so requesting both labels excludes everything.
fn availability_passes(product: &Product, filters: &SearchFilters) -> bool {
    let in_stock = product.is_in_stock();

    if filters.requests(Availability::InStock) && !in_stock {
        return false;
    }
    if filters.requests(Availability::OutOfStock) && in_stock {
        return false;
    }
    true
}

/// Returns the first clause that rejects `product`, or `None` if it matches.
#[must_use]
pub fn rejecting_clause(product: &Product, filters: &SearchFilters) -> Option<Clause> {
    Clause::ALL
        .into_iter()
        .find(|clause| !clause.passes(product, filters))
}

#[must_use]
pub fn matches_filters(product: &Product, filters: &SearchFilters) -> bool {
    rejecting_clause(product, filters).is_none()
}

/// Returns the products matching every clause of `filters`, in catalog order.
#[must_use]
pub fn filter_catalog<'a>(catalog: &'a [Product], filters: &SearchFilters) -> Vec<&'a Product> {
    catalog
        .iter()
        .filter(|product| match rejecting_clause(product, filters) {
            None => true,
            Some(clause) => {
                tracing::trace!(product_id = product.id, ?clause, "product filtered out");
                false
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
