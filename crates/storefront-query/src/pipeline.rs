use storefront_core::{Catalog, Product, SearchFilters};

use crate::filter::filter_catalog;
use crate::sort::sort_catalog;

/// Runs one listing query: filter the catalog, then order the matches by
/// `filters.sort_by`.
#[must_use]
pub fn run_query<'a>(catalog: &'a Catalog, filters: &SearchFilters) -> Vec<&'a Product> {
    let matched = filter_catalog(catalog.products(), filters);
    let sorted = sort_catalog(&matched, filters.sort_by);

    tracing::debug!(
        catalog = catalog.len(),
        matched = sorted.len(),
        sort_by = %filters.sort_by,
        "catalog query complete"
    );

    sorted
}
