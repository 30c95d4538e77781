use std::borrow::Borrow;
use std::cmp::Reverse;

use storefront_core::{Product, SortBy};

use crate::price::extract_numeric_price;

/// Returns a reordered copy of `catalog`; the input slice is left untouched.
///
/// Works on owned products or on references (e.g. the output of
/// [`crate::filter_catalog`]). Price and popularity orderings are stable, so
/// ties keep their input order. [`SortBy::Original`] returns the input order.
#[must_use]
pub fn sort_catalog<P>(catalog: &[P], sort_by: SortBy) -> Vec<P>
where
    P: Borrow<Product> + Clone,
{
    let mut sorted = catalog.to_vec();

    match sort_by {
        SortBy::PriceLow => sorted.sort_by_cached_key(numeric_price),
        SortBy::PriceHigh => sorted.sort_by_cached_key(|p| Reverse(numeric_price(p))),
        SortBy::Newest => sorted.sort_by_key(|p| Reverse(as_product(p).id)),
        // `false < true`, so negating puts featured products first.
        SortBy::Popular => sorted.sort_by_key(|p| !as_product(p).is_featured()),
        SortBy::Original => {}
    }

    sorted
}

fn as_product<P: Borrow<Product>>(item: &P) -> &Product {
    item.borrow()
}

fn numeric_price<P: Borrow<Product>>(item: &P) -> u64 {
    extract_numeric_price(&as_product(item).price)
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod tests;
