//! Catalog command handlers for the CLI.
//!
//! Each handler loads the catalog once, runs a read-only query over it and
//! prints either an aligned text table or JSON.

use std::path::Path;

use storefront_core::{load_catalog, AppConfig, Catalog, PriceRange, SearchFilters, SortBy};
use storefront_query::{catalog_facets, normalize_price, run_query as query_catalog, ListingEntry};

use crate::QueryArgs;

/// Load the catalog from `path`, falling back to the configured catalog path.
pub(crate) fn open_catalog(config: &AppConfig, path: Option<&Path>) -> anyhow::Result<Catalog> {
    let path = path.unwrap_or(config.catalog_path.as_path());
    Ok(load_catalog(path)?)
}

/// Resolve a user-supplied sort key. Unknown keys keep catalog order.
pub(crate) fn resolve_sort(key: Option<&str>, default: SortBy) -> SortBy {
    let Some(key) = key else {
        return default;
    };
    if !SortBy::is_known_key(key) && key != SortBy::Original.as_str() {
        tracing::warn!(sort = key, "unrecognized sort key; keeping catalog order");
    }
    SortBy::parse(key)
}

pub(crate) fn filters_from_args(args: &QueryArgs, default_sort: SortBy) -> SearchFilters {
    SearchFilters {
        categories: args.categories.iter().cloned().collect(),
        sizes: args.sizes.iter().cloned().collect(),
        availability: args.availability.iter().copied().collect(),
        types: args.types.iter().cloned().collect(),
        fabrics: args.fabrics.iter().cloned().collect(),
        pieces: args.pieces.iter().cloned().collect(),
        price_range: PriceRange::new(args.min_price, args.max_price.unwrap_or(u64::MAX)),
        sort_by: resolve_sort(args.sort.as_deref(), default_sort),
    }
}

pub(crate) fn listing_entries(
    catalog: &Catalog,
    filters: &SearchFilters,
    title_max_len: usize,
) -> Vec<ListingEntry> {
    query_catalog(catalog, filters)
        .into_iter()
        .map(|product| ListingEntry::from_product(product, title_max_len))
        .collect()
}

/// Run a filtered, sorted catalog query and print the listing.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON output fails.
pub(crate) fn run_query(config: &AppConfig, args: &QueryArgs) -> anyhow::Result<()> {
    let catalog = open_catalog(config, args.catalog.as_deref())?;
    let filters = filters_from_args(args, config.default_sort);
    let title_max_len = args.title_len.unwrap_or(config.title_max_len);
    let entries = listing_entries(&catalog, &filters, title_max_len);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_listing(&entries, catalog.len());
    }
    Ok(())
}

pub(crate) fn print_listing(entries: &[ListingEntry], catalog_len: usize) {
    if entries.is_empty() {
        println!("no products match ({catalog_len} in catalog)");
        return;
    }

    println!("{:<5}{:<46}{:<14}{:<8}SLUG", "ID", "TITLE", "PRICE", "STOCK");
    for entry in entries {
        let stock = if entry.in_stock { "yes" } else { "no" };
        println!(
            "{:<5}{:<46}{:<14}{:<8}{}",
            entry.id, entry.title, entry.price, stock, entry.slug
        );
    }
    println!("{} of {catalog_len} products", entries.len());
}

/// Print the filter options available in the catalog.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON output fails.
pub(crate) fn run_facets(
    config: &AppConfig,
    catalog_path: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = open_catalog(config, catalog_path)?;
    let facets = catalog_facets(catalog.products());

    if json {
        println!("{}", serde_json::to_string_pretty(&facets)?);
        return Ok(());
    }

    println!("Categories: {}", facets.categories.join(", "));
    println!("Sizes:      {}", facets.sizes.join(", "));
    match facets.price_bounds {
        Some(bounds) => println!(
            "Price:      {} to {}",
            normalize_price(bounds.min),
            normalize_price(bounds.max)
        ),
        None => println!("Price:      \u{2014}"),
    }
    println!(
        "Stock:      {} in stock, {} out of stock",
        facets.in_stock, facets.out_of_stock
    );
    Ok(())
}
