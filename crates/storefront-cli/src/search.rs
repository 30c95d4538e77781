//! Interactive search: each stdin line is a set of `key=value` filter tokens,
//! funneled through a debouncer so only the line typed before a pause runs.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use storefront_core::{AppConfig, SearchFilters, SortBy};
use storefront_query::Debouncer;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::catalog::{listing_entries, open_catalog, print_listing, resolve_sort};

/// Parse one filter line, e.g. `category=Formal size=M availability=in-stock sort=popular`.
///
/// Recognized keys: `category`, `size`, `availability`, `type`, `fabric`,
/// `pieces`, `min`, `max`, `sort`. Set-valued keys may repeat.
///
/// # Errors
///
/// Returns an error for tokens without `=`, unknown keys, unknown
/// availability labels, or non-numeric prices.
pub(crate) fn parse_filter_line(
    line: &str,
    default_sort: SortBy,
) -> anyhow::Result<SearchFilters> {
    let mut filters = SearchFilters {
        sort_by: default_sort,
        ..SearchFilters::default()
    };

    for token in line.split_whitespace() {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected key=value, got \"{token}\""))?;
        match key {
            "category" => {
                filters.categories.insert(value.to_string());
            }
            "size" => {
                filters.sizes.insert(value.to_string());
            }
            "availability" => {
                filters.availability.insert(value.parse()?);
            }
            "type" => {
                filters.types.insert(value.to_string());
            }
            "fabric" => {
                filters.fabrics.insert(value.to_string());
            }
            "pieces" => {
                filters.pieces.insert(value.to_string());
            }
            "min" => filters.price_range.min = value.parse()?,
            "max" => filters.price_range.max = value.parse()?,
            "sort" => filters.sort_by = resolve_sort(Some(value), default_sort),
            other => anyhow::bail!("unknown filter key \"{other}\""),
        }
    }

    Ok(filters)
}

/// Read filter lines from stdin until EOF, printing results for the last line
/// of every burst.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, no runtime is available
/// for the debouncer, or stdin cannot be read. Invalid lines are logged and
/// skipped.
pub(crate) async fn run_search(
    config: &AppConfig,
    catalog_path: Option<&Path>,
    debounce_ms: Option<u64>,
) -> anyhow::Result<()> {
    let catalog = Arc::new(open_catalog(config, catalog_path)?);
    let delay = Duration::from_millis(debounce_ms.unwrap_or(config.search_debounce_ms));
    let title_max_len = config.title_max_len;

    let results_catalog = Arc::clone(&catalog);
    let debouncer = Debouncer::new(
        move |filters: SearchFilters| {
            let entries = listing_entries(&results_catalog, &filters, title_max_len);
            print_listing(&entries, results_catalog.len());
        },
        delay,
    )?;

    tracing::info!(
        products = catalog.len(),
        delay = ?delay,
        "reading filter lines from stdin"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_filter_line(line, config.default_sort) {
            Ok(filters) => debouncer.call(filters),
            Err(e) => tracing::warn!(error = %e, line, "ignoring invalid filter line"),
        }
    }

    // Let the final burst's call run before the process exits.
    while debouncer.is_pending() {
        tokio::time::sleep(delay).await;
    }
    Ok(())
}
