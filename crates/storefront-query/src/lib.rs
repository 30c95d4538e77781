pub mod debounce;
pub mod error;
pub mod facets;
pub mod filter;
pub mod listing;
pub mod pipeline;
pub mod price;
pub mod sort;
pub mod text;

pub use debounce::{debounce, Debouncer};
pub use error::QueryError;
pub use facets::{catalog_facets, CatalogFacets};
pub use filter::{filter_catalog, matches_filters, rejecting_clause, Clause};
pub use listing::ListingEntry;
pub use pipeline::run_query;
pub use price::{extract_numeric_price, normalize_price, PriceInput};
pub use sort::sort_catalog;
pub use text::{slugify, truncate, ELLIPSIS};
