use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stock availability labels a shopper can tick in the filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    InStock,
    OutOfStock,
}

impl Availability {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::InStock => "in-stock",
            Availability::OutOfStock => "out-of-stock",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown availability label \"{0}\"; expected \"in-stock\" or \"out-of-stock\"")]
pub struct ParseAvailabilityError(pub String);

impl FromStr for Availability {
    type Err = ParseAvailabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-stock" => Ok(Availability::InStock),
            "out-of-stock" => Ok(Availability::OutOfStock),
            other => Err(ParseAvailabilityError(other.to_string())),
        }
    }
}

/// Closed price interval `[min, max]`, compared against the numeric value of a
/// product's display price. Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u64; 2]", into = "[u64; 2]")]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// `[0, u64::MAX]`: admits every price.
    pub const UNBOUNDED: PriceRange = PriceRange {
        min: 0,
        max: u64::MAX,
    };

    #[must_use]
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends. An inverted range (`min > max`) contains nothing.
    #[must_use]
    pub fn contains(self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl From<[u64; 2]> for PriceRange {
    fn from([min, max]: [u64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<PriceRange> for [u64; 2] {
    fn from(range: PriceRange) -> Self {
        [range.min, range.max]
    }
}

/// Ordering strategy for a listing page.
///
/// Parsing never fails: any key other than the four named strategies maps to
/// [`SortBy::Original`], which keeps catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortBy {
    /// Highest id first.
    Newest,
    PriceLow,
    PriceHigh,
    /// Featured products first.
    Popular,
    #[default]
    Original,
}

impl SortBy {
    #[must_use]
    pub fn parse(key: &str) -> Self {
        match key {
            "newest" => SortBy::Newest,
            "price-low" => SortBy::PriceLow,
            "price-high" => SortBy::PriceHigh,
            "popular" => SortBy::Popular,
            _ => SortBy::Original,
        }
    }

    /// Returns `true` if `key` names one of the four ordering strategies.
    #[must_use]
    pub fn is_known_key(key: &str) -> bool {
        !matches!(SortBy::parse(key), SortBy::Original)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
            SortBy::Popular => "popular",
            SortBy::Original => "original",
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortBy::parse(s))
    }
}

impl From<String> for SortBy {
    fn from(key: String) -> Self {
        SortBy::parse(&key)
    }
}

impl From<SortBy> for String {
    fn from(sort: SortBy) -> Self {
        sort.as_str().to_string()
    }
}

/// Filter and sort configuration for a single listing query.
///
/// Every set-valued dimension is unrestricted when empty. `types`, `fabrics`
/// and `pieces` are accepted but have no product attribute to match against
/// yet, so they never narrow results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub categories: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub availability: BTreeSet<Availability>,
    pub types: BTreeSet<String>,
    pub fabrics: BTreeSet<String>,
    pub pieces: BTreeSet<String>,
    pub price_range: PriceRange,
    pub sort_by: SortBy,
}

impl SearchFilters {
    /// Returns `true` if the shopper ticked `label`.
    #[must_use]
    pub fn requests(&self, label: Availability) -> bool {
        self.availability.contains(&label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_parses_known_keys() {
        assert_eq!(SortBy::parse("newest"), SortBy::Newest);
        assert_eq!(SortBy::parse("price-low"), SortBy::PriceLow);
        assert_eq!(SortBy::parse("price-high"), SortBy::PriceHigh);
        assert_eq!(SortBy::parse("popular"), SortBy::Popular);
    }

    #[test]
    fn sort_by_unknown_key_is_original_order() {
        assert_eq!(SortBy::parse("alphabetical"), SortBy::Original);
        assert_eq!(SortBy::parse(""), SortBy::Original);
        assert_eq!(SortBy::parse("Newest"), SortBy::Original);
        assert!(!SortBy::is_known_key("relevance"));
        assert!(SortBy::is_known_key("popular"));
    }

    #[test]
    fn availability_round_trips_through_display() {
        for label in [Availability::InStock, Availability::OutOfStock] {
            assert_eq!(label.to_string().parse::<Availability>(), Ok(label));
        }
        assert!("sold-out".parse::<Availability>().is_err());
    }

    #[test]
    fn price_range_is_inclusive() {
        let range = PriceRange::new(1_000, 5_000);
        assert!(range.contains(1_000));
        assert!(range.contains(5_000));
        assert!(!range.contains(999));
        assert!(!range.contains(5_001));
    }

    #[test]
    fn inverted_price_range_contains_nothing() {
        let range = PriceRange::new(5_000, 1_000);
        assert!(!range.contains(3_000));
        assert!(!range.contains(1_000));
    }

    #[test]
    fn default_filters_are_unrestricted() {
        let filters = SearchFilters::default();
        assert!(filters.categories.is_empty());
        assert!(filters.availability.is_empty());
        assert_eq!(filters.price_range, PriceRange::UNBOUNDED);
        assert_eq!(filters.sort_by, SortBy::Original);
    }

    #[test]
    fn filters_deserialize_from_storefront_json() {
        let json = r#"{
            "categories": ["Formal"],
            "sizes": [],
            "availability": ["in-stock"],
            "types": ["Unstitched"],
            "priceRange": [0, 50000],
            "sortBy": "price-high"
        }"#;
        let filters: SearchFilters = serde_json::from_str(json).expect("deserialization failed");
        assert!(filters.categories.contains("Formal"));
        assert!(filters.requests(Availability::InStock));
        assert!(!filters.requests(Availability::OutOfStock));
        assert_eq!(filters.price_range, PriceRange::new(0, 50_000));
        assert_eq!(filters.sort_by, SortBy::PriceHigh);
        assert!(filters.fabrics.is_empty());
    }

    #[test]
    fn unrecognized_sort_key_deserializes_without_error() {
        let filters: SearchFilters =
            serde_json::from_str(r#"{"sortBy": "best-selling"}"#).expect("deserialization failed");
        assert_eq!(filters.sort_by, SortBy::Original);
    }
}
