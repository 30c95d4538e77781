use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Stock state exactly as recorded in catalog data.
///
/// Catalog entries carry an optional `inStock` flag. Only an explicit `false`
/// marks a product as unavailable; a missing flag is [`StockStatus::Unspecified`]
/// and is treated as in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum StockStatus {
    InStock,
    OutOfStock,
    #[default]
    Unspecified,
}

impl StockStatus {
    /// Returns `true` unless the product is explicitly out of stock.
    #[must_use]
    pub fn is_available(self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // serde `skip_serializing_if` signature
    fn is_unspecified(&self) -> bool {
        matches!(self, StockStatus::Unspecified)
    }
}

impl From<Option<bool>> for StockStatus {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => StockStatus::InStock,
            Some(false) => StockStatus::OutOfStock,
            None => StockStatus::Unspecified,
        }
    }
}

impl From<StockStatus> for Option<bool> {
    fn from(status: StockStatus) -> Self {
        match status {
            StockStatus::InStock => Some(true),
            StockStatus::OutOfStock => Some(false),
            StockStatus::Unspecified => None,
        }
    }
}

/// A storefront product as defined in the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identity. Higher ids are newer listings.
    pub id: u32,
    pub title: String,
    /// Display price, e.g. `"Rs. 6,250"`. The numeric price is always derived
    /// from this string; there is no separate numeric field.
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default, skip_serializing_if = "StockStatus::is_unspecified")]
    pub in_stock: StockStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    #[must_use]
    pub fn stock_status(&self) -> StockStatus {
        self.in_stock
    }

    /// Returns `true` unless the catalog explicitly marks the product out of stock.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.in_stock.is_available()
    }

    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Category used for filter matching; a missing category matches as `""`.
    #[must_use]
    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Returns `true` if at least one of the product's sizes is in `wanted`.
    #[must_use]
    pub fn has_any_size(&self, wanted: &BTreeSet<String>) -> bool {
        self.sizes.iter().any(|size| wanted.contains(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(in_stock: StockStatus, featured: Option<bool>) -> Product {
        Product {
            id: 1,
            title: "Unstitched Summer Embroidered Lawn".to_string(),
            price: "Rs. 6,250".to_string(),
            category: Some("Lawn".to_string()),
            sizes: vec!["S".to_string(), "M".to_string()],
            in_stock,
            featured,
            images: vec!["/images/lawn-1.jpg".to_string()],
        }
    }

    #[test]
    fn unspecified_stock_counts_as_in_stock() {
        let product = make_product(StockStatus::Unspecified, None);
        assert!(product.is_in_stock());
    }

    #[test]
    fn only_explicit_out_of_stock_is_unavailable() {
        assert!(make_product(StockStatus::InStock, None).is_in_stock());
        assert!(!make_product(StockStatus::OutOfStock, None).is_in_stock());
    }

    #[test]
    fn featured_defaults_to_false() {
        assert!(!make_product(StockStatus::Unspecified, None).is_featured());
        assert!(!make_product(StockStatus::Unspecified, Some(false)).is_featured());
        assert!(make_product(StockStatus::Unspecified, Some(true)).is_featured());
    }

    #[test]
    fn missing_category_matches_as_empty_string() {
        let mut product = make_product(StockStatus::Unspecified, None);
        product.category = None;
        assert_eq!(product.category_or_empty(), "");
    }

    #[test]
    fn has_any_size_requires_intersection() {
        let product = make_product(StockStatus::Unspecified, None);
        let wanted: BTreeSet<String> = ["L", "M"].iter().map(ToString::to_string).collect();
        assert!(product.has_any_size(&wanted));

        let wanted: BTreeSet<String> = ["XL"].iter().map(ToString::to_string).collect();
        assert!(!product.has_any_size(&wanted));
    }

    #[test]
    fn deserializes_camel_case_stock_flag() {
        let json = r#"{"id": 3, "title": "Kurta", "price": "Rs. 3,450", "inStock": false}"#;
        let product: Product = serde_json::from_str(json).expect("deserialization failed");
        assert_eq!(product.stock_status(), StockStatus::OutOfStock);
        assert!(product.sizes.is_empty());
        assert!(product.category.is_none());
    }

    #[test]
    fn missing_and_null_stock_flag_are_unspecified() {
        let missing: Product =
            serde_json::from_str(r#"{"id": 1, "title": "A", "price": "Rs. 1"}"#).unwrap();
        let null: Product =
            serde_json::from_str(r#"{"id": 1, "title": "A", "price": "Rs. 1", "inStock": null}"#)
                .unwrap();
        assert_eq!(missing.stock_status(), StockStatus::Unspecified);
        assert_eq!(null.stock_status(), StockStatus::Unspecified);
    }

    #[test]
    fn serialization_omits_unspecified_stock() {
        let product = make_product(StockStatus::Unspecified, None);
        let value = serde_json::to_value(&product).expect("serialization failed");
        assert!(value.get("inStock").is_none());

        let product = make_product(StockStatus::OutOfStock, Some(true));
        let value = serde_json::to_value(&product).expect("serialization failed");
        assert_eq!(value["inStock"], serde_json::Value::Bool(false));
        assert_eq!(value["featured"], serde_json::Value::Bool(true));
    }
}
