use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::products::Product;
use crate::ConfigError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// The storefront's product catalog: built once at startup, never mutated.
///
/// Query functions take a `&Catalog` (or its product slice) as an explicit
/// parameter; there is no process-wide catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from already-parsed products.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any product has a zero id, a
    /// duplicate id, an empty title, or a price without any digits.
    pub fn new(products: Vec<Product>) -> Result<Self, ConfigError> {
        validate_products(&products)?;
        Ok(Self { products })
    }

    /// Parses and validates a YAML catalog document of the form
    /// `products: [...]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CatalogFileParse`] for malformed YAML and
    /// [`ConfigError::Validation`] for invalid products.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.products)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// Load and validate the product catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog = Catalog::from_yaml_str(&content)?;
    tracing::info!(
        path = %path.display(),
        products = catalog.len(),
        "loaded product catalog"
    );
    Ok(catalog)
}

fn validate_products(products: &[Product]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for product in products {
        if product.id == 0 {
            return Err(ConfigError::Validation(format!(
                "product '{}' has id 0; ids must be positive",
                product.title
            )));
        }

        if !seen_ids.insert(product.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: {}",
                product.id
            )));
        }

        if product.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product {} has an empty title",
                product.id
            )));
        }

        if !product.price.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Validation(format!(
                "product {} has price '{}' with no digits",
                product.id, product.price
            )));
        }
    }

    Ok(())
}
