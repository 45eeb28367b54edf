//! Static product catalog.
//!
//! The catalog is external configuration, not state: a JSON document listing
//! the purchasable products, loaded once at startup and held immutably in
//! memory. A built-in document ships with the crate; deployments can point
//! `PETAL_CATALOG_PATH` at a replacement file.
//!
//! # Document format
//!
//! ```json
//! {
//!   "currency": "PHP",
//!   "products": [
//!     { "id": 1, "name": "Pure Serenity", "price": "800", "image": "white.jpg" }
//!   ]
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use petal_market_core::{CurrencyCode, ImageRef, Money, Product, ProductId};

/// The built-in catalog document (8 products).
const BUILTIN_CATALOG: &str = include_str!("../content/catalog.json");

/// Errors loading or parsing a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document could not be read.
    #[error("failed to read catalog: {0}")]
    Io(String),
    /// The document is not valid catalog JSON.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw catalog document as serialized on disk.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    currency: CurrencyCode,
    products: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: ProductId,
    name: String,
    price: Decimal,
    image: String,
}

/// The fixed list of purchasable products, in document order.
#[derive(Debug, Clone)]
pub struct Catalog {
    currency: CurrencyCode,
    products: Vec<Product>,
}

impl Catalog {
    /// The catalog embedded in the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CATALOG).expect("embedded catalog document is valid")
    }

    /// Load a catalog document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the text is not a valid document.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        let currency = document.currency;
        let products = document
            .products
            .into_iter()
            .map(|entry| {
                Product::new(
                    entry.id,
                    entry.name,
                    Money::new(entry.price, currency),
                    ImageRef::new(entry.image),
                )
            })
            .collect();
        Ok(Self { currency, products })
    }

    /// The currency all catalog prices are denominated in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// All products, in document order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by identifier.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
