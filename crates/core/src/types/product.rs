//! Catalog product types.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::money::Money;

/// An opaque reference to a product image asset.
///
/// The cart core never interprets this value; it is carried through so that
/// presentation layers can resolve it against whatever asset pipeline they
/// use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Create an image reference from any string-like value.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<String> for ImageRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

/// A purchasable catalog entry.
///
/// Products are supplied by external static configuration (the catalog) and
/// treated as immutable by the cart core. Identity is the [`ProductId`];
/// name, price and image are display data carried along with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Opaque image reference, not interpreted by the core.
    pub image: ImageRef,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, image: ImageRef) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::money::CurrencyCode;

    fn rose() -> Product {
        Product::new(
            ProductId::new(3),
            "Crimson Passion",
            Money::new(Decimal::new(700, 0), CurrencyCode::PHP),
            ImageRef::new("red.jpg"),
        )
    }

    #[test]
    fn test_product_identity_is_id() {
        let product = rose();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.image.as_str(), "red.jpg");
    }

    #[test]
    fn test_product_serde_roundtrip() {
        let product = rose();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
