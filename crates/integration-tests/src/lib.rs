//! Integration tests for Petal Market.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p petal-market-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping_flow` - End-to-end catalog -> cart -> checkout flows
//! - `store_views` - Display view models against live store state
//!
//! Everything runs against the built-in catalog and an in-memory session;
//! there is no external setup.

/// Shared fixtures for the test files under `tests/`.
pub mod fixtures {
    use petal_market_cart::Session;
    use petal_market_core::{Product, ProductId};
    use petal_market_storefront::catalog::Catalog;

    /// A fresh session paired with the built-in catalog.
    #[must_use]
    pub fn builtin_session() -> (Session, Catalog) {
        let catalog = Catalog::builtin();
        let session = Session::new(catalog.currency());
        (session, catalog)
    }

    /// Look up a built-in catalog product, panicking on unknown ids.
    ///
    /// # Panics
    ///
    /// Panics if the id is not in the catalog; tests pass known ids.
    #[must_use]
    pub fn catalog_product(catalog: &Catalog, id: i32) -> Product {
        catalog
            .get(ProductId::new(id))
            .unwrap_or_else(|| panic!("product {id} not in built-in catalog"))
            .clone()
    }
}
