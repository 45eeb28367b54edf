//! Display view models for the three storefront screens.
//!
//! Each view is a plain snapshot of store state with prices pre-formatted
//! for display. Views never mutate anything; the screens call the store's
//! operations directly and rebuild their view when an observer fires.

use petal_market_cart::{CartLine, CartStore};
use petal_market_core::{CurrencyCode, Money, Product, ProductId};

/// Format a monetary amount as a display price string.
fn format_price(money: &Money) -> String {
    money.to_string()
}

// =============================================================================
// Catalog view
// =============================================================================

/// Catalog entry display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItemView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for CatalogItemView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: format_price(&product.price),
            image: product.image.as_str().to_owned(),
        }
    }
}

/// Build the catalog screen's item list, in catalog order.
#[must_use]
pub fn catalog_items(products: &[Product]) -> Vec<CatalogItemView> {
    products.iter().map(CatalogItemView::from).collect()
}

// =============================================================================
// Cart view
// =============================================================================

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product_id(),
            name: line.product.name.clone(),
            quantity: line.quantity,
            price: format_price(&line.product.price),
            line_total: format_price(&line.line_total()),
        }
    }
}

/// Cart screen display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_price(&Money::zero(currency)),
            item_count: 0,
        }
    }

    /// Snapshot the working cart for display.
    #[must_use]
    pub fn from_store(store: &CartStore) -> Self {
        Self {
            items: store.cart().iter().map(CartItemView::from).collect(),
            subtotal: format_price(&store.cart_total()),
            item_count: store.item_count(),
        }
    }

    /// Whether there is anything to check out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Checkout view
// =============================================================================

/// Checkout screen display data, built from the checkout snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub items: Vec<CartItemView>,
    pub total: String,
}

impl CheckoutView {
    /// Snapshot the checkout collection for display.
    #[must_use]
    pub fn from_store(store: &CartStore) -> Self {
        Self {
            items: store.checkout().iter().map(CartItemView::from).collect(),
            total: format_price(&store.checkout_total()),
        }
    }

    /// Whether there are items to check out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use petal_market_cart::Session;
    use petal_market_core::ImageRef;
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i32, name: &str, price: i64) -> Product {
        Product::new(
            ProductId::new(id),
            name,
            Money::new(Decimal::new(price, 0), CurrencyCode::PHP),
            ImageRef::new(format!("{id}.jpg")),
        )
    }

    #[test]
    fn test_catalog_item_formats_price() {
        let view = CatalogItemView::from(&product(1, "Pure Serenity", 800));
        assert_eq!(view.price, "\u{20b1}800.00");
        assert_eq!(view.image, "1.jpg");
    }

    #[test]
    fn test_cart_view_line_totals_and_subtotal() {
        let session = Session::new(CurrencyCode::PHP);
        let store = session.store();
        store.add_item(&product(1, "Pure Serenity", 800));
        store.add_item(&product(2, "Blush Elegance", 1500));
        store.add_item(&product(2, "Blush Elegance", 1500));

        let view = CartView::from_store(store);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "\u{20b1}3800.00");

        let elegance = view.items.get(1).unwrap();
        assert_eq!(elegance.quantity, 2);
        assert_eq!(elegance.price, "\u{20b1}1500.00");
        assert_eq!(elegance.line_total, "\u{20b1}3000.00");
    }

    #[test]
    fn test_empty_cart_view_renders_zero_state() {
        let view = CartView::empty(CurrencyCode::PHP);
        assert!(view.is_empty());
        assert_eq!(view.subtotal, "\u{20b1}0.00");
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn test_checkout_view_reads_snapshot_not_cart() {
        let session = Session::new(CurrencyCode::PHP);
        let store = session.store();
        store.add_item(&product(1, "Pure Serenity", 800));
        store.proceed_to_checkout();
        store.add_item(&product(2, "Blush Elegance", 1500));

        let view = CheckoutView::from_store(store);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.total, "\u{20b1}800.00");
    }
}
