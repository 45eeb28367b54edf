//! Cart line type.

use petal_market_core::{Money, Product, ProductId};
use serde::{Deserialize, Serialize};

/// One catalog product plus the quantity of it currently in the cart.
///
/// Within the working cart at most one line exists per [`ProductId`];
/// repeated adds accumulate into the existing line's quantity. A stored
/// line's quantity is always at least 1 - a decrement that reaches zero
/// removes the line entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The catalog entry this line refers to.
    pub product: Product,
    /// Units of the product in the cart (>= 1).
    pub quantity: u32,
}

impl CartLine {
    /// Create a fresh line with quantity 1.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product identifier this line is keyed on.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use petal_market_core::{CurrencyCode, ImageRef};
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_new_line_starts_at_one() {
        let product = Product::new(
            ProductId::new(2),
            "Blush Elegance",
            Money::new(Decimal::new(1500, 0), CurrencyCode::PHP),
            ImageRef::new("pink.jpg"),
        );
        let line = CartLine::new(product);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.product_id(), ProductId::new(2));
    }

    #[test]
    fn test_line_total_scales_with_quantity() {
        let product = Product::new(
            ProductId::new(1),
            "Pure Serenity",
            Money::new(Decimal::new(800, 0), CurrencyCode::PHP),
            ImageRef::new("white.jpg"),
        );
        let line = CartLine {
            product,
            quantity: 3,
        };
        assert_eq!(line.line_total().amount, Decimal::new(2400, 0));
    }
}
