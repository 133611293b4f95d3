//! Cart line item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// One row in the guest cart: a single product and its quantity.
///
/// Display fields (`product_name`, `product_image`, `price`) are captured
/// at add-time and never refreshed from the catalog. The serialized form of
/// this struct is the persisted cart layout: a JSON array of these objects
/// under a single storage key. `product_image` tolerates older persisted
/// shapes where the field is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Unique key within the cart; at most one line per product.
    pub product_id: ProductId,
    /// Product title as shown when the item was added.
    pub product_name: String,
    /// Optional product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    /// Unit price at add-time, string-encoded.
    pub price: Price,
    /// Number of units; a persisted line always has quantity >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price times quantity for this line.
    ///
    /// Returns `None` if the stored price string does not parse.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.price
            .amount()
            .map(|unit| unit * Decimal::from(self.quantity))
    }
}
