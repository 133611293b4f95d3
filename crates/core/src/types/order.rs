//! Order-creation payload types.
//!
//! Orders are created by an external REST API, not by this repository. These
//! types describe the request body that API accepts for guest checkout: the
//! cart's lines map 1:1 onto `items` by dropping display fields.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::line::CartLine;

/// One item of an order-creation request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItemInput {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: u32,
}

impl From<&CartLine> for OrderItemInput {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            quantity: line.quantity,
        }
    }
}

/// Request body for guest order creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderRequest {
    /// Recipient name.
    pub receiver_name: String,
    /// Recipient phone number, also used for guest order lookup.
    pub receiver_phone: String,
    /// Shipping address.
    pub receiver_address: String,
    /// Optional free-form note to the seller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// Ordered items, snapshotted from the cart.
    pub items: Vec<OrderItemInput>,
}

impl CreateOrderRequest {
    /// Build an order request from cart lines plus shipping details.
    #[must_use]
    pub fn from_cart(
        lines: &[CartLine],
        receiver_name: impl Into<String>,
        receiver_phone: impl Into<String>,
        receiver_address: impl Into<String>,
        remark: Option<String>,
    ) -> Self {
        Self {
            receiver_name: receiver_name.into(),
            receiver_phone: receiver_phone.into(),
            receiver_address: receiver_address.into(),
            remark,
            items: lines.iter().map(OrderItemInput::from).collect(),
        }
    }
}
