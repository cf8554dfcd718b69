//! Order Model
//!
//! Persisted shape (one JSON array per collection):
//!
//! ```json
//! [ { "order_id": "A1", "customer": "Bob",
//!     "items": [ { "name": "Coffee", "price": 50, "quantity": 2 } ] } ]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LineItemError;

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    /// Unit price in whole currency units
    pub price: u64,
    pub quantity: u64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: u64, quantity: u64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// price × quantity, exact for any `u64` inputs
    pub fn subtotal(&self) -> u128 {
        u128::from(self.price) * u128::from(self.quantity)
    }
}

/// Customer order (pending or completed)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub order_id: String,
    pub customer: String,
    pub items: Vec<LineItem>,
}

impl Order {
    pub fn new(
        order_id: impl Into<String>,
        customer: impl Into<String>,
        items: Vec<LineItem>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer: customer.into(),
            items,
        }
    }

    /// Grand total, always derived from the items
    pub fn total(&self) -> u128 {
        self.items
            .iter()
            .fold(0u128, |acc, item| acc.saturating_add(item.subtotal()))
    }
}

/// Normalize operator input into an order id (trim + uppercase)
pub fn normalize_order_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Whether `order_id` is already taken in the given collection
pub fn contains_order_id(orders: &[Order], order_id: &str) -> bool {
    orders.iter().any(|o| o.order_id == order_id)
}

/// Map full-width digits (`０`..`９`, as typed by CJK input methods) to ASCII
pub fn normalize_digits(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            _ => c,
        })
        .collect()
}

/// Parse a unit price: decimal digits only, zero allowed
pub fn parse_price(raw: &str) -> Result<u64, LineItemError> {
    parse_digits(raw).ok_or(LineItemError::InvalidPrice)
}

/// Parse a quantity: decimal digits only, at least 1
pub fn parse_quantity(raw: &str) -> Result<u64, LineItemError> {
    match parse_digits(raw) {
        Some(q) if q >= 1 => Ok(q),
        _ => Err(LineItemError::InvalidQuantity),
    }
}

// Rejects signs, whitespace inside the number and overflow
fn parse_digits(raw: &str) -> Option<u64> {
    let normalized = normalize_digits(raw);
    let s = normalized.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
