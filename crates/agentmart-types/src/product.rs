//! Product types
//!
//! Minimal pricing and logistics facts consumed by the negotiation engine.
//! Products are owned by the catalog and referenced read-only.

use serde::{Deserialize, Serialize};

/// Price substituted when a catalog row arrives without one, so the reply
/// pipeline never fails on incomplete data
pub const FALLBACK_PRICE: i64 = 10_000;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id
    pub id: String,
    /// Display title
    pub title: String,
    /// Listed price in integer currency units; `None` for incomplete rows
    pub price: Option<i64>,
    /// Units in stock, if tracked
    pub stock_qty: Option<u32>,
    /// Days until the order ships
    pub ship_by_days: u32,
    /// Days until delivery after shipping
    pub eta_days: u32,
}

impl Product {
    /// The price the engine computes with: the listed price, or
    /// [`FALLBACK_PRICE`] when the row has none
    pub fn effective_price(&self) -> i64 {
        self.price.unwrap_or(FALLBACK_PRICE)
    }
}
