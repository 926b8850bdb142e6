//! Chat message types
//!
//! Messages are the output unit of the negotiation engine: immutable once
//! created, appended by the caller to an ordered conversation log. Computed
//! numbers ride in a typed metadata payload so the UI renders them distinctly
//! from prose.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The human (or agent) shopping
    Buyer,
    /// The simulated seller agent
    Seller,
    /// Storefront notices (seller switched, etc.)
    System,
}

/// Structured payload attached to a seller reply
///
/// Tagged union keyed by branch outcome. Fallback replies carry no metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageMetadata {
    /// Listed price surfaced with the greeting
    ProductInfo {
        /// Listed price
        price: i64,
    },
    /// A concrete discounted offer
    PriceOffer {
        /// Listed price before discount
        original: i64,
        /// Offered price after discount
        offered: i64,
        /// Discount applied, in percent
        discount_percent: f64,
    },
    /// The requested discount would break the seller's margin floor
    PriceLimit,
    /// Tiered bulk pricing was quoted
    BulkOffer,
    /// The buyer signalled intent to order
    OrderIntent,
}

/// One message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique per-message id (`msg_<epoch-millis>_<round>_<suffix>`)
    ///
    /// The random suffix keeps ids distinct when both messages of a turn
    /// are created within the same millisecond.
    pub id: String,
    /// Who sent it
    pub sender: Sender,
    /// Rendered text
    pub text: String,
    /// When the message was formatted
    pub timestamp: DateTime<Utc>,
    /// Structured payload, present on computed seller replies
    pub metadata: Option<MessageMetadata>,
}

impl ChatMessage {
    /// Create a message, capturing the timestamp now
    pub fn new(
        sender: Sender,
        text: impl Into<String>,
        round: u32,
        metadata: Option<MessageMetadata>,
    ) -> Self {
        let timestamp = Utc::now();
        Self {
            id: format!(
                "msg_{}_{}_{}",
                timestamp.timestamp_millis(),
                round,
                &Uuid::new_v4().to_string()[..8]
            ),
            sender,
            text: text.into(),
            timestamp,
            metadata,
        }
    }

    /// Create a buyer message for the given round
    pub fn buyer(text: impl Into<String>, round: u32) -> Self {
        Self::new(Sender::Buyer, text, round, None)
    }

    /// Create a system notice
    pub fn system(text: impl Into<String>, round: u32) -> Self {
        Self::new(Sender::System, text, round, None)
    }
}
