//! Seller profile types
//!
//! A seller profile is static configuration describing one simulated seller's
//! negotiation posture: margin floor, bulk discount terms, auto-confirm
//! threshold, and tone. Profiles are constructed once per session and never
//! mutated during a conversation; selecting a different profile starts a
//! fresh conversation.

use serde::{Deserialize, Serialize};

/// Tone of a seller's replies
///
/// Style affects wording, and in exactly one place a numeric adjustment:
/// the discount offered during price negotiation. Everywhere else the
/// computed numbers are identical across styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStyle {
    /// Warm, chatty phrasing
    Friendly,
    /// Neutral, businesslike phrasing
    Professional,
    /// Pushy, urgency-heavy phrasing
    Aggressive,
}

impl ResponseStyle {
    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Friendly => "Friendly",
            Self::Professional => "Professional",
            Self::Aggressive => "Aggressive",
        }
    }
}

/// Static negotiation configuration for one simulated seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerProfile {
    /// Unique seller id
    pub id: String,
    /// Display name
    pub name: String,
    /// Reply tone
    pub response_style: ResponseStyle,
    /// Margin floor in percent: no offer ever goes below
    /// `price * (1 - min_margin_percent / 100)`
    pub min_margin_percent: f64,
    /// Quantity at which bulk pricing starts
    pub bulk_discount_threshold_qty: u32,
    /// Base bulk discount rate in percent
    pub bulk_discount_rate_percent: f64,
    /// Orders priced at or under this amount are confirmed without review
    pub auto_confirm_under_amount: i64,
}
