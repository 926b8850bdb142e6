//! Seller profile registry
//!
//! A finite fixed set of simulated seller profiles, one per response style in
//! the reference deployment. Profiles are read-only; a conversation takes a
//! clone and never mutates it.

use agentmart_types::{AgentmartError, Result, ResponseStyle, SellerProfile};

/// In-memory registry of built-in seller profiles
#[derive(Debug, Clone)]
pub struct SellerRegistry {
    sellers: Vec<SellerProfile>,
}

impl SellerRegistry {
    /// The reference seller set
    ///
    /// 번개잡화점 is configured so its style-adjusted negotiation discount
    /// always lands below its margin floor; it demos the price-limit branch.
    pub fn builtin() -> Self {
        Self {
            sellers: vec![
                SellerProfile {
                    id: "seller_haru".to_string(),
                    name: "하루마켓".to_string(),
                    response_style: ResponseStyle::Friendly,
                    min_margin_percent: 10.0,
                    bulk_discount_threshold_qty: 10,
                    bulk_discount_rate_percent: 5.0,
                    auto_confirm_under_amount: 30_000,
                },
                SellerProfile {
                    id: "seller_daon".to_string(),
                    name: "다온상사".to_string(),
                    response_style: ResponseStyle::Professional,
                    min_margin_percent: 15.0,
                    bulk_discount_threshold_qty: 20,
                    bulk_discount_rate_percent: 7.0,
                    auto_confirm_under_amount: 50_000,
                },
                SellerProfile {
                    id: "seller_bolt".to_string(),
                    name: "번개잡화점".to_string(),
                    response_style: ResponseStyle::Aggressive,
                    min_margin_percent: 5.0,
                    bulk_discount_threshold_qty: 5,
                    bulk_discount_rate_percent: 8.0,
                    auto_confirm_under_amount: 20_000,
                },
            ],
        }
    }

    /// Look up a seller by id
    pub fn get(&self, seller_id: &str) -> Result<&SellerProfile> {
        self.sellers
            .iter()
            .find(|s| s.id == seller_id)
            .ok_or_else(|| AgentmartError::SellerNotFound {
                seller_id: seller_id.to_string(),
            })
    }

    /// All registered sellers
    pub fn all(&self) -> &[SellerProfile] {
        &self.sellers
    }
}

impl Default for SellerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_style() {
        let registry = SellerRegistry::builtin();
        let styles: Vec<_> = registry.all().iter().map(|s| s.response_style).collect();
        assert!(styles.contains(&ResponseStyle::Friendly));
        assert!(styles.contains(&ResponseStyle::Professional));
        assert!(styles.contains(&ResponseStyle::Aggressive));
    }

    #[test]
    fn test_get_known_seller() {
        let registry = SellerRegistry::builtin();
        let seller = registry.get("seller_haru").unwrap();
        assert_eq!(seller.name, "하루마켓");
    }

    #[test]
    fn test_get_unknown_seller_is_typed_error() {
        let registry = SellerRegistry::builtin();
        let err = registry.get("seller_ghost").unwrap_err();
        assert!(matches!(err, AgentmartError::SellerNotFound { .. }));
    }
}
