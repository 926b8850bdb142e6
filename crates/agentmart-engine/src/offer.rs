//! Offer calculator
//!
//! Computes the numeric content of a reply for a classified branch. Every
//! computed price uses the same rounding rule, round-half-up to the nearest
//! integer; mixing rounding rules here is a correctness defect.
//!
//! The margin floor is a hard invariant: a `PriceOffer` is only emitted when
//! the offered price stays at or above `round(price * (1 - min_margin/100))`.
//! When the style-adjusted discount would land below the floor, the plan
//! degrades to `PriceLimit` instead of ever carrying a violating offer.

use agentmart_types::{Product, ResponseStyle, SellerProfile};

use crate::classify::Branch;
use crate::seed::seed_hash;

/// Discount adjustment per response style, in percent points. Tunable
/// business constants, not load-bearing algorithmic choices.
const AGGRESSIVE_DISCOUNT_BONUS: f64 = 2.0;
const PROFESSIONAL_DISCOUNT_PENALTY: f64 = 1.0;

/// Extra discount points granted at the second bulk tier
const TIER2_EXTRA_DISCOUNT: f64 = 3.0;
/// Second tier kicks in at 3x the bulk threshold
const TIER2_QTY_MULTIPLIER: u32 = 3;
/// Third tier (negotiated separately) is quoted at 5x the threshold
const TIER3_QTY_MULTIPLIER: u32 = 5;

/// Number of canned fallback sentences to pick from
pub const FALLBACK_VARIANTS: usize = 3;

/// One row of a bulk pricing table
#[derive(Debug, Clone, PartialEq)]
pub struct BulkTier {
    /// Minimum quantity for this tier
    pub qty: u32,
    /// Discount rate in percent; `None` for the negotiated-separately row
    pub discount_percent: Option<f64>,
    /// Tier unit price; `None` for the negotiated-separately row
    pub price: Option<i64>,
}

/// Numeric reply content for one branch, computed once and shared by every
/// phrasing style
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyPlan {
    /// Listed price and logistics, verbatim
    ProductInfo {
        price: i64,
        ship_by_days: u32,
        eta_days: u32,
        stock_qty: Option<u32>,
    },
    /// A concrete discounted offer that respects the margin floor
    PriceOffer {
        original: i64,
        offered: i64,
        discount_percent: f64,
    },
    /// The requested discount would break the margin floor; the standing
    /// bulk terms are surfaced as informational text instead (the floor
    /// itself is never quoted to the buyer)
    PriceLimit {
        bulk_threshold_qty: u32,
        bulk_rate_percent: f64,
    },
    /// Tiered bulk pricing
    BulkOffer {
        tiers: Vec<BulkTier>,
        auto_confirm_under: i64,
    },
    /// Order accepted without review
    OrderAutoConfirmed {
        price: i64,
        ship_by_days: u32,
        eta_days: u32,
    },
    /// Order above the auto-confirm threshold, needs seller approval
    OrderNeedsApproval {
        price: i64,
        auto_confirm_under: i64,
    },
    /// Generic sentence picked deterministically from the canned set
    Fallback { variant: usize },
}

/// Round-half-up to the nearest integer currency unit
fn round_currency(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Price after applying a percent discount, round-half-up
fn discounted(price: i64, rate_percent: f64) -> i64 {
    round_currency(price as f64 * (1.0 - rate_percent / 100.0))
}

/// The style-adjusted discount rate for price negotiation
fn negotiation_discount(seller: &SellerProfile) -> f64 {
    match seller.response_style {
        ResponseStyle::Aggressive => {
            seller.bulk_discount_rate_percent + AGGRESSIVE_DISCOUNT_BONUS
        }
        ResponseStyle::Friendly => seller.bulk_discount_rate_percent,
        ResponseStyle::Professional => {
            seller.bulk_discount_rate_percent - PROFESSIONAL_DISCOUNT_PENALTY
        }
    }
}

/// Compute the numeric reply content for a classified branch
///
/// Pure: same inputs always produce the same plan. A missing product price
/// falls back to [`agentmart_types::FALLBACK_PRICE`]; out-of-range seller
/// configuration degrades arithmetically (a negative floor simply lets every
/// offer through) rather than panicking.
pub fn plan_reply(
    seller: &SellerProfile,
    product: &Product,
    branch: Branch,
    round: u32,
) -> ReplyPlan {
    let price = product.effective_price();

    match branch {
        Branch::Greeting => ReplyPlan::ProductInfo {
            price,
            ship_by_days: product.ship_by_days,
            eta_days: product.eta_days,
            stock_qty: product.stock_qty,
        },

        Branch::PriceNegotiation => {
            let min_price = discounted(price, seller.min_margin_percent);
            let discount_percent = negotiation_discount(seller);
            let offered = discounted(price, discount_percent);

            if offered >= min_price {
                ReplyPlan::PriceOffer {
                    original: price,
                    offered,
                    discount_percent,
                }
            } else {
                ReplyPlan::PriceLimit {
                    bulk_threshold_qty: seller.bulk_discount_threshold_qty,
                    bulk_rate_percent: seller.bulk_discount_rate_percent,
                }
            }
        }

        Branch::BulkOrder => {
            let base_qty = seller.bulk_discount_threshold_qty;
            let base_rate = seller.bulk_discount_rate_percent;
            let tier2_rate = base_rate + TIER2_EXTRA_DISCOUNT;

            let tiers = vec![
                BulkTier {
                    qty: base_qty,
                    discount_percent: Some(base_rate),
                    price: Some(discounted(price, base_rate)),
                },
                BulkTier {
                    qty: base_qty.saturating_mul(TIER2_QTY_MULTIPLIER),
                    discount_percent: Some(tier2_rate),
                    price: Some(discounted(price, tier2_rate)),
                },
                // Negotiated separately, no computed price
                BulkTier {
                    qty: base_qty.saturating_mul(TIER3_QTY_MULTIPLIER),
                    discount_percent: None,
                    price: None,
                },
            ];

            ReplyPlan::BulkOffer {
                tiers,
                auto_confirm_under: seller.auto_confirm_under_amount,
            }
        }

        Branch::OrderIntent => {
            // Inclusive boundary: a price exactly at the threshold still
            // auto-confirms.
            if price <= seller.auto_confirm_under_amount {
                ReplyPlan::OrderAutoConfirmed {
                    price,
                    ship_by_days: product.ship_by_days,
                    eta_days: product.eta_days,
                }
            } else {
                ReplyPlan::OrderNeedsApproval {
                    price,
                    auto_confirm_under: seller.auto_confirm_under_amount,
                }
            }
        }

        Branch::Fallback => {
            let seed = format!("{}:{}:{}", seller.id, product.id, round);
            let variant = (seed_hash(&seed) * FALLBACK_VARIANTS as f64) as usize;
            ReplyPlan::Fallback {
                variant: variant.min(FALLBACK_VARIANTS - 1),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentmart_types::FALLBACK_PRICE;

    fn seller(style: ResponseStyle) -> SellerProfile {
        SellerProfile {
            id: "seller_test".to_string(),
            name: "테스트 셀러".to_string(),
            response_style: style,
            min_margin_percent: 10.0,
            bulk_discount_threshold_qty: 10,
            bulk_discount_rate_percent: 5.0,
            auto_confirm_under_amount: 30_000,
        }
    }

    fn product(price: Option<i64>) -> Product {
        Product {
            id: "prod_test".to_string(),
            title: "테스트 상품".to_string(),
            price,
            stock_qty: Some(100),
            ship_by_days: 1,
            eta_days: 3,
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_currency(9199.5), 9200);
        assert_eq!(round_currency(9199.4), 9199);
        assert_eq!(discounted(10_000, 8.0), 9_200);
    }

    #[test]
    fn test_greeting_surfaces_listed_price_verbatim() {
        let plan = plan_reply(
            &seller(ResponseStyle::Friendly),
            &product(Some(15_000)),
            Branch::Greeting,
            0,
        );
        assert_eq!(
            plan,
            ReplyPlan::ProductInfo {
                price: 15_000,
                ship_by_days: 1,
                eta_days: 3,
                stock_qty: Some(100),
            }
        );
    }

    #[test]
    fn test_negotiation_style_deltas() {
        // Base rate 5%: friendly 5, aggressive 7, professional 4.
        let p = product(Some(10_000));

        let friendly = plan_reply(&seller(ResponseStyle::Friendly), &p, Branch::PriceNegotiation, 1);
        assert_eq!(
            friendly,
            ReplyPlan::PriceOffer { original: 10_000, offered: 9_500, discount_percent: 5.0 }
        );

        let aggressive =
            plan_reply(&seller(ResponseStyle::Aggressive), &p, Branch::PriceNegotiation, 1);
        assert_eq!(
            aggressive,
            ReplyPlan::PriceOffer { original: 10_000, offered: 9_300, discount_percent: 7.0 }
        );

        let professional =
            plan_reply(&seller(ResponseStyle::Professional), &p, Branch::PriceNegotiation, 1);
        assert_eq!(
            professional,
            ReplyPlan::PriceOffer { original: 10_000, offered: 9_600, discount_percent: 4.0 }
        );
    }

    #[test]
    fn test_margin_floor_forces_price_limit() {
        // Margin floor 5%, base rate 20%, aggressive +2 => discount 22,
        // offered 7800 < floor 9500: must degrade to PriceLimit.
        let mut s = seller(ResponseStyle::Aggressive);
        s.min_margin_percent = 5.0;
        s.bulk_discount_rate_percent = 20.0;

        let plan = plan_reply(&s, &product(Some(10_000)), Branch::PriceNegotiation, 2);
        assert_eq!(
            plan,
            ReplyPlan::PriceLimit {
                bulk_threshold_qty: 10,
                bulk_rate_percent: 20.0,
            }
        );
    }

    #[test]
    fn test_margin_floor_invariant_holds_across_styles() {
        let styles = [
            ResponseStyle::Friendly,
            ResponseStyle::Professional,
            ResponseStyle::Aggressive,
        ];
        let prices = [500_i64, 9_900, 10_000, 129_000];
        let margins = [0.0, 5.0, 10.0, 25.0];
        let rates = [0.0, 5.0, 8.0, 20.0];

        for style in styles {
            for &price in &prices {
                for &margin in &margins {
                    for &rate in &rates {
                        let mut s = seller(style);
                        s.min_margin_percent = margin;
                        s.bulk_discount_rate_percent = rate;

                        let plan =
                            plan_reply(&s, &product(Some(price)), Branch::PriceNegotiation, 1);
                        if let ReplyPlan::PriceOffer { offered, .. } = plan {
                            let floor = discounted(price, margin);
                            assert!(
                                offered >= floor,
                                "offered {offered} below floor {floor} \
                                 (price {price}, margin {margin}, rate {rate}, {style:?})"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_negative_margin_floor_degrades_gracefully() {
        // minMarginPercent > 100 makes the floor negative; every offer
        // satisfies it and nothing panics.
        let mut s = seller(ResponseStyle::Friendly);
        s.min_margin_percent = 150.0;

        let plan = plan_reply(&s, &product(Some(10_000)), Branch::PriceNegotiation, 1);
        assert!(matches!(plan, ReplyPlan::PriceOffer { offered: 9_500, .. }));
    }

    #[test]
    fn test_bulk_tiers() {
        // threshold 10 @ 5%, price 20000 => 19000; tier2 30 @ 8% => 18400.
        let mut s = seller(ResponseStyle::Professional);
        s.bulk_discount_threshold_qty = 10;
        s.bulk_discount_rate_percent = 5.0;

        let plan = plan_reply(&s, &product(Some(20_000)), Branch::BulkOrder, 1);
        let ReplyPlan::BulkOffer { tiers, auto_confirm_under } = plan else {
            panic!("expected BulkOffer");
        };

        assert_eq!(auto_confirm_under, 30_000);
        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0].qty, 10);
        assert_eq!(tiers[0].price, Some(19_000));
        assert_eq!(tiers[1].qty, 30);
        assert_eq!(tiers[1].discount_percent, Some(8.0));
        assert_eq!(tiers[1].price, Some(18_400));
        assert_eq!(tiers[2].qty, 50);
        assert_eq!(tiers[2].discount_percent, None);
        assert_eq!(tiers[2].price, None);
    }

    #[test]
    fn test_order_auto_confirm_inclusive_boundary() {
        // Price exactly at the threshold auto-confirms.
        let plan = plan_reply(
            &seller(ResponseStyle::Friendly),
            &product(Some(30_000)),
            Branch::OrderIntent,
            1,
        );
        assert!(matches!(plan, ReplyPlan::OrderAutoConfirmed { price: 30_000, .. }));
    }

    #[test]
    fn test_order_above_threshold_needs_approval() {
        let plan = plan_reply(
            &seller(ResponseStyle::Friendly),
            &product(Some(30_001)),
            Branch::OrderIntent,
            1,
        );
        assert_eq!(
            plan,
            ReplyPlan::OrderNeedsApproval { price: 30_001, auto_confirm_under: 30_000 }
        );
    }

    #[test]
    fn test_missing_price_uses_fallback_price() {
        let plan = plan_reply(
            &seller(ResponseStyle::Friendly),
            &product(None),
            Branch::Greeting,
            0,
        );
        assert!(matches!(plan, ReplyPlan::ProductInfo { price, .. } if price == FALLBACK_PRICE));
    }

    #[test]
    fn test_fallback_variant_is_deterministic_and_in_range() {
        let s = seller(ResponseStyle::Friendly);
        let p = product(Some(10_000));

        let first = plan_reply(&s, &p, Branch::Fallback, 4);
        let second = plan_reply(&s, &p, Branch::Fallback, 4);
        assert_eq!(first, second);

        for round in 0..20 {
            let plan = plan_reply(&s, &p, Branch::Fallback, round);
            let ReplyPlan::Fallback { variant } = plan else {
                panic!("expected Fallback");
            };
            assert!(variant < FALLBACK_VARIANTS);
        }
    }
}
