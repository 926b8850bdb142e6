//! Response classifier
//!
//! Keyword-driven intent detection over the buyer's free-text message. The
//! branch table is evaluated in priority order and the first match wins; the
//! ordering is part of the contract, not incidental — a message containing
//! both a greeting word and a discount word classifies as a greeting.

/// The selected response category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Opening turn or product-intro question
    Greeting,
    /// Discount / price haggling
    PriceNegotiation,
    /// Bulk quantity inquiry
    BulkOrder,
    /// Intent to purchase
    OrderIntent,
    /// Nothing recognized
    Fallback,
}

/// Static keyword lists, matched against the lower-cased message
const GREETING_KEYWORDS: &[&str] = &[
    "안녕", "반갑", "hello", "소개", "어떤 상품", "상품 설명", "궁금",
];

const PRICE_KEYWORDS: &[&str] = &[
    "할인", "가격", "깎아", "싸게", "네고", "저렴", "discount", "price",
];

const BULK_KEYWORDS: &[&str] = &[
    "대량", "수량", "여러 개", "많이", "도매", "bulk",
];

const ORDER_KEYWORDS: &[&str] = &[
    "주문", "구매", "결제", "살게", "order", "buy",
];

/// Priority-ordered branch table; the first entry whose keyword set matches
/// wins. Greeting dominates price dominates bulk dominates order.
const BRANCH_TABLE: &[(Branch, &[&str])] = &[
    (Branch::Greeting, GREETING_KEYWORDS),
    (Branch::PriceNegotiation, PRICE_KEYWORDS),
    (Branch::BulkOrder, BULK_KEYWORDS),
    (Branch::OrderIntent, ORDER_KEYWORDS),
];

/// Classify a buyer message into a response branch
///
/// Round 0 is always a greeting regardless of text. An empty or unrecognized
/// message on a later round is a fallback, not an error.
pub fn classify(buyer_message: &str, round: u32) -> Branch {
    if round == 0 {
        return Branch::Greeting;
    }

    let text = buyer_message.to_lowercase();
    for (branch, keywords) in BRANCH_TABLE {
        if keywords.iter().any(|kw| text.contains(kw)) {
            return *branch;
        }
    }

    Branch::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_zero_is_always_greeting() {
        assert_eq!(classify("할인해주세요", 0), Branch::Greeting);
        assert_eq!(classify("", 0), Branch::Greeting);
    }

    #[test]
    fn test_greeting_keywords() {
        assert_eq!(classify("안녕하세요!", 2), Branch::Greeting);
        assert_eq!(classify("이 상품 설명 좀 해주세요", 2), Branch::Greeting);
        assert_eq!(classify("Hello there", 2), Branch::Greeting);
    }

    #[test]
    fn test_price_negotiation_keywords() {
        assert_eq!(classify("할인 돼요?", 1), Branch::PriceNegotiation);
        assert_eq!(classify("가격 좀 깎아주세요", 1), Branch::PriceNegotiation);
        assert_eq!(classify("can you give me a discount?", 1), Branch::PriceNegotiation);
    }

    #[test]
    fn test_bulk_order_keywords() {
        assert_eq!(classify("대량으로 필요해요", 1), Branch::BulkOrder);
        assert_eq!(classify("50개 수량 가능해요?", 1), Branch::BulkOrder);
    }

    #[test]
    fn test_order_intent_keywords() {
        assert_eq!(classify("주문할게요", 1), Branch::OrderIntent);
        assert_eq!(classify("바로 구매하겠습니다", 1), Branch::OrderIntent);
    }

    #[test]
    fn test_fallback_for_unrecognized() {
        assert_eq!(classify("오늘 날씨가 좋네요", 1), Branch::Fallback);
    }

    #[test]
    fn test_blank_message_is_fallback_after_round_zero() {
        assert_eq!(classify("", 1), Branch::Fallback);
        assert_eq!(classify("   \t", 5), Branch::Fallback);
    }

    #[test]
    fn test_priority_greeting_beats_price() {
        // Contains both a greeting word and a discount word; the greeting
        // keyword set is evaluated first.
        assert_eq!(classify("안녕하세요, 할인 가능한가요?", 3), Branch::Greeting);
    }

    #[test]
    fn test_priority_price_beats_bulk_and_order() {
        assert_eq!(classify("대량 주문인데 할인 되나요?", 2), Branch::PriceNegotiation);
    }

    #[test]
    fn test_priority_bulk_beats_order() {
        assert_eq!(classify("대량으로 주문하고 싶어요", 2), Branch::BulkOrder);
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert_eq!(classify("DISCOUNT please", 1), Branch::PriceNegotiation);
        assert_eq!(classify("BULK pricing?", 1), Branch::BulkOrder);
    }
}
