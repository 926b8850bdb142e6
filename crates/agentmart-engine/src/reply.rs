//! Message formatter
//!
//! Renders a computed [`ReplyPlan`] into a [`ChatMessage`]. Tone varies with
//! the seller's response style, but the numbers come from the plan and are
//! identical across styles by construction: the calculator computes once, the
//! templates only interpolate.

use agentmart_types::{ChatMessage, MessageMetadata, Product, ResponseStyle, SellerProfile, Sender};

use crate::offer::{BulkTier, ReplyPlan};

/// The canned generic sentences for the fallback branch, shared across
/// styles. Selection index comes from the deterministic seed hash.
const FALLBACK_SENTENCES: [&str; 3] = [
    "문의 감사합니다! 상품에 대해 더 궁금하신 점이 있으면 편하게 말씀해 주세요.",
    "네, 확인했습니다. 가격, 대량 구매, 주문 관련해서 도와드릴 수 있어요.",
    "좋은 질문이에요. 할인이나 배송 일정이 궁금하시면 알려주세요.",
];

/// Format an integer currency amount with thousands separators
fn fmt_amount(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}원")
    } else {
        format!("{grouped}원")
    }
}

/// Percent rates render without a trailing `.0` for whole numbers
fn fmt_percent(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{}%", rate as i64)
    } else {
        format!("{rate}%")
    }
}

fn fmt_stock(stock_qty: Option<u32>) -> String {
    match stock_qty {
        Some(qty) => format!("재고 {qty}개"),
        None => "재고 문의".to_string(),
    }
}

fn fmt_bulk_table(tiers: &[BulkTier]) -> String {
    tiers
        .iter()
        .map(|tier| match (tier.discount_percent, tier.price) {
            (Some(rate), Some(price)) => {
                format!(
                    "- {}개 이상: {} 할인, 개당 {}",
                    tier.qty,
                    fmt_percent(rate),
                    fmt_amount(price)
                )
            }
            _ => format!("- {}개 이상: 별도 협의", tier.qty),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn greeting_text(
    style: ResponseStyle,
    seller: &SellerProfile,
    product: &Product,
    price: i64,
    ship_by_days: u32,
    eta_days: u32,
    stock_qty: Option<u32>,
) -> String {
    let price = fmt_amount(price);
    let stock = fmt_stock(stock_qty);
    match style {
        ResponseStyle::Friendly => format!(
            "안녕하세요! {}입니다 :) \"{}\" 찾아주셔서 감사해요. 가격은 {}이고, \
             {}일 안에 발송해서 {}일이면 받아보실 수 있어요. ({})",
            seller.name, product.title, price, ship_by_days, eta_days, stock
        ),
        ResponseStyle::Professional => format!(
            "{}입니다. \"{}\" 안내드립니다. 판매가 {}, 출고 {}일 이내, \
             배송 예상 {}일입니다. {}.",
            seller.name, product.title, price, ship_by_days, eta_days, stock
        ),
        ResponseStyle::Aggressive => format!(
            "{}! \"{}\" 지금 {}에 드립니다. {}일 내 바로 출고, {}일이면 도착! \
             {} — 놓치면 후회하십니다.",
            seller.name, product.title, price, ship_by_days, eta_days, stock
        ),
    }
}

fn price_offer_text(
    style: ResponseStyle,
    original: i64,
    offered: i64,
    discount_percent: f64,
) -> String {
    let original = fmt_amount(original);
    let offered = fmt_amount(offered);
    let rate = fmt_percent(discount_percent);
    match style {
        ResponseStyle::Friendly => format!(
            "특별히 {} 할인해 드릴게요! 원래 {}인데 {}에 가져가세요 :)",
            rate, original, offered
        ),
        ResponseStyle::Professional => format!(
            "{} 할인 적용 가능합니다. 정가 {}, 할인가 {}입니다.",
            rate, original, offered
        ),
        ResponseStyle::Aggressive => format!(
            "좋습니다, 화끈하게 {} 쳐드리죠. {}짜리를 {}에! 지금 결정하시면 바로 진행합니다.",
            rate, original, offered
        ),
    }
}

fn price_limit_text(
    style: ResponseStyle,
    bulk_threshold_qty: u32,
    bulk_rate_percent: f64,
) -> String {
    let rate = fmt_percent(bulk_rate_percent);
    match style {
        ResponseStyle::Friendly => format!(
            "죄송해요, 단품은 더 깎아드리기 어려워요 ㅠㅠ 대신 {}개 이상 구매하시면 \
             {} 할인이 항상 적용돼요!",
            bulk_threshold_qty, rate
        ),
        ResponseStyle::Professional => format!(
            "단품 추가 할인은 마진 정책상 불가합니다. 다만 {}개 이상 구매 시 \
             {} 할인이 상시 적용됩니다.",
            bulk_threshold_qty, rate
        ),
        ResponseStyle::Aggressive => format!(
            "이 가격 밑으로는 저도 손해입니다. 진짜 싸게 가져가시려면 {}개 이상 \
             담으세요 — {} 바로 적용해 드립니다.",
            bulk_threshold_qty, rate
        ),
    }
}

fn bulk_offer_text(style: ResponseStyle, tiers: &[BulkTier], auto_confirm_under: i64) -> String {
    let table = fmt_bulk_table(tiers);
    let threshold = fmt_amount(auto_confirm_under);
    match style {
        ResponseStyle::Friendly => format!(
            "대량 구매 환영해요! 수량별 가격은 이렇게 돼요:\n{}\n{} 이하 주문은 \
             확인 없이 바로 진행됩니다 :)",
            table, threshold
        ),
        ResponseStyle::Professional => format!(
            "대량 구매 단가표 안내드립니다.\n{}\n{} 이하 주문 건은 자동 승인 처리됩니다.",
            table, threshold
        ),
        ResponseStyle::Aggressive => format!(
            "물량 받으실 줄 아시네요. 단가표 바로 드립니다:\n{}\n{} 이하는 묻지도 \
             따지지도 않고 바로 출고입니다.",
            table, threshold
        ),
    }
}

fn order_auto_confirmed_text(
    style: ResponseStyle,
    price: i64,
    ship_by_days: u32,
    eta_days: u32,
) -> String {
    let price = fmt_amount(price);
    match style {
        ResponseStyle::Friendly => format!(
            "주문 확정됐어요! {} 결제로 진행할게요. {}일 안에 발송하고 {}일이면 \
             도착해요. 감사합니다 :)",
            price, ship_by_days, eta_days
        ),
        ResponseStyle::Professional => format!(
            "주문이 자동 승인되었습니다. 결제 금액 {}, 출고 {}일 이내, 배송 예상 {}일입니다.",
            price, ship_by_days, eta_days
        ),
        ResponseStyle::Aggressive => format!(
            "바로 확정! {} 결제 즉시 {}일 내 출고, {}일이면 문 앞입니다. 탁월한 선택이십니다.",
            price, ship_by_days, eta_days
        ),
    }
}

fn order_needs_approval_text(style: ResponseStyle, price: i64, auto_confirm_under: i64) -> String {
    let price = fmt_amount(price);
    let threshold = fmt_amount(auto_confirm_under);
    match style {
        ResponseStyle::Friendly => format!(
            "주문 감사해요! 다만 {}는 자동 승인 한도({})를 넘어서 제가 한 번 확인 후 \
             확정해 드릴게요. 금방 연락드릴게요!",
            price, threshold
        ),
        ResponseStyle::Professional => format!(
            "주문 접수되었습니다. 결제 금액 {}가 자동 승인 한도 {}를 초과하여 판매자 \
             승인 후 확정됩니다.",
            price, threshold
        ),
        ResponseStyle::Aggressive => format!(
            "{}짜리 주문, 화끈하시네요. 한도({}) 초과 건이라 제가 직접 컨펌하고 바로 \
             진행하겠습니다.",
            price, threshold
        ),
    }
}

/// Render a reply plan into a seller chat message
///
/// The metadata tag follows the branch outcome; fallback replies carry no
/// metadata. The message id and ISO-8601 timestamp are captured at
/// formatting time.
pub fn format_reply(
    seller: &SellerProfile,
    product: &Product,
    plan: &ReplyPlan,
    round: u32,
) -> ChatMessage {
    let style = seller.response_style;

    let (text, metadata) = match plan {
        ReplyPlan::ProductInfo { price, ship_by_days, eta_days, stock_qty } => (
            greeting_text(style, seller, product, *price, *ship_by_days, *eta_days, *stock_qty),
            Some(MessageMetadata::ProductInfo { price: *price }),
        ),

        ReplyPlan::PriceOffer { original, offered, discount_percent } => (
            price_offer_text(style, *original, *offered, *discount_percent),
            Some(MessageMetadata::PriceOffer {
                original: *original,
                offered: *offered,
                discount_percent: *discount_percent,
            }),
        ),

        ReplyPlan::PriceLimit { bulk_threshold_qty, bulk_rate_percent } => (
            price_limit_text(style, *bulk_threshold_qty, *bulk_rate_percent),
            Some(MessageMetadata::PriceLimit),
        ),

        ReplyPlan::BulkOffer { tiers, auto_confirm_under } => (
            bulk_offer_text(style, tiers, *auto_confirm_under),
            Some(MessageMetadata::BulkOffer),
        ),

        ReplyPlan::OrderAutoConfirmed { price, ship_by_days, eta_days } => (
            order_auto_confirmed_text(style, *price, *ship_by_days, *eta_days),
            Some(MessageMetadata::OrderIntent),
        ),

        ReplyPlan::OrderNeedsApproval { price, auto_confirm_under } => (
            order_needs_approval_text(style, *price, *auto_confirm_under),
            Some(MessageMetadata::OrderIntent),
        ),

        ReplyPlan::Fallback { variant } => {
            let idx = (*variant).min(FALLBACK_SENTENCES.len() - 1);
            (FALLBACK_SENTENCES[idx].to_string(), None)
        }
    };

    ChatMessage::new(Sender::Seller, text, round, metadata)
}
