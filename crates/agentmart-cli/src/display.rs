//! Display utilities for the CLI

use agentmart_types::{ChatMessage, Product, SellerProfile, Sender};
use colored::*;

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!("{}", "━".repeat(60).bright_black());
    println!(" {}", title.bright_white().bold());
    println!("{}", "━".repeat(60).bright_black());
}

/// Print an error message
pub fn error(message: &str) {
    println!("  {} {}", "✗".bright_red(), message.bright_red());
}

/// Print an info message
pub fn info(message: &str) {
    println!("  {} {}", "→".bright_blue(), message);
}

/// Print one seller row
pub fn seller_row(seller: &SellerProfile) {
    println!(
        "  {}  {} ({})",
        seller.id.bright_cyan(),
        seller.name.bright_white(),
        seller.response_style.display_name()
    );
    println!(
        "      margin floor {}%, bulk {}+ @ {}%, auto-confirm ≤ {}",
        seller.min_margin_percent,
        seller.bulk_discount_threshold_qty,
        seller.bulk_discount_rate_percent,
        seller.auto_confirm_under_amount
    );
}

/// Print one product row
pub fn product_row(product: &Product) {
    let price = match product.price {
        Some(p) => format!("{p}원"),
        None => "가격 미정".to_string(),
    };
    println!(
        "  {}  {} — {}",
        product.id.bright_cyan(),
        product.title.bright_white(),
        price.bright_yellow()
    );
}

/// Print a chat message, colored by sender, with pretty metadata
pub fn chat_message(message: &ChatMessage) {
    let (label, text) = match message.sender {
        Sender::Buyer => ("구매자".bright_green(), message.text.normal()),
        Sender::Seller => ("판매자".bright_cyan(), message.text.bright_white()),
        Sender::System => ("시스템".bright_black(), message.text.bright_black()),
    };
    println!("  {label} {text}");

    if let Some(metadata) = &message.metadata {
        if let Ok(json) = serde_json::to_string(metadata) {
            println!("      {}", json.bright_black());
        }
    }
}
