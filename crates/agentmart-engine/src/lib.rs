//! Agentmart Engine - Simulated seller-agent negotiation responder
//!
//! A pure, synchronous reply pipeline for the storefront demo:
//!
//! 1. **Classifier** picks a response branch from the buyer's free text
//! 2. **Offer calculator** computes the branch's numbers from the seller's
//!    margin and discount configuration
//! 3. **Formatter** renders branch + numbers into a chat message with a
//!    typed metadata payload
//!
//! # Key Principle
//!
//! **Numbers are computed once; style only changes wording.**
//!
//! No component performs I/O or keeps module-level state: every call is
//! independent given its explicit inputs, and determinism substitutes for
//! concurrency control. The caller owns the conversation log and the round
//! counter.

pub mod classify;
pub mod offer;
pub mod reply;
pub mod seed;

pub use classify::{classify, Branch};
pub use offer::{plan_reply, BulkTier, ReplyPlan, FALLBACK_VARIANTS};
pub use reply::format_reply;
pub use seed::seed_hash;

use agentmart_types::{ChatMessage, Product, SellerProfile};

/// Generate the seller's next reply for one conversation turn
///
/// The round counter is zero-based and caller-owned; round 0 always greets.
/// This function never fails: missing catalog data falls back to defaults
/// and unrecognized text becomes a generic fallback reply.
pub fn generate_response(
    seller: &SellerProfile,
    product: &Product,
    buyer_message: &str,
    round: u32,
) -> ChatMessage {
    let branch = classify::classify(buyer_message, round);
    let plan = offer::plan_reply(seller, product, branch, round);
    reply::format_reply(seller, product, &plan, round)
}
