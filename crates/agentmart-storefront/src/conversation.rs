//! Conversation store
//!
//! Owns the append-only message log and the round counter the engine itself
//! stays stateless about. Insertion order is chronological order; messages
//! are never edited or removed. Switching seller or product resets the
//! conversation — no state leaks across profiles.

use agentmart_engine::generate_response;
use agentmart_types::{ChatMessage, Product, SellerProfile};
use uuid::Uuid;

/// One buyer/seller conversation
#[derive(Debug, Clone)]
pub struct Conversation {
    id: Uuid,
    seller: SellerProfile,
    product: Product,
    messages: Vec<ChatMessage>,
    round: u32,
}

impl Conversation {
    /// Open a conversation; the seller greets at round 0
    pub fn open(seller: SellerProfile, product: Product) -> Self {
        let greeting = generate_response(&seller, &product, "", 0);
        tracing::info!(
            seller_id = %seller.id,
            product_id = %product.id,
            "Opening conversation"
        );
        Self {
            id: Uuid::new_v4(),
            seller,
            product,
            messages: vec![greeting],
            round: 1,
        }
    }

    /// Conversation id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The seller this conversation is with
    pub fn seller(&self) -> &SellerProfile {
        &self.seller
    }

    /// The product under discussion
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Current zero-based round counter (next round to be played)
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The ordered message log
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the buyer's message and the seller's computed reply
    ///
    /// Exactly two messages are appended per call, buyer first. Returns the
    /// seller reply.
    pub fn send(&mut self, buyer_text: &str) -> &ChatMessage {
        let round = self.round;
        self.messages.push(ChatMessage::buyer(buyer_text, round));

        let reply = generate_response(&self.seller, &self.product, buyer_text, round);
        tracing::info!(
            conversation_id = %self.id,
            round,
            metadata = ?reply.metadata,
            "Seller replied"
        );
        self.messages.push(reply);
        self.round += 1;

        // Reply is the message just pushed; messages is never empty here.
        &self.messages[self.messages.len() - 1]
    }

    /// Restart with a different seller; the log and round reset
    pub fn switch_seller(&mut self, seller: SellerProfile) {
        tracing::info!(
            conversation_id = %self.id,
            from = %self.seller.id,
            to = %seller.id,
            "Switching seller, resetting conversation"
        );
        *self = Self::open(seller, self.product.clone());
    }

    /// Restart with a different product; the log and round reset
    pub fn switch_product(&mut self, product: Product) {
        *self = Self::open(self.seller.clone(), product);
    }
}
