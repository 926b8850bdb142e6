//! Error types for Agentmart
//!
//! The negotiation engine itself is total — it always produces a well-formed
//! message — so these errors only cover the storefront surface (lookups
//! against the registry and catalog).

use thiserror::Error;

/// Result type for Agentmart operations
pub type Result<T> = std::result::Result<T, AgentmartError>;

/// Agentmart error types
#[derive(Debug, Clone, Error)]
pub enum AgentmartError {
    /// Seller id not present in the registry
    #[error("Seller not found: {seller_id}")]
    SellerNotFound { seller_id: String },

    /// Product id not present in the catalog
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: String },
}
