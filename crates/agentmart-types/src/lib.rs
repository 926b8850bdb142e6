//! Agentmart Types - Canonical domain types for agent-to-agent commerce
//!
//! This crate contains all foundational types for Agentmart with zero
//! dependencies on other agentmart crates. It defines:
//!
//! - Seller profiles (negotiation posture, tone, margin configuration)
//! - Products (pricing and logistics facts)
//! - Chat messages with typed metadata payloads
//! - Error types
//!
//! # Architectural Invariants
//!
//! These types back the core negotiation invariants:
//!
//! 1. Seller profiles are immutable for the lifetime of a conversation
//! 2. Chat messages are immutable once created; the conversation log is
//!    append-only and insertion order is chronological order
//! 3. Message metadata carries computed numbers separately from prose, so
//!    the UI never has to parse numbers out of reply text

pub mod error;
pub mod message;
pub mod product;
pub mod seller;

pub use error::*;
pub use message::*;
pub use product::*;
pub use seller::*;

/// Version of the Agentmart types schema
pub const TYPES_VERSION: &str = "0.1.0";
