//! Agentmart Storefront - Caller-side collaborators for the negotiation engine
//!
//! The engine is a pure function; this crate owns everything around it:
//!
//! - **SellerRegistry**: the finite fixed set of simulated seller profiles
//! - **ProductCatalog**: the built-in product set
//! - **Conversation**: the append-only message log and round counter
//!
//! The conversation appends the buyer's message, invokes the engine, and
//! appends the reply; the engine neither reads nor writes the log.

pub mod catalog;
pub mod conversation;
pub mod registry;

pub use catalog::ProductCatalog;
pub use conversation::Conversation;
pub use registry::SellerRegistry;
