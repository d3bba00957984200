//! Matching Engine Service
//!
//! In-memory limit order book with price-time priority matching.
//!
//! **Key Invariants:**
//! - Bids iterate highest price first, asks lowest price first
//! - FIFO within a price level; a partially filled head keeps its place
//! - No empty level survives a mutating call
//! - Deterministic matching (same inputs and timestamps → same trades)
//! - Conservation of quantity

pub mod book;
pub mod engine;
pub mod matching;

pub use engine::{MatchingEngine, MatchingEngineConfig, OrderBookSnapshot};
pub use matching::PricingRule;
