//! Matching logic module
//!
//! Crossing test, execution pricing and trade construction

pub mod crossing;
pub mod executor;

pub use crossing::{can_match, PricingRule};
pub use executor::MatchExecutor;
