//! Types library for the order book and price statistics engines
//!
//! Shared by every service crate so orders, trades and errors have one
//! definition.
//!
//! # Modules
//! - `ids`: Order identifiers and the per-book id generator
//! - `numeric`: Fixed-point decimal types (Price, Quantity)
//! - `order`: Side and resting order
//! - `trade`: Executed trade record
//! - `clock`: Timestamp source
//! - `errors`: Error taxonomy

// Public modules
pub mod clock;
pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::clock::*;
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
}
