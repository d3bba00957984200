//! Market Data Service
//!
//! Streaming statistics over the incoming price feed. Currently a single
//! simple moving average with O(1) update and read.

pub mod moving_average;

pub use moving_average::MovingAverageEngine;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
