//! Trading Service
//!
//! Domain layer between the transport and the two engines: price ticks go
//! to the moving average and trigger a matching pass, order requests go to
//! the book, and results come back as serializable messages.
//!
//! Transport, connection handling and price generation live elsewhere.

pub mod config;
pub mod models;
pub mod service;

pub use config::TradingServiceConfig;
pub use models::{BookSnapshot, MarketUpdate, OrderResponse, OrderStatus, TradeMessage};
pub use service::{SharedTradingService, TradingService};
