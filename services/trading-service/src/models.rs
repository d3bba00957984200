//! Response types handed to the transport layer
//!
//! Field names follow the messages the service publishes downstream.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};
use types::trade::Trade;

/// Outcome of an order submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Filled,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Empty when rejected
    pub order_id: String,
    pub status: OrderStatus,
    pub message: String,
}

impl OrderResponse {
    pub fn pending(order_id: String) -> Self {
        Self {
            order_id,
            status: OrderStatus::Pending,
            message: "Order placed successfully".to_string(),
        }
    }

    pub fn rejected(message: String) -> Self {
        Self {
            order_id: String::new(),
            status: OrderStatus::Rejected,
            message,
        }
    }
}

/// Executed trade as published to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeMessage {
    pub buy_order_id: String,
    pub sell_order_id: String,
    pub price: Price,
    pub quantity: Quantity,
    pub timestamp: i64,
}

impl From<&Trade> for TradeMessage {
    fn from(trade: &Trade) -> Self {
        Self {
            buy_order_id: trade.buy_order_id.to_string(),
            sell_order_id: trade.sell_order_id.to_string(),
            price: trade.price,
            quantity: trade.quantity,
            timestamp: trade.executed_at,
        }
    }
}

/// Both sides of the book as (price, aggregate quantity) levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLevels {
    pub bids: Vec<(Price, Quantity)>,
    pub asks: Vec<(Price, Quantity)>,
}

/// Everything produced by one incoming price tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketUpdate {
    pub timestamp: i64,
    pub price: Decimal,
    pub sma: Decimal,
    pub orderbook: BookLevels,
    pub trades: Vec<TradeMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub bids: Vec<(Price, Quantity)>,
    pub asks: Vec<(Price, Quantity)>,
    /// Zero when there are no bids
    pub best_bid: Decimal,
    /// Zero when there are no asks
    pub best_ask: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub timestamp: i64,
    pub price: Decimal,
}
