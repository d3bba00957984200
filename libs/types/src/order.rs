//! Order types
//!
//! An order is created once by the book, shrinks only through fills, and
//! leaves the book exactly when its quantity reaches zero.

use crate::errors::InputError;
use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

impl FromStr for Side {
    type Err = InputError;

    /// Case-insensitive `buy` / `sell`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::BUY),
            "sell" => Ok(Side::SELL),
            _ => Err(InputError::InvalidSide(s.to_string())),
        }
    }
}

/// A resting limit order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    /// Remaining quantity; reduced in place by partial fills
    pub quantity: Quantity,
    /// Unix millis, fixed at creation
    pub created_at: i64,
}

impl Order {
    pub fn new(order_id: OrderId, side: Side, price: Price, quantity: Quantity, created_at: i64) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
            created_at,
        }
    }

    /// Reduce the remaining quantity by a fill
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity
    pub fn fill(&mut self, fill_quantity: Quantity) {
        assert!(
            fill_quantity <= self.quantity,
            "Fill would exceed order quantity"
        );
        self.quantity = self.quantity.saturating_sub(fill_quantity);
    }

    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }

    /// True when `self` arrived before `other`
    ///
    /// Ids are issued in arrival order by the owning book, so the id
    /// sequence decides; `created_at` is caller-supplied and may not be
    /// monotonic.
    pub fn arrived_before(&self, other: &Order) -> bool {
        self.order_id.sequence() < other.order_id.sequence()
    }
}
