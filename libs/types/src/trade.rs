//! Trade execution types

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An executed match between one buy and one sell order
///
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
    /// Unix millis
    pub executed_at: i64,
}

impl Trade {
    pub fn new(
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        price: Price,
        quantity: Quantity,
        executed_at: i64,
    ) -> Self {
        Self {
            buy_order_id,
            sell_order_id,
            price,
            quantity,
            executed_at,
        }
    }

    /// Trade value (price × quantity), `None` past the decimal range
    pub fn trade_value(&self) -> Option<Decimal> {
        self.quantity.as_decimal().checked_mul(self.price.as_decimal())
    }
}
