//! Trade execution logic
//!
//! Turns the head bid and head ask of a crossed book into a trade record.

use tracing::debug;
use types::numeric::Quantity;
use types::order::Order;
use types::trade::Trade;

use super::crossing::PricingRule;

/// Match executor for handling trade generation
#[derive(Debug, Clone)]
pub struct MatchExecutor {
    pricing: PricingRule,
    /// Trades produced since construction or the last reset
    executed: u64,
}

impl MatchExecutor {
    pub fn new(pricing: PricingRule) -> Self {
        Self {
            pricing,
            executed: 0,
        }
    }

    /// Execute a trade between the head bid and the head ask
    ///
    /// Quantity is the smaller of the two remaining quantities. The caller
    /// applies the fill to both orders.
    pub fn execute_trade(&mut self, bid: &Order, ask: &Order, timestamp: i64) -> Trade {
        let price = self.pricing.execution_price(bid, ask);
        let quantity: Quantity = bid.quantity.min(ask.quantity);

        self.executed += 1;
        debug!(
            buy_order_id = %bid.order_id,
            sell_order_id = %ask.order_id,
            %price,
            %quantity,
            "Trade executed"
        );

        Trade::new(bid.order_id, ask.order_id, price, quantity, timestamp)
    }

    pub fn pricing(&self) -> PricingRule {
        self.pricing
    }

    pub fn executed_count(&self) -> u64 {
        self.executed
    }

    pub fn reset(&mut self) {
        self.executed = 0;
    }
}

impl Default for MatchExecutor {
    fn default() -> Self {
        Self::new(PricingRule::default())
    }
}
