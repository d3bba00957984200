//! Matching engine core
//!
//! Owns one order book (bid and ask sides), the per-book order id
//! generator and the trade executor. Insertion and matching are separate
//! calls: `add_order` only rests an order, and `match_orders` realizes
//! every trade the book currently allows.
//!
//! The engine does no internal synchronization. Callers that share one
//! instance across threads must serialize access themselves (e.g. one
//! mutex around the whole engine).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use types::clock::{Clock, SystemClock};
use types::errors::EngineError;
use types::ids::{OrderId, OrderIdGenerator};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::{AskBook, BidBook};
use crate::matching::{can_match, MatchExecutor, PricingRule};

/// Matching engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingEngineConfig {
    /// Execution price convention for crossing orders
    pub pricing: PricingRule,
}

/// Single-instrument limit order book with price-time priority matching
pub struct MatchingEngine {
    bids: BidBook,
    asks: AskBook,
    ids: OrderIdGenerator,
    executor: MatchExecutor,
    clock: Box<dyn Clock>,
}

impl MatchingEngine {
    /// Create an empty book with default configuration and the wall clock
    pub fn new() -> Self {
        Self::with_config(MatchingEngineConfig::default())
    }

    pub fn with_config(config: MatchingEngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create an empty book reading time from `clock`
    pub fn with_clock(config: MatchingEngineConfig, clock: impl Clock + 'static) -> Self {
        info!(pricing = ?config.pricing, "MatchingEngine initialized");
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            ids: OrderIdGenerator::new(),
            executor: MatchExecutor::new(config.pricing),
            clock: Box::new(clock),
        }
    }

    /// Rest a new limit order on its side of the book
    ///
    /// Fails with an invalid-input error if `price <= 0`, `quantity <= 0`,
    /// or the level's aggregate quantity would overflow; the book and the
    /// id sequence are left untouched in that case. No matching happens
    /// here.
    pub fn add_order(
        &mut self,
        side: Side,
        price: Decimal,
        quantity: Decimal,
    ) -> Result<OrderId, EngineError> {
        let now = self.clock.now_millis();
        self.add_order_at(side, price, quantity, now)
    }

    /// `add_order` with an explicit creation timestamp (Unix millis)
    pub fn add_order_at(
        &mut self,
        side: Side,
        price: Decimal,
        quantity: Decimal,
        timestamp: i64,
    ) -> Result<OrderId, EngineError> {
        let validated = Price::try_new(price)
            .and_then(|price| Quantity::try_positive(quantity).map(|qty| (price, qty)));
        let (price, quantity) = match validated {
            Ok(pair) => pair,
            Err(e) => {
                warn!(?side, %price, %quantity, error = %e, "Order rejected");
                return Err(e.into());
            }
        };

        // The id is only issued once the order is actually resting
        let order_id = self.ids.peek();
        let order = Order::new(order_id, side, price, quantity, timestamp);

        let inserted = match side {
            Side::BUY => self.bids.insert(order),
            Side::SELL => self.asks.insert(order),
        };
        if let Err(e) = inserted {
            warn!(?side, %price, %quantity, error = %e, "Order rejected");
            return Err(e.into());
        }
        self.ids.next_id();

        debug!(%order_id, ?side, %price, %quantity, "Order resting");
        Ok(order_id)
    }

    /// Run a matching pass, stamping trades with the clock's current time
    pub fn match_orders(&mut self) -> Vec<Trade> {
        let now = self.clock.now_millis();
        self.match_orders_at(now)
    }

    /// Match the best bid against the best ask until the book is uncrossed
    /// or one side is exhausted
    ///
    /// Returns the trades in execution order (empty if the book was not
    /// crossed). Fully filled orders leave the book immediately and empty
    /// levels are dropped; a partially filled order keeps its place at the
    /// head of its level.
    pub fn match_orders_at(&mut self, timestamp: i64) -> Vec<Trade> {
        let mut trades = Vec::new();

        loop {
            let Some((bid_price, bid_level)) = self.bids.best_bid_level_mut() else {
                break;
            };
            let Some((ask_price, ask_level)) = self.asks.best_ask_level_mut() else {
                break;
            };

            if !can_match(bid_price, ask_price) {
                break;
            }

            let (bid_empty, ask_empty) = (bid_level.is_empty(), ask_level.is_empty());
            if bid_empty || ask_empty {
                // Drop empty levels and look again
                if bid_empty {
                    self.bids.remove_level(bid_price);
                }
                if ask_empty {
                    self.asks.remove_level(ask_price);
                }
                continue;
            }

            let trade = match (bid_level.front(), ask_level.front()) {
                (Some(bid), Some(ask)) => self.executor.execute_trade(bid, ask, timestamp),
                _ => break,
            };

            if let Some(filled) = bid_level.fill_front(trade.quantity) {
                debug!(order_id = %filled.order_id, "Bid filled");
            }
            if let Some(filled) = ask_level.fill_front(trade.quantity) {
                debug!(order_id = %filled.order_id, "Ask filled");
            }

            if bid_level.is_empty() {
                self.bids.remove_level(bid_price);
            }
            if ask_level.is_empty() {
                self.asks.remove_level(ask_price);
            }

            trades.push(trade);
        }

        if !trades.is_empty() {
            debug!(
                trade_count = trades.len(),
                bid_levels = self.bids.level_count(),
                ask_levels = self.asks.level_count(),
                "Matching pass complete"
            );
        }

        trades
    }

    /// Bid levels as (price, aggregate quantity), highest price first
    pub fn bids(&self) -> Vec<(Price, Quantity)> {
        self.bids.levels()
    }

    /// Ask levels as (price, aggregate quantity), lowest price first
    pub fn asks(&self) -> Vec<(Price, Quantity)> {
        self.asks.levels()
    }

    /// Best bid price, or zero if there are no bids
    pub fn best_bid(&self) -> Decimal {
        self.best_bid_price()
            .map_or(Decimal::ZERO, |p| p.as_decimal())
    }

    /// Best ask price, or zero if there are no asks
    pub fn best_ask(&self) -> Decimal {
        self.best_ask_price()
            .map_or(Decimal::ZERO, |p| p.as_decimal())
    }

    pub fn best_bid_price(&self) -> Option<Price> {
        self.bids.best_bid_price()
    }

    pub fn best_ask_price(&self) -> Option<Price> {
        self.asks.best_ask_price()
    }

    /// Get order book snapshot, top `depth` levels per side
    pub fn snapshot(&self, depth: usize) -> OrderBookSnapshot {
        OrderBookSnapshot {
            bids: self.bids.depth_snapshot(depth),
            asks: self.asks.depth_snapshot(depth),
            best_bid: self.best_bid_price(),
            best_ask: self.best_ask_price(),
        }
    }

    /// Price levels currently on the bid side
    pub fn bid_level_count(&self) -> usize {
        self.bids.level_count()
    }

    /// Price levels currently on the ask side
    pub fn ask_level_count(&self) -> usize {
        self.asks.level_count()
    }

    /// Resting orders on both sides
    pub fn order_count(&self) -> usize {
        self.bids.order_count() + self.asks.order_count()
    }

    /// Id the next accepted order will receive
    pub fn next_order_id(&self) -> OrderId {
        self.ids.peek()
    }

    pub fn pricing(&self) -> PricingRule {
        self.executor.pricing()
    }

    /// Trades executed since construction or the last reset
    pub fn trade_count(&self) -> u64 {
        self.executor.executed_count()
    }

    /// Discard every resting order and restart id issuance
    pub fn reset(&mut self) {
        let discarded = self.order_count();
        self.bids.clear();
        self.asks.clear();
        self.ids.reset();
        self.executor.reset();
        info!(discarded_orders = discarded, "MatchingEngine reset");
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Order book snapshot for market data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    pub bids: Vec<(Price, Quantity)>,
    pub asks: Vec<(Price, Quantity)>,
    pub best_bid: Option<Price>,
    pub best_ask: Option<Price>,
}
