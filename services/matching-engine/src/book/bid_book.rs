//! Bid (buy-side) order book
//!
//! Maintains buy orders sorted by price descending (best bid first).
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use types::errors::InputError;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::PriceLevel;

/// Bid (buy) side order book
///
/// Orders are sorted by price descending, so the highest bid is first.
/// At each price level, orders are maintained in FIFO order.
#[derive(Debug, Clone)]
pub struct BidBook {
    /// Price levels keyed ascending; best bid is the last key
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Append an order to the tail of its price level
    ///
    /// A new level always accepts its first order, so a failed insert
    /// never leaves an empty level behind.
    pub fn insert(&mut self, order: Order) -> Result<(), InputError> {
        self.levels
            .entry(order.price)
            .or_insert_with(PriceLevel::new)
            .push_back(order)
    }

    /// Get the best bid (highest price) with its aggregate quantity
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        // BTreeMap iter is ascending, so we need last()
        self.levels
            .iter()
            .next_back()
            .map(|(price, level)| (*price, level.total_quantity()))
    }

    /// Get the best bid price
    pub fn best_bid_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Get mutable reference to the best bid level
    pub(crate) fn best_bid_level_mut(&mut self) -> Option<(Price, &mut PriceLevel)> {
        self.levels
            .iter_mut()
            .next_back()
            .map(|(price, level)| (*price, level))
    }

    /// Drop a price level
    pub(crate) fn remove_level(&mut self, price: Price) -> Option<PriceLevel> {
        self.levels.remove(&price)
    }

    /// All levels as (price, aggregate quantity), highest price first
    pub fn levels(&self) -> Vec<(Price, Quantity)> {
        self.depth_snapshot(usize::MAX)
    }

    /// Get depth snapshot (top N price levels)
    pub fn depth_snapshot(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .rev() // Reverse to get highest prices first
            .take(depth)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Check if the bid book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Total resting orders across all levels
    pub fn order_count(&self) -> usize {
        self.levels.values().map(PriceLevel::order_count).sum()
    }

    /// Discard every level
    pub fn clear(&mut self) {
        self.levels.clear();
    }
}

impl Default for BidBook {
    fn default() -> Self {
        Self::new()
    }
}
