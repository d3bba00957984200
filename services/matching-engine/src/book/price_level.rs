//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at one exact price. Orders are
//! kept in arrival order; a partially filled head stays at the head and
//! keeps its time priority.

use std::collections::VecDeque;
use types::errors::InputError;
use types::numeric::Quantity;
use types::order::Order;

/// A price level containing orders at a specific price
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Queue of orders at this price level (FIFO order)
    orders: VecDeque<Order>,
    /// Total remaining quantity at this level
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
            total_quantity: Quantity::zero(),
        }
    }

    /// Append an order at the back of the queue (time priority)
    ///
    /// Fails without touching the level if the aggregate quantity would
    /// leave the decimal range. Never fails on an empty level.
    pub fn push_back(&mut self, order: Order) -> Result<(), InputError> {
        self.total_quantity = self
            .total_quantity
            .checked_add(order.quantity)
            .ok_or_else(|| {
                InputError::InvalidQuantity(format!(
                    "{} would overflow the total at price {}",
                    order.quantity, order.price
                ))
            })?;
        self.orders.push_back(order);
        Ok(())
    }

    /// Peek at the front order without removing it
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Fill the front order by `quantity`
    ///
    /// The front order is popped and returned once its remaining quantity
    /// reaches zero; otherwise it stays at the head and `None` is returned.
    pub fn fill_front(&mut self, quantity: Quantity) -> Option<Order> {
        let front = self.orders.front_mut()?;
        front.fill(quantity);
        self.total_quantity = self.total_quantity.saturating_sub(quantity);

        if front.is_filled() {
            self.orders.pop_front()
        } else {
            None
        }
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total quantity at this price level
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Orders in queue order
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}

impl Default for PriceLevel {
    fn default() -> Self {
        Self::new()
    }
}
