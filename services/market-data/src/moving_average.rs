//! Simple moving average over a fixed-width price window
//!
//! Backed by a zero-filled ring buffer and a running sum so both updates
//! and reads are O(1) regardless of window width. Uses `Decimal` so the
//! running sum never drifts from the true sum of the window.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use types::errors::{ConfigError, EngineError, InputError};

/// Streaming simple moving average calculator
#[derive(Debug, Clone)]
pub struct MovingAverageEngine {
    /// Ring buffer of the most recent prices
    window: Vec<Decimal>,
    /// Next slot to overwrite
    write_index: usize,
    /// Populated slots, capped at the window size
    filled: usize,
    /// Sum of the populated slots
    running_sum: Decimal,
}

impl MovingAverageEngine {
    /// Create an engine averaging over the last `window_size` prices
    ///
    /// Fails with an invalid-configuration error if `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self, EngineError> {
        if window_size == 0 {
            return Err(ConfigError::InvalidWindowSize(window_size).into());
        }

        info!(window_size, "MovingAverageEngine initialized");

        Ok(Self {
            window: vec![Decimal::ZERO; window_size],
            write_index: 0,
            filled: 0,
            running_sum: Decimal::ZERO,
        })
    }

    /// Push a price into the window, evicting the oldest once full
    ///
    /// Fails with an invalid-input error if `price` is negative or would
    /// push the window sum past the decimal range; the window is left
    /// unchanged in that case.
    pub fn add_price(&mut self, price: Decimal) -> Result<(), EngineError> {
        if price < Decimal::ZERO {
            warn!(%price, "Rejecting negative price");
            return Err(InputError::InvalidPrice(format!("price cannot be negative, got {price}")).into());
        }

        let capacity = self.window.len();
        let retained = if self.filled == capacity {
            self.running_sum - self.window[self.write_index]
        } else {
            self.running_sum
        };
        let Some(running_sum) = retained.checked_add(price) else {
            warn!(%price, "Rejecting price that overflows the window sum");
            return Err(InputError::InvalidPrice(format!(
                "{price} would overflow the window sum"
            ))
            .into());
        };

        self.window[self.write_index] = price;
        self.running_sum = running_sum;
        self.write_index = (self.write_index + 1) % capacity;

        if self.filled < capacity {
            self.filled += 1;
        }

        debug!(%price, filled = self.filled, "Price added");
        Ok(())
    }

    /// Mean of the prices currently in the window, or zero when empty
    pub fn average(&self) -> Decimal {
        if self.filled == 0 {
            return Decimal::ZERO;
        }
        self.running_sum / Decimal::from(self.filled)
    }

    /// Number of prices currently held
    pub fn size(&self) -> usize {
        self.filled
    }

    /// Configured window width
    pub fn window_size(&self) -> usize {
        self.window.len()
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.window.len()
    }

    /// Return to the freshly constructed state
    pub fn reset(&mut self) {
        self.window.fill(Decimal::ZERO);
        self.write_index = 0;
        self.filled = 0;
        self.running_sum = Decimal::ZERO;
    }
}
