//! Trading service
//!
//! Feeds prices into the moving average, orders into the book, and runs a
//! matching pass on every price tick. All methods take `&mut self`; wrap
//! the service in [`SharedTradingService`] to reach it from several
//! threads.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use market_data::MovingAverageEngine;
use matching_engine::MatchingEngine;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use types::clock::{Clock, SystemClock};
use types::errors::EngineError;
use types::order::Side;

use crate::config::TradingServiceConfig;
use crate::models::{BookLevels, BookSnapshot, MarketUpdate, OrderResponse, PriceSample, TradeMessage};

/// One service instance behind a single lock
pub type SharedTradingService = Arc<Mutex<TradingService>>;

pub struct TradingService {
    config: TradingServiceConfig,
    sma: MovingAverageEngine,
    book: MatchingEngine,
    history: VecDeque<PriceSample>,
    clock: Box<dyn Clock>,
}

impl TradingService {
    /// Create a service reading time from the wall clock
    pub fn new(config: TradingServiceConfig) -> Result<Self, EngineError> {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock<C>(config: TradingServiceConfig, clock: C) -> Result<Self, EngineError>
    where
        C: Clock + Clone + 'static,
    {
        config.validate()?;
        let sma = MovingAverageEngine::new(config.sma_window)?;
        let book = MatchingEngine::with_clock(config.matching, clock.clone());

        info!(
            sma_window = config.sma_window,
            max_history = config.max_history,
            "TradingService initialized"
        );

        Ok(Self {
            history: VecDeque::new(),
            config,
            sma,
            book,
            clock: Box::new(clock),
        })
    }

    /// Process a price tick stamped with the current time
    pub fn process_price(&mut self, price: Decimal) -> Result<MarketUpdate, EngineError> {
        let now = self.clock.now_millis();
        self.process_price_at(price, now)
    }

    /// Update the moving average, record the price, and match the book
    ///
    /// A negative price fails before anything is changed.
    pub fn process_price_at(
        &mut self,
        price: Decimal,
        timestamp: i64,
    ) -> Result<MarketUpdate, EngineError> {
        self.sma.add_price(price)?;
        let sma = self.sma.average();

        self.record_history(PriceSample { timestamp, price });

        let trades = self.book.match_orders_at(timestamp);
        if !trades.is_empty() {
            debug!(trade_count = trades.len(), %price, "Trades on price tick");
        }

        Ok(MarketUpdate {
            timestamp,
            price,
            sma,
            orderbook: BookLevels {
                bids: self.book.bids(),
                asks: self.book.asks(),
            },
            trades: trades.iter().map(TradeMessage::from).collect(),
        })
    }

    /// Submit an order; never fails, rejections come back in the response
    pub fn add_order(&mut self, side: &str, price: Decimal, quantity: Decimal) -> OrderResponse {
        let result = side
            .parse::<Side>()
            .map_err(EngineError::from)
            .and_then(|side| self.book.add_order(side, price, quantity));

        match result {
            Ok(order_id) => OrderResponse::pending(order_id.to_string()),
            Err(e) => {
                warn!(side, %price, %quantity, error = %e, "Order rejected");
                OrderResponse::rejected(e.to_string())
            }
        }
    }

    /// Current book state with best prices
    pub fn order_book_snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            bids: self.book.bids(),
            asks: self.book.asks(),
            best_bid: self.book.best_bid(),
            best_ask: self.book.best_ask(),
        }
    }

    /// Current moving average, zero before the first price
    pub fn sma(&self) -> Decimal {
        self.sma.average()
    }

    /// Recorded price samples, oldest first
    pub fn price_history(&self) -> impl Iterator<Item = &PriceSample> {
        self.history.iter()
    }

    pub fn matching_engine(&self) -> &MatchingEngine {
        &self.book
    }

    pub fn config(&self) -> &TradingServiceConfig {
        &self.config
    }

    /// Reset both engines and drop the price history
    pub fn reset(&mut self) {
        self.sma.reset();
        self.book.reset();
        self.history.clear();
        info!("TradingService reset");
    }

    pub fn into_shared(self) -> SharedTradingService {
        Arc::new(Mutex::new(self))
    }

    fn record_history(&mut self, sample: PriceSample) {
        if self.config.max_history == 0 {
            return;
        }
        while self.history.len() >= self.config.max_history {
            self.history.pop_front();
        }
        self.history.push_back(sample);
    }
}
