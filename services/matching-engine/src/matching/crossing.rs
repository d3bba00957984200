//! Crossing detection and execution pricing
//!
//! Determines when a bid and ask can match and at what price the match
//! executes.

use serde::{Deserialize, Serialize};
use types::numeric::Price;
use types::order::Order;

/// Check if a bid and ask can match at given prices
///
/// For a buy order to match with a sell order the buy price must be
/// greater than or equal to the sell price.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Which price a crossing pair executes at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingRule {
    /// Always the ask level's price, whichever side was resting
    #[default]
    AskPrice,
    /// The price of whichever head order arrived first (the maker)
    MakerPrice,
}

impl PricingRule {
    /// Execution price for the head bid and head ask of a crossed book
    pub fn execution_price(&self, bid: &Order, ask: &Order) -> Price {
        match self {
            PricingRule::AskPrice => ask.price,
            PricingRule::MakerPrice => {
                if bid.arrived_before(ask) {
                    bid.price
                } else {
                    ask.price
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use types::ids::OrderId;
    use types::numeric::Quantity;
    use types::order::Side;

    fn order(seq: u64, side: Side, price: u64) -> Order {
        Order::new(
            OrderId::from_sequence(seq),
            side,
            Price::from_u64(price).unwrap(),
            Quantity::from_str("1.0").unwrap(),
            1708123456789,
        )
    }

    #[test]
    fn test_can_match_crossing() {
        let bid = Price::from_u64(50000).unwrap();
        let ask = Price::from_u64(49000).unwrap();
        assert!(can_match(bid, ask), "Bid >= ask should match");
    }

    #[test]
    fn test_can_match_exact() {
        let price = Price::from_u64(50000).unwrap();
        assert!(can_match(price, price), "Equal prices should match");
    }

    #[test]
    fn test_can_match_no_cross() {
        let bid = Price::from_u64(49000).unwrap();
        let ask = Price::from_u64(50000).unwrap();
        assert!(!can_match(bid, ask), "Bid < ask should not match");
    }

    #[test]
    fn test_ask_price_rule_ignores_arrival() {
        let resting_bid = order(1, Side::BUY, 45200);
        let incoming_ask = order(2, Side::SELL, 45000);
        assert_eq!(
            PricingRule::AskPrice.execution_price(&resting_bid, &incoming_ask),
            Price::from_u64(45000).unwrap()
        );
    }

    #[test]
    fn test_maker_price_rule_uses_resting_side() {
        let resting_bid = order(1, Side::BUY, 45200);
        let incoming_ask = order(2, Side::SELL, 45000);
        assert_eq!(
            PricingRule::MakerPrice.execution_price(&resting_bid, &incoming_ask),
            Price::from_u64(45200).unwrap()
        );

        let resting_ask = order(3, Side::SELL, 45000);
        let incoming_bid = order(4, Side::BUY, 45200);
        assert_eq!(
            PricingRule::MakerPrice.execution_price(&incoming_bid, &resting_ask),
            Price::from_u64(45000).unwrap()
        );
    }
}
