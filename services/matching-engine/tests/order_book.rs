//! Order book behavior tests
//!
//! Exercises the public engine API end to end: level ordering, FIFO
//! priority, partial fills, reset, plus property tests for quantity
//! conservation and the uncrossed-after-match guarantee.

use matching_engine::{MatchingEngine, MatchingEngineConfig, PricingRule};
use proptest::prelude::*;
use rust_decimal::Decimal;
use types::clock::FixedClock;
use types::numeric::{Price, Quantity};
use types::order::Side;

const TS: i64 = 1708123456789;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn engine() -> MatchingEngine {
    MatchingEngine::with_clock(MatchingEngineConfig::default(), FixedClock(TS))
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn total(levels: &[(Price, Quantity)]) -> Decimal {
    levels.iter().map(|(_, q)| q.as_decimal()).sum()
}

#[test]
fn test_bids_descending_asks_ascending() {
    init_tracing();
    let mut engine = engine();
    for p in ["44900", "45000", "44950"] {
        engine.add_order(Side::BUY, dec(p), dec("1")).unwrap();
    }
    for p in ["45200", "45100", "45150"] {
        engine.add_order(Side::SELL, dec(p), dec("1")).unwrap();
    }

    let bid_prices: Vec<Decimal> = engine.bids().iter().map(|(p, _)| p.as_decimal()).collect();
    let ask_prices: Vec<Decimal> = engine.asks().iter().map(|(p, _)| p.as_decimal()).collect();

    assert_eq!(bid_prices, vec![dec("45000"), dec("44950"), dec("44900")]);
    assert_eq!(ask_prices, vec![dec("45100"), dec("45150"), dec("45200")]);
    assert_eq!(engine.best_bid(), dec("45000"));
    assert_eq!(engine.best_ask(), dec("45100"));
}

#[test]
fn test_fifo_consumes_first_order_first() {
    let mut engine = engine();
    let a = engine.add_order(Side::SELL, dec("45000"), dec("1.0")).unwrap();
    let _b = engine.add_order(Side::SELL, dec("45000"), dec("2.0")).unwrap();
    engine.add_order(Side::BUY, dec("45000"), dec("0.5")).unwrap();

    let trades = engine.match_orders();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].sell_order_id, a);
    assert_eq!(trades[0].quantity.as_decimal(), dec("0.5"));
    assert_eq!(total(&engine.asks()), dec("2.5"));
}

#[test]
fn test_price_priority_before_time() {
    let mut engine = engine();
    let _early_worse = engine.add_order(Side::SELL, dec("45100"), dec("1.0")).unwrap();
    let late_better = engine.add_order(Side::SELL, dec("45000"), dec("1.0")).unwrap();
    engine.add_order(Side::BUY, dec("45100"), dec("1.0")).unwrap();

    let trades = engine.match_orders();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].sell_order_id, late_better);
    assert_eq!(trades[0].price, Price::from_u64(45000).unwrap());
}

#[test]
fn test_batched_orders_single_pass() {
    let mut engine = engine();
    engine.add_order(Side::BUY, dec("45000"), dec("1.0")).unwrap();
    engine.add_order(Side::BUY, dec("45010"), dec("1.0")).unwrap();
    engine.add_order(Side::SELL, dec("44990"), dec("0.5")).unwrap();
    engine.add_order(Side::SELL, dec("45005"), dec("3.0")).unwrap();

    let trades = engine.match_orders();

    // 45010 bid sweeps 44990 (0.5) then 45005 (0.5); 45000 bid does not cross 45005
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].price, Price::from_u64(44990).unwrap());
    assert_eq!(trades[1].price, Price::from_u64(45005).unwrap());
    assert_eq!(engine.best_bid(), dec("45000"));
    assert_eq!(engine.best_ask(), dec("45005"));
    assert_eq!(total(&engine.asks()), dec("2.5"));
    assert_eq!(engine.bid_level_count(), 1);
    assert_eq!(engine.ask_level_count(), 1);
}

#[test]
fn test_overflowing_level_total_is_rejected() {
    let mut engine = engine();
    engine.add_order(Side::SELL, dec("45000"), Decimal::MAX).unwrap();

    assert!(engine.add_order(Side::SELL, dec("45000"), Decimal::MAX).is_err());
    assert_eq!(engine.order_count(), 1);
    assert_eq!(engine.next_order_id().to_string(), "ORD2");
}

#[test]
fn test_reset_matches_fresh_book() {
    let mut engine = engine();
    engine.add_order(Side::BUY, dec("45000"), dec("1.0")).unwrap();
    engine.add_order(Side::SELL, dec("45000"), dec("1.0")).unwrap();
    engine.match_orders();
    engine.add_order(Side::SELL, dec("45100"), dec("1.0")).unwrap();

    engine.reset();
    assert!(engine.bids().is_empty());
    assert!(engine.asks().is_empty());

    let mut fresh = MatchingEngine::new();
    let expected = fresh.add_order(Side::BUY, dec("1"), dec("1")).unwrap();
    let actual = engine.add_order(Side::BUY, dec("1"), dec("1")).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_independent_books_do_not_share_ids() {
    let mut a = engine();
    let mut b = engine();
    a.add_order(Side::BUY, dec("1"), dec("1")).unwrap();
    a.add_order(Side::BUY, dec("1"), dec("1")).unwrap();

    let id = b.add_order(Side::BUY, dec("1"), dec("1")).unwrap();
    assert_eq!(id.to_string(), "ORD1");
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = engine();
    engine.add_order(Side::BUY, dec("44950"), dec("2.5")).unwrap();
    engine.add_order(Side::SELL, dec("45100"), dec("1.8")).unwrap();

    let json = serde_json::to_value(engine.snapshot(10)).unwrap();
    assert_eq!(json["bids"][0][0], "44950");
    assert_eq!(json["bids"][0][1], "2.5");
    assert_eq!(json["asks"][0][0], "45100");
    assert_eq!(json["best_ask"], "45100");
}

#[test]
fn test_maker_pricing_config_round_trip() {
    let config: MatchingEngineConfig =
        serde_json::from_str(r#"{"pricing":"maker_price"}"#).unwrap();
    assert_eq!(config.pricing, PricingRule::MakerPrice);
    assert_eq!(MatchingEngine::with_config(config).pricing(), PricingRule::MakerPrice);
}

fn order_strategy() -> impl Strategy<Value = (bool, u64, u64)> {
    (any::<bool>(), 44_990u64..45_010, 1u64..50)
}

proptest! {
    #[test]
    fn prop_matching_conserves_quantity(orders in prop::collection::vec(order_strategy(), 1..60)) {
        let mut engine = engine();
        let mut submitted_buy = Decimal::ZERO;
        let mut submitted_sell = Decimal::ZERO;

        for (is_buy, price, qty_tenths) in orders {
            let qty = Decimal::new(qty_tenths as i64, 1);
            let side = if is_buy { Side::BUY } else { Side::SELL };
            engine.add_order(side, Decimal::from(price), qty).unwrap();
            if is_buy { submitted_buy += qty } else { submitted_sell += qty }
        }

        let trades = engine.match_orders();
        let traded: Decimal = trades.iter().map(|t| t.quantity.as_decimal()).sum();

        prop_assert_eq!(total(&engine.bids()) + traded, submitted_buy);
        prop_assert_eq!(total(&engine.asks()) + traded, submitted_sell);
    }

    #[test]
    fn prop_book_uncrossed_after_match(orders in prop::collection::vec(order_strategy(), 1..60)) {
        let mut engine = engine();
        for (is_buy, price, qty_tenths) in orders {
            let side = if is_buy { Side::BUY } else { Side::SELL };
            engine.add_order(side, Decimal::from(price), Decimal::new(qty_tenths as i64, 1)).unwrap();
        }

        let trades = engine.match_orders();

        if let (Some(bid), Some(ask)) = (engine.best_bid_price(), engine.best_ask_price()) {
            prop_assert!(bid < ask);
        }
        prop_assert_eq!(engine.bid_level_count(), engine.bids().len());
        prop_assert_eq!(engine.ask_level_count(), engine.asks().len());
        for (_, qty) in engine.bids().iter().chain(engine.asks().iter()) {
            prop_assert!(!qty.is_zero());
        }
        for trade in &trades {
            prop_assert!(!trade.quantity.is_zero());
        }
        prop_assert!(engine.match_orders().is_empty());
    }
}
