//! Order book sides
//!
//! `BidBook` and `AskBook` key FIFO price levels by price; each side
//! iterates from its best price outward.

pub mod ask_book;
pub mod bid_book;
pub mod price_level;

pub use ask_book::AskBook;
pub use bid_book::BidBook;
pub use price_level::PriceLevel;
