//! Order identifiers
//!
//! Ids are issued by a counter owned by each book instance, starting at 1,
//! and render as `ORD<n>`. They are unique within one book session only:
//! resetting the generator re-issues ids that earlier records may still
//! reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::InputError;

const ORDER_ID_PREFIX: &str = "ORD";

/// Unique identifier for an order within a book session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct OrderId(u64);

impl OrderId {
    pub fn from_sequence(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Issue order of this id; lower means submitted earlier
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ORDER_ID_PREFIX, self.0)
    }
}

impl FromStr for OrderId {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(ORDER_ID_PREFIX)
            .and_then(|digits| digits.parse::<u64>().ok())
            .map(Self)
            .ok_or_else(|| InputError::InvalidOrderId(s.to_string()))
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for OrderId {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Monotonic order id source owned by a single book
#[derive(Debug, Clone)]
pub struct OrderIdGenerator {
    next: u64,
}

impl OrderIdGenerator {
    pub const INITIAL: u64 = 1;

    pub fn new() -> Self {
        Self {
            next: Self::INITIAL,
        }
    }

    /// Issue the next id
    pub fn next_id(&mut self) -> OrderId {
        let id = OrderId(self.next);
        self.next += 1;
        id
    }

    /// Id the next call to `next_id` will return
    pub fn peek(&self) -> OrderId {
        OrderId(self.next)
    }

    pub fn reset(&mut self) {
        self.next = Self::INITIAL;
    }
}

impl Default for OrderIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
