//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! A `Price` is always strictly positive once it sits on a book; a `Quantity`
//! is never negative.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Limit price of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price, rejecting zero and negative values
    pub fn try_new(value: Decimal) -> Result<Self, InputError> {
        if value <= Decimal::ZERO {
            return Err(InputError::InvalidPrice(format!(
                "price must be positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Create a price from a whole number of quote units
    pub fn from_u64(value: u64) -> Result<Self, InputError> {
        Self::try_new(Decimal::from(value))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s)
            .map_err(|e| InputError::InvalidPrice(format!("{s}: {e}")))?;
        Self::try_new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order or trade quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a quantity, rejecting negative values
    pub fn try_new(value: Decimal) -> Result<Self, InputError> {
        if value < Decimal::ZERO {
            return Err(InputError::InvalidQuantity(format!(
                "quantity cannot be negative, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Create a quantity that must be strictly positive (order submission)
    pub fn try_positive(value: Decimal) -> Result<Self, InputError> {
        if value <= Decimal::ZERO {
            return Err(InputError::InvalidQuantity(format!(
                "quantity must be positive, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Add, or `None` if the sum exceeds the decimal range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract, clamping at zero
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self::zero()
        } else {
            Self(self.0 - other.0)
        }
    }
}

impl FromStr for Quantity {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s)
            .map_err(|e| InputError::InvalidQuantity(format!("{s}: {e}")))?;
        Self::try_new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
