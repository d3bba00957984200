//! Error types for the engines
//!
//! Two kinds of failure exist: bad construction parameters and bad
//! per-call arguments. Both are caller errors and never retryable.

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Malformed construction parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("window size must be greater than 0, got {0}")]
    InvalidWindowSize(usize),
}

/// Malformed per-call arguments
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid order side: {0}")]
    InvalidSide(String),

    #[error("Invalid order id: {0}")]
    InvalidOrderId(String),
}
