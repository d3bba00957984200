//! Service configuration

use matching_engine::MatchingEngineConfig;
use serde::{Deserialize, Serialize};
use types::errors::ConfigError;

/// Trading service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingServiceConfig {
    /// Number of prices the moving average spans
    pub sma_window: usize,
    /// Maximum price samples retained in history
    pub max_history: usize,
    /// Order book settings
    pub matching: MatchingEngineConfig,
}

impl Default for TradingServiceConfig {
    fn default() -> Self {
        Self {
            sma_window: 20,
            max_history: 100,
            matching: MatchingEngineConfig::default(),
        }
    }
}

impl TradingServiceConfig {
    /// Parse a JSON config document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sma_window == 0 {
            return Err(ConfigError::InvalidWindowSize(self.sma_window));
        }
        Ok(())
    }
}
