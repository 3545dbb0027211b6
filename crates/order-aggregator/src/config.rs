//! Runtime configuration.
//!
//! Defaults suit tests and the demo. Deployments override them through
//! `AGGREGATOR_*` environment variables, see [`AggregatorConfig::from_env`].

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const MAX_CONCURRENT_LOOKUPS: &str = "AGGREGATOR_MAX_CONCURRENT_LOOKUPS";
const STORE_BUFFER_SIZE: &str = "AGGREGATOR_STORE_BUFFER_SIZE";
const OFFER_LATENCY_MS: &str = "AGGREGATOR_OFFER_LATENCY_MS";
const PRODUCT_LATENCY_MS: &str = "AGGREGATOR_PRODUCT_LATENCY_MS";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("max_concurrent_lookups must be at least 2, got {0}")]
    TooFewLookupPermits(usize),

    #[error("store_buffer_size must be at least 1")]
    ZeroBufferSize,
}

/// Settings for the aggregator and its in-memory services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Upper bound on offer/product lookups in flight across all requests.
    pub max_concurrent_lookups: usize,
    /// Request channel capacity of each store actor.
    pub store_buffer_size: usize,
    /// Artificial delay added to every offer lookup.
    pub offer_latency_ms: u64,
    /// Artificial delay added to every product lookup.
    pub product_latency_ms: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: 64,
            store_buffer_size: 32,
            offer_latency_ms: 0,
            product_latency_ms: 0,
        }
    }
}

impl AggregatorConfig {
    /// Loads the defaults overlaid with any `AGGREGATOR_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Same as [`from_env`](Self::from_env), reading from the given pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Self::default();
        for (name, value) in vars {
            match name.as_str() {
                MAX_CONCURRENT_LOOKUPS => {
                    config.max_concurrent_lookups = parse(MAX_CONCURRENT_LOOKUPS, &value)?
                }
                STORE_BUFFER_SIZE => config.store_buffer_size = parse(STORE_BUFFER_SIZE, &value)?,
                OFFER_LATENCY_MS => config.offer_latency_ms = parse(OFFER_LATENCY_MS, &value)?,
                PRODUCT_LATENCY_MS => {
                    config.product_latency_ms = parse(PRODUCT_LATENCY_MS, &value)?
                }
                _ => {}
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_lookups < 2 {
            return Err(ConfigError::TooFewLookupPermits(self.max_concurrent_lookups));
        }
        if self.store_buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        Ok(())
    }

    pub fn offer_latency(&self) -> Duration {
        Duration::from_millis(self.offer_latency_ms)
    }

    pub fn product_latency(&self) -> Duration {
        Duration::from_millis(self.product_latency_ms)
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    })
}
