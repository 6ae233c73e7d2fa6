//! Configuration management for the Ginger dashboard client
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: GINGER__)

use anyhow::Result;
use ginger_shared::series::{
    DEFAULT_CALORIES_BY_HOUR_DAYS, DEFAULT_DAILY_TOTALS_DAYS, DEFAULT_WEIGHT_DAYS,
};
use ginger_shared::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{ClientError, ClientResult};

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub food_history: FoodHistoryConfig,
    pub stats: StatsConfig,
    pub dashboard: DashboardConfig,
}

/// Remote service connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Food history paging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodHistoryConfig {
    pub page_size: u32,
}

/// Default history windows for the trend series, in days
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    pub weight_days: u32,
    pub daily_totals_days: u32,
    pub calories_by_hour_days: u32,
}

/// Quick action defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub default_water_ml: u32,
    pub default_fasting_protocol: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8081/api".to_string(),
                timeout_secs: 30,
            },
            food_history: FoodHistoryConfig {
                page_size: DEFAULT_PAGE_SIZE,
            },
            stats: StatsConfig {
                weight_days: DEFAULT_WEIGHT_DAYS,
                daily_totals_days: DEFAULT_DAILY_TOTALS_DAYS,
                calories_by_hour_days: DEFAULT_CALORIES_BY_HOUR_DAYS,
            },
            dashboard: DashboardConfig {
                default_water_ml: 250,
                default_fasting_protocol: "16:8".to_string(),
            },
        }
    }
}

impl ClientConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with GINGER__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&ClientConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., GINGER__API__BASE_URL=http://host/api sets api.base_url
            .add_source(config::Environment::with_prefix("GINGER").separator("__"))
            .build()?;

        let loaded: ClientConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject values that would make every request fail
    pub fn validate(&self) -> ClientResult<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ClientError::config("api.base_url must not be empty"));
        }
        if self.food_history.page_size == 0 {
            return Err(ClientError::config("food_history.page_size must be positive"));
        }
        if self.api.timeout_secs == 0 {
            return Err(ClientError::config("api.timeout_secs must be positive"));
        }
        if self.dashboard.default_water_ml == 0 {
            return Err(ClientError::config("dashboard.default_water_ml must be positive"));
        }
        if self.dashboard.default_fasting_protocol.trim().is_empty() {
            return Err(ClientError::config("dashboard.default_fasting_protocol must not be empty"));
        }
        Ok(())
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8081/api");
        assert_eq!(config.food_history.page_size, 25);
        assert_eq!(config.stats.weight_days, 90);
        assert_eq!(config.stats.daily_totals_days, 30);
        assert_eq!(config.stats.calories_by_hour_days, 14);
        assert_eq!(config.dashboard.default_fasting_protocol, "16:8");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = ClientConfig::default();
        config.food_history.page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: food_history.page_size must be positive"
        );
    }

    #[test]
    fn test_blank_fasting_protocol_rejected() {
        let mut config = ClientConfig::default();
        config.dashboard.default_fasting_protocol = "  ".to_string();
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!ClientConfig::is_production());
    }
}
