use std::env;
use std::time::Duration;

use serde::Deserialize;

use crate::core::error::{ApiError, ApiResult};

/// Main configuration for both API clients and the test harness
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub headless: HeadlessConfig,
    pub plugin: PluginConfig,
    pub harness: HarnessConfig,
}

/// Headless storefront API credentials and endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessConfig {
    /// Public webstore token, embedded in request paths
    pub public_token: String,
    /// Optional private key for authenticated basket operations
    pub private_key: Option<String>,
    pub base_url: String,
}

/// Server-side plugin API credentials and endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PluginConfig {
    /// Store secret key, sent as a request header
    pub secret_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarnessConfig {
    pub scenario_timeout_secs: u64,
}

impl HarnessConfig {
    pub fn scenario_timeout(&self) -> Duration {
        Duration::from_secs(self.scenario_timeout_secs)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ApiResult<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            headless: HeadlessConfig {
                public_token: env::var("STOREBRIDGE_PUBLIC_TOKEN").map_err(|_| {
                    ApiError::configuration("STOREBRIDGE_PUBLIC_TOKEN not set")
                })?,
                private_key: env::var("STOREBRIDGE_PRIVATE_KEY").ok(),
                base_url: env::var("STOREBRIDGE_HEADLESS_URL")
                    .unwrap_or_else(|_| "https://headless.storefront.dev/api".to_string()),
            },
            plugin: PluginConfig {
                secret_key: env::var("STOREBRIDGE_SECRET_KEY")
                    .map_err(|_| ApiError::configuration("STOREBRIDGE_SECRET_KEY not set"))?,
                base_url: env::var("STOREBRIDGE_PLUGIN_URL")
                    .unwrap_or_else(|_| "https://plugin.storefront.dev".to_string()),
            },
            harness: HarnessConfig {
                scenario_timeout_secs: env::var("STOREBRIDGE_SCENARIO_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| {
                        ApiError::configuration("Invalid STOREBRIDGE_SCENARIO_TIMEOUT_SECS")
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.headless.public_token.is_empty() {
            return Err(ApiError::configuration("Public token must not be empty"));
        }

        if self.plugin.secret_key.is_empty() {
            return Err(ApiError::configuration("Secret key must not be empty"));
        }

        if self.harness.scenario_timeout_secs == 0 {
            return Err(ApiError::configuration(
                "Scenario timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}
