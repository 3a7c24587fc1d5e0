//! Configuration Module
//!
//! Handles loading runtime configuration from environment variables.

use std::env;
use std::time::Duration;

/// Runtime configuration.
///
/// All values can be set via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the PokeAPI REST service
    pub api_base_url: String,
    /// Response cache time-to-live
    pub cache_ttl: Duration,
    /// Number of location areas per `map` page
    pub page_limit: u32,
    /// Timeout for each HTTP request
    pub http_timeout: Duration,
}

impl Config {
    /// Creates a Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API base URL (default: https://pokeapi.co/api/v2)
    /// - `CACHE_TTL_SECS` - Cache TTL in seconds (default: 60)
    /// - `PAGE_LIMIT` - Location areas per page (default: 20)
    /// - `HTTP_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("POKEAPI_BASE_URL")
                .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string()),
            cache_ttl: Duration::from_secs(
                env::var("CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
            ),
            page_limit: env::var("PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            http_timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            cache_ttl: Duration::from_secs(60),
            page_limit: 20,
            http_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.page_limit, 20);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("PAGE_LIMIT");
        env::remove_var("HTTP_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.page_limit, 20);
    }
}
