//! Runtime configuration, read from environment variables.
//!
//! - `PRODUCT_SERVICE_BASE_URL`: required product provider base URL
//! - `ORDER_SERVICE_ADDR`: optional bind address (default: `127.0.0.1:8080`)
//! - `PRODUCT_SERVICE_TIMEOUT_SECS`: optional outbound timeout in seconds, at least 1 (default: 10)

use reqwest::Url;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const BASE_URL_VAR: &str = "PRODUCT_SERVICE_BASE_URL";
pub const ADDR_VAR: &str = "ORDER_SERVICE_ADDR";
pub const TIMEOUT_VAR: &str = "PRODUCT_SERVICE_TIMEOUT_SECS";

pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    8080,
);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("{0} not set")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Product provider base URL, e.g. `http://localhost:9090`.
    pub product_service_base_url: Url,
    pub bind_addr: SocketAddr,
    /// Upper bound on a single outbound product request.
    pub product_service_timeout: Duration,
}

impl AppConfig {
    /// Config with default bind address and timeout.
    pub fn new(product_service_base_url: Url) -> Self {
        Self {
            product_service_base_url,
            bind_addr: DEFAULT_ADDR,
            product_service_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = var(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(BASE_URL_VAR))?;
        let base_url = base_url
            .parse::<Url>()
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ConfigError::Invalid {
                name: BASE_URL_VAR,
                value: base_url.clone(),
            })?;

        let mut config = Self::new(base_url);

        if let Some(addr) = var(ADDR_VAR) {
            config.bind_addr = addr.trim().parse().map_err(|_| ConfigError::Invalid {
                name: ADDR_VAR,
                value: addr.clone(),
            })?;
        }

        if let Some(secs) = var(TIMEOUT_VAR) {
            // Zero would time out every product request immediately
            let parsed = secs.trim().parse::<u64>().ok().filter(|&s| s > 0);
            let Some(parsed) = parsed else {
                return Err(ConfigError::Invalid {
                    name: TIMEOUT_VAR,
                    value: secs,
                });
            };
            config.product_service_timeout = Duration::from_secs(parsed);
        }

        Ok(config)
    }

    /// Set the bind address.
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// Set the outbound request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.product_service_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_apply() {
        let config = AppConfig::from_vars(vars(&[(BASE_URL_VAR, "http://products:9090")])).unwrap();

        assert_eq!(config.product_service_base_url.as_str(), "http://products:9090/");
        assert_eq!(config.bind_addr, DEFAULT_ADDR);
        assert_eq!(config.product_service_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_all_variables_are_read() {
        let config = AppConfig::from_vars(vars(&[
            (BASE_URL_VAR, " http://products:9090 "),
            (ADDR_VAR, "0.0.0.0:9000"),
            (TIMEOUT_VAR, "3"),
        ]))
        .unwrap();

        assert_eq!(config.product_service_base_url.as_str(), "http://products:9090/");
        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.product_service_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_missing_base_url_fails() {
        assert_eq!(
            AppConfig::from_vars(vars(&[])),
            Err(ConfigError::Missing(BASE_URL_VAR))
        );
        assert_eq!(
            AppConfig::from_vars(vars(&[(BASE_URL_VAR, "   ")])),
            Err(ConfigError::Missing(BASE_URL_VAR))
        );
    }

    #[test]
    fn test_unparsable_values_fail() {
        let err = AppConfig::from_vars(vars(&[
            (BASE_URL_VAR, "http://products:9090"),
            (TIMEOUT_VAR, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: TIMEOUT_VAR, .. }));

        let err = AppConfig::from_vars(vars(&[
            (BASE_URL_VAR, "http://products:9090"),
            (ADDR_VAR, "localhost"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: ADDR_VAR, .. }));

        let err = AppConfig::from_vars(vars(&[
            (BASE_URL_VAR, "http://products:9090"),
            (TIMEOUT_VAR, "0"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: TIMEOUT_VAR,
                value: "0".to_string()
            }
        );
    }

    #[test]
    fn test_unusable_base_url_fails() {
        for value in ["products:9090/api", "mailto:ops@example.com", "not a url"] {
            let err = AppConfig::from_vars(vars(&[(BASE_URL_VAR, value)])).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { name: BASE_URL_VAR, .. }),
                "{} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_config_builder() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let config = AppConfig::new("http://products".parse().unwrap())
            .with_bind_addr(addr)
            .with_timeout(Duration::from_millis(250));

        assert_eq!(config.bind_addr, addr);
        assert_eq!(config.product_service_timeout, Duration::from_millis(250));
    }
}
