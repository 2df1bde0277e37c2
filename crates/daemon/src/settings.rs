//! Daemon settings
//!
//! Built-in defaults overridden by `RECIPEBOOK_*` environment variables:
//!
//! - `RECIPEBOOK_HOST` (default `0.0.0.0`)
//! - `RECIPEBOOK_PORT` (default `5000`)
//! - `RECIPEBOOK_LOG_FORMAT`: `pretty` or `json` (default `pretty`)

use config::{Config, ConfigError, Environment};
use recipebook_api_http::HttpServerConfig;
use serde::Deserialize;

const ENV_PREFIX: &str = "RECIPEBOOK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl DaemonConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(env: Environment) -> Result<Self, ConfigError> {
        let defaults = HttpServerConfig::default();

        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_format", "pretty")?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn http(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = DaemonConfig::load_from(env_with(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_env_overrides() {
        let config = DaemonConfig::load_from(env_with(&[
            ("RECIPEBOOK_HOST", "127.0.0.1"),
            ("RECIPEBOOK_PORT", "8080"),
            ("RECIPEBOOK_LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.http().address(), "127.0.0.1:8080");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = DaemonConfig::load_from(env_with(&[("RECIPEBOOK_PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}
