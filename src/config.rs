//! Runtime configuration read from the environment (and `.env`).
//!
//! | Variable                    | Default          |
//! |-----------------------------|------------------|
//! | `SRMS_ENDPOINT`             | unset            |
//! | `HOST`                      | `0.0.0.0`        |
//! | `PORT`                      | `8080`           |
//! | `SRMS_REQUEST_TIMEOUT_SECS` | `30`             |
//! | `LOG_FILE_PATH`             | `logs/srms.log`  |

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILE: &str = "logs/srms.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Result endpoint the client submits to. `None` means local only.
    pub endpoint: Option<String>,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub log_file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Loads from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads using `lookup` to resolve variables. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        let timeout_secs: Option<u64> =
            parse_var("SRMS_REQUEST_TIMEOUT_SECS", get("SRMS_REQUEST_TIMEOUT_SECS"))?;

        Ok(Self {
            endpoint: get("SRMS_ENDPOINT"),
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", get("PORT"))?.unwrap_or(defaults.port),
            request_timeout: timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            log_file_path: get("LOG_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file_path),
        })
    }
}

fn parse_var<T>(key: &str, value: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .map(|v| {
            v.trim()
                .parse()
                .with_context(|| format!("{key} must be a number, got '{v}'"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SRMS_ENDPOINT", "http://localhost:9090/api/calculate"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("SRMS_REQUEST_TIMEOUT_SECS", "5"),
            ("LOG_FILE_PATH", "/tmp/srms/app.log"),
        ])
        .unwrap();

        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:9090/api/calculate")
        );
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.log_file_path, PathBuf::from("/tmp/srms/app.log"));
    }

    #[test]
    fn test_blank_counts_as_unset() {
        let config = load(&[("SRMS_ENDPOINT", "  "), ("PORT", "")]).unwrap();
        assert!(config.endpoint.is_none());
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_bad_port_names_variable() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
