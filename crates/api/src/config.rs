use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use folio_core::contact::DEFAULT_SUBMIT_DELAY_MS;

/// Errors raised while reading server configuration. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the JSON datasets (default: `data`).
    pub data_dir: PathBuf,
    /// Simulated contact submission delay in milliseconds (default: `2000`).
    pub contact_delay_ms: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATA_DIR`             | `data`                     |
    /// | `CONTACT_DELAY_MS`     | `2000`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse("PORT", var("PORT", "3000"), "u16")?;
        let request_timeout_secs =
            parse("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "30"), "u64")?;
        let contact_delay_ms = parse(
            "CONTACT_DELAY_MS",
            var("CONTACT_DELAY_MS", &DEFAULT_SUBMIT_DELAY_MS.to_string()),
            "u64",
        )?;
        let data_dir = PathBuf::from(var("DATA_DIR", "data"));

        let cors_origins = var("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    expected: "origin header value",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_dir,
            contact_delay_ms,
        })
    }
}

fn parse<T: FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        })
}
