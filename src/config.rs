//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first when present;
//! variables already set in the process win over it.

use std::{net::SocketAddr, str::FromStr};

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "account_api=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub min_connections: u32,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: parsed(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?,
            max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS", "10")?,
            min_connections: parsed(&lookup, "DB_MIN_CONNECTIONS", "1")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_hours: parsed(&lookup, "JWT_EXPIRATION_HOURS", "24")?,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

fn parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
