//! Service configuration from environment variables

use chrono_tz::Tz;
use std::time::Duration;

use crate::error::{AppError, Result};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const MAX_CONNECTIONS: u32 = 5;
const UPSTREAM_TIMEOUT_SECS: u64 = 5;
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Zone used for day-of-week and time-of-day of bookings
    pub time_zone: Tz,
    pub max_connections: u32,
    /// Bound on acquiring a database connection
    pub upstream_timeout: Duration,
    pub request_timeout: Duration,
}

impl Config {
    /// Load from the process environment (after `.env`, if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url =
            var("DATABASE_URL").ok_or_else(|| AppError::Config("DATABASE_URL must be set".to_string()))?;

        let time_zone = match var("PRICING_TIME_ZONE") {
            Some(raw) => raw.trim().parse::<Tz>().map_err(|_| {
                AppError::Config(format!("PRICING_TIME_ZONE '{}' is not an IANA time zone", raw))
            })?,
            None => Tz::UTC,
        };

        Ok(Self {
            database_url,
            host: var("HOST").unwrap_or_else(|| HOST.to_string()),
            port: parse_var(&var, "PORT", PORT)?,
            time_zone,
            max_connections: parse_var(&var, "DATABASE_MAX_CONNECTIONS", MAX_CONNECTIONS)?,
            upstream_timeout: Duration::from_secs(parse_var(
                &var,
                "UPSTREAM_TIMEOUT_SECS",
                UPSTREAM_TIMEOUT_SECS,
            )?),
            request_timeout: Duration::from_secs(parse_var(
                &var,
                "REQUEST_TIMEOUT_SECS",
                REQUEST_TIMEOUT_SECS,
            )?),
        })
    }
}

fn parse_var<T, F>(var: &F, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} '{}' is not valid", key, raw))),
        None => Ok(default),
    }
}
