// src/config.rs

use crate::errors::ConfigError;
use crate::inventory::{EngineConfig, PoaPlacement, PriceRange};
use crate::logging::LogFormat;
use chrono::Duration;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Directory holding the CMS export (inventory, pages, redirects).
    pub content_dir: PathBuf,
    /// How long redirect rules are served before being fetched again.
    pub redirect_ttl: Duration,
    pub log_format: LogFormat,
    pub engine: EngineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            content_dir: PathBuf::from("content"),
            redirect_ttl: Duration::minutes(5),
            log_format: LogFormat::Pretty,
            engine: EngineConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Unset variables keep their defaults; set but invalid ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let page_size: usize = parse_var(&lookup, "PAGE_SIZE", defaults.engine.page_size)?;
        if page_size == 0 {
            return Err(invalid("PAGE_SIZE", "0", "must be at least 1"));
        }

        let price_min: f64 = parse_var(
            &lookup,
            "DEFAULT_PRICE_MIN",
            defaults.engine.default_price_range.min,
        )?;
        let price_max: f64 = parse_var(
            &lookup,
            "DEFAULT_PRICE_MAX",
            defaults.engine.default_price_range.max,
        )?;
        for (var, value) in [("DEFAULT_PRICE_MIN", price_min), ("DEFAULT_PRICE_MAX", price_max)] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(var, &value.to_string(), "must be a finite, non-negative price"));
            }
        }
        if price_min > price_max {
            return Err(invalid(
                "DEFAULT_PRICE_MIN",
                &price_min.to_string(),
                "must not exceed DEFAULT_PRICE_MAX",
            ));
        }

        let poa_placement = match lookup("POA_PLACEMENT") {
            None => defaults.engine.poa_placement,
            Some(raw) => PoaPlacement::parse(&raw)
                .ok_or_else(|| invalid("POA_PLACEMENT", &raw, "expected `high` or `low`"))?,
        };

        let log_format = match lookup("LOG_FORMAT") {
            None => defaults.log_format,
            Some(raw) => LogFormat::parse(&raw)
                .ok_or_else(|| invalid("LOG_FORMAT", &raw, "expected `pretty` or `json`"))?,
        };

        let ttl_secs: i64 = parse_var(
            &lookup,
            "REDIRECT_TTL_SECS",
            defaults.redirect_ttl.num_seconds(),
        )?;
        if ttl_secs < 0 {
            return Err(invalid(
                "REDIRECT_TTL_SECS",
                &ttl_secs.to_string(),
                "must not be negative",
            ));
        }

        Ok(Self {
            bind_addr: parse_var(&lookup, "BIND_ADDR", defaults.bind_addr)?,
            max_workers: parse_var(&lookup, "MAX_WORKERS", defaults.max_workers)?,
            content_dir: lookup("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_dir),
            redirect_ttl: Duration::seconds(ttl_secs),
            log_format,
            engine: EngineConfig {
                page_size,
                default_price_range: PriceRange::new(price_min, price_max),
                poa_placement,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(var, &raw, &e.to_string())),
    }
}

fn invalid(var: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
