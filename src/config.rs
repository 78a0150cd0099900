//! Server configuration from environment variables.
//!
//! - `PORT` (default 3000)
//! - `ANALYSIS_DELAY_MS` (default 0): artificial latency before answering
//!   an estimate request
//! - `STRICT_VALIDATION` (default true): reject samples outside the
//!   documented field ranges

use anyhow::{Context, Result};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub analysis_delay: Duration,
    pub strict_validation: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            analysis_delay: Duration::ZERO,
            strict_validation: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);

        let analysis_delay = parse_var::<u64, _>(&lookup, "ANALYSIS_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.analysis_delay);

        let strict_validation = match lookup("STRICT_VALIDATION") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("Invalid STRICT_VALIDATION value: {:?}", raw))?,
            None => defaults.strict_validation,
        };

        Ok(Self {
            port,
            analysis_delay,
            strict_validation,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Invalid {} value: {:?}", key, raw)),
        None => Ok(None),
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected true/false, got {:?}", other),
    }
}
