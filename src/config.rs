use anyhow::Result;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::Error;

pub const DEFAULT_UPSTREAM_BASE: &str = "http://20.244.56.144/evaluation-service";

const DEFAULT_WINDOW_CAPACITY: usize = 10;
const DEFAULT_WINDOW_TIMEOUT_MS: u64 = 500;
const DEFAULT_STOCK_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub upstream_base: String,
    pub capacity: usize,
    pub upstream_timeout: Duration,
}

impl WindowConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            upstream_base: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.to_string()),
            capacity: parse_env("WINDOW_CAPACITY", DEFAULT_WINDOW_CAPACITY)?,
            upstream_timeout: Duration::from_millis(parse_env(
                "WINDOW_UPSTREAM_TIMEOUT_MS",
                DEFAULT_WINDOW_TIMEOUT_MS,
            )?),
        })
    }
}

#[derive(Debug, Clone)]
pub struct StocksConfig {
    pub upstream_base: String,
    pub upstream_timeout: Duration,
}

impl StocksConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            upstream_base: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.to_string()),
            upstream_timeout: Duration::from_millis(parse_env(
                "STOCK_UPSTREAM_TIMEOUT_MS",
                DEFAULT_STOCK_TIMEOUT_MS,
            )?),
        })
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| Error::Config(format!("invalid {name} value: {raw}")).into()),
        Err(_) => Ok(default),
    }
}
