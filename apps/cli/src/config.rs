use anyhow::{bail, Context, Result};
use std::time::Duration;
use stockbase_market_data::{ClientConfig, DEFAULT_MIN_INTERVAL, PRODUCTION_BASE_URL};
use stockbase_storage_sqlite::DEFAULT_DB_PATH;

pub struct Config {
    pub api_key: Option<String>,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub num_pools: usize,
    pub retries: u32,
    pub base_url: String,
    pub verbose: bool,
    pub min_call_interval: Duration,
    pub db_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = var("POLYGON_API_KEY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let connect_timeout = Duration::from_secs(parse_or(&var, "POLYGON_CONNECT_TIMEOUT_SECS", 10)?);
        let read_timeout = Duration::from_secs(parse_or(&var, "POLYGON_READ_TIMEOUT_SECS", 10)?);
        let num_pools = parse_or(&var, "POLYGON_NUM_POOLS", 10)?;
        let retries = parse_or(&var, "POLYGON_RETRIES", 3)?;
        let base_url = var("POLYGON_BASE_URL").unwrap_or_else(|| PRODUCTION_BASE_URL.into());
        let verbose = match var("POLYGON_VERBOSE") {
            Some(v) => parse_flag(&v).with_context(|| format!("Invalid POLYGON_VERBOSE: {}", v))?,
            None => false,
        };
        let min_call_interval = Duration::from_secs(parse_or(
            &var,
            "SB_MIN_CALL_INTERVAL_SECS",
            DEFAULT_MIN_INTERVAL.as_secs(),
        )?);
        let db_path = var("SB_DB_PATH")
            .or_else(|| var("DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_DB_PATH.into());

        Ok(Self {
            api_key,
            connect_timeout,
            read_timeout,
            num_pools,
            retries,
            base_url,
            verbose,
            min_call_interval,
            db_path,
        })
    }

    /// Vendor client settings. Fails when no API key is configured.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let Some(api_key) = self.api_key.clone() else {
            bail!("POLYGON_API_KEY is not set");
        };
        Ok(ClientConfig {
            api_key,
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
            num_pools: self.num_pools,
            retries: self.retries,
            base_url: self.base_url.clone(),
            verbose: self.verbose,
            ..ClientConfig::default()
        })
    }
}

fn parse_or<F, T>(var: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {} ({})", key, raw, e)),
        None => Ok(default),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
