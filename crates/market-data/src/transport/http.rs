//! HTTP transport for the Polygon REST API.
//!
//! This is the "vendor client": it owns the connection pool, the timeouts,
//! authentication and the vendor's own retry loop. It knows nothing about
//! rate limiting; that is layered on by [`super::RateLimitedTransport`].

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use super::{ApiTransport, QueryParams};
use crate::errors::{MarketDataError, RetryClass};

/// Fixed production endpoint of the vendor API.
pub const PRODUCTION_BASE_URL: &str = "https://api.polygon.io";

/// Base factor of the exponential backoff between vendor retries.
const BACKOFF_FACTOR: Duration = Duration::from_millis(100);

/// Vendor client configuration.
///
/// Every field is passed to the HTTP client unmodified, except `base_url`
/// which the free-tier client overrides with [`PRODUCTION_BASE_URL`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_key: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    /// Idle connections kept per host.
    pub num_pools: usize,
    /// Vendor retries after the first attempt.
    pub retries: u32,
    pub base_url: String,
    /// Log every request URL at info level.
    pub verbose: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(10),
            num_pools: 10,
            retries: 3,
            base_url: PRODUCTION_BASE_URL.to_string(),
            verbose: false,
            user_agent: format!("stockbase/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Default configuration with the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

/// reqwest-backed vendor transport.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    retries: u32,
    verbose: bool,
}

impl HttpTransport {
    /// Builds the HTTP client from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, MarketDataError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            MarketDataError::InvalidRequest(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        let mut headers = HeaderMap::new();
        if !config.api_key.is_empty() {
            let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|_| MarketDataError::InvalidRequest("API key is not a valid header value".to_string()))?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .pool_max_idle_per_host(config.num_pools)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url,
            retries: config.retries,
            verbose: config.verbose,
        })
    }

    /// Base URL every relative path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a request path. Absolute URLs (pagination links) pass through.
    pub fn url_for(&self, path: &str) -> Result<Url, MarketDataError> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Url::parse(path)
                .map_err(|e| MarketDataError::InvalidRequest(format!("Invalid URL '{}': {}", path, e)));
        }
        self.base_url
            .join(path)
            .map_err(|e| MarketDataError::InvalidRequest(format!("Invalid path '{}': {}", path, e)))
    }

    /// One attempt, no retries.
    async fn send_once(&self, path: &str, url: Url, params: &QueryParams) -> Result<Value, MarketDataError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| classify_send_error(path, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(path, status, body));
        }

        response.json::<Value>().await.map_err(|e| MarketDataError::Deserialize {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Value, MarketDataError> {
        let url = self.url_for(path)?;

        if self.verbose {
            log::info!("GET {}", url);
        } else {
            debug!("GET {}", url);
        }

        let mut attempt = 0;
        loop {
            match self.send_once(path, url.clone(), params).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retries && e.retry_class() == RetryClass::Retry => {
                    let delay = backoff(attempt);
                    warn!(
                        "Vendor request {} failed ({}), retry {}/{} in {:?}",
                        path,
                        e,
                        attempt + 1,
                        self.retries,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Delay before retry number `attempt` (0-based): 100ms, 200ms, 400ms, ...
fn backoff(attempt: u32) -> Duration {
    BACKOFF_FACTOR * 2u32.saturating_pow(attempt)
}

fn classify_send_error(path: &str, e: reqwest::Error) -> MarketDataError {
    if e.is_timeout() {
        MarketDataError::Timeout {
            path: path.to_string(),
        }
    } else {
        MarketDataError::Network(e)
    }
}

fn status_error(path: &str, status: StatusCode, body: String) -> MarketDataError {
    match status {
        StatusCode::NOT_FOUND => MarketDataError::NotFound {
            path: path.to_string(),
        },
        StatusCode::TOO_MANY_REQUESTS => MarketDataError::RateLimited {
            path: path.to_string(),
        },
        _ => MarketDataError::Http {
            status: status.as_u16(),
            message: if body.is_empty() {
                status.canonical_reason().unwrap_or("unknown").to_string()
            } else {
                body
            },
        },
    }
}
