//! Polygon.io market data provider.
//!
//! Endpoints used:
//! - Daily open/close via `/v1/open-close/{ticker}/{date}`
//! - Dividends via `/v3/reference/dividends` (cursor paginated)
//! - Market holidays via `/v1/marketstatus/upcoming`
//! - Financial statements via `/vX/reference/financials` (cursor paginated)
//!
//! Note: the free tier is limited to 5 API calls per minute. Use
//! [`PolygonClient::free_tier`], which routes every request (including each
//! pagination page) through the process-wide call gate.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::{DailyOpenClose, Dividend, FinancialReport, MarketHoliday, Page, Timeframe};
use crate::provider::MarketDataProvider;
use crate::transport::{
    ApiTransport, ClientConfig, HttpTransport, QueryParams, RateLimitedTransport,
    PRODUCTION_BASE_URL,
};

const PROVIDER_ID: &str = "POLYGON";

/// Upper bound on `next_url` links followed for a single listing.
pub const DEFAULT_MAX_PAGES: usize = 100;

/// Polygon client over an arbitrary transport.
pub struct PolygonClient<T> {
    transport: T,
    max_pages: usize,
}

/// The client used in production: HTTP transport behind the shared gate.
pub type PolygonFreeClient = PolygonClient<RateLimitedTransport<HttpTransport>>;

impl PolygonFreeClient {
    /// Builds the free-tier client.
    ///
    /// The configured base URL is ignored and replaced with the production
    /// endpoint; every other setting is passed through unmodified.
    pub fn free_tier(config: &ClientConfig) -> Result<Self, MarketDataError> {
        let config = ClientConfig {
            base_url: PRODUCTION_BASE_URL.to_string(),
            ..config.clone()
        };
        let http = HttpTransport::new(&config)?;
        Ok(Self::new(RateLimitedTransport::new(http)))
    }
}

impl<T: ApiTransport> PolygonClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Raw GET through the transport.
    pub async fn fetch(&self, path: &str, params: &QueryParams) -> Result<Value, MarketDataError> {
        self.transport.get(path, params).await
    }

    /// GET and decode into `R`.
    async fn fetch_as<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<R, MarketDataError> {
        let body = self.fetch(path, params).await?;
        decode(path, body)
    }

    /// Follows `next_url` until the listing is exhausted.
    async fn paginate<R: DeserializeOwned>(
        &self,
        path: &str,
        params: QueryParams,
    ) -> Result<Vec<R>, MarketDataError> {
        let mut results = Vec::new();
        let mut page: Page<R> = self.fetch_as(path, &params).await?;
        let mut pages = 1;

        loop {
            results.append(&mut page.results);

            let Some(next_url) = page.next_url.take() else {
                break;
            };
            if pages >= self.max_pages {
                return Err(MarketDataError::PaginationLimit {
                    path: path.to_string(),
                    max_pages: self.max_pages,
                });
            }

            debug!("Polygon: following page {} of {}", pages + 1, path);
            page = self.fetch_as(&next_url, &QueryParams::new()).await?;
            pages += 1;
        }

        debug!("Polygon: {} results over {} page(s) from {}", results.len(), pages, path);
        Ok(results)
    }
}

#[async_trait]
impl<T: ApiTransport> MarketDataProvider for PolygonClient<T> {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn daily_open_close(
        &self,
        ticker: &str,
        date: NaiveDate,
    ) -> Result<DailyOpenClose, MarketDataError> {
        let path = format!("/v1/open-close/{}/{}", ticker, date.format("%Y-%m-%d"));
        let params = vec![("adjusted".to_string(), "true".to_string())];
        self.fetch_as(&path, &params).await
    }

    async fn dividends(
        &self,
        ticker: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Dividend>, MarketDataError> {
        let mut params = vec![("ticker".to_string(), ticker.to_string())];
        if let Some(limit) = limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        self.paginate("/v3/reference/dividends", params).await
    }

    async fn market_holidays(&self) -> Result<Vec<MarketHoliday>, MarketDataError> {
        self.fetch_as("/v1/marketstatus/upcoming", &QueryParams::new())
            .await
    }

    async fn stock_financials(
        &self,
        ticker: &str,
        timeframe: Option<Timeframe>,
        limit: Option<u32>,
    ) -> Result<Vec<FinancialReport>, MarketDataError> {
        let mut params = vec![("ticker".to_string(), ticker.to_string())];
        if let Some(timeframe) = timeframe {
            params.push(("timeframe".to_string(), timeframe.as_str().to_string()));
        }
        if let Some(limit) = limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        self.paginate("/vX/reference/financials", params).await
    }
}

fn decode<R: DeserializeOwned>(path: &str, body: Value) -> Result<R, MarketDataError> {
    serde_json::from_value(body).map_err(|e| MarketDataError::Deserialize {
        path: path.to_string(),
        message: e.to_string(),
    })
}
