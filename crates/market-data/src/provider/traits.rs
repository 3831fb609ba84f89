//! Market data provider trait definitions.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::MarketDataError;
use crate::models::{DailyOpenClose, Dividend, FinancialReport, MarketHoliday, Timeframe};

/// Trait for market data providers.
///
/// The ingestion service only depends on this trait, so tests can swap in
/// canned data and the vendor can be replaced without touching the core.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "POLYGON".
    fn id(&self) -> &'static str;

    /// Fetch the open/close aggregate for `ticker` on `date`.
    async fn daily_open_close(
        &self,
        ticker: &str,
        date: NaiveDate,
    ) -> Result<DailyOpenClose, MarketDataError>;

    /// List cash dividends for `ticker`, newest first.
    ///
    /// `limit` caps the page size, not the total; all pages are followed.
    async fn dividends(
        &self,
        ticker: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Dividend>, MarketDataError>;

    /// List upcoming market holidays and early closes.
    async fn market_holidays(&self) -> Result<Vec<MarketHoliday>, MarketDataError>;

    /// List financial filings for `ticker`.
    async fn stock_financials(
        &self,
        ticker: &str,
        timeframe: Option<Timeframe>,
        limit: Option<u32>,
    ) -> Result<Vec<FinancialReport>, MarketDataError>;
}
