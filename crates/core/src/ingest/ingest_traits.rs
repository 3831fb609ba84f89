use async_trait::async_trait;
use chrono::NaiveDate;
use stockbase_market_data::Timeframe;

use crate::errors::Result;
use crate::positions::PositionHistory;
use crate::policy::WritePolicy;
use crate::runs::IngestRun;

/// Ingestion operations. Every method returns the number of rows written and
/// records an [`IngestRun`] when it completes.
#[async_trait]
pub trait IngestServiceTrait: Send + Sync {
    /// One open/close aggregate per symbol for `date`, fetched in order.
    async fn ingest_daily_prices(
        &self,
        symbols: &[String],
        date: NaiveDate,
        policy: WritePolicy,
    ) -> Result<usize>;

    /// Every dividend the vendor lists for `symbol`.
    async fn ingest_dividends(&self, symbol: &str, policy: WritePolicy) -> Result<usize>;

    /// Upcoming market holidays, one row per date.
    async fn ingest_market_holidays(&self, policy: WritePolicy) -> Result<usize>;

    /// Financial filings for `symbol`, split into statement rows.
    async fn ingest_financials(
        &self,
        symbol: &str,
        timeframe: Option<Timeframe>,
        limit: Option<u32>,
        policy: WritePolicy,
    ) -> Result<usize>;

    /// Stores position rows supplied by the caller (no vendor call).
    async fn import_positions(
        &self,
        positions: Vec<PositionHistory>,
        policy: WritePolicy,
    ) -> Result<usize>;

    fn recent_runs(&self, limit: i64) -> Result<Vec<IngestRun>>;
}
