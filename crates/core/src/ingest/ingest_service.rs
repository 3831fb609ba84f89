use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info, warn};
use stockbase_market_data::{MarketDataProvider, Timeframe};

use super::ingest_traits::IngestServiceTrait;
use super::mapping::{
    dividend_event_from_vendor, holidays_from_vendor, price_from_open_close,
    statements_from_report,
};
use crate::dividends::{DividendEvent, DividendStore};
use crate::errors::Result;
use crate::holidays::HolidayStore;
use crate::policy::WritePolicy;
use crate::positions::{PositionHistory, PositionStore};
use crate::prices::PriceStore;
use crate::runs::{IngestRun, IngestRunStore};
use crate::statements::{FinancialStatements, StatementStore};

/// Page size requested from the dividends listing. Larger pages mean fewer
/// gated calls.
pub const DIVIDEND_PAGE_LIMIT: u32 = 1000;

/// The stores an [`IngestService`] writes to.
#[derive(Clone)]
pub struct IngestStores {
    pub prices: Arc<dyn PriceStore>,
    pub dividends: Arc<dyn DividendStore>,
    pub holidays: Arc<dyn HolidayStore>,
    pub positions: Arc<dyn PositionStore>,
    pub statements: Arc<dyn StatementStore>,
    pub runs: Arc<dyn IngestRunStore>,
}

pub struct IngestService {
    provider: Arc<dyn MarketDataProvider>,
    stores: IngestStores,
}

impl IngestService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, stores: IngestStores) -> Self {
        IngestService { provider, stores }
    }

    async fn finish_run(&self, what: &str, records_added: usize) -> Result<usize> {
        self.stores
            .runs
            .record_run(IngestRun::now(records_added))
            .await?;
        info!("{}: {} record(s) added", what, records_added);
        Ok(records_added)
    }
}

#[async_trait]
impl IngestServiceTrait for IngestService {
    async fn ingest_daily_prices(
        &self,
        symbols: &[String],
        date: NaiveDate,
        policy: WritePolicy,
    ) -> Result<usize> {
        let mut written = 0;
        // Persisted per symbol: rows fetched before a failure stay stored.
        for symbol in symbols {
            debug!("Fetching open/close for {} on {}", symbol, date);
            let agg = self.provider.daily_open_close(symbol, date).await?;
            let price = price_from_open_close(&agg);
            written += self.stores.prices.save_prices(vec![price], policy).await?;
        }
        self.finish_run("Daily prices", written).await
    }

    async fn ingest_dividends(&self, symbol: &str, policy: WritePolicy) -> Result<usize> {
        let listed = self
            .provider
            .dividends(symbol, Some(DIVIDEND_PAGE_LIMIT))
            .await?;

        let events: Vec<DividendEvent> = listed
            .iter()
            .filter_map(|dividend| match dividend_event_from_vendor(dividend) {
                Ok(event) => Some(event),
                Err(e) => {
                    warn!(
                        "Skipping {} dividend (ex-date {:?}): {}",
                        dividend.ticker, dividend.ex_dividend_date, e
                    );
                    None
                }
            })
            .collect();

        let written = if events.is_empty() {
            0
        } else {
            self.stores.dividends.save_dividends(events, policy).await?
        };
        self.finish_run("Dividends", written).await
    }

    async fn ingest_market_holidays(&self, policy: WritePolicy) -> Result<usize> {
        let entries = self.provider.market_holidays().await?;
        let holidays = holidays_from_vendor(&entries);
        debug!(
            "{} holiday entries collapsed to {} date(s)",
            entries.len(),
            holidays.len()
        );

        let written = if holidays.is_empty() {
            0
        } else {
            self.stores.holidays.save_holidays(holidays, policy).await?
        };
        self.finish_run("Market holidays", written).await
    }

    async fn ingest_financials(
        &self,
        symbol: &str,
        timeframe: Option<Timeframe>,
        limit: Option<u32>,
        policy: WritePolicy,
    ) -> Result<usize> {
        let reports = self
            .provider
            .stock_financials(symbol, timeframe, limit)
            .await?;

        let statements: Vec<FinancialStatements> = reports
            .iter()
            .filter_map(|report| match statements_from_report(report) {
                Ok(set) if !set.is_empty() => Some(set),
                Ok(_) => {
                    debug!("Filing {:?} carries no statements", report.fiscal_period);
                    None
                }
                Err(e) => {
                    warn!(
                        "Skipping {} filing {:?} {:?}: {}",
                        symbol, report.fiscal_year, report.fiscal_period, e
                    );
                    None
                }
            })
            .collect();

        let written = if statements.is_empty() {
            0
        } else {
            self.stores
                .statements
                .save_statements(statements, policy)
                .await?
        };
        self.finish_run("Financial statements", written).await
    }

    async fn import_positions(
        &self,
        positions: Vec<PositionHistory>,
        policy: WritePolicy,
    ) -> Result<usize> {
        let written = if positions.is_empty() {
            0
        } else {
            self.stores
                .positions
                .save_positions(positions, policy)
                .await?
        };
        self.finish_run("Position history", written).await
    }

    fn recent_runs(&self, limit: i64) -> Result<Vec<IngestRun>> {
        self.stores.runs.latest_runs(limit)
    }
}
