use async_trait::async_trait;
use chrono::NaiveDate;

use super::prices_model::DailyStockPrice;
use crate::errors::Result;
use crate::policy::WritePolicy;

/// Storage interface for daily prices. Rows are unique by `(date, symbol)`.
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Writes `prices` in one transaction and returns the number of rows written.
    async fn save_prices(&self, prices: Vec<DailyStockPrice>, policy: WritePolicy)
        -> Result<usize>;

    /// Prices for `symbol` with `start <= date <= end`, oldest first.
    fn get_prices(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyStockPrice>>;

    fn latest_price(&self, symbol: &str) -> Result<Option<DailyStockPrice>>;
}
