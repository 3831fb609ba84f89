use async_trait::async_trait;
use chrono::NaiveDate;

use super::positions_model::PositionHistory;
use crate::errors::Result;
use crate::policy::WritePolicy;

/// Storage interface for position history. Rows are unique by `(date, symbol)`.
#[async_trait]
pub trait PositionStore: Send + Sync {
    async fn save_positions(
        &self,
        positions: Vec<PositionHistory>,
        policy: WritePolicy,
    ) -> Result<usize>;

    /// All positions held on `date`, by symbol.
    fn get_positions_on(&self, date: NaiveDate) -> Result<Vec<PositionHistory>>;

    /// History of one symbol, oldest first.
    fn get_position_history(&self, symbol: &str) -> Result<Vec<PositionHistory>>;
}
