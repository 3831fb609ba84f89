use async_trait::async_trait;

use super::dividends_model::DividendEvent;
use crate::errors::Result;
use crate::policy::WritePolicy;

#[async_trait]
pub trait DividendStore: Send + Sync {
    async fn save_dividends(
        &self,
        dividends: Vec<DividendEvent>,
        policy: WritePolicy,
    ) -> Result<usize>;

    /// Dividends for `symbol`, newest ex-dividend date first.
    fn get_dividends(&self, symbol: &str) -> Result<Vec<DividendEvent>>;
}
