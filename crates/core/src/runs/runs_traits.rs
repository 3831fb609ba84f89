use async_trait::async_trait;

use super::runs_model::IngestRun;
use crate::errors::Result;

#[async_trait]
pub trait IngestRunStore: Send + Sync {
    async fn record_run(&self, run: IngestRun) -> Result<()>;

    /// Most recent runs first.
    fn latest_runs(&self, limit: i64) -> Result<Vec<IngestRun>>;
}
