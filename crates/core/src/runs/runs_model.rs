use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One completed ingestion and how many rows it wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestRun {
    pub run_date: NaiveDateTime,
    pub records_added: i64,
}

impl IngestRun {
    /// A run stamped with the local wall clock.
    pub fn now(records_added: usize) -> Self {
        Self {
            run_date: chrono::Local::now().naive_local(),
            records_added: records_added as i64,
        }
    }
}
