use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A day the market is closed or closes early. At most one per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketHoliday {
    pub date: NaiveDate,
    /// `closed` or `early-close`.
    pub status: String,
    pub name: String,
}
