use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily open/close aggregate for one ticker on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOpenClose {
    #[serde(default)]
    pub status: Option<String>,
    /// Trading day the aggregate covers.
    pub from: NaiveDate,
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(default)]
    pub after_hours: Option<f64>,
    #[serde(default)]
    pub pre_market: Option<f64>,
}
