use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One open/close aggregate per `(date, symbol)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStockPrice {
    pub date: NaiveDate,
    pub symbol: String,
    pub close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub after_hours: Option<f64>,
    pub pre_market: Option<f64>,
    pub volume: i64,
}
