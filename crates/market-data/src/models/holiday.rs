use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An upcoming market holiday or early close, one entry per exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketHoliday {
    pub exchange: String,
    pub name: String,
    pub date: NaiveDate,
    /// `closed` or `early-close`.
    pub status: String,
    /// Opening time on early-close days (RFC 3339).
    #[serde(default)]
    pub open: Option<String>,
    /// Closing time on early-close days (RFC 3339).
    #[serde(default)]
    pub close: Option<String>,
}
