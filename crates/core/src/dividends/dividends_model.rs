use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A cash dividend, unique by `(symbol, ex_dividend_date, pay_date, dividend_type)`.
/// A missing type counts as one value for uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendEvent {
    pub symbol: String,
    pub declaration_date: NaiveDate,
    pub ex_dividend_date: NaiveDate,
    pub record_date: NaiveDate,
    pub pay_date: NaiveDate,
    pub amount: f64,
    /// Payments per year (0 one-time, 1 annual, 4 quarterly, 12 monthly).
    pub frequency: Option<i32>,
    /// `CD`, `SC`, `LT` or `ST`.
    pub dividend_type: Option<String>,
}
