use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A cash dividend as listed by the reference endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dividend {
    pub ticker: String,
    pub cash_amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub declaration_date: Option<NaiveDate>,
    #[serde(default)]
    pub ex_dividend_date: Option<NaiveDate>,
    #[serde(default)]
    pub record_date: Option<NaiveDate>,
    #[serde(default)]
    pub pay_date: Option<NaiveDate>,
    /// Payments per year: 0 one-time, 1 annual, 2 bi-annual, 4 quarterly, 12 monthly.
    #[serde(default)]
    pub frequency: Option<i32>,
    /// `CD` regular, `SC` special, `LT`/`ST` capital gains.
    #[serde(default)]
    pub dividend_type: Option<String>,
}
