use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reporting period of a financial filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Annual,
    Quarterly,
    Ttm,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Annual => "annual",
            Timeframe::Quarterly => "quarterly",
            Timeframe::Ttm => "ttm",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "annual" => Ok(Timeframe::Annual),
            "quarterly" => Ok(Timeframe::Quarterly),
            "ttm" => Ok(Timeframe::Ttm),
            other => Err(format!("unknown timeframe '{}'", other)),
        }
    }
}

/// One reported value of a statement line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
}

/// Line items of one statement, keyed by the vendor's snake_case name.
pub type LineItems = HashMap<String, DataPoint>;

/// The statements contained in a filing. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    #[serde(default)]
    pub balance_sheet: Option<LineItems>,
    #[serde(default)]
    pub cash_flow_statement: Option<LineItems>,
    #[serde(default)]
    pub comprehensive_income: Option<LineItems>,
    #[serde(default)]
    pub income_statement: Option<LineItems>,
}

/// A financial filing for one company and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    #[serde(default)]
    pub tickers: Vec<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub filing_date: Option<NaiveDate>,
    /// Reported as a string by the vendor, e.g. `"2023"`.
    #[serde(default)]
    pub fiscal_year: Option<String>,
    /// `FY`, `Q1`..`Q4` or `TTM`.
    #[serde(default)]
    pub fiscal_period: Option<String>,
    #[serde(default)]
    pub timeframe: Option<String>,
    #[serde(default)]
    pub financials: Financials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_report() {
        let json = r#"{
            "company_name": "Apple Inc.",
            "end_date": "2023-07-01",
            "filing_date": "2023-08-04",
            "fiscal_period": "Q3",
            "fiscal_year": "2023",
            "start_date": "2023-04-02",
            "tickers": ["AAPL"],
            "timeframe": "quarterly",
            "financials": {
                "balance_sheet": {
                    "assets": {"label": "Assets", "order": 100, "unit": "USD", "value": 335038000000.0}
                },
                "income_statement": {
                    "revenues": {"label": "Revenues", "order": 100, "unit": "USD", "value": 81797000000.0},
                    "basic_earnings_per_share": {"label": "Basic EPS", "order": 4200, "unit": "USD / shares", "value": 1.27}
                }
            }
        }"#;

        let report: FinancialReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.tickers, vec!["AAPL".to_string()]);
        assert_eq!(report.fiscal_year.as_deref(), Some("2023"));
        let bs = report.financials.balance_sheet.as_ref().unwrap();
        assert_eq!(bs["assets"].value, Some(335038000000.0));
        assert!(report.financials.cash_flow_statement.is_none());
        assert_eq!(report.financials.income_statement.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_timeframe_parse() {
        assert_eq!("annual".parse::<Timeframe>().unwrap(), Timeframe::Annual);
        assert_eq!("Quarterly".parse::<Timeframe>().unwrap(), Timeframe::Quarterly);
        assert_eq!("ttm".parse::<Timeframe>().unwrap(), Timeframe::Ttm);
        assert!("weekly".parse::<Timeframe>().is_err());
        assert_eq!(Timeframe::Quarterly.to_string(), "quarterly");
    }
}
