//! Conversions from vendor responses to persisted records.

use std::collections::HashSet;

use chrono::NaiveDate;
use stockbase_market_data::{
    DailyOpenClose, Dividend, FinancialReport, MarketHoliday as VendorHoliday,
};

use crate::dividends::DividendEvent;
use crate::errors::{Error, Result, ValidationError};
use crate::holidays::MarketHoliday;
use crate::prices::DailyStockPrice;
use crate::statements::{
    BalanceSheet, CashFlowStatement, ComprehensiveIncomeStatement, FinancialStatements,
    IncomeStatement, StatementHeader,
};

pub fn price_from_open_close(agg: &DailyOpenClose) -> DailyStockPrice {
    DailyStockPrice {
        date: agg.from,
        symbol: agg.symbol.clone(),
        close: agg.close,
        open: agg.open,
        high: agg.high,
        low: agg.low,
        after_hours: agg.after_hours,
        pre_market: agg.pre_market,
        volume: agg.volume.round() as i64,
    }
}

/// Fails with `MissingField` when any of the four dates is absent.
pub fn dividend_event_from_vendor(dividend: &Dividend) -> Result<DividendEvent> {
    Ok(DividendEvent {
        symbol: dividend.ticker.clone(),
        declaration_date: required_date(dividend.declaration_date, "declaration_date")?,
        ex_dividend_date: required_date(dividend.ex_dividend_date, "ex_dividend_date")?,
        record_date: required_date(dividend.record_date, "record_date")?,
        pay_date: required_date(dividend.pay_date, "pay_date")?,
        amount: dividend.cash_amount,
        frequency: dividend.frequency,
        dividend_type: dividend.dividend_type.clone(),
    })
}

/// The vendor lists a holiday once per exchange; only the first entry for
/// each date is kept, in input order.
pub fn holidays_from_vendor(entries: &[VendorHoliday]) -> Vec<MarketHoliday> {
    let mut seen: HashSet<NaiveDate> = HashSet::new();
    entries
        .iter()
        .filter(|entry| seen.insert(entry.date))
        .map(|entry| MarketHoliday {
            date: entry.date,
            status: entry.status.clone(),
            name: entry.name.clone(),
        })
        .collect()
}

pub fn statement_header_from_report(report: &FinancialReport) -> Result<StatementHeader> {
    if report.tickers.is_empty() {
        return Err(missing("tickers"));
    }

    let fiscal_year = match report.fiscal_year.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(year) => Some(year.parse::<i32>().map_err(ValidationError::from)?),
    };

    Ok(StatementHeader {
        symbols: report.tickers.join(","),
        company_name: report.company_name.clone().unwrap_or_default(),
        start_date: required_date(report.start_date, "start_date")?,
        end_date: required_date(report.end_date, "end_date")?,
        filing_date: report.filing_date,
        fiscal_year,
        timeframe: report.timeframe.clone().unwrap_or_default(),
        fiscal_period: report.fiscal_period.clone().unwrap_or_default(),
    })
}

/// Splits one filing into its statement records. Statements the filing does
/// not carry are left as `None`.
pub fn statements_from_report(report: &FinancialReport) -> Result<FinancialStatements> {
    let header = statement_header_from_report(report)?;
    let financials = &report.financials;

    Ok(FinancialStatements {
        balance_sheet: financials
            .balance_sheet
            .as_ref()
            .map(|items| BalanceSheet::from_line_items(header.clone(), items)),
        cash_flow_statement: financials
            .cash_flow_statement
            .as_ref()
            .map(|items| CashFlowStatement::from_line_items(header.clone(), items)),
        comprehensive_income_statement: financials
            .comprehensive_income
            .as_ref()
            .map(|items| ComprehensiveIncomeStatement::from_line_items(header.clone(), items)),
        income_statement: financials
            .income_statement
            .as_ref()
            .map(|items| IncomeStatement::from_line_items(header.clone(), items)),
    })
}

fn required_date(value: Option<NaiveDate>, field: &str) -> Result<NaiveDate> {
    value.ok_or_else(|| missing(field))
}

fn missing(field: &str) -> Error {
    Error::Validation(ValidationError::MissingField(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_price_from_open_close() {
        let agg: DailyOpenClose = serde_json::from_value(json!({
            "status": "OK", "from": "2023-04-06", "symbol": "AAPL",
            "open": 162.43, "high": 164.96, "low": 162.2, "close": 164.66,
            "volume": 45390122.0, "afterHours": 164.55
        }))
        .unwrap();

        let price = price_from_open_close(&agg);
        assert_eq!(price.date, date(2023, 4, 6));
        assert_eq!(price.symbol, "AAPL");
        assert_eq!(price.close, 164.66);
        assert_eq!(price.volume, 45390122);
        assert_eq!(price.after_hours, Some(164.55));
        assert_eq!(price.pre_market, None);
    }

    #[test]
    fn test_dividend_mapping() {
        let dividend: Dividend = serde_json::from_value(json!({
            "ticker": "AAPL", "cash_amount": 0.24, "currency": "USD",
            "declaration_date": "2023-05-04", "ex_dividend_date": "2023-05-12",
            "record_date": "2023-05-15", "pay_date": "2023-05-18",
            "frequency": 4, "dividend_type": "CD"
        }))
        .unwrap();

        let event = dividend_event_from_vendor(&dividend).unwrap();
        assert_eq!(event.symbol, "AAPL");
        assert_eq!(event.amount, 0.24);
        assert_eq!(event.ex_dividend_date, date(2023, 5, 12));
        assert_eq!(event.pay_date, date(2023, 5, 18));
        assert_eq!(event.frequency, Some(4));
        assert_eq!(event.dividend_type.as_deref(), Some("CD"));
    }

    #[test]
    fn test_dividend_missing_date() {
        let dividend: Dividend = serde_json::from_value(json!({
            "ticker": "XYZ", "cash_amount": 1.0, "ex_dividend_date": "2023-05-12"
        }))
        .unwrap();

        match dividend_event_from_vendor(&dividend).unwrap_err() {
            Error::Validation(ValidationError::MissingField(field)) => {
                assert_eq!(field, "declaration_date")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_holidays_collapse_by_date() {
        let entries: Vec<VendorHoliday> = serde_json::from_value(json!([
            {"date": "2023-11-23", "exchange": "NYSE", "name": "Thanksgiving", "status": "closed"},
            {"date": "2023-11-23", "exchange": "NASDAQ", "name": "Thanksgiving Day", "status": "closed"},
            {"date": "2023-11-24", "exchange": "NYSE", "name": "Thanksgiving", "status": "early-close"}
        ]))
        .unwrap();

        let holidays = holidays_from_vendor(&entries);
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].name, "Thanksgiving");
        assert_eq!(holidays[1].status, "early-close");
    }

    fn report() -> FinancialReport {
        serde_json::from_value(json!({
            "tickers": ["GOOG", "GOOGL"],
            "company_name": "Alphabet Inc.",
            "start_date": "2023-01-01",
            "end_date": "2023-03-31",
            "filing_date": "2023-04-26",
            "fiscal_year": "2023",
            "fiscal_period": "Q1",
            "timeframe": "quarterly",
            "financials": {
                "balance_sheet": {"assets": {"value": 369491000000.0, "unit": "USD"}},
                "income_statement": {
                    "revenues": {"value": 69787000000.0, "unit": "USD"},
                    "grossprofit": {"value": 39650000000.0, "unit": "USD"}
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_statement_header() {
        let header = statement_header_from_report(&report()).unwrap();
        assert_eq!(header.symbols, "GOOG,GOOGL");
        assert_eq!(header.fiscal_year, Some(2023));
        assert_eq!(header.timeframe, "quarterly");
        assert_eq!(header.filing_date, Some(date(2023, 4, 26)));
    }

    #[test]
    fn test_statements_from_report() {
        let statements = statements_from_report(&report()).unwrap();
        assert_eq!(statements.len(), 2);

        let sheet = statements.balance_sheet.as_ref().unwrap();
        assert_eq!(sheet.assets, Some(369491000000.0));

        let income = statements.income_statement.as_ref().unwrap();
        assert_eq!(income.grossprofit, Some(39650000000.0));
        assert_eq!(income.header, sheet.header);

        assert!(statements.cash_flow_statement.is_none());
        assert!(statements.comprehensive_income_statement.is_none());
    }

    #[test]
    fn test_ttm_report_without_fiscal_year() {
        let mut report = report();
        report.fiscal_year = None;
        report.filing_date = None;
        let header = statement_header_from_report(&report).unwrap();
        assert_eq!(header.fiscal_year, None);
        assert_eq!(header.filing_date, None);
    }

    #[test]
    fn test_bad_fiscal_year() {
        let mut report = report();
        report.fiscal_year = Some("FY23".to_string());
        assert!(matches!(
            statement_header_from_report(&report),
            Err(Error::Validation(ValidationError::IntegerParse(_)))
        ));
    }

    #[test]
    fn test_report_without_tickers() {
        let mut report = report();
        report.tickers.clear();
        assert!(statements_from_report(&report).is_err());
    }
}
