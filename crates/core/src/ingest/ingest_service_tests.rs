//! Tests for IngestService against a canned provider and in-memory stores.
//!
//! The in-memory stores apply [`WritePolicy`] the way the SQLite sink does:
//! `Insert` rejects the whole batch on a key collision, `Skip` keeps the
//! stored row, `Upsert` replaces it.

#[cfg(test)]
mod tests {
    use crate::dividends::{DividendEvent, DividendStore};
    use crate::errors::{DatabaseError, Error, Result};
    use crate::holidays::{HolidayStore, MarketHoliday};
    use crate::ingest::{IngestService, IngestServiceTrait, IngestStores, DIVIDEND_PAGE_LIMIT};
    use crate::policy::WritePolicy;
    use crate::positions::{PositionHistory, PositionStore};
    use crate::prices::{DailyStockPrice, PriceStore};
    use crate::runs::{IngestRun, IngestRunStore};
    use crate::statements::{
        BalanceSheet, CashFlowStatement, ComprehensiveIncomeStatement, FinancialStatements,
        IncomeStatement, StatementStore,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use stockbase_market_data::{
        DailyOpenClose, Dividend, FinancialReport, MarketDataError, MarketDataProvider,
        MarketHoliday as VendorHoliday, Timeframe,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // =========================================================================
    // Mock provider
    // =========================================================================

    #[derive(Default)]
    struct MockProvider {
        open_close: HashMap<(String, NaiveDate), DailyOpenClose>,
        dividends: Vec<Dividend>,
        holidays: Vec<VendorHoliday>,
        reports: Vec<FinancialReport>,
        calls: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn with_price(mut self, symbol: &str, day: NaiveDate, close: f64) -> Self {
            let agg = serde_json::from_value(json!({
                "status": "OK", "from": day, "symbol": symbol,
                "open": close - 1.0, "high": close + 1.0, "low": close - 2.0,
                "close": close, "volume": 1000.0
            }))
            .unwrap();
            self.open_close.insert((symbol.to_string(), day), agg);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MarketDataProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn daily_open_close(
            &self,
            ticker: &str,
            date: NaiveDate,
        ) -> std::result::Result<DailyOpenClose, MarketDataError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("open_close:{}", ticker));
            self.open_close
                .get(&(ticker.to_string(), date))
                .cloned()
                .ok_or_else(|| MarketDataError::NotFound {
                    path: format!("/v1/open-close/{}/{}", ticker, date),
                })
        }

        async fn dividends(
            &self,
            ticker: &str,
            limit: Option<u32>,
        ) -> std::result::Result<Vec<Dividend>, MarketDataError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("dividends:{}:{:?}", ticker, limit));
            Ok(self.dividends.clone())
        }

        async fn market_holidays(&self) -> std::result::Result<Vec<VendorHoliday>, MarketDataError> {
            self.calls.lock().unwrap().push("holidays".to_string());
            Ok(self.holidays.clone())
        }

        async fn stock_financials(
            &self,
            ticker: &str,
            timeframe: Option<Timeframe>,
            limit: Option<u32>,
        ) -> std::result::Result<Vec<FinancialReport>, MarketDataError> {
            self.calls.lock().unwrap().push(format!(
                "financials:{}:{:?}:{:?}",
                ticker, timeframe, limit
            ));
            Ok(self.reports.clone())
        }
    }

    // =========================================================================
    // In-memory stores
    // =========================================================================

    fn apply_policy<T, K, F>(
        table: &mut Vec<T>,
        rows: Vec<T>,
        policy: WritePolicy,
        key: F,
    ) -> Result<usize>
    where
        T: Clone,
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let mut staged = table.clone();
        let mut written = 0;
        for row in rows {
            match staged.iter().position(|existing| key(existing) == key(&row)) {
                Some(index) => match policy {
                    WritePolicy::Insert => {
                        return Err(Error::Database(DatabaseError::UniqueViolation(
                            "duplicate key".to_string(),
                        )))
                    }
                    WritePolicy::Skip => {}
                    WritePolicy::Upsert => {
                        staged[index] = row;
                        written += 1;
                    }
                },
                None => {
                    staged.push(row);
                    written += 1;
                }
            }
        }
        *table = staged;
        Ok(written)
    }

    #[derive(Default)]
    struct MemoryStores {
        prices: Mutex<Vec<DailyStockPrice>>,
        dividends: Mutex<Vec<DividendEvent>>,
        holidays: Mutex<Vec<MarketHoliday>>,
        positions: Mutex<Vec<PositionHistory>>,
        statements: Mutex<Vec<FinancialStatements>>,
        runs: Mutex<Vec<IngestRun>>,
    }

    #[async_trait]
    impl PriceStore for MemoryStores {
        async fn save_prices(
            &self,
            prices: Vec<DailyStockPrice>,
            policy: WritePolicy,
        ) -> Result<usize> {
            let mut table = self.prices.lock().unwrap();
            apply_policy(&mut table, prices, policy, |p| (p.date, p.symbol.clone()))
        }

        fn get_prices(
            &self,
            symbol: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<DailyStockPrice>> {
            Ok(self
                .prices
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.symbol == symbol && p.date >= start && p.date <= end)
                .cloned()
                .collect())
        }

        fn latest_price(&self, symbol: &str) -> Result<Option<DailyStockPrice>> {
            Ok(self
                .prices
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.symbol == symbol)
                .max_by_key(|p| p.date)
                .cloned())
        }
    }

    #[async_trait]
    impl DividendStore for MemoryStores {
        async fn save_dividends(
            &self,
            dividends: Vec<DividendEvent>,
            policy: WritePolicy,
        ) -> Result<usize> {
            let mut table = self.dividends.lock().unwrap();
            apply_policy(&mut table, dividends, policy, |d| {
                (
                    d.symbol.clone(),
                    d.ex_dividend_date,
                    d.pay_date,
                    d.dividend_type.clone().unwrap_or_default(),
                )
            })
        }

        fn get_dividends(&self, symbol: &str) -> Result<Vec<DividendEvent>> {
            Ok(self
                .dividends
                .lock()
                .unwrap()
                .iter()
                .filter(|d| d.symbol == symbol)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl HolidayStore for MemoryStores {
        async fn save_holidays(
            &self,
            holidays: Vec<MarketHoliday>,
            policy: WritePolicy,
        ) -> Result<usize> {
            let mut table = self.holidays.lock().unwrap();
            apply_policy(&mut table, holidays, policy, |h| h.date)
        }

        fn get_holidays(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<MarketHoliday>> {
            Ok(self
                .holidays
                .lock()
                .unwrap()
                .iter()
                .filter(|h| h.date >= start && h.date <= end)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl PositionStore for MemoryStores {
        async fn save_positions(
            &self,
            positions: Vec<PositionHistory>,
            policy: WritePolicy,
        ) -> Result<usize> {
            let mut table = self.positions.lock().unwrap();
            apply_policy(&mut table, positions, policy, |p| (p.date, p.symbol.clone()))
        }

        fn get_positions_on(&self, date: NaiveDate) -> Result<Vec<PositionHistory>> {
            Ok(self
                .positions
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.date == date)
                .cloned()
                .collect())
        }

        fn get_position_history(&self, symbol: &str) -> Result<Vec<PositionHistory>> {
            Ok(self
                .positions
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.symbol == symbol)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl StatementStore for MemoryStores {
        async fn save_statements(
            &self,
            statements: Vec<FinancialStatements>,
            _policy: WritePolicy,
        ) -> Result<usize> {
            let written = statements.iter().map(|s| s.len()).sum();
            self.statements.lock().unwrap().extend(statements);
            Ok(written)
        }

        fn get_balance_sheets(&self, symbols: &str) -> Result<Vec<BalanceSheet>> {
            Ok(self
                .statements
                .lock()
                .unwrap()
                .iter()
                .filter_map(|s| s.balance_sheet.clone())
                .filter(|b| b.header.symbols == symbols)
                .collect())
        }

        fn get_cash_flow_statements(&self, symbols: &str) -> Result<Vec<CashFlowStatement>> {
            Ok(self
                .statements
                .lock()
                .unwrap()
                .iter()
                .filter_map(|s| s.cash_flow_statement.clone())
                .filter(|c| c.header.symbols == symbols)
                .collect())
        }

        fn get_comprehensive_income_statements(
            &self,
            symbols: &str,
        ) -> Result<Vec<ComprehensiveIncomeStatement>> {
            Ok(self
                .statements
                .lock()
                .unwrap()
                .iter()
                .filter_map(|s| s.comprehensive_income_statement.clone())
                .filter(|c| c.header.symbols == symbols)
                .collect())
        }

        fn get_income_statements(&self, symbols: &str) -> Result<Vec<IncomeStatement>> {
            Ok(self
                .statements
                .lock()
                .unwrap()
                .iter()
                .filter_map(|s| s.income_statement.clone())
                .filter(|i| i.header.symbols == symbols)
                .collect())
        }
    }

    #[async_trait]
    impl IngestRunStore for MemoryStores {
        async fn record_run(&self, run: IngestRun) -> Result<()> {
            self.runs.lock().unwrap().push(run);
            Ok(())
        }

        fn latest_runs(&self, limit: i64) -> Result<Vec<IngestRun>> {
            let runs = self.runs.lock().unwrap();
            Ok(runs.iter().rev().take(limit as usize).cloned().collect())
        }
    }

    fn service(provider: MockProvider) -> (IngestService, Arc<MockProvider>, Arc<MemoryStores>) {
        let provider = Arc::new(provider);
        let stores = Arc::new(MemoryStores::default());
        let ingest = IngestService::new(
            provider.clone(),
            IngestStores {
                prices: stores.clone(),
                dividends: stores.clone(),
                holidays: stores.clone(),
                positions: stores.clone(),
                statements: stores.clone(),
                runs: stores.clone(),
            },
        );
        (ingest, provider, stores)
    }

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // =========================================================================
    // Daily prices
    // =========================================================================

    #[tokio::test]
    async fn test_ingest_daily_prices_one_row_per_symbol() {
        let day = date(2023, 4, 6);
        let provider = MockProvider::default()
            .with_price("FB", day, 216.1)
            .with_price("AAPL", day, 164.66);
        let (ingest, provider, stores) = service(provider);

        let written = ingest
            .ingest_daily_prices(&symbols(&["FB", "AAPL"]), day, WritePolicy::Insert)
            .await
            .unwrap();

        assert_eq!(written, 2);
        assert_eq!(provider.calls(), vec!["open_close:FB", "open_close:AAPL"]);
        assert_eq!(stores.latest_price("AAPL").unwrap().unwrap().close, 164.66);

        let runs = ingest.recent_runs(10).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].records_added, 2);
    }

    #[tokio::test]
    async fn test_duplicate_prices_insert_is_rejected() {
        let day = date(2023, 4, 6);
        let (ingest, _provider, stores) = service(MockProvider::default().with_price("FB", day, 216.1));
        let fb = symbols(&["FB"]);

        ingest
            .ingest_daily_prices(&fb, day, WritePolicy::Insert)
            .await
            .unwrap();
        let err = ingest
            .ingest_daily_prices(&fb, day, WritePolicy::Insert)
            .await
            .unwrap_err();

        assert!(err.is_unique_violation());
        assert_eq!(stores.get_prices("FB", day, day).unwrap().len(), 1);
        // The failed run is not recorded.
        assert_eq!(ingest.recent_runs(10).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_prices_skip_and_upsert() {
        let day = date(2023, 4, 6);
        let (ingest, _provider, stores) = service(MockProvider::default().with_price("FB", day, 216.1));
        let fb = symbols(&["FB"]);

        stores
            .save_prices(
                vec![DailyStockPrice {
                    date: day,
                    symbol: "FB".to_string(),
                    close: 1.0,
                    open: 1.0,
                    high: 1.0,
                    low: 1.0,
                    after_hours: None,
                    pre_market: None,
                    volume: 1,
                }],
                WritePolicy::Insert,
            )
            .await
            .unwrap();

        let skipped = ingest
            .ingest_daily_prices(&fb, day, WritePolicy::Skip)
            .await
            .unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(stores.latest_price("FB").unwrap().unwrap().close, 1.0);

        let replaced = ingest
            .ingest_daily_prices(&fb, day, WritePolicy::Upsert)
            .await
            .unwrap();
        assert_eq!(replaced, 1);
        let stored = stores.get_prices("FB", day, day).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].close, 216.1);
    }

    #[tokio::test]
    async fn test_vendor_error_propagates_and_keeps_earlier_rows() {
        let day = date(2023, 4, 6);
        let (ingest, provider, stores) = service(MockProvider::default().with_price("FB", day, 216.1));

        let err = ingest
            .ingest_daily_prices(&symbols(&["FB", "NOPE", "AAPL"]), day, WritePolicy::Insert)
            .await
            .unwrap_err();

        match err {
            Error::MarketData(inner) => assert!(inner.is_not_found()),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(provider.calls().len(), 2);
        assert!(stores.latest_price("FB").unwrap().is_some());
        assert!(ingest.recent_runs(10).unwrap().is_empty());
    }

    // =========================================================================
    // Dividends, holidays, financials, positions
    // =========================================================================

    #[tokio::test]
    async fn test_ingest_dividends_skips_incomplete_entries() {
        let provider = MockProvider {
            dividends: serde_json::from_value(json!([
                {"ticker": "AAPL", "cash_amount": 0.24, "declaration_date": "2023-05-04",
                 "ex_dividend_date": "2023-05-12", "record_date": "2023-05-15",
                 "pay_date": "2023-05-18", "frequency": 4, "dividend_type": "CD"},
                {"ticker": "AAPL", "cash_amount": 0.25, "ex_dividend_date": "2023-08-11"}
            ]))
            .unwrap(),
            ..MockProvider::default()
        };
        let (ingest, provider, stores) = service(provider);

        let written = ingest
            .ingest_dividends("AAPL", WritePolicy::Insert)
            .await
            .unwrap();

        assert_eq!(written, 1);
        assert_eq!(
            provider.calls(),
            vec![format!("dividends:AAPL:Some({})", DIVIDEND_PAGE_LIMIT)]
        );
        assert_eq!(stores.get_dividends("AAPL").unwrap()[0].amount, 0.24);
    }

    #[tokio::test]
    async fn test_ingest_dividends_keeps_special_payout_on_same_ex_date() {
        let provider = MockProvider {
            dividends: serde_json::from_value(json!([
                {"ticker": "COST", "cash_amount": 15.0, "declaration_date": "2023-12-14",
                 "ex_dividend_date": "2023-12-27", "record_date": "2023-12-28",
                 "pay_date": "2024-01-12", "frequency": 0, "dividend_type": "SC"},
                {"ticker": "COST", "cash_amount": 1.02, "declaration_date": "2023-12-14",
                 "ex_dividend_date": "2023-12-27", "record_date": "2023-12-28",
                 "pay_date": "2024-01-12", "frequency": 4, "dividend_type": "CD"}
            ]))
            .unwrap(),
            ..MockProvider::default()
        };
        let (ingest, _provider, stores) = service(provider);

        let written = ingest
            .ingest_dividends("COST", WritePolicy::Insert)
            .await
            .unwrap();
        assert_eq!(written, 2);

        let again = ingest
            .ingest_dividends("COST", WritePolicy::Skip)
            .await
            .unwrap();
        assert_eq!(again, 0);
        assert_eq!(stores.get_dividends("COST").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ingest_market_holidays_one_per_date() {
        let provider = MockProvider {
            holidays: serde_json::from_value(json!([
                {"date": "2023-12-25", "exchange": "NYSE", "name": "Christmas", "status": "closed"},
                {"date": "2023-12-25", "exchange": "NASDAQ", "name": "Christmas", "status": "closed"},
                {"date": "2024-01-01", "exchange": "NYSE", "name": "New Years Day", "status": "closed"}
            ]))
            .unwrap(),
            ..MockProvider::default()
        };
        let (ingest, _provider, stores) = service(provider);

        let written = ingest
            .ingest_market_holidays(WritePolicy::Skip)
            .await
            .unwrap();
        assert_eq!(written, 2);

        // A second pass with Skip leaves the table unchanged.
        let again = ingest
            .ingest_market_holidays(WritePolicy::Skip)
            .await
            .unwrap();
        assert_eq!(again, 0);
        assert_eq!(
            stores
                .get_holidays(date(2023, 1, 1), date(2024, 12, 31))
                .unwrap()
                .len(),
            2
        );
        assert_eq!(ingest.recent_runs(10).unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ingest_financials() {
        let provider = MockProvider {
            reports: serde_json::from_value(json!([
                {
                    "tickers": ["AAPL"], "company_name": "Apple Inc.",
                    "start_date": "2022-09-25", "end_date": "2023-09-30",
                    "fiscal_year": "2023", "fiscal_period": "FY", "timeframe": "annual",
                    "financials": {
                        "balance_sheet": {"assets": {"value": 352583000000.0}},
                        "cash_flow_statement": {"net_cash_flow": {"value": 5760000000.0}},
                        "income_statement": {"revenues": {"value": 383285000000.0}}
                    }
                },
                {
                    "tickers": ["AAPL"], "fiscal_period": "FY", "timeframe": "annual",
                    "financials": {"income_statement": {"revenues": {"value": 1.0}}}
                },
                {
                    "tickers": ["AAPL"], "start_date": "2021-09-26", "end_date": "2022-09-24",
                    "fiscal_year": "2022", "fiscal_period": "FY", "timeframe": "annual",
                    "financials": {}
                }
            ]))
            .unwrap(),
            ..MockProvider::default()
        };
        let (ingest, provider, stores) = service(provider);

        let written = ingest
            .ingest_financials("AAPL", Some(Timeframe::Annual), Some(3), WritePolicy::Insert)
            .await
            .unwrap();

        assert_eq!(written, 3);
        assert_eq!(
            provider.calls(),
            vec!["financials:AAPL:Some(Annual):Some(3)"]
        );
        let sheets = stores.get_balance_sheets("AAPL").unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].header.fiscal_year, Some(2023));
        assert!(stores
            .get_comprehensive_income_statements("AAPL")
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_import_positions() {
        let (ingest, provider, stores) = service(MockProvider::default());
        let positions = vec![
            PositionHistory {
                symbol: "FB".to_string(),
                quantity: 10.0,
                cost_basis: 2000.0,
                date: date(2023, 4, 6),
            },
            PositionHistory {
                symbol: "AAPL".to_string(),
                quantity: 5.0,
                cost_basis: 800.0,
                date: date(2023, 4, 6),
            },
        ];

        let written = ingest
            .import_positions(positions.clone(), WritePolicy::Insert)
            .await
            .unwrap();
        assert_eq!(written, 2);
        assert!(provider.calls().is_empty());
        assert_eq!(stores.get_positions_on(date(2023, 4, 6)).unwrap().len(), 2);

        let err = ingest
            .import_positions(positions, WritePolicy::Insert)
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());
    }

    #[tokio::test]
    async fn test_empty_import_still_records_run() {
        let (ingest, _provider, _stores) = service(MockProvider::default());
        let written = ingest
            .import_positions(Vec::new(), WritePolicy::Insert)
            .await
            .unwrap();
        assert_eq!(written, 0);
        assert_eq!(ingest.recent_runs(1).unwrap()[0].records_added, 0);
    }
}
