//! Stockbase Core - records, store traits and ingestion.
//!
//! This crate is database-agnostic. It defines the persisted record types
//! and the traits the `storage-sqlite` crate implements, maps vendor
//! responses onto records, and drives ingestion through
//! [`ingest::IngestService`].

pub mod dividends;
pub mod errors;
pub mod holidays;
pub mod ingest;
pub mod policy;
pub mod positions;
pub mod prices;
pub mod runs;
pub mod statements;

pub use dividends::{DividendEvent, DividendStore};
pub use holidays::{HolidayStore, MarketHoliday};
pub use ingest::{IngestService, IngestServiceTrait, IngestStores};
pub use policy::WritePolicy;
pub use positions::{PositionHistory, PositionStore};
pub use prices::{DailyStockPrice, PriceStore};
pub use runs::{IngestRun, IngestRunStore};
pub use statements::{
    BalanceSheet, CashFlowStatement, ComprehensiveIncomeStatement, FinancialStatements,
    IncomeStatement, StatementHeader, StatementStore,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
