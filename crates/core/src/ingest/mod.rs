//! Ingestion - fetch from the vendor, map to records, persist.
//!
//! ```text
//! IngestService -> MarketDataProvider (rate limited)
//!       |
//!       v
//! mapping -> PriceStore / DividendStore / HolidayStore / StatementStore
//!       |
//!       v
//! IngestRunStore (one run row per completed ingestion)
//! ```

pub mod mapping;

mod ingest_service;
mod ingest_traits;

#[cfg(test)]
mod ingest_service_tests;

pub use ingest_service::{IngestService, IngestStores, DIVIDEND_PAGE_LIMIT};
pub use ingest_traits::IngestServiceTrait;
