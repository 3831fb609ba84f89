//! SQLite storage implementation for Stockbase.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the store traits defined in `stockbase-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (tables and their uniqueness constraints)
//! - Repository implementations for every record type
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//!
//! ```text
//!   core (records, store traits)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```
//!
//! All writes go through a single writer actor ([`WriteHandle`]); reads use
//! pooled connections.

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod dividends;
pub mod holidays;
pub mod positions;
pub mod prices;
pub mod runs;
pub mod statements;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, open, run_migrations, spawn_writer,
    DbConnection, DbPool, WriteHandle, DEFAULT_DB_PATH,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use dividends::DividendRepository;
pub use holidays::HolidayRepository;
pub use positions::PositionRepository;
pub use prices::PriceRepository;
pub use runs::IngestRunRepository;
pub use statements::StatementRepository;

// Re-export from stockbase-core for convenience
pub use stockbase_core::errors::{DatabaseError, Error, Result};
use stockbase_core::IngestStores;

/// Builds every repository over one pool and writer.
pub fn ingest_stores(pool: Arc<DbPool>, writer: WriteHandle) -> IngestStores {
    IngestStores {
        prices: Arc::new(PriceRepository::new(pool.clone(), writer.clone())),
        dividends: Arc::new(DividendRepository::new(pool.clone(), writer.clone())),
        holidays: Arc::new(HolidayRepository::new(pool.clone(), writer.clone())),
        positions: Arc::new(PositionRepository::new(pool.clone(), writer.clone())),
        statements: Arc::new(StatementRepository::new(pool.clone(), writer.clone())),
        runs: Arc::new(IngestRunRepository::new(pool, writer)),
    }
}
