//! SQLite storage implementation for ingestion run metadata (`_meta_data`).

mod model;
mod repository;

pub use model::{IngestRunDB, NewIngestRunDB};
pub use repository::IngestRunRepository;
