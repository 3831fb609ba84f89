//! Ingestion run metadata.

mod runs_model;
mod runs_traits;

pub use runs_model::IngestRun;
pub use runs_traits::IngestRunStore;
