//! SQLite storage implementation for position history.

mod model;
mod repository;

pub use model::{NewPositionHistoryDB, PositionHistoryDB};
pub use repository::PositionRepository;
