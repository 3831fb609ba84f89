//! SQLite storage implementation for dividend events.

mod model;
mod repository;

pub use model::{DividendEventDB, NewDividendEventDB};
pub use repository::DividendRepository;
