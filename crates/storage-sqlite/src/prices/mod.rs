//! SQLite storage implementation for daily prices.

mod model;
mod repository;

pub use model::{DailyStockPriceDB, NewDailyStockPriceDB};
pub use repository::PriceRepository;
