//! SQLite storage implementation for market holidays.

mod model;
mod repository;

pub use model::{MarketHolidayDB, NewMarketHolidayDB};
pub use repository::HolidayRepository;
