//! Daily stock prices - domain model and store trait.

mod prices_model;
mod prices_traits;

pub use prices_model::DailyStockPrice;
pub use prices_traits::PriceStore;
