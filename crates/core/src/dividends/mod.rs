//! Dividend events - domain model and store trait.

mod dividends_model;
mod dividends_traits;

pub use dividends_model::DividendEvent;
pub use dividends_traits::DividendStore;
