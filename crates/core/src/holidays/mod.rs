//! Market holidays - domain model and store trait.

mod holidays_model;
mod holidays_traits;

pub use holidays_model::MarketHoliday;
pub use holidays_traits::HolidayStore;
