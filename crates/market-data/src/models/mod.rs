//! Vendor response models.
//!
//! These mirror the JSON the vendor returns. They are intentionally loose
//! (most fields optional); mapping them onto the persisted record types is
//! the core crate's job.

mod dividend;
mod financials;
mod holiday;
mod open_close;

pub use dividend::Dividend;
pub use financials::{DataPoint, FinancialReport, Financials, LineItems, Timeframe};
pub use holiday::MarketHoliday;
pub use open_close::DailyOpenClose;

use serde::Deserialize;

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}
