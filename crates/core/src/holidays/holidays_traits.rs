use async_trait::async_trait;
use chrono::NaiveDate;

use super::holidays_model::MarketHoliday;
use crate::errors::Result;
use crate::policy::WritePolicy;

#[async_trait]
pub trait HolidayStore: Send + Sync {
    async fn save_holidays(&self, holidays: Vec<MarketHoliday>, policy: WritePolicy)
        -> Result<usize>;

    /// Holidays with `start <= date <= end`, in date order.
    fn get_holidays(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<MarketHoliday>>;
}
