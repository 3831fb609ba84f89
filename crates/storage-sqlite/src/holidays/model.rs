use chrono::NaiveDate;
use diesel::prelude::*;

use stockbase_core::holidays::MarketHoliday;

#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::market_holiday)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MarketHolidayDB {
    pub id: i32,
    pub date: NaiveDate,
    pub status: String,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::market_holiday)]
pub struct NewMarketHolidayDB {
    pub date: NaiveDate,
    pub status: String,
    pub name: String,
}

impl NewMarketHolidayDB {
    pub const COLUMNS: usize = 3;
}

impl From<MarketHoliday> for NewMarketHolidayDB {
    fn from(holiday: MarketHoliday) -> Self {
        Self {
            date: holiday.date,
            status: holiday.status,
            name: holiday.name,
        }
    }
}

impl From<MarketHolidayDB> for MarketHoliday {
    fn from(db: MarketHolidayDB) -> Self {
        Self {
            date: db.date,
            status: db.status,
            name: db.name,
        }
    }
}
