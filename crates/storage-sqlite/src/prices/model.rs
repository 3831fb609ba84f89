//! Database models for daily prices.

use chrono::NaiveDate;
use diesel::prelude::*;

use stockbase_core::prices::DailyStockPrice;

#[derive(Queryable, Identifiable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::daily_stock_price)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DailyStockPriceDB {
    pub id: i32,
    pub date: NaiveDate,
    pub symbol: String,
    pub close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub after_hours: Option<f64>,
    pub pre_market: Option<f64>,
    pub volume: i64,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::daily_stock_price)]
pub struct NewDailyStockPriceDB {
    pub date: NaiveDate,
    pub symbol: String,
    pub close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub after_hours: Option<f64>,
    pub pre_market: Option<f64>,
    pub volume: i64,
}

impl NewDailyStockPriceDB {
    pub const COLUMNS: usize = 9;
}

impl From<DailyStockPrice> for NewDailyStockPriceDB {
    fn from(price: DailyStockPrice) -> Self {
        Self {
            date: price.date,
            symbol: price.symbol,
            close: price.close,
            open: price.open,
            high: price.high,
            low: price.low,
            after_hours: price.after_hours,
            pre_market: price.pre_market,
            volume: price.volume,
        }
    }
}

impl From<DailyStockPriceDB> for DailyStockPrice {
    fn from(db: DailyStockPriceDB) -> Self {
        Self {
            date: db.date,
            symbol: db.symbol,
            close: db.close,
            open: db.open,
            high: db.high,
            low: db.low,
            after_hours: db.after_hours,
            pre_market: db.pre_market,
            volume: db.volume,
        }
    }
}
