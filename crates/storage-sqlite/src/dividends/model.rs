//! Database models for dividend events.

use chrono::NaiveDate;
use diesel::prelude::*;

use stockbase_core::dividends::DividendEvent;

#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::dividend_event)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DividendEventDB {
    pub id: i32,
    pub symbol: String,
    pub declaration_date: NaiveDate,
    pub ex_dividend_date: NaiveDate,
    pub record_date: NaiveDate,
    pub pay_date: NaiveDate,
    pub amount: f64,
    pub frequency: Option<i32>,
    pub dividend_type: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::dividend_event)]
pub struct NewDividendEventDB {
    pub symbol: String,
    pub declaration_date: NaiveDate,
    pub ex_dividend_date: NaiveDate,
    pub record_date: NaiveDate,
    pub pay_date: NaiveDate,
    pub amount: f64,
    pub frequency: Option<i32>,
    pub dividend_type: Option<String>,
}

impl NewDividendEventDB {
    pub const COLUMNS: usize = 8;
}

impl From<DividendEvent> for NewDividendEventDB {
    fn from(event: DividendEvent) -> Self {
        Self {
            symbol: event.symbol,
            declaration_date: event.declaration_date,
            ex_dividend_date: event.ex_dividend_date,
            record_date: event.record_date,
            pay_date: event.pay_date,
            amount: event.amount,
            frequency: event.frequency,
            dividend_type: event.dividend_type,
        }
    }
}

impl From<DividendEventDB> for DividendEvent {
    fn from(db: DividendEventDB) -> Self {
        Self {
            symbol: db.symbol,
            declaration_date: db.declaration_date,
            ex_dividend_date: db.ex_dividend_date,
            record_date: db.record_date,
            pay_date: db.pay_date,
            amount: db.amount,
            frequency: db.frequency,
            dividend_type: db.dividend_type,
        }
    }
}
