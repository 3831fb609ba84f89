use chrono::NaiveDate;
use diesel::prelude::*;

use stockbase_core::positions::PositionHistory;

#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::position_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PositionHistoryDB {
    pub id: i32,
    pub symbol: String,
    pub quantity: f64,
    pub cost_basis: f64,
    pub date: NaiveDate,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::position_history)]
pub struct NewPositionHistoryDB {
    pub symbol: String,
    pub quantity: f64,
    pub cost_basis: f64,
    pub date: NaiveDate,
}

impl NewPositionHistoryDB {
    pub const COLUMNS: usize = 4;
}

impl From<PositionHistory> for NewPositionHistoryDB {
    fn from(position: PositionHistory) -> Self {
        Self {
            symbol: position.symbol,
            quantity: position.quantity,
            cost_basis: position.cost_basis,
            date: position.date,
        }
    }
}

impl From<PositionHistoryDB> for PositionHistory {
    fn from(db: PositionHistoryDB) -> Self {
        Self {
            symbol: db.symbol,
            quantity: db.quantity,
            cost_basis: db.cost_basis,
            date: db.date,
        }
    }
}
