use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::model::{MarketHolidayDB, NewMarketHolidayDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::market_holiday::dsl;
use crate::utils::{chunk_for_insert, write_rows};
use stockbase_core::holidays::{HolidayStore, MarketHoliday};
use stockbase_core::{Result, WritePolicy};

pub struct HolidayRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HolidayRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl HolidayStore for HolidayRepository {
    async fn save_holidays(
        &self,
        holidays: Vec<MarketHoliday>,
        policy: WritePolicy,
    ) -> Result<usize> {
        if holidays.is_empty() {
            return Ok(0);
        }
        let rows: Vec<NewMarketHolidayDB> = holidays.into_iter().map(Into::into).collect();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut written = 0;
                for chunk in chunk_for_insert(&rows, NewMarketHolidayDB::COLUMNS) {
                    written += write_rows!(conn, policy, dsl::market_holiday, chunk)
                        .map_err(StorageError::from)?;
                }
                Ok(written)
            })
            .await
    }

    fn get_holidays(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<MarketHoliday>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = dsl::market_holiday
            .filter(dsl::date.between(start, end))
            .order(dsl::date.asc())
            .select(MarketHolidayDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(MarketHoliday::from).collect())
    }
}
