use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::{DailyStockPriceDB, NewDailyStockPriceDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::daily_stock_price::dsl;
use crate::utils::{chunk_for_insert, write_rows};
use stockbase_core::prices::{DailyStockPrice, PriceStore};
use stockbase_core::{Result, WritePolicy};

pub struct PriceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PriceRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl PriceStore for PriceRepository {
    async fn save_prices(
        &self,
        prices: Vec<DailyStockPrice>,
        policy: WritePolicy,
    ) -> Result<usize> {
        if prices.is_empty() {
            return Ok(0);
        }
        let rows: Vec<NewDailyStockPriceDB> = prices.into_iter().map(Into::into).collect();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut written = 0;
                for chunk in chunk_for_insert(&rows, NewDailyStockPriceDB::COLUMNS) {
                    written += write_rows!(conn, policy, dsl::daily_stock_price, chunk)
                        .map_err(StorageError::from)?;
                }
                debug!("daily_stock_price: {} row(s) written ({})", written, policy);
                Ok(written)
            })
            .await
    }

    fn get_prices(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyStockPrice>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = dsl::daily_stock_price
            .filter(dsl::symbol.eq(symbol))
            .filter(dsl::date.ge(start))
            .filter(dsl::date.le(end))
            .order(dsl::date.asc())
            .select(DailyStockPriceDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(DailyStockPrice::from).collect())
    }

    fn latest_price(&self, symbol: &str) -> Result<Option<DailyStockPrice>> {
        let mut conn = get_connection(&self.pool)?;
        let row = dsl::daily_stock_price
            .filter(dsl::symbol.eq(symbol))
            .order(dsl::date.desc())
            .select(DailyStockPriceDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(DailyStockPrice::from))
    }
}
