use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::{DividendEventDB, NewDividendEventDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::dividend_event::dsl;
use crate::utils::{chunk_for_insert, write_rows};
use stockbase_core::dividends::{DividendEvent, DividendStore};
use stockbase_core::{Result, WritePolicy};

pub struct DividendRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DividendRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl DividendStore for DividendRepository {
    async fn save_dividends(
        &self,
        dividends: Vec<DividendEvent>,
        policy: WritePolicy,
    ) -> Result<usize> {
        if dividends.is_empty() {
            return Ok(0);
        }
        let rows: Vec<NewDividendEventDB> = dividends.into_iter().map(Into::into).collect();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut written = 0;
                for chunk in chunk_for_insert(&rows, NewDividendEventDB::COLUMNS) {
                    written += write_rows!(conn, policy, dsl::dividend_event, chunk)
                        .map_err(StorageError::from)?;
                }
                debug!("dividend_event: {} row(s) written ({})", written, policy);
                Ok(written)
            })
            .await
    }

    fn get_dividends(&self, symbol: &str) -> Result<Vec<DividendEvent>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = dsl::dividend_event
            .filter(dsl::symbol.eq(symbol))
            .order(dsl::ex_dividend_date.desc())
            .select(DividendEventDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(DividendEvent::from).collect())
    }
}
