use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::{NewPositionHistoryDB, PositionHistoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::position_history::dsl;
use crate::utils::{chunk_for_insert, write_rows};
use stockbase_core::positions::{PositionHistory, PositionStore};
use stockbase_core::{Result, WritePolicy};

pub struct PositionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PositionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl PositionStore for PositionRepository {
    async fn save_positions(
        &self,
        positions: Vec<PositionHistory>,
        policy: WritePolicy,
    ) -> Result<usize> {
        if positions.is_empty() {
            return Ok(0);
        }
        let rows: Vec<NewPositionHistoryDB> = positions.into_iter().map(Into::into).collect();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut written = 0;
                for chunk in chunk_for_insert(&rows, NewPositionHistoryDB::COLUMNS) {
                    written += write_rows!(conn, policy, dsl::position_history, chunk)
                        .map_err(StorageError::from)?;
                }
                debug!("position_history: {} row(s) written ({})", written, policy);
                Ok(written)
            })
            .await
    }

    fn get_positions_on(&self, date: NaiveDate) -> Result<Vec<PositionHistory>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = dsl::position_history
            .filter(dsl::date.eq(date))
            .order(dsl::symbol.asc())
            .select(PositionHistoryDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(PositionHistory::from).collect())
    }

    fn get_position_history(&self, symbol: &str) -> Result<Vec<PositionHistory>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = dsl::position_history
            .filter(dsl::symbol.eq(symbol))
            .order(dsl::date.asc())
            .select(PositionHistoryDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(PositionHistory::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_db;

    fn position(symbol: &str, d: u32, quantity: f64) -> PositionHistory {
        PositionHistory {
            symbol: symbol.to_string(),
            quantity,
            cost_basis: quantity * 100.0,
            date: NaiveDate::from_ymd_opt(2023, 4, d).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_positions_by_date_and_symbol() {
        let (pool, writer, _temp_dir) = setup_db();
        let repo = PositionRepository::new(pool, writer);

        repo.save_positions(
            vec![position("MSFT", 6, 3.0), position("AAPL", 6, 10.0), position("AAPL", 5, 8.0)],
            WritePolicy::Insert,
        )
        .await
        .unwrap();

        let on_sixth = repo
            .get_positions_on(NaiveDate::from_ymd_opt(2023, 4, 6).unwrap())
            .unwrap();
        assert_eq!(on_sixth.len(), 2);
        assert_eq!(on_sixth[0].symbol, "AAPL");

        let history = repo.get_position_history("AAPL").unwrap();
        assert_eq!(history.iter().map(|p| p.quantity).collect::<Vec<_>>(), vec![8.0, 10.0]);
    }

    #[tokio::test]
    async fn test_duplicate_position_policies() {
        let (pool, writer, _temp_dir) = setup_db();
        let repo = PositionRepository::new(pool, writer);

        repo.save_positions(vec![position("FB", 6, 10.0)], WritePolicy::Insert)
            .await
            .unwrap();
        assert!(repo
            .save_positions(vec![position("FB", 6, 12.0)], WritePolicy::Insert)
            .await
            .unwrap_err()
            .is_unique_violation());

        repo.save_positions(vec![position("FB", 6, 12.0)], WritePolicy::Upsert)
            .await
            .unwrap();
        let history = repo.get_position_history("FB").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].quantity, 12.0);
    }
}
