use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::model::{IngestRunDB, NewIngestRunDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::ingest_runs::dsl;
use stockbase_core::runs::{IngestRun, IngestRunStore};
use stockbase_core::Result;

pub struct IngestRunRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl IngestRunRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl IngestRunStore for IngestRunRepository {
    async fn record_run(&self, run: IngestRun) -> Result<()> {
        let row = NewIngestRunDB::from(run);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::insert_into(dsl::ingest_runs)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    fn latest_runs(&self, limit: i64) -> Result<Vec<IngestRun>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = dsl::ingest_runs
            .order((dsl::run_date.desc(), dsl::id.desc()))
            .limit(limit)
            .select(IngestRunDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(IngestRun::from).collect())
    }
}
