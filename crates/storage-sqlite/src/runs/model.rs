use chrono::NaiveDateTime;
use diesel::prelude::*;

use stockbase_core::runs::IngestRun;

#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::ingest_runs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct IngestRunDB {
    pub id: i32,
    pub run_date: NaiveDateTime,
    pub records_added: i64,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::ingest_runs)]
pub struct NewIngestRunDB {
    pub run_date: NaiveDateTime,
    pub records_added: i64,
}

impl From<IngestRun> for NewIngestRunDB {
    fn from(run: IngestRun) -> Self {
        Self {
            run_date: run.run_date,
            records_added: run.records_added,
        }
    }
}

impl From<IngestRunDB> for IngestRun {
    fn from(db: IngestRunDB) -> Self {
        Self {
            run_date: db.run_date,
            records_added: db.records_added,
        }
    }
}
