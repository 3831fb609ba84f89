//! Utility functions for SQLite storage operations.
//!
//! Batch inserts bind one parameter per column per row, so large batches are
//! split to stay under SQLite's bound-parameter limit.

/// Conservative bound-parameter limit (`SQLITE_MAX_VARIABLE_NUMBER` on older builds).
pub const SQLITE_MAX_PARAMS: usize = 999;

/// Rows that fit in one multi-row INSERT for a table with `columns` bound columns.
pub fn rows_per_insert(columns: usize) -> usize {
    (SQLITE_MAX_PARAMS / columns.max(1)).max(1)
}

/// Chunk `rows` so each chunk can be inserted in one statement.
pub fn chunk_for_insert<T>(rows: &[T], columns: usize) -> impl Iterator<Item = &[T]> {
    rows.chunks(rows_per_insert(columns))
}

/// Executes a batch write with the statement matching a `WritePolicy`:
/// `INSERT`, `INSERT OR IGNORE` or `REPLACE`. Evaluates to
/// `QueryResult<usize>`, the number of rows written.
macro_rules! write_rows {
    ($conn:expr, $policy:expr, $table:expr, $rows:expr) => {
        match $policy {
            stockbase_core::WritePolicy::Insert => {
                diesel::insert_into($table).values($rows).execute($conn)
            }
            stockbase_core::WritePolicy::Skip => {
                diesel::insert_or_ignore_into($table).values($rows).execute($conn)
            }
            stockbase_core::WritePolicy::Upsert => {
                diesel::replace_into($table).values($rows).execute($conn)
            }
        }
    };
}

pub(crate) use write_rows;
