//! DuckDB warehouse implementation

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use duckdb::Connection;

use crate::error::{DbError, DbResult};
use crate::traits::Warehouse;

/// DuckDB-backed warehouse
///
/// The duckdb connection is synchronous; it sits behind a mutex with an
/// async facade so auditor code stays backend-agnostic.
pub struct DuckDbWarehouse {
    conn: Mutex<Connection>,
}

impl DuckDbWarehouse {
    /// Open an in-memory warehouse
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a file-backed warehouse
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open from a path string (`:memory:` opens an in-memory warehouse)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn lock(&self) -> DbResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }

    fn execute_batch_sync(&self, sql: &str) -> DbResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(sql).map_err(DbError::from)
    }

    fn query_scalar_sync(&self, sql: &str) -> DbResult<i64> {
        let conn = self.lock()?;
        conn.query_row(sql, [], |row| row.get(0))
            .map_err(|e| match e {
                duckdb::Error::QueryReturnedNoRows => DbError::EmptyResult(sql.to_string()),
                other => DbError::from(other),
            })
    }
}

#[async_trait]
impl Warehouse for DuckDbWarehouse {
    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.execute_batch_sync(sql)
    }

    async fn query_scalar(&self, sql: &str) -> DbResult<i64> {
        self.query_scalar_sync(sql)
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
