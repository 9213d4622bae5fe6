//! Scoped SQLite connection wrapper.
//!
//! Every request opens its own `DbPool` and drops it on return, so the
//! connection is released on all exit paths.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags, Transaction, TransactionBehavior};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open an existing database for reads and writes.
    ///
    /// The file is never created here: a missing or unreadable database is
    /// reported as `StoreUnavailable`.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open_with_flags(
            Path::new(path),
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| AppError::StoreUnavailable(format!("{path}: {e}")))?;
        Ok(Self { conn })
    }

    /// Open the database, creating the file if needed (used by `init`).
    pub fn create(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Begin a write transaction that takes the write lock immediately.
    ///
    /// Dropping the returned transaction without commit rolls it back.
    pub fn write_tx(&mut self) -> AppResult<Transaction<'_>> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn open_missing_database_is_store_unavailable() {
        let mut path = env::temp_dir();
        path.push("rstaffrecords_missing_dir_for_pool_test");
        path.push("nope.sqlite");

        match DbPool::open(&path.to_string_lossy()) {
            Err(AppError::StoreUnavailable(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("opening a missing database must fail"),
        }
    }

    #[test]
    fn dropped_write_tx_rolls_back() {
        let mut pool = DbPool::from_connection(Connection::open_in_memory().unwrap());
        pool.conn
            .execute_batch("CREATE TABLE t (v INTEGER)")
            .unwrap();

        {
            let tx = pool.write_tx().unwrap();
            tx.execute("INSERT INTO t (v) VALUES (1)", []).unwrap();
        }

        let n: i64 = pool
            .conn
            .query_row("SELECT COUNT(*) FROM t", [], |r| r.get(0))
            .unwrap();
        assert_eq!(n, 0);
    }
}
