use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

/// Check if the `employee_details` table exists.
pub fn records_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='employee_details'",
    )?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Initialize the database: create the record table and its index if missing.
/// Safe to run on an already initialized database.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employee_details (
            employee_id        INTEGER NOT NULL,
            employee_name      TEXT    NOT NULL,
            leave_taken        INTEGER NOT NULL DEFAULT 0 CHECK(leave_taken >= 0),
            year               INTEGER NOT NULL,
            courses_completed  INTEGER NOT NULL DEFAULT 0 CHECK(courses_completed >= 0),
            PRIMARY KEY (employee_id, year)
        );

        CREATE INDEX IF NOT EXISTS idx_employee_details_id ON employee_details(employee_id);
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!records_table_exists(&conn).unwrap());

        init_db(&conn).unwrap();
        init_db(&conn).unwrap();

        assert!(records_table_exists(&conn).unwrap());
    }
}
