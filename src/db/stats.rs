use crate::errors::AppResult;
use rusqlite::Connection;

/// Aggregate figures shown by `db --info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    pub records: i64,
    pub employees: i64,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub total_leave: i64,
    pub total_courses: i64,
}

pub fn collect(conn: &Connection) -> AppResult<StoreStats> {
    let stats = conn.query_row(
        "SELECT COUNT(*),
                COUNT(DISTINCT employee_id),
                MIN(year),
                MAX(year),
                IFNULL(SUM(leave_taken), 0),
                IFNULL(SUM(courses_completed), 0)
         FROM employee_details",
        [],
        |row| {
            Ok(StoreStats {
                records: row.get(0)?,
                employees: row.get(1)?,
                first_year: row.get(2)?,
                last_year: row.get(3)?,
                total_leave: row.get(4)?,
                total_courses: row.get(5)?,
            })
        },
    )?;
    Ok(stats)
}
