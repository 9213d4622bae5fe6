use crate::errors::AppResult;
use crate::models::record::{EmployeeYearRecord, RecordUpdate};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

const SELECT_RECORD: &str = "SELECT employee_id, employee_name, leave_taken, year, courses_completed
     FROM employee_details";

pub fn map_row(row: &Row) -> Result<EmployeeYearRecord> {
    Ok(EmployeeYearRecord {
        employee_id: row.get("employee_id")?,
        employee_name: row.get("employee_name")?,
        leave_taken: row.get("leave_taken")?,
        year: row.get("year")?,
        courses_completed: row.get("courses_completed")?,
    })
}

/// Distinct employee ids, ascending.
pub fn list_employee_ids(conn: &Connection) -> AppResult<Vec<i64>> {
    let mut stmt =
        conn.prepare("SELECT DISTINCT employee_id FROM employee_details ORDER BY employee_id ASC")?;

    let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All year-records of one employee, most recent year first.
pub fn load_records_by_employee(
    conn: &Connection,
    employee_id: i64,
) -> AppResult<Vec<EmployeeYearRecord>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_RECORD}
         WHERE employee_id = ?1
         ORDER BY year DESC"
    ))?;

    let rows = stmt.query_map([employee_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_record(
    conn: &Connection,
    employee_id: i64,
    year: i32,
) -> AppResult<Option<EmployeeYearRecord>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_RECORD}
         WHERE employee_id = ?1 AND year = ?2"
    ))?;

    Ok(stmt
        .query_row(params![employee_id, year], map_row)
        .optional()?)
}

pub fn employee_has_records(conn: &Connection, employee_id: i64) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT employee_id FROM employee_details WHERE employee_id = ?1 LIMIT 1",
            [employee_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

pub fn record_exists(conn: &Connection, employee_id: i64, year: i32) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT employee_id FROM employee_details WHERE employee_id = ?1 AND year = ?2",
            params![employee_id, year],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

pub fn insert_record(conn: &Connection, rec: &EmployeeYearRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO employee_details (employee_id, employee_name, leave_taken, year, courses_completed)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            rec.employee_id,
            rec.employee_name,
            rec.leave_taken,
            rec.year,
            rec.courses_completed,
        ],
    )?;
    Ok(())
}

/// Delete every year-record of an employee. Returns the affected-row-count.
pub fn delete_employee_records(conn: &Connection, employee_id: i64) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM employee_details WHERE employee_id = ?1",
        [employee_id],
    )?)
}

/// Write only the `SetTo` fields of `update`. Returns the affected-row-count.
///
/// An empty update issues no statement and returns 0.
pub fn update_record(
    conn: &Connection,
    employee_id: i64,
    year: i32,
    update: &RecordUpdate,
) -> AppResult<usize> {
    let mut set_clauses: Vec<String> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(name) = update.employee_name.as_set() {
        values.push(Value::Text(name.clone()));
        set_clauses.push(format!("employee_name = ?{}", values.len()));
    }
    if let Some(leave) = update.leave_taken.as_set() {
        values.push(Value::Integer(i64::from(*leave)));
        set_clauses.push(format!("leave_taken = ?{}", values.len()));
    }
    if let Some(courses) = update.courses_completed.as_set() {
        values.push(Value::Integer(i64::from(*courses)));
        set_clauses.push(format!("courses_completed = ?{}", values.len()));
    }

    if set_clauses.is_empty() {
        return Ok(0);
    }

    let sql = format!(
        "UPDATE employee_details SET {} WHERE employee_id = ?{} AND year = ?{}",
        set_clauses.join(", "),
        values.len() + 1,
        values.len() + 2,
    );
    values.push(Value::Integer(employee_id));
    values.push(Value::Integer(i64::from(year)));

    Ok(conn.execute(&sql, params_from_iter(values))?)
}
